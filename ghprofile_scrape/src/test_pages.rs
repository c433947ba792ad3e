//! Trimmed-down copies of real profile and repository-tab markup.

pub const PROFILE_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><title>octocat (The Octocat)</title></head>
<body>
  <div class="js-profile-editable-replace">
    <a itemprop="image" href="https://avatars.githubusercontent.com/u/583231?v=4">
      <img style="height:auto;" alt="@octocat" width="260" height="260"
           class="avatar avatar-user width-full border color-bg-default"
           src="https://avatars.githubusercontent.com/u/583231?v=4" />
    </a>
    <h1 class="vcard-names">
      <span class="p-name vcard-fullname d-block overflow-hidden" itemprop="name">
        The Octocat
      </span>
      <span class="p-nickname vcard-username d-block" itemprop="additionalName">
        octocat
      </span>
    </h1>
    <div class="p-note user-profile-bio mb-3 js-user-profile-bio f4">
      <div>Mascot of a code-hosting site.</div>
    </div>
    <div class="flex-order-1 flex-md-order-none mt-2 mt-md-0">
      <div class="mb-3">
        <a class="Link--secondary no-underline no-wrap" href="/octocat?tab=followers">
          <svg class="octicon octicon-people"></svg>
          <span class="text-bold color-fg-default">17.4k</span>
          followers
        </a>
        &middot;
        <a class="Link--secondary no-underline no-wrap" href="/octocat?tab=following">
          <span class="text-bold color-fg-default">9</span>
          following
        </a>
      </div>
    </div>
    <ul class="vcard-details">
      <li class="vcard-detail pt-1" itemprop="worksFor">
        <svg class="octicon octicon-organization"></svg>
        <span class="p-org"><div>@github</div></span>
      </li>
      <li class="vcard-detail pt-1" itemprop="homeLocation">
        <svg class="octicon octicon-location"></svg>
        <span class="p-label">San Francisco</span>
      </li>
      <li itemprop="url" data-test-selector="profile-website-url" class="vcard-detail pt-1">
        <svg class="octicon octicon-link"></svg>
        <a rel="nofollow me" class="Link--primary" href="https://github.blog">https://github.blog</a>
      </li>
      <li itemprop="social" class="vcard-detail pt-1">
        <a rel="nofollow me" class="Link--primary" href="https://twitter.com/octo">@octo</a>
      </li>
    </ul>
  </div>
</body>
</html>"#;

pub const REPOS_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<body>
  <div id="user-repositories-list">
    <ul data-filterable-for="your-repos-filter">
      <li class="col-12 d-flex flex-justify-between width-full py-4 border-bottom color-border-muted public source"
          itemprop="owns" itemscope itemtype="http://schema.org/Code">
        <div class="col-10 col-lg-9 d-inline-block">
          <h3 class="wb-break-all">
            <a href="/octocat/Spoon-Knife" itemprop="name codeRepository">
              Spoon-Knife</a>
          </h3>
          <p class="col-9 d-inline-block color-fg-muted mb-2 pr-4" itemprop="description">
            This repo is for demonstration purposes only.
          </p>
          <div class="f6 color-fg-muted mt-2">
            <span class="ml-0 mr-3">
              <span class="repo-language-color"></span>
              <span itemprop="programmingLanguage">HTML</span>
            </span>
            <a class="Link--muted mr-3" href="/octocat/Spoon-Knife/stargazers">
              <svg class="octicon octicon-star"></svg>
              1.2k
            </a>
            <a class="Link--muted mr-3" href="/octocat/Spoon-Knife/forks">
              <svg class="octicon octicon-repo-forked"></svg>
              150k
            </a>
            Updated <relative-time datetime="2024-02-11T16:43:09Z" class="no-wrap">Feb 11, 2024</relative-time>
          </div>
        </div>
      </li>
      <li class="col-12 d-flex flex-justify-between width-full py-4 border-bottom color-border-muted public source"
          itemprop="owns" itemscope itemtype="http://schema.org/Code">
        <div class="col-10 col-lg-9 d-inline-block">
          <h3 class="wb-break-all">
            <a href="/octocat/hello-world" itemprop="name codeRepository">hello-world</a>
          </h3>
        </div>
      </li>
    </ul>
  </div>
</body>
</html>"#;

pub const EMPTY_PAGE: &str = r#"<!DOCTYPE html><html><head></head><body><p>Nothing here.</p></body></html>"#;
