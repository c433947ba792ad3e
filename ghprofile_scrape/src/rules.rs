//! Field extraction ruleset.
//!
//! Everything that knows what the scraped markup looks like lives here, as
//! plain data. When the site changes its class names, a new [`Ruleset`] is
//! all that needs to change.

use scraper::{ElementRef, Selector};
use std::borrow::Cow;

type Text = Cow<'static, str>;

/// Placeholder in selector templates, replaced by the escaped username.
pub const USERNAME_PLACEHOLDER: &str = "{username}";

/// What to read from the located element.
#[derive(Clone, Debug)]
pub enum Capture {
    /// Concatenated descendant text.
    Text,
    Attr(Text),
}

/// A check on the located element. When it fails, the field is missing.
#[derive(Clone, Debug)]
pub enum Guard {
    AttrContains { attr: Text, needle: Text },
    AttrLacks { attr: Text, needle: Text },
}

impl Guard {
    pub fn attr_contains(attr: impl Into<Text>, needle: impl Into<Text>) -> Self {
        Self::AttrContains {
            attr: attr.into(),
            needle: needle.into(),
        }
    }

    pub fn attr_lacks(attr: impl Into<Text>, needle: impl Into<Text>) -> Self {
        Self::AttrLacks {
            attr: attr.into(),
            needle: needle.into(),
        }
    }

    fn admits(&self, element: ElementRef<'_>) -> bool {
        match self {
            Self::AttrContains { attr, needle } => element
                .value()
                .attr(attr)
                .map_or(false, |value| value.contains(needle.as_ref())),
            // An absent attribute lacks everything.
            Self::AttrLacks { attr, needle } => !element
                .value()
                .attr(attr)
                .map_or(false, |value| value.contains(needle.as_ref())),
        }
    }
}

/// Finds a single value: the first element matching `selector`, optionally
/// guarded, with text or an attribute captured from it.
#[derive(Clone, Debug)]
pub struct Locator {
    pub selector: Text,
    pub capture: Capture,
    pub guard: Option<Guard>,
}

impl Locator {
    pub fn text(selector: impl Into<Text>) -> Self {
        Self {
            selector: selector.into(),
            capture: Capture::Text,
            guard: None,
        }
    }

    pub fn attr(selector: impl Into<Text>, attr: impl Into<Text>) -> Self {
        Self {
            selector: selector.into(),
            capture: Capture::Attr(attr.into()),
            guard: None,
        }
    }

    pub fn when(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Turns the locator into a field with a declared default.
    pub fn or(self, default: impl Into<Text>) -> FieldRule {
        FieldRule {
            locator: self,
            default: default.into(),
        }
    }

    /// The trimmed, non-empty value under `scope`, if the marker is there.
    ///
    /// A selector that fails to parse counts as an absent marker.
    pub fn find(&self, scope: ElementRef<'_>, username: &str) -> Option<String> {
        let css = self.selector_for(username);
        let selector = match Selector::parse(&css) {
            Ok(selector) => selector,
            Err(err) => {
                tracing::debug!("skipping unparseable selector `{css}`: {err:?}");
                return None;
            }
        };

        let element = scope.select(&selector).next()?;
        if let Some(guard) = &self.guard {
            if !guard.admits(element) {
                return None;
            }
        }

        let value = match &self.capture {
            Capture::Text => element.text().collect::<String>(),
            Capture::Attr(attr) => element.value().attr(attr)?.to_string(),
        };
        let value = value.trim();

        (!value.is_empty()).then(|| value.to_string())
    }

    fn selector_for(&self, username: &str) -> Cow<'_, str> {
        if self.selector.contains(USERNAME_PLACEHOLDER) {
            Cow::Owned(
                self.selector
                    .replace(USERNAME_PLACEHOLDER, &escape_css_string(username)),
            )
        } else {
            Cow::Borrowed(self.selector.as_ref())
        }
    }
}

/// A locator plus the value used when it finds nothing.
#[derive(Clone, Debug)]
pub struct FieldRule {
    pub locator: Locator,
    pub default: Text,
}

impl FieldRule {
    pub fn extract(&self, scope: ElementRef<'_>, username: &str) -> String {
        self.locator
            .find(scope, username)
            .unwrap_or_else(|| self.default.to_string())
    }
}

#[derive(Clone, Debug)]
pub struct ProfileRules {
    pub avatar: FieldRule,
    pub name: FieldRule,
    pub bio: FieldRule,
    pub followers: FieldRule,
    pub following: FieldRule,
    pub email: FieldRule,
    pub location: FieldRule,
    pub company: FieldRule,
    pub website: FieldRule,
    pub twitter: FieldRule,
}

#[derive(Clone, Debug)]
pub struct RepoCardRules {
    /// Selects one list item per repository.
    pub card: Text,
    /// A card whose name cannot be located is dropped.
    pub name: Locator,
    pub url: FieldRule,
    pub description: FieldRule,
    pub language: FieldRule,
    pub stars: FieldRule,
    pub forks: FieldRule,
    pub updated: FieldRule,
}

#[derive(Clone, Debug)]
pub struct Ruleset {
    pub profile: ProfileRules,
    pub repo_card: RepoCardRules,
    /// Cards considered, counted before nameless ones are dropped.
    pub max_repos: usize,
}

impl Ruleset {
    /// Markup of github.com profile and repository-tab pages.
    pub fn github() -> Self {
        const REPO_LINK: &str = r#"a[itemprop="name codeRepository"]"#;

        Self {
            profile: ProfileRules {
                avatar: Locator::attr(r#"img[alt="@{username}"]"#, "src").or(""),
                name: Locator::text("span.p-name").or(""),
                bio: Locator::text("div.p-note").or(""),
                followers: Locator::text(r#"a[href="/{username}?tab=followers"] span.text-bold"#)
                    .or("0"),
                following: Locator::text(r#"a[href="/{username}?tab=following"] span.text-bold"#)
                    .or("0"),
                email: Locator::text("a.Link--primary")
                    .when(Guard::attr_contains("href", "mailto:"))
                    .or(""),
                location: Locator::text("span.p-label").or(""),
                company: Locator::text("span.p-org").or(""),
                website: Locator::attr("a.Link--primary", "href")
                    .when(Guard::attr_lacks("href", "mailto:"))
                    .or(""),
                twitter: Locator::text(r#"a[href^="https://twitter.com/"]"#).or(""),
            },
            repo_card: RepoCardRules {
                card: r#"li[class*="col-12"]"#.into(),
                name: Locator::text(REPO_LINK),
                url: Locator::attr(REPO_LINK, "href").or(""),
                description: Locator::text(r#"p[itemprop="description"]"#).or(""),
                language: Locator::text(r#"span[itemprop="programmingLanguage"]"#).or("N/A"),
                stars: Locator::text(r#"a[href*="/stargazers"]"#).or("0"),
                forks: Locator::text(r#"a[href*="/forks"]"#).or("0"),
                updated: Locator::attr("relative-time", "datetime").or(""),
            },
            max_repos: 10,
        }
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::github()
    }
}

/// Escapes a value for use inside a double-quoted CSS string.
fn escape_css_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '"' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
