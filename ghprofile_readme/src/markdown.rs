use pulldown_cmark::{html, Event, Options, Parser};

/// Markdown to display HTML. Tables and fenced code are enabled, and every
/// line break inside a paragraph becomes `<br />`.
pub fn to_html(markdown: &str) -> String {
    let events = Parser::new_ext(markdown, Options::ENABLE_TABLES).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        event => event,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}
