//! Server-rendered HTML.
//!
//! Every value interpolated into markup goes through [`escape_html`].

pub mod detail;
pub mod home;
pub mod listing;

pub use detail::render_detail;
pub use home::{render_categories, render_home};
pub use listing::{render_category_not_found, render_listing};

use crate::models::{CATEGORIES_PATH, CONTACT_PATH};

const SITE_NAME: &str = "Celebrations";

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap page content in the shared document shell
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {site}</title>
</head>
<body>
{nav}
<main>
{content}
</main>
{footer}
</body>
</html>
"#,
        title = escape_html(title),
        site = SITE_NAME,
        nav = nav(),
        content = content,
        footer = footer(),
    )
}

fn nav() -> String {
    format!(
        r#"<nav class="navbar"><a class="brand" href="/">{site}</a><a href="{categories}">Categories</a><a href="{contact}">Contact</a></nav>"#,
        site = SITE_NAME,
        categories = CATEGORIES_PATH,
        contact = CONTACT_PATH,
    )
}

fn footer() -> String {
    format!(
        r#"<footer><p>{site}. Making every moment special.</p></footer>"#,
        site = SITE_NAME
    )
}

/// `<a>` with escaped target and label
pub(crate) fn link(href: &str, class: &str, label: &str) -> String {
    format!(
        r#"<a class="{}" href="{}">{}</a>"#,
        escape_html(class),
        escape_html(href),
        escape_html(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x" & 'y')</script>"#),
            "&lt;script&gt;alert(&quot;x&quot; &amp; &#39;y&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("₹8,000"), "₹8,000");
    }

    #[test]
    fn test_layout_escapes_title() {
        let html = layout("<b>Title</b>", "<p>body</p>");
        assert!(html.contains("<title>&lt;b&gt;Title&lt;/b&gt; | Celebrations</title>"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains(r#"href="/contact""#));
    }
}
