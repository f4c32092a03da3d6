use crate::models::CategoryListResponse;

use super::{escape_html, layout, link};

/// Home page: hero plus links to every category
pub fn render_home(response: &CategoryListResponse) -> String {
    let content = format!(
        r#"<section class="hero">
<h1>Make Every Celebration Unforgettable</h1>
<p>Balloon décor, candlelight dinners and surprises planned end to end.</p>
{browse}
</section>
{grid}"#,
        browse = link("/categories", "button", "Browse Categories"),
        grid = category_grid(response),
    );
    layout("Home", &content)
}

/// `/categories` index
pub fn render_categories(response: &CategoryListResponse) -> String {
    let content = format!(
        r#"<h1>Our Categories</h1>
{}"#,
        category_grid(response)
    );
    layout("Categories", &content)
}

fn category_grid(response: &CategoryListResponse) -> String {
    let cards: String = response
        .categories
        .iter()
        .map(|category| {
            format!(
                r#"<div class="card category-card">
<h2>{title}</h2>
<p>{tagline}</p>
<p class="count">{count} services</p>
{link}
</div>
"#,
                title = escape_html(&category.title),
                tagline = escape_html(&category.tagline),
                count = category.service_count,
                link = link(&category.path, "button", "Explore"),
            )
        })
        .collect();

    format!(r#"<div class="grid categories">{}</div>"#, cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategorySummary;

    fn response() -> CategoryListResponse {
        CategoryListResponse {
            categories: vec![CategorySummary {
                slug: "balloon-bouquet".to_string(),
                title: "Balloon Bouquet".to_string(),
                tagline: "Color & joy".to_string(),
                service_count: 4,
                path: "/categories/balloon-bouquet".to_string(),
            }],
            total_count: 1,
        }
    }

    #[test]
    fn test_home_links_categories() {
        let html = render_home(&response());
        assert!(html.contains(r#"href="/categories/balloon-bouquet""#));
        assert!(html.contains("Color &amp; joy"));
        assert!(html.contains("4 services"));
    }

    #[test]
    fn test_categories_index() {
        let html = render_categories(&response());
        assert!(html.contains("<h1>Our Categories</h1>"));
        assert!(html.contains("<h2>Balloon Bouquet</h2>"));
    }
}
