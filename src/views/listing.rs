use crate::models::{Category, ServiceSummary, CATEGORIES_PATH, CONTACT_PATH};

use super::{escape_html, layout, link};

/// Listing page for one category
pub fn render_listing(category: &Category) -> String {
    let cards: String = category
        .services
        .iter()
        .map(|summary| service_card(&category.slug, summary))
        .collect();

    let content = format!(
        r#"{back}
<h1>{title}</h1>
<p class="tagline">{tagline}</p>
<div class="grid services">
{cards}</div>
<section class="custom-request">
<h2>{heading}</h2>
<p>{body}</p>
{cta}
</section>"#,
        back = link(CATEGORIES_PATH, "back-link", "Back to All Categories"),
        title = escape_html(&category.title),
        tagline = escape_html(&category.tagline),
        cards = cards,
        heading = escape_html(&category.custom_request.heading),
        body = escape_html(&category.custom_request.body),
        cta = link(CONTACT_PATH, "button", &category.custom_request.cta_label),
    );

    layout(&category.title, &content)
}

fn service_card(category_slug: &str, summary: &ServiceSummary) -> String {
    format!(
        r#"<div class="card service-card">
<div class="card-image"><img src="{image}" alt="{title}"><span class="price">{price}</span></div>
<h3>{title}</h3>
<p>{description}</p>
{details}
</div>
"#,
        image = escape_html(summary.image_or_placeholder()),
        title = escape_html(&summary.title),
        price = escape_html(&summary.price),
        description = escape_html(&summary.description),
        details = link(&summary.detail_path(category_slug), "button", "View Details"),
    )
}

/// Page for a category slug that is not in the catalog
pub fn render_category_not_found(slug: &str) -> String {
    let content = format!(
        r#"<section class="not-found">
<h1>Category Not Found</h1>
<p>We could not find a category called "{slug}".</p>
{back}
</section>"#,
        slug = escape_html(slug),
        back = link(CATEGORIES_PATH, "button", "Back to All Categories"),
    );
    layout("Category Not Found", &content)
}
