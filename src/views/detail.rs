use crate::models::{DetailPage, DetailState, RouteParams, ServiceData, CONTACT_PATH};

use super::{escape_html, layout, link};

pub const LOADING_MESSAGE: &str = "Loading...";

/// Render a detail page in whatever state it is in.
///
/// The content grid only appears once a service is loaded.
pub fn render_detail(page: &DetailPage) -> String {
    match page.state() {
        DetailState::Idle => layout("Loading", &loading(None)),
        DetailState::Loading { params } => layout("Loading", &loading(Some(params))),
        DetailState::Loaded { params, service } => {
            layout(&service.title, &loaded(params, service))
        }
        DetailState::NotFound { params } => layout("Service Not Found", &not_found(params)),
        DetailState::Failed { params, .. } => layout("Temporarily Unavailable", &failed(params)),
    }
}

fn back_link(params: &RouteParams) -> String {
    link(&params.back_path(), "back-link", &params.back_label())
}

fn loading(params: Option<&RouteParams>) -> String {
    let back = params.map(back_link).unwrap_or_default();
    format!(
        r#"{back}
<div class="loading">{message}</div>"#,
        back = back,
        message = LOADING_MESSAGE
    )
}

fn loaded(params: &RouteParams, service: &ServiceData) -> String {
    let thumbnails: String = service
        .thumbnails()
        .iter()
        .enumerate()
        .map(|(index, image)| {
            format!(
                r#"<img class="thumbnail" src="{}" alt="{} {}">"#,
                escape_html(image),
                escape_html(&service.title),
                index + 2
            )
        })
        .collect();

    let features: String = service
        .features
        .iter()
        .map(|feature| format!("<li>{}</li>", escape_html(feature)))
        .collect();

    format!(
        r#"{back}
<div class="detail-grid">
<div class="gallery">
<img class="hero" src="{hero}" alt="{title}">
<div class="thumbnails">{thumbnails}</div>
</div>
<div class="detail-info">
<h1>{title}</h1>
<p class="price">{price}</p>
<p class="category">{category}</p>
<section>
<h2>Description</h2>
<p>{description}</p>
</section>
<section>
<h2>What's Included</h2>
<ul class="features">{features}</ul>
</section>
<div class="card booking">
<h2>Booking Information</h2>
{form}
</div>
<div class="card help">
<h2>Need Help?</h2>
<p>Have questions about this service? Our team is here to help.</p>
{contact}
</div>
</div>
</div>"#,
        back = back_link(params),
        hero = escape_html(service.hero_image()),
        title = escape_html(&service.title),
        thumbnails = thumbnails,
        price = escape_html(&service.price),
        category = escape_html(&service.category),
        description = escape_html(&service.description),
        features = features,
        form = booking_form(service),
        contact = link(CONTACT_PATH, "button", "Contact Us"),
    )
}

fn booking_form(service: &ServiceData) -> String {
    format!(
        r#"<form class="booking-form">
<input type="hidden" name="service" value="{id}">
<label>Name <input type="text" name="name" required></label>
<label>Phone <input type="tel" name="phone" required></label>
<label>Date <input type="date" name="date" required></label>
<label>Message <textarea name="message"></textarea></label>
<button type="button" disabled>Book Now</button>
</form>"#,
        id = escape_html(&service.id)
    )
}

fn not_found(params: &RouteParams) -> String {
    format!(
        r#"{back}
<section class="not-found">
<h1>Service Not Found</h1>
<p>We could not find "{id}" in {category}.</p>
</section>"#,
        back = back_link(params),
        id = escape_html(&params.id),
        category = escape_html(&crate::models::category_label(&params.category)),
    )
}

fn failed(params: &RouteParams) -> String {
    format!(
        r#"{back}
<section class="unavailable">
<h1>Temporarily Unavailable</h1>
<p>We could not load this service right now. Please try again shortly.</p>
{retry}
</section>"#,
        back = back_link(params),
        retry = link(&params.detail_path(), "button", "Try Again"),
    )
}
