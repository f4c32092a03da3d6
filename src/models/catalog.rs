use serde::{Deserialize, Serialize};

/// Image shown when a catalog entry has no image reference
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Listing page shared by every category
pub const CATEGORIES_PATH: &str = "/categories";

/// Contact page linked from every call to action
pub const CONTACT_PATH: &str = "/contact";

/// Card-level summary of a bookable service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: String,
}

/// Full record rendered on the detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceData {
    pub id: String,
    pub title: String,
    /// Display name of the category, e.g. "Candlelight Dinners"
    pub category: String,
    pub price: String,
    pub description: String,
    pub features: Vec<String>,
    /// Hero image first, thumbnails after
    pub images: Vec<String>,
}

/// Call-to-action block at the bottom of a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRequest {
    pub heading: String,
    pub body: String,
    pub cta_label: String,
}

/// One row of the catalog table, keyed by `slug`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub title: String,
    pub tagline: String,
    pub custom_request: CustomRequest,
    pub services: Vec<ServiceSummary>,
}

/// Category entry for the index pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub slug: String,
    pub title: String,
    pub tagline: String,
    pub service_count: usize,
    pub path: String,
}

/// Response model for category listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<CategorySummary>,
    pub total_count: usize,
}

/// Parameters extracted from `/categories/{category}/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteParams {
    pub category: String,
    pub id: String,
}

/// Result of resolving a detail route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    Found { service: ServiceData },
    NotFound { category: String, id: String },
}

impl ServiceSummary {
    /// Link target of the card's "View Details" button
    pub fn detail_path(&self, category_slug: &str) -> String {
        detail_path(category_slug, &self.id)
    }

    /// Image reference, or the placeholder when empty
    pub fn image_or_placeholder(&self) -> &str {
        non_empty_or_placeholder(&self.image)
    }
}

impl ServiceData {
    /// Hero image; the catalog guarantees at least one image
    pub fn hero_image(&self) -> &str {
        self.images
            .first()
            .map(|image| non_empty_or_placeholder(image))
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Images after the hero
    pub fn thumbnails(&self) -> &[String] {
        self.images.get(1..).unwrap_or(&[])
    }

    /// Prefix every root-relative image with the assets base URL
    pub fn with_assets_base(mut self, assets_base_url: &str) -> Self {
        for image in &mut self.images {
            *image = asset_url(assets_base_url, image);
        }
        self
    }
}

impl Category {
    pub fn path(&self) -> String {
        category_path(&self.slug)
    }

    pub fn summary(&self) -> CategorySummary {
        CategorySummary {
            slug: self.slug.clone(),
            title: self.title.clone(),
            tagline: self.tagline.clone(),
            service_count: self.services.len(),
            path: self.path(),
        }
    }

    /// Prefix every root-relative card image with the assets base URL
    pub fn with_assets_base(mut self, assets_base_url: &str) -> Self {
        for service in &mut self.services {
            service.image = asset_url(assets_base_url, &service.image);
        }
        self
    }
}

impl RouteParams {
    /// Both parameters must be present and non-empty
    pub fn from_parts(category: Option<&str>, id: Option<&str>) -> Option<Self> {
        match (category, id) {
            (Some(category), Some(id)) if !category.is_empty() && !id.is_empty() => Some(Self {
                category: category.to_string(),
                id: id.to_string(),
            }),
            _ => None,
        }
    }

    pub fn detail_path(&self) -> String {
        detail_path(&self.category, &self.id)
    }

    /// Target of the "Back to ..." link
    pub fn back_path(&self) -> String {
        category_path(&self.category)
    }

    /// Text of the "Back to ..." link
    pub fn back_label(&self) -> String {
        format!("Back to {}", category_label(&self.category))
    }
}

pub fn category_path(slug: &str) -> String {
    format!("{}/{}", CATEGORIES_PATH, slug)
}

pub fn detail_path(category_slug: &str, id: &str) -> String {
    format!("{}/{}/{}", CATEGORIES_PATH, category_slug, id)
}

/// Human label for a slug: split on `-`, capitalize each word, join with spaces.
///
/// Only the first character of each word changes; empty words stay empty.
pub fn category_label(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join a root-relative reference onto a base URL; other references pass through
pub fn asset_url(assets_base_url: &str, reference: &str) -> String {
    if assets_base_url.is_empty() || !reference.starts_with('/') {
        return reference.to_string();
    }
    format!("{}{}", assets_base_url.trim_end_matches('/'), reference)
}

fn non_empty_or_placeholder(image: &str) -> &str {
    if image.is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        image
    }
}
