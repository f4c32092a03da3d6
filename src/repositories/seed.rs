//! Catalog content shipped with the binary.

use crate::models::{Category, CustomRequest, ServiceData, ServiceSummary};

use super::catalog_table::{CatalogDocument, DetailRecord};

pub const BALLOON_BOUQUET: &str = "balloon-bouquet";
pub const CANDLELIGHT_DINNERS: &str = "candlelight-dinners";

/// The record the detail resolver answers with in `fixed` mode
pub fn placeholder_service(id: &str) -> ServiceData {
    ServiceData {
        id: id.to_string(),
        title: "Romantic Candlelight Dinner".to_string(),
        category: "Candlelight Dinners".to_string(),
        price: "₹8,000".to_string(),
        description: "Experience a magical evening with our premium candlelight dinner setup. \
            Perfect for anniversaries, birthdays, or just to show your love. Our team will create \
            a romantic atmosphere with elegant table settings, ambient lighting, and personalized \
            touches."
            .to_string(),
        features: strings(&[
            "Private venue or home setup available",
            "Customized menu options",
            "Professional decoration with flowers and candles",
            "Background music of your choice",
            "Complimentary photography service",
            "Surprise gift arrangement (optional)",
        ]),
        images: strings(&[
            "/roomde.jpeg?height=600&width=800&text=Candlelight+Dinner+1",
            "/roomde.jpeg?height=600&width=800&text=Candlelight+Dinner+2",
            "/rom.jpeg?height=600&width=800&text=Candlelight+Dinner+3",
        ]),
    }
}

pub fn seed_document() -> CatalogDocument {
    let mut details = Vec::new();
    details.extend(balloon_details());
    details.extend(dinner_details());

    CatalogDocument {
        categories: vec![balloon_bouquet(), candlelight_dinners()],
        details,
    }
}

fn balloon_bouquet() -> Category {
    Category {
        slug: BALLOON_BOUQUET.to_string(),
        title: "Balloon Bouquet".to_string(),
        tagline: "Explore our range of balloon bouquet services designed to add color and joy \
            to your special occasions."
            .to_string(),
        custom_request: CustomRequest {
            heading: "Need a Custom Balloon Arrangement?".to_string(),
            body: "We can create custom balloon arrangements for any occasion. Contact us to \
                discuss your specific requirements and let us bring your vision to life."
                .to_string(),
            cta_label: "Contact Us for Custom Arrangements".to_string(),
        },
        services: vec![
            summary(
                "standard-balloon-bouquet",
                "Standard Balloon Bouquet",
                "A beautiful arrangement of colorful balloons perfect for birthdays, \
                anniversaries, or any celebration.",
                "/ball.jpeg?height=400&width=600&text=Standard+Balloon+Bouquet",
                "₹1,500",
            ),
            summary(
                "premium-balloon-bouquet",
                "Premium Balloon Bouquet",
                "An elegant arrangement of premium balloons with custom colors and designs for \
                special occasions.",
                "/dec5.jpeg?height=400&width=600&text=Premium+Balloon+Bouquet",
                "₹2,500",
            ),
            summary(
                "balloon-surprise-box",
                "Balloon Surprise Box",
                "A box filled with helium balloons that float out when opened, creating a \
                magical surprise moment.",
                "/box.jpeg?height=400&width=600&text=Balloon+Surprise+Box",
                "₹3,000",
            ),
            summary(
                "balloon-decoration",
                "Balloon Decoration",
                "Complete room or venue decoration with balloons for parties and special events.",
                "/surprise.jpeg?height=400&width=600&text=Balloon+Decoration",
                "₹5,000",
            ),
        ],
    }
}

fn candlelight_dinners() -> Category {
    Category {
        slug: CANDLELIGHT_DINNERS.to_string(),
        title: "Candlelight Dinners".to_string(),
        tagline: "Explore our range of romantic candlelight dinner experiences designed to \
            create magical moments for you and your loved one."
            .to_string(),
        custom_request: CustomRequest {
            heading: "Want a Custom Dining Experience?".to_string(),
            body: "We can create custom candlelight dinner experiences tailored to your \
                preferences. Contact us to discuss your dream dinner setup and make your special \
                occasion truly unforgettable."
                .to_string(),
            cta_label: "Contact Us for Custom Dining Experiences".to_string(),
        },
        services: vec![
            summary(
                "romantic-dinner",
                "Romantic Candlelight Dinner",
                "Experience a magical evening with our premium candlelight dinner setup. Perfect \
                for anniversaries, birthdays, or just to show your love.",
                "/sur2.jpeg?height=400&width=600&text=Romantic+Dinner",
                "₹8,000",
            ),
            summary(
                "rooftop-dinner",
                "Rooftop Candlelight Dinner",
                "Enjoy a romantic dinner under the stars with our exclusive rooftop candlelight \
                dinner setup with city views.",
                "/roof.jpeg?height=400&width=600&text=Rooftop+Dinner",
                "₹12,000",
            ),
            summary(
                "private-beach-dinner",
                "Private Beach Dinner",
                "Experience the ultimate romantic dinner on a private beach with the sound of \
                waves and beautiful sunset views.",
                "/beach3.jpeg?height=400&width=600&text=Beach+Dinner",
                "₹15,000",
            ),
            summary(
                "home-dinner-setup",
                "Home Candlelight Dinner",
                "Transform your home into a romantic restaurant with our professional \
                candlelight dinner setup service.",
                "/roomde.jpeg?height=400&width=600&text=Home+Dinner",
                "₹6,000",
            ),
        ],
    }
}

fn balloon_details() -> Vec<DetailRecord> {
    let category = "Balloon Bouquet";
    vec![
        detail(
            BALLOON_BOUQUET,
            ServiceData {
                id: "standard-balloon-bouquet".to_string(),
                title: "Standard Balloon Bouquet".to_string(),
                category: category.to_string(),
                price: "₹1,500".to_string(),
                description: "A beautiful arrangement of colorful balloons perfect for \
                    birthdays, anniversaries, or any celebration. Delivered ready to display."
                    .to_string(),
                features: strings(&[
                    "Twelve helium-filled latex balloons",
                    "Choice of color palette",
                    "Ribbon and weighted base included",
                    "Same-day delivery within the city",
                ]),
                images: strings(&[
                    "/ball.jpeg?height=600&width=800&text=Standard+Balloon+Bouquet+1",
                    "/ball.jpeg?height=600&width=800&text=Standard+Balloon+Bouquet+2",
                ]),
            },
        ),
        detail(
            BALLOON_BOUQUET,
            ServiceData {
                id: "premium-balloon-bouquet".to_string(),
                title: "Premium Balloon Bouquet".to_string(),
                category: category.to_string(),
                price: "₹2,500".to_string(),
                description: "An elegant arrangement of premium balloons with custom colors \
                    and designs for special occasions."
                    .to_string(),
                features: strings(&[
                    "Chrome, confetti and foil balloons",
                    "Custom colors and printed message",
                    "Long-lasting helium treatment",
                    "Delivery and setup included",
                ]),
                images: strings(&[
                    "/dec5.jpeg?height=600&width=800&text=Premium+Balloon+Bouquet+1",
                    "/dec5.jpeg?height=600&width=800&text=Premium+Balloon+Bouquet+2",
                    "/ball.jpeg?height=600&width=800&text=Premium+Balloon+Bouquet+3",
                ]),
            },
        ),
        detail(
            BALLOON_BOUQUET,
            ServiceData {
                id: "balloon-surprise-box".to_string(),
                title: "Balloon Surprise Box".to_string(),
                category: category.to_string(),
                price: "₹3,000".to_string(),
                description: "A box filled with helium balloons that float out when opened, \
                    creating a magical surprise moment."
                    .to_string(),
                features: strings(&[
                    "Gift box with personalized tag",
                    "Helium balloons with hanging notes",
                    "Optional photo strings",
                    "Doorstep delivery at the time you choose",
                ]),
                images: strings(&[
                    "/box.jpeg?height=600&width=800&text=Balloon+Surprise+Box+1",
                    "/box.jpeg?height=600&width=800&text=Balloon+Surprise+Box+2",
                ]),
            },
        ),
        detail(
            BALLOON_BOUQUET,
            ServiceData {
                id: "balloon-decoration".to_string(),
                title: "Balloon Decoration".to_string(),
                category: category.to_string(),
                price: "₹5,000".to_string(),
                description: "Complete room or venue decoration with balloons for parties and \
                    special events."
                    .to_string(),
                features: strings(&[
                    "Balloon arch or backdrop",
                    "Ceiling and wall balloon clusters",
                    "Theme-matched color scheme",
                    "Setup and cleanup by our team",
                ]),
                images: strings(&[
                    "/surprise.jpeg?height=600&width=800&text=Balloon+Decoration+1",
                    "/surprise.jpeg?height=600&width=800&text=Balloon+Decoration+2",
                    "/dec5.jpeg?height=600&width=800&text=Balloon+Decoration+3",
                ]),
            },
        ),
    ]
}

fn dinner_details() -> Vec<DetailRecord> {
    let category = "Candlelight Dinners";
    vec![
        detail(CANDLELIGHT_DINNERS, placeholder_service("romantic-dinner")),
        detail(
            CANDLELIGHT_DINNERS,
            ServiceData {
                id: "rooftop-dinner".to_string(),
                title: "Rooftop Candlelight Dinner".to_string(),
                category: category.to_string(),
                price: "₹12,000".to_string(),
                description: "Enjoy a romantic dinner under the stars with our exclusive \
                    rooftop candlelight dinner setup with city views."
                    .to_string(),
                features: strings(&[
                    "Private rooftop with city views",
                    "Multi-course menu for two",
                    "Fairy lights, candles and floral centerpiece",
                    "Live or curated background music",
                    "Complimentary cake",
                ]),
                images: strings(&[
                    "/roof.jpeg?height=600&width=800&text=Rooftop+Dinner+1",
                    "/roof.jpeg?height=600&width=800&text=Rooftop+Dinner+2",
                    "/rom.jpeg?height=600&width=800&text=Rooftop+Dinner+3",
                ]),
            },
        ),
        detail(
            CANDLELIGHT_DINNERS,
            ServiceData {
                id: "private-beach-dinner".to_string(),
                title: "Private Beach Dinner".to_string(),
                category: category.to_string(),
                price: "₹15,000".to_string(),
                description: "Experience the ultimate romantic dinner on a private beach with \
                    the sound of waves and beautiful sunset views."
                    .to_string(),
                features: strings(&[
                    "Private cabana on the beach",
                    "Sunset seating time",
                    "Chef-prepared seafood or vegetarian menu",
                    "Lanterns, petals and candle pathway",
                    "Complimentary photography service",
                ]),
                images: strings(&[
                    "/beach3.jpeg?height=600&width=800&text=Beach+Dinner+1",
                    "/beach3.jpeg?height=600&width=800&text=Beach+Dinner+2",
                ]),
            },
        ),
        detail(
            CANDLELIGHT_DINNERS,
            ServiceData {
                id: "home-dinner-setup".to_string(),
                title: "Home Candlelight Dinner".to_string(),
                category: category.to_string(),
                price: "₹6,000".to_string(),
                description: "Transform your home into a romantic restaurant with our \
                    professional candlelight dinner setup service."
                    .to_string(),
                features: strings(&[
                    "Table styling with linens and tableware",
                    "Candles, flowers and ambient lighting",
                    "Customized menu options",
                    "Setup and cleanup at your home",
                ]),
                images: strings(&[
                    "/roomde.jpeg?height=600&width=800&text=Home+Dinner+1",
                    "/roomde.jpeg?height=600&width=800&text=Home+Dinner+2",
                    "/rom.jpeg?height=600&width=800&text=Home+Dinner+3",
                ]),
            },
        ),
    ]
}

fn summary(id: &str, title: &str, description: &str, image: &str, price: &str) -> ServiceSummary {
    ServiceSummary {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        price: price.to_string(),
    }
}

fn detail(category_slug: &str, service: ServiceData) -> DetailRecord {
    DetailRecord {
        category_slug: category_slug.to_string(),
        service,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Validate;

    #[test]
    fn test_placeholder_echoes_id() {
        let service = placeholder_service("anything-at-all");
        assert_eq!(service.id, "anything-at-all");
        assert_eq!(service.title, "Romantic Candlelight Dinner");
        assert_eq!(service.price, "₹8,000");
        assert_eq!(service.features.len(), 6);
        assert_eq!(service.images.len(), 3);
    }

    #[test]
    fn test_seed_content_is_valid() {
        let document = seed_document();
        assert_eq!(document.categories.len(), 2);
        for category in &document.categories {
            category.validate().unwrap();
            assert_eq!(category.services.len(), 4);
        }
        assert_eq!(document.details.len(), 8);
        for record in &document.details {
            record.service.validate().unwrap();
        }
    }
}
