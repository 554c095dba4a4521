//! Feature card component - pure view

use crate::components::heading::{Heading, HeadingLevel};
use crate::components::illustrations::FeatureIllustration;
use crate::display_types::FeatureEntry;
use crate::styles;
use dioxus::prelude::*;

/// One third-width card: illustration, title, description
///
/// The description is a trusted markup fragment and is inserted as-is.
#[component]
pub fn FeatureCard(entry: FeatureEntry) -> Element {
    let FeatureEntry {
        title,
        image,
        description,
    } = entry;

    rsx! {
        div { class: styles::COLUMN_THIRD,
            div { class: styles::TEXT_CENTER,
                FeatureIllustration { image, class: styles::FEATURE_SVG }
            }
            div { class: styles::CARD_BODY,
                Heading { level: HeadingLevel::H3, "{title}" }
                p { dangerous_inner_html: "{description}" }
            }
        }
    }
}
