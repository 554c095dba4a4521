//! Homepage features section

use crate::components::feature_card::FeatureCard;
use crate::display_types::FeatureEntry;
use crate::features::FEATURE_LIST;
use crate::styles;
use dioxus::prelude::*;
use tracing::trace;

/// Homepage features, rendered from the static feature list
#[component]
pub fn HomepageFeatures() -> Element {
    rsx! {
        FeaturesSection { features: FEATURE_LIST }
    }
}

/// Section holding one card per entry in a wrapping row
///
/// Cards keep list order and are keyed by position; the list is static so
/// positions never move.
#[component]
pub fn FeaturesSection(features: &'static [FeatureEntry]) -> Element {
    trace!("Rendering {} feature cards", features.len());

    rsx! {
        section { class: styles::FEATURES,
            div { class: styles::CONTAINER,
                div { class: styles::ROW,
                    for (idx , entry) in features.iter().enumerate() {
                        FeatureCard { key: "{idx}", entry: *entry }
                    }
                }
            }
        }
    }
}
