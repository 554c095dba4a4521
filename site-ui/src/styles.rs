//! Class names used by the features section
//!
//! `FEATURES` and `FEATURE_SVG` are defined by the section's own stylesheet;
//! the rest come from the host theme's grid and text utilities.

pub const FEATURES: &str = "features";
pub const FEATURE_SVG: &str = "featureSvg";

pub const CONTAINER: &str = "container";
pub const ROW: &str = "row";
/// One third of a row
pub const COLUMN_THIRD: &str = "col col--4";
pub const TEXT_CENTER: &str = "text--center";
pub const CARD_BODY: &str = "text--center padding-horiz--md";
