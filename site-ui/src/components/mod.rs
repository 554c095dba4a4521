//! Homepage components

pub mod feature_card;
pub mod features_section;
pub mod heading;
pub mod illustrations;

pub use feature_card::FeatureCard;
pub use features_section::{FeaturesSection, HomepageFeatures};
pub use heading::{Heading, HeadingLevel};
pub use illustrations::{
    FeatureIllustration, JavascriptFrameworksIllustration, ReactIllustration,
    StaticAssetsIllustration,
};
