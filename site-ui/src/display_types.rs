//! Display types for the features section
//!
//! Entries are authored at compile time and never mutated, so every field
//! borrows `'static` data and the whole entry is `Copy`.

/// Vector graphic shown at the top of a feature card
///
/// Opaque to the card: anything here can be rendered with a style class
/// and an image role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureImage {
    /// Atom illustration for the React card
    React,
    /// Stacked layers illustration for the frameworks card
    JavascriptFrameworks,
    /// Source file illustration for the HTML/CSS/JS card
    StaticAssets,
    /// Asset already resolved by the host pipeline
    Url(&'static str),
}

/// One card in the features section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureEntry {
    pub title: &'static str,
    pub image: FeatureImage,
    /// Markup fragment, rendered without escaping
    pub description: &'static str,
}
