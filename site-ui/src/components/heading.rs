//! Heading primitive

use dioxus::prelude::*;

/// Semantic heading level
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum HeadingLevel {
    H1,
    H2,
    /// Card titles
    #[default]
    H3,
    H4,
    H5,
    H6,
}

/// Heading at a fixed semantic level
///
/// Lets callers pick the level as data instead of hard-coding the element.
#[component]
pub fn Heading(
    #[props(default)] level: HeadingLevel,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let class = class.as_deref();
    match level {
        HeadingLevel::H1 => rsx! { h1 { class, {children} } },
        HeadingLevel::H2 => rsx! { h2 { class, {children} } },
        HeadingLevel::H3 => rsx! { h3 { class, {children} } },
        HeadingLevel::H4 => rsx! { h4 { class, {children} } },
        HeadingLevel::H5 => rsx! { h5 { class, {children} } },
        HeadingLevel::H6 => rsx! { h6 { class, {children} } },
    }
}
