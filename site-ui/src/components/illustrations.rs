//! Feature illustrations
//!
//! Line drawings in the Lucide style (https://lucide.dev), scaled up for
//! cards. They use stroke="currentColor" so they follow the text color.

use crate::display_types::FeatureImage;
use dioxus::prelude::*;

/// Render a feature image handle
///
/// Bundled images become inline SVG; `Url` images become an `img` pointing
/// at the resolved asset. Both carry `class` and the image role.
#[component]
pub fn FeatureIllustration(image: FeatureImage, class: &'static str) -> Element {
    match image {
        FeatureImage::React => rsx! { ReactIllustration { class } },
        FeatureImage::JavascriptFrameworks => rsx! { JavascriptFrameworksIllustration { class } },
        FeatureImage::StaticAssets => rsx! { StaticAssetsIllustration { class } },
        FeatureImage::Url(src) => rsx! {
            img { class: "{class}", src: "{src}", alt: "", "role": "img" }
        },
    }
}

/// Atom (React logo outline)
#[component]
pub fn ReactIllustration(#[props(default = "w-16 h-16")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            "role": "img",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.5",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            circle { cx: "12", cy: "12", r: "1" }
            path { d: "M20.2 20.2c2.04-2.03.02-7.36-4.5-11.9-4.54-4.52-9.87-6.54-11.9-4.5-2.04 2.03-.02 7.36 4.5 11.9 4.54 4.52 9.87 6.54 11.9 4.5Z" }
            path { d: "M15.7 15.7c4.52-4.54 6.54-9.87 4.5-11.9-2.03-2.04-7.36-.02-11.9 4.5-4.52 4.54-6.54 9.87-4.5 11.9 2.03 2.04 7.36.02 11.9-4.5Z" }
        }
    }
}

/// Stacked layers
#[component]
pub fn JavascriptFrameworksIllustration(
    #[props(default = "w-16 h-16")] class: &'static str,
) -> Element {
    rsx! {
        svg {
            class: "{class}",
            "role": "img",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.5",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z" }
            path { d: "m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65" }
            path { d: "m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65" }
        }
    }
}

/// Source file with angle brackets
#[component]
pub fn StaticAssetsIllustration(#[props(default = "w-16 h-16")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            "role": "img",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.5",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" }
            path { d: "M14 2v4a2 2 0 0 0 2 2h4" }
            path { d: "m10 13-2 2 2 2" }
            path { d: "m14 17 2-2-2-2" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render;

    #[test]
    fn test_bundled_image_is_inline_svg() {
        fn app() -> Element {
            rsx! {
                FeatureIllustration { image: FeatureImage::React, class: "featureSvg" }
            }
        }
        let html = render(app);
        assert!(html.contains("<svg"), "{html}");
        assert!(html.contains(r#"class="featureSvg""#), "{html}");
        assert!(html.contains(r#"role="img""#), "{html}");
    }

    #[test]
    fn test_each_bundled_image_renders_distinct_svg() {
        fn react() -> Element {
            rsx! { FeatureIllustration { image: FeatureImage::React, class: "x" } }
        }
        fn frameworks() -> Element {
            rsx! {
                FeatureIllustration { image: FeatureImage::JavascriptFrameworks, class: "x" }
            }
        }
        fn assets() -> Element {
            rsx! { FeatureIllustration { image: FeatureImage::StaticAssets, class: "x" } }
        }
        let rendered = [render(react), render(frameworks), render(assets)];
        assert_ne!(rendered[0], rendered[1]);
        assert_ne!(rendered[1], rendered[2]);
        assert_ne!(rendered[0], rendered[2]);
    }

    #[test]
    fn test_url_image_renders_img() {
        fn app() -> Element {
            rsx! {
                FeatureIllustration {
                    image: FeatureImage::Url("/img/undraw_docusaurus_tree.svg"),
                    class: "featureSvg",
                }
            }
        }
        let html = render(app);
        assert!(html.contains("<img"), "{html}");
        assert!(html.contains(r#"src="/img/undraw_docusaurus_tree.svg""#), "{html}");
        assert!(html.contains(r#"role="img""#), "{html}");
        assert!(!html.contains("<svg"), "{html}");
    }

    #[test]
    fn test_default_class() {
        fn app() -> Element {
            rsx! { StaticAssetsIllustration {} }
        }
        let html = render(app);
        assert!(html.contains(r#"class="w-16 h-16""#), "{html}");
    }
}
