//! Static HTML export of the homepage
//!
//! Renders the components server-side with dioxus-ssr. The stylesheet is
//! inlined so the exported page does not depend on the asset pipeline.

use crate::error::ExportError;
use dioxus::prelude::*;
use site_ui::HomepageFeatures;
use std::path::Path;
use tracing::{debug, info};

/// Host stylesheet, also linked by the app through `MAIN_CSS`
pub const STYLESHEET: &str = include_str!("../assets/main.css");

/// Render the features section alone
pub fn render_features_fragment() -> String {
    fn features_root() -> Element {
        rsx! { HomepageFeatures {} }
    }

    let mut dom = VirtualDom::new(features_root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render a standalone HTML document containing the features section
pub fn render_homepage(page_title: &str) -> String {
    let mut dom = VirtualDom::new_with_props(homepage_document, page_title.to_string());
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    debug!("Rendered homepage document ({} bytes)", html.len());
    format!("<!DOCTYPE html>\n{html}\n")
}

fn homepage_document(page_title: String) -> Element {
    rsx! {
        html { lang: "vi",
            head {
                meta { charset: "utf-8" }
                meta {
                    name: "viewport",
                    content: "width=device-width, initial-scale=1",
                }
                title { "{page_title}" }
                style { dangerous_inner_html: STYLESHEET }
            }
            body {
                main { HomepageFeatures {} }
            }
        }
    }
}

/// Write rendered HTML to `path`, creating parent directories
pub fn write_export(path: &Path, contents: &str) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, contents).map_err(io_err)?;

    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_contains_all_cards() {
        let html = render_features_fragment();
        assert!(html.starts_with(r#"<section class="features">"#), "{html}");
        assert_eq!(html.matches(r#"class="col col--4""#).count(), 3);
    }

    #[test]
    fn test_homepage_document() {
        let html = render_homepage("Trang chủ");
        assert!(html.starts_with("<!DOCTYPE html>\n<html"), "{html}");
        assert!(html.contains("<title>Trang chủ</title>"), "{html}");
        assert!(html.contains(".featureSvg"), "{html}");
        assert!(html.contains(&render_features_fragment()), "{html}");
    }

    #[test]
    fn test_homepage_title_is_escaped() {
        let html = render_homepage("Docs <beta>");
        assert!(html.contains("<title>Docs &lt;beta&gt;</title>"), "{html}");
    }

    #[test]
    fn test_stylesheet_defines_section_classes() {
        assert!(STYLESHEET.contains(".features {"));
        assert!(STYLESHEET.contains(".featureSvg {"));
        assert!(STYLESHEET.contains(".col--4 {"));
    }

    #[test]
    fn test_write_export_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build").join("site").join("index.html");
        write_export(&path, "<p>hi</p>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>hi</p>");
    }

    #[test]
    fn test_write_export_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("index.html");

        let err = write_export(&path, "x").unwrap_err();
        match &err {
            ExportError::Io { path: failed, .. } => assert_eq!(failed, &path),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("not-a-dir"), "{err}");
    }
}
