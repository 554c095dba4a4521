//! site-web - Documentation homepage host
//!
//! Mounts the homepage components in a Dioxus app, and renders the same
//! components to static HTML for export.

pub mod error;
pub mod export;

use dioxus::prelude::*;
use site_ui::HomepageFeatures;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        main { HomepageFeatures {} }
    }
}
