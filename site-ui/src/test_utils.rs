//! Server-side rendering helpers for component tests

use dioxus::prelude::*;

/// Render a root component to an HTML string
pub(crate) fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
