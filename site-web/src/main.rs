//! site-web - Documentation homepage
//!
//! Serve with `dx serve --features web`.

fn main() {
    dioxus::launch(site_web::App);
}
