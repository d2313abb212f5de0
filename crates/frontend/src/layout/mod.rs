pub mod footer;
pub mod global_context;
pub mod header;

use footer::Footer;
use header::Header;
use leptos::prelude::*;

/// Storefront shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |          Catalog or product view         |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main data-zone="center" class="app-main">
                {children()}
            </main>
            <Footer />
        </div>
    }
}
