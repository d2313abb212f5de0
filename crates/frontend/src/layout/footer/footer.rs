use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <footer data-zone="footer" class="footer">
            <span class="footer__brand">{move || ctx.config.with(|c| c.brand_name.clone())}</span>
            <a
                class="footer__contact"
                href=move || ctx.config.with(|c| c.general_contact_url())
                target="_blank"
                rel="noopener"
            >
                "Contact"
            </a>
        </footer>
    }
}
