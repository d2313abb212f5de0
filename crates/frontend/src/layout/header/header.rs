use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                // `data-route` hands the click to the router instead of reloading
                <a href="/" data-route="" class="header__title">
                    {move || ctx.config.with(|c| c.brand_name.clone())}
                </a>
                <span class="header__tagline">
                    {move || ctx.config.with(|c| c.tagline.clone())}
                </span>
            </div>
        </header>
    }
}
