use crate::domain::a001_product::ui::details::ProductDetail;
use crate::domain::a001_product::ui::list::CatalogList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use contracts::shared::route::Route;
use leptos::prelude::*;

/// Picks the catalog or the detail view from the current route.
///
/// A new route value rebuilds the view, so a detail page always starts with
/// fresh gallery state and its own keyboard listener.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Runs once when the component is created.
    ctx.init_router_integration();
    ctx.load_catalog();

    view! {
        <Shell>
            {move || match ctx.route.get() {
                Route::Catalog => view! { <CatalogList /> }.into_any(),
                Route::Product { sku, .. } => view! { <ProductDetail sku=sku /> }.into_any(),
            }}
        </Shell>
    }
}
