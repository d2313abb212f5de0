use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Route, store config and the loaded catalog are shared through context.
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
    }
}
