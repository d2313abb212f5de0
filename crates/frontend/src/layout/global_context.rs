use std::sync::Arc;

use contracts::domain::a001_product::aggregate::ProductRow;
use contracts::domain::a001_product::catalog::find_by_sku;
use contracts::domain::a001_product::categories::ALL;
use contracts::shared::route::{history_push, legacy_redirect, link_target, LinkClick, Route};
use contracts::shared::store_config::StoreConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, MouseEvent};

use crate::domain::a001_product::api;

/// Catalog resource as seen by the views.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogLoad {
    #[default]
    Loading,
    Ready(Arc<Vec<ProductRow>>),
    /// Fetch or parse failed; both views stay empty.
    Failed(String),
}

/// Filter and page of the catalog grid, kept while a detail view is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPosition {
    pub filter: String,
    pub page: usize,
}

impl Default for CatalogPosition {
    fn default() -> Self {
        Self {
            filter: ALL.to_string(),
            page: 1,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<Route>,
    pub config: RwSignal<StoreConfig>,
    pub catalog: RwSignal<CatalogLoad>,
    pub catalog_position: RwSignal<CatalogPosition>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(Route::Catalog),
            config: RwSignal::new(StoreConfig::default()),
            catalog: RwSignal::new(CatalogLoad::Loading),
            catalog_position: RwSignal::new(CatalogPosition::default()),
        }
    }

    /// Applies the legacy `?p=` redirect, reads the initial route and binds
    /// the window-level listeners. Call once per app.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(target) = legacy_redirect(&search) {
            leptos::logging::log!("legacy redirect -> {}", target);
            replace_history(&target);
        }

        self.route.set(Route::parse(&current_path()));

        let this = *self;

        // Back/forward buttons
        let on_popstate = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            this.route.set(Route::parse(&current_path()));
        }) as Box<dyn FnMut(_)>);

        // Single delegated listener for every in-page link marked `data-route`.
        let on_click = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let click = LinkClick {
                button: mouse.button(),
                ctrl: mouse.ctrl_key(),
                meta: mouse.meta_key(),
                shift: mouse.shift_key(),
                alt: mouse.alt_key(),
                default_prevented: mouse.default_prevented(),
            };
            if !click.is_plain() {
                return;
            }
            let Some(link) = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest("a[data-route]").ok().flatten())
            else {
                return;
            };
            let Some(route) = link
                .get_attribute("href")
                .and_then(|href| link_target(&click, &href))
            else {
                return;
            };
            event.prevent_default();
            this.navigate(route);
        }) as Box<dyn FnMut(_)>);

        if let Some(w) = window() {
            let _ = w
                .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
            if let Some(document) = w.document() {
                let _ = document
                    .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
            }
        }
        // The router lives as long as the page; keep both closures alive.
        on_popstate.forget();
        on_click.forget();

        Effect::new(move |_| {
            let title = this.document_title();
            if let Some(document) = window().and_then(|w| w.document()) {
                document.set_title(&title);
            }
        });
    }

    /// Pushes `route` onto the history and shows it without reloading.
    pub fn navigate(&self, route: Route) {
        if let Some(path) = history_push(&current_path(), &route) {
            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    let _ = history.push_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&path),
                    );
                }
            }
        }
        self.route.set(route);
        if let Some(w) = window() {
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    /// Like [`Self::navigate`] but replaces the current history entry.
    pub fn redirect(&self, route: Route) {
        replace_history(&route.to_path());
        self.route.set(route);
    }

    /// Fetches the store config, then the catalog CSV. Called once on startup;
    /// navigation never reloads the catalog.
    pub fn load_catalog(&self) {
        let this = *self;
        spawn_local(async move {
            let config = match api::fetch_store_config().await {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("store config unavailable, using defaults: {}", e);
                    StoreConfig::default()
                }
            };
            this.config.set(config.clone());

            match api::fetch_catalog(&config).await {
                Ok(parsed) => {
                    log::debug!(
                        "catalog loaded: {} products, {} rows excluded",
                        parsed.rows.len(),
                        parsed.excluded
                    );
                    this.catalog.set(CatalogLoad::Ready(Arc::new(parsed.rows)));
                }
                Err(e) => {
                    log::error!("{}", e);
                    this.catalog.set(CatalogLoad::Failed(e.to_string()));
                }
            }
        });
    }

    pub fn document_title(&self) -> String {
        let config = self.config.get();
        let product_title = self.route.with(|route| {
            let sku = route.sku()?;
            self.catalog.with(|catalog| match catalog {
                CatalogLoad::Ready(rows) => find_by_sku(rows, sku).map(|p| config.product_title(p)),
                _ => None,
            })
        });
        product_title.unwrap_or_else(|| config.catalog_title())
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn replace_history(path: &str) {
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
        }
    }
}
