pub mod state;

use std::sync::Arc;

use self::state::{create_state, position_of};
use crate::layout::global_context::{AppGlobalContext, CatalogLoad};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_product::aggregate::ProductRow;
use contracts::domain::a001_product::categories::{filter_label, FILTERS};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CatalogList() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            {move || match ctx.catalog.get() {
                CatalogLoad::Loading => view! {
                    <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-4xl); justify-content: center;">
                        <Spinner />
                    </Flex>
                }
                .into_any(),
                // Fetch failures are logged by the loader; the grid stays empty.
                CatalogLoad::Failed(_) => view! { <div class="product-grid"></div> }.into_any(),
                CatalogLoad::Ready(rows) => view! { <CatalogGrid rows=rows /> }.into_any(),
            }}
        </PageFrame>
    }
}

#[component]
fn CatalogGrid(rows: Arc<Vec<ProductRow>>) -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let page_size = ctx.config.with_untracked(|c| c.page_size);
    let state = ctx
        .catalog_position
        .with_untracked(|position| create_state(Arc::clone(&rows), page_size, position));

    // Remember filter/page so coming back from a product keeps the grid where it was.
    Effect::new(move |_| {
        let position = state.with(position_of);
        ctx.catalog_position.set(position);
    });

    let on_page_change = Callback::new(move |page: usize| {
        state.update(|s| s.set_page(page));
        if let Some(w) = web_sys::window() {
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    view! {
        <div class="page__header category-filters">
            <Flex gap=FlexGap::Small style="align-items: center; flex-wrap: wrap;">
                {FILTERS
                    .iter()
                    .map(|&tag| {
                        view! {
                            <button
                                class=move || {
                                    if state.with(|s| s.filter() == tag) {
                                        "filter-btn filter-btn--active"
                                    } else {
                                        "filter-btn"
                                    }
                                }
                                data-filter=tag
                                on:click=move |_| state.update(|s| s.set_filter(tag))
                            >
                                {filter_label(tag)}
                            </button>
                        }
                    })
                    .collect_view()}
            </Flex>
        </div>

        <div class="page__content">
            <div class="product-grid">
                <For
                    each=move || {
                        state.with(|s| s.page_items().into_iter().cloned().collect::<Vec<_>>())
                    }
                    key=|product| (product.position, product.sku.clone())
                    children=move |product: ProductRow| view! { <ProductCard product=product /> }
                />
            </div>

            <Show when=move || state.with(|s| s.filtered_len() == 0)>
                <p class="catalog-empty">"No products in this category yet."</p>
            </Show>

            <Show when=move || state.with(|s| s.controls_visible())>
                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page()))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                    total_count=Signal::derive(move || state.with(|s| s.filtered_len()))
                    on_page_change=on_page_change
                />
            </Show>
        </div>
    }
}

/// Grid card. Clicks are picked up by the router's delegated `data-route` listener.
#[component]
fn ProductCard(product: ProductRow) -> impl IntoView {
    let class = format!("product-card {}", product.categories.join(" "));
    let href = product.detail_path();
    let image = product.primary_image().unwrap_or_default().to_string();
    let sku = product.sku.clone();
    let title = product.title.clone();
    let alt = product.title;

    view! {
        <a href=href class=class data-route="" data-sku=sku title=title>
            <img src=image alt=alt loading="lazy" />
        </a>
    }
}
