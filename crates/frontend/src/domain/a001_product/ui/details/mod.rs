pub mod gallery;

use self::gallery::Gallery;
use crate::layout::global_context::{AppGlobalContext, CatalogLoad};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{PAGE_CAT_DETAIL, PAGE_CAT_NOT_FOUND};
use contracts::domain::a001_product::aggregate::ProductRow;
use contracts::domain::a001_product::catalog::find_by_sku;
use contracts::shared::error::DetailError;
use contracts::shared::route::Route;
use leptos::prelude::*;
use thaw::*;

/// Resolves `sku` against the loaded catalog and renders the product or a
/// not-found state.
#[component]
pub fn ProductDetail(sku: String) -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let stored_sku = StoredValue::new(sku);

    let resolved = Memo::new(move |_| {
        ctx.catalog.with(|catalog| match catalog {
            CatalogLoad::Ready(rows) => Some(stored_sku.with_value(|sku| {
                find_by_sku(rows, sku)
                    .cloned()
                    .ok_or_else(|| DetailError::RowNotFound(sku.clone()))
            })),
            _ => None,
        })
    });

    Effect::new(move |_| {
        if let Some(Err(e)) = resolved.get() {
            log::warn!("{}", e);
            if ctx.config.with_untracked(|c| c.redirect_missing_to_catalog) {
                ctx.redirect(Route::Catalog);
            }
        }
    });

    move || match resolved.get() {
        None if ctx.catalog.with(|c| matches!(c, CatalogLoad::Loading)) => view! {
            <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-4xl); justify-content: center;">
                <Spinner />
            </Flex>
        }
        .into_any(),
        // Catalog failed to load: nothing to show.
        None => view! { <></> }.into_any(),
        Some(Ok(product)) => view! { <ProductDetailContent product=product /> }.into_any(),
        Some(Err(_)) => view! { <ProductNotFound /> }.into_any(),
    }
}

#[component]
fn ProductDetailContent(product: ProductRow) -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (contact_url, contact_label) =
        ctx.config.with_untracked(|c| (c.contact_url(&product), c.contact_label.clone()));

    let lines = product.description_lines();
    let last = lines.len().saturating_sub(1);
    let description = lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| view! { {line} {(i < last).then(|| view! { <br /> })} })
        .collect_view();

    view! {
        <PageFrame page_id="a001_product--detail" category=PAGE_CAT_DETAIL>
            <div class="product-layout">
                <div class="product-media">
                    <Gallery images=product.images.clone() alt=product.title.clone() />
                </div>
                <div class="product-info-text">
                    <h1 class="section-title">{product.title.clone()}</h1>
                    <p class="product-description">{description}</p>
                    <a href=contact_url target="_blank" rel="noopener" class="contact-btn">
                        {icon("message")}
                        <span>{contact_label}</span>
                    </a>
                    <a href="/" data-route="" class="back-link">"Back to catalog"</a>
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn ProductNotFound() -> impl IntoView {
    view! {
        <PageFrame page_id="a001_product--not-found" category=PAGE_CAT_NOT_FOUND>
            <div class="page__content">
                <h1 class="section-title">"Product not found"</h1>
                <p>"This piece may have been sold or the link is out of date."</p>
                <a href="/" data-route="" class="back-link">"Back to catalog"</a>
            </div>
        </PageFrame>
    }
}
