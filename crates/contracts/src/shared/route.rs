//! Client-side routes.
//!
//! Path scheme: `/` is the catalog, `/product/{sku}/{slug}` is a detail view.
//! The slug is cosmetic; only the SKU is used to resolve the row.

use std::collections::HashMap;

use crate::domain::a001_product::slug::slugify;

pub const PRODUCT_SEGMENT: &str = "product";

/// Query parameter written by the static host's 404 page.
pub const LEGACY_REDIRECT_PARAM: &str = "p";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Catalog,
    Product {
        sku: String,
        slug: Option<String>,
    },
}

impl Route {
    pub fn product(sku: &str, title: Option<&str>) -> Self {
        Route::Product {
            sku: sku.trim().to_string(),
            slug: Some(slugify(title)),
        }
    }

    /// Parses `location.pathname`. Anything that is not a product path is the catalog.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let mut segments = path.split('/').filter(|s| !s.is_empty());

        match (segments.next(), segments.next()) {
            (Some(PRODUCT_SEGMENT), Some(raw_sku)) => {
                let sku = decode_segment(raw_sku).trim().to_string();
                if sku.is_empty() {
                    return Route::Catalog;
                }
                let slug = segments.next().map(decode_segment);
                Route::Product { sku, slug }
            }
            _ => Route::Catalog,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Catalog => "/".to_string(),
            Route::Product { sku, slug: Some(slug) } => format!(
                "/{}/{}/{}",
                PRODUCT_SEGMENT,
                urlencoding::encode(sku),
                urlencoding::encode(slug)
            ),
            Route::Product { sku, slug: None } => {
                format!("/{}/{}", PRODUCT_SEGMENT, urlencoding::encode(sku))
            }
        }
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, Route::Product { .. })
    }

    pub fn sku(&self) -> Option<&str> {
        match self {
            Route::Product { sku, .. } => Some(sku),
            Route::Catalog => None,
        }
    }
}

fn decode_segment(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Modifier and button state of a click on an in-page link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkClick {
    pub button: i16,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
    pub default_prevented: bool,
}

impl LinkClick {
    /// Unmodified primary-button click nobody else has handled.
    pub fn is_plain(&self) -> bool {
        self.button == 0
            && !(self.ctrl || self.meta || self.shift || self.alt || self.default_prevented)
    }
}

/// Route to show instead of following `href`, or `None` to let the browser
/// handle the click (new tab, download, external link).
pub fn link_target(click: &LinkClick, href: &str) -> Option<Route> {
    if !click.is_plain() || !href.starts_with('/') || href.starts_with("//") {
        return None;
    }
    Some(Route::parse(href))
}

/// Path to push onto the history when moving to `target`, `None` when the
/// location already shows it.
pub fn history_push(current_path: &str, target: &Route) -> Option<String> {
    let path = target.to_path();
    (path != current_path).then_some(path)
}

/// Rewrites `?p=product/12/raku-vase` into `/product/12/raku-vase`.
///
/// `~and~` stands for `&` inside the encoded path. Returns `None` when the
/// query carries no redirect.
pub fn legacy_redirect(search: &str) -> Option<String> {
    let query = search.trim_start_matches('?');
    let target = match serde_qs::from_str::<HashMap<String, String>>(query) {
        Ok(params) => params.get(LEGACY_REDIRECT_PARAM).cloned(),
        // Bracketed or repeated keys: take the first `p`
        Err(_) => first_param(query, LEGACY_REDIRECT_PARAM),
    }?;
    let target = target.trim();
    if target.is_empty() {
        return None;
    }
    Some(format!(
        "/{}",
        target.trim_start_matches('/').replace("~and~", "&")
    ))
}

fn first_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (key == name).then(|| decode_segment(&value.replace('+', " ")))
    })
}
