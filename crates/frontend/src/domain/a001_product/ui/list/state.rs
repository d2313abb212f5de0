use std::sync::Arc;

use crate::layout::global_context::CatalogPosition;
use contracts::domain::a001_product::aggregate::ProductRow;
use contracts::domain::a001_product::catalog::CatalogState;
use leptos::prelude::*;

/// Builds the grid state and restores the filter/page the user left it on.
pub fn create_state(
    rows: Arc<Vec<ProductRow>>,
    page_size: usize,
    position: &CatalogPosition,
) -> RwSignal<CatalogState> {
    let mut state = CatalogState::new(rows, page_size);
    state.set_filter(&position.filter);
    state.set_page(position.page);
    RwSignal::new(state)
}

pub fn position_of(state: &CatalogState) -> CatalogPosition {
    CatalogPosition {
        filter: state.filter().to_string(),
        page: state.page(),
    }
}
