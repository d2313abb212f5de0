//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_product--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `domain/a001_product/` directory.

/// Product grid with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Single product view.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Unknown product identifier.
pub const PAGE_CAT_NOT_FOUND: &str = "not-found";
