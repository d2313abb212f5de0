pub mod aggregate;
pub mod catalog;
pub mod categories;
pub mod csv_import;
pub mod slug;

pub use aggregate::{CatalogSummary, ProductRow};
pub use catalog::CatalogState;
pub use categories::{classify, CategoryRule, CategoryRules};
pub use csv_import::{parse_catalog, CatalogParse, Delimiter};
pub use slug::slugify;
