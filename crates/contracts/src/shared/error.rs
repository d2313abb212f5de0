use thiserror::Error;

/// Failures while obtaining or reading the catalog CSV.
///
/// Rows with missing required fields are not errors: they are counted in
/// [`crate::domain::a001_product::CatalogParse::excluded`] and skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Network failure or non-OK status while fetching the CSV.
    #[error("catalog resource unavailable: {0}")]
    ResourceUnavailable(String),

    #[error("catalog is not valid CSV: {0}")]
    Csv(String),

    /// Usually a delimiter mismatch: the whole header row ends up in one column.
    #[error("catalog header row has no {0} column")]
    MissingHeader(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetailError {
    #[error("no product with sku '{0}'")]
    RowNotFound(String),
}
