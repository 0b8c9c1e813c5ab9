use thiserror::Error;

/// Errors raised while loading or reading the painting catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog data unavailable ({source_name}): {source}")]
    DataUnavailable {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog data is malformed: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("no painting at index {index} (catalog holds {count})")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("the catalog contains no paintings")]
    EmptyCatalog,
}

pub type CatalogResult<T> = Result<T, CatalogError>;
