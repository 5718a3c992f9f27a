pub mod aggregate;

pub use aggregate::{
    SkuProbeRow, SkuSearchFilters, SkuSearchParams, SkuSearchRow, SAMPLE_QUERY, SEARCH_LIMIT_ROWS,
};
