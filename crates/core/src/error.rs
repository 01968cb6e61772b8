use thiserror::Error;

pub type Result<T> = std::result::Result<T, SelectionError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// A selling plan allocation was requested for a variant whose catalog
    /// query omitted allocation data. Distinct from the valid "no plans"
    /// state, which is an empty allocation list.
    #[error(
        "variant '{variant_id}' carries no selling plan allocation data; \
         include sellingPlanAllocations in the catalog query"
    )]
    MissingAllocationData { variant_id: String },
}
