pub mod error;
pub mod model;
pub mod selection;

pub use error::{Result, SelectionError};
pub use selection::state::{InitialVariant, ProductSelection, VariantStatus};
