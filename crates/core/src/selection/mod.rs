//! Option/variant/selling-plan resolution engine.
//!
//! This module maps a partial or complete set of named option choices onto
//! the derived option catalog, the unique matching variant, the stock status
//! of hypothetical choices, and the allocation tied to a selected selling
//! plan.
//!
//! # Example
//!
//! ```
//! use shopkit_core::model::{ProductVariant, SelectedOptionPair};
//! use shopkit_core::selection::{InitialVariant, ProductSelection};
//!
//! let variants = vec![ProductVariant {
//!     id: "gid://shop/ProductVariant/1".to_string(),
//!     available_for_sale: true,
//!     selected_options: vec![SelectedOptionPair {
//!         name: "Color".to_string(),
//!         value: "Red".to_string(),
//!     }],
//!     selling_plan_allocations: Some(vec![]),
//! }];
//!
//! let mut selection = ProductSelection::new(variants, vec![], InitialVariant::Automatic);
//! selection.set_selected_option("Color", "Red")?;
//! assert!(selection.selected_variant().is_some());
//! # Ok::<(), shopkit_core::SelectionError>(())
//! ```

pub mod allocation;
pub mod availability;
pub mod matcher;
pub mod options;
pub mod state;

pub use allocation::resolve_allocation;
pub use availability::is_option_in_stock;
pub use matcher::{find_variant, find_variant_index};
pub use options::build_options;
pub use state::{InitialVariant, ProductSelection, VariantStatus};
