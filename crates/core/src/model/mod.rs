//! Plain catalog record types, shaped after the storefront API payloads
//! they deserialize from.

pub mod connection;
pub mod product;
pub mod selling_plan;

pub use connection::{Connection, Edge};
pub use product::{ProductOption, ProductVariant, SelectedOptionPair, SelectedOptions};
pub use selling_plan::{
    Money, SellingPlan, SellingPlanAllocation, SellingPlanGroup, SellingPlanPriceAdjustment,
};
