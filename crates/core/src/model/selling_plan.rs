use serde::{Deserialize, Serialize};

/// A monetary amount as delivered by the storefront API. The amount stays a
/// string; this crate performs no currency arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub amount: String,
    pub currency_code: String,
}

/// A subscription/purchase-option offer definable per product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SellingPlan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub recurring_deliveries: bool,
}

/// A named group of selling plans (e.g. "Subscribe & Save").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SellingPlanGroup {
    pub name: String,
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub selling_plans: Vec<SellingPlan>,
}

/// Price terms an allocation applies for one delivery cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SellingPlanPriceAdjustment {
    pub price: Money,
    #[serde(default)]
    pub compare_at_price: Option<Money>,
    #[serde(default)]
    pub per_delivery_price: Option<Money>,
}

/// The pricing/terms record binding a specific variant to a specific selling
/// plan. A variant's allocation list is the authoritative set of plans
/// purchasable for that variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SellingPlanAllocation {
    pub selling_plan: SellingPlan,
    #[serde(default)]
    pub price_adjustments: Vec<SellingPlanPriceAdjustment>,
}
