// Selection state controller - owns the selected-options map and keeps the
// derived variant and allocation in sync with it.
//
// Every mutator finishes its recomputation before returning, so readers
// always observe the state derived from the last completed mutation.

use tracing::debug;

use crate::error::Result;
use crate::model::{
    Connection, ProductOption, ProductVariant, SelectedOptions, SellingPlan,
    SellingPlanAllocation, SellingPlanGroup,
};
use crate::selection::allocation::resolve_allocation;
use crate::selection::availability;
use crate::selection::matcher::find_variant_index;
use crate::selection::options::build_options;

/// How the initial variant is chosen at construction time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InitialVariant {
    /// First available-for-sale variant, else the first variant.
    #[default]
    Automatic,
    /// The variant with this id; falls back to the [`InitialVariant::Automatic`]
    /// priority when no variant carries it.
    Id(String),
    /// Force "no variant": the selection map starts empty instead of being
    /// seeded from a variant's option signature.
    None,
}

/// Resolution status of the current selection, as exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantStatus {
    /// The caller forced "no variant".
    ExplicitlyNone,
    /// The current selection map matches no variant.
    NoMatch,
    /// A variant is selected.
    Matched,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum VariantState {
    ExplicitlyNone,
    NoMatch,
    /// Index into the variant list.
    Matched(usize),
}

/// Tracks the selected variant and selling plan for one product-selection
/// session, re-resolving both whenever the selected options change.
#[derive(Debug, Clone)]
pub struct ProductSelection {
    variants: Vec<ProductVariant>,
    selling_plan_groups: Vec<SellingPlanGroup>,
    variants_connection: Option<Connection<ProductVariant>>,
    selling_plan_groups_connection: Option<Connection<SellingPlanGroup>>,
    options: Vec<ProductOption>,
    selected_options: SelectedOptions,
    variant_state: VariantState,
    selected_selling_plan: Option<SellingPlan>,
    selected_allocation: Option<SellingPlanAllocation>,
}

impl ProductSelection {
    /// Build a controller over an already-flattened catalog.
    pub fn new(
        variants: Vec<ProductVariant>,
        selling_plan_groups: Vec<SellingPlanGroup>,
        initial: InitialVariant,
    ) -> Self {
        let options = build_options(&variants);
        let (variant_state, selected_options) = initial_state(&variants, &initial);

        Self {
            variants,
            selling_plan_groups,
            variants_connection: None,
            selling_plan_groups_connection: None,
            options,
            selected_options,
            variant_state,
            selected_selling_plan: None,
            selected_allocation: None,
        }
    }

    /// Build a controller from raw paginated query output, keeping the
    /// originals readable through [`ProductSelection::variants_connection`]
    /// and [`ProductSelection::selling_plan_groups_connection`].
    pub fn from_connections(
        variants: Connection<ProductVariant>,
        selling_plan_groups: Option<Connection<SellingPlanGroup>>,
        initial: InitialVariant,
    ) -> Self {
        let flattened_groups = selling_plan_groups
            .as_ref()
            .map(Connection::flatten)
            .unwrap_or_default();
        let mut selection = Self::new(variants.flatten(), flattened_groups, initial);
        selection.variants_connection = Some(variants);
        selection.selling_plan_groups_connection = selling_plan_groups;
        selection
    }

    /// Merge one option choice into the selection map and re-resolve.
    pub fn set_selected_option(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<()> {
        self.selected_options.insert(name.into(), value.into());
        self.recompute()
    }

    /// Replace the whole selection map and re-resolve.
    pub fn set_selected_options(&mut self, selection: SelectedOptions) -> Result<()> {
        self.selected_options = selection;
        self.recompute()
    }

    /// Directly override the selected variant by id, bypassing option-driven
    /// matching. The selection map is resynced from the variant's own option
    /// signature so the two update paths cannot diverge. `None` forces the
    /// explicit no-variant state and leaves the map untouched; an id no
    /// variant carries clears the selection to no-match, also leaving the
    /// map untouched.
    pub fn set_selected_variant(&mut self, variant_id: Option<&str>) -> Result<()> {
        self.variant_state = match variant_id {
            Some(id) => match self.variants.iter().position(|variant| variant.id == id) {
                Some(index) => {
                    self.selected_options = signature_map(&self.variants[index]);
                    VariantState::Matched(index)
                }
                None => {
                    debug!(variant_id = id, "override id not present in catalog");
                    VariantState::NoMatch
                }
            },
            None => VariantState::ExplicitlyNone,
        };
        self.resolve_selected_allocation()
    }

    /// Select or clear the selling plan and re-resolve its allocation.
    pub fn set_selected_selling_plan(&mut self, plan: Option<SellingPlan>) -> Result<()> {
        self.selected_selling_plan = plan;
        self.resolve_selected_allocation()
    }

    /// Swap in a new catalog (e.g. after a refetch), rebuild the option set,
    /// and re-resolve the current selection against the new variant list.
    /// A forced no-variant state survives the swap.
    pub fn replace_catalog(
        &mut self,
        variants: Vec<ProductVariant>,
        selling_plan_groups: Vec<SellingPlanGroup>,
    ) -> Result<()> {
        self.variants = variants;
        self.selling_plan_groups = selling_plan_groups;
        self.variants_connection = None;
        self.selling_plan_groups_connection = None;
        self.options = build_options(&self.variants);
        debug!(variant_count = self.variants.len(), "catalog replaced");

        if self.variant_state == VariantState::ExplicitlyNone {
            return self.resolve_selected_allocation();
        }
        self.recompute()
    }

    /// The derived option catalog, in first-seen order.
    pub fn options(&self) -> &[ProductOption] {
        &self.options
    }

    /// The flattened variant list the controller resolves against.
    pub fn variants(&self) -> &[ProductVariant] {
        &self.variants
    }

    /// The flattened selling plan groups.
    pub fn selling_plan_groups(&self) -> &[SellingPlanGroup] {
        &self.selling_plan_groups
    }

    /// The original variant connection, when one was supplied.
    pub fn variants_connection(&self) -> Option<&Connection<ProductVariant>> {
        self.variants_connection.as_ref()
    }

    /// The original selling plan group connection, when one was supplied.
    pub fn selling_plan_groups_connection(&self) -> Option<&Connection<SellingPlanGroup>> {
        self.selling_plan_groups_connection.as_ref()
    }

    pub fn selected_options(&self) -> &SelectedOptions {
        &self.selected_options
    }

    pub fn selected_variant(&self) -> Option<&ProductVariant> {
        match self.variant_state {
            VariantState::Matched(index) => self.variants.get(index),
            _ => None,
        }
    }

    /// Distinguishes "caller forced no variant" from "selection matches
    /// nothing", which [`ProductSelection::selected_variant`] flattens into
    /// `None`.
    pub fn variant_status(&self) -> VariantStatus {
        match self.variant_state {
            VariantState::ExplicitlyNone => VariantStatus::ExplicitlyNone,
            VariantState::NoMatch => VariantStatus::NoMatch,
            VariantState::Matched(_) => VariantStatus::Matched,
        }
    }

    pub fn selected_selling_plan(&self) -> Option<&SellingPlan> {
        self.selected_selling_plan.as_ref()
    }

    /// The allocation resolved by the last completed recomputation.
    pub fn selected_selling_plan_allocation(&self) -> Option<&SellingPlanAllocation> {
        self.selected_allocation.as_ref()
    }

    /// Probe a hypothetical override of one option against the current
    /// selection. Read-only; the current selection is untouched.
    pub fn is_option_in_stock(&self, name: &str, value: &str) -> bool {
        availability::is_option_in_stock(&self.variants, &self.selected_options, name, value)
    }

    fn recompute(&mut self) -> Result<()> {
        self.variant_state = match find_variant_index(&self.variants, &self.selected_options) {
            Some(index) => {
                debug!(variant_id = %self.variants[index].id, "selection resolved to variant");
                VariantState::Matched(index)
            }
            None => {
                debug!("selection matches no variant");
                VariantState::NoMatch
            }
        };
        self.resolve_selected_allocation()
    }

    fn resolve_selected_allocation(&mut self) -> Result<()> {
        let resolved =
            resolve_allocation(self.selected_variant(), self.selected_selling_plan.as_ref())?
                .cloned();
        self.selected_allocation = resolved;
        Ok(())
    }
}

fn initial_state(
    variants: &[ProductVariant],
    initial: &InitialVariant,
) -> (VariantState, SelectedOptions) {
    let index = match initial {
        InitialVariant::None => {
            return (VariantState::ExplicitlyNone, SelectedOptions::new());
        }
        InitialVariant::Id(id) => variants
            .iter()
            .position(|variant| variant.id == *id)
            .or_else(|| automatic_index(variants)),
        InitialVariant::Automatic => automatic_index(variants),
    };

    match index {
        Some(index) => (
            VariantState::Matched(index),
            signature_map(&variants[index]),
        ),
        None => (VariantState::NoMatch, SelectedOptions::new()),
    }
}

fn automatic_index(variants: &[ProductVariant]) -> Option<usize> {
    variants
        .iter()
        .position(|variant| variant.available_for_sale)
        .or(if variants.is_empty() { None } else { Some(0) })
}

fn signature_map(variant: &ProductVariant) -> SelectedOptions {
    variant
        .selected_options
        .iter()
        .map(|pair| (pair.name.clone(), pair.value.clone()))
        .collect()
}
