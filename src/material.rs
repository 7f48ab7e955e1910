//! Recurring supplies and consumables for a proposal.
use crate::units::{Dimensionless, Money};

/// The name given to material items which the user hasn't named
pub const DEFAULT_ITEM_NAME: &str = "Item";

/// One supply/consumable line.
///
/// Material costs recur identically in every period of a proposal.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialItem {
    /// A description of the item
    pub name: String,
    /// Number of units required per period
    pub quantity: Dimensionless,
    /// Internal cost of one unit
    pub unit_cost: Money,
}

impl MaterialItem {
    /// Create a new [`MaterialItem`].
    ///
    /// A blank `name` is replaced with [`DEFAULT_ITEM_NAME`].
    pub fn new(name: &str, quantity: f64, unit_cost: f64) -> Self {
        let name = name.trim();
        Self {
            name: if name.is_empty() {
                DEFAULT_ITEM_NAME.to_string()
            } else {
                name.to_string()
            },
            quantity: Dimensionless(quantity),
            unit_cost: Money(unit_cost),
        }
    }

    /// Whether this row should be included when pricing
    pub fn is_valid(&self) -> bool {
        self.quantity.is_positive()
            && self.quantity.value().is_finite()
            && self.unit_cost.is_positive()
            && self.unit_cost.is_finite()
    }

    /// The internal cost of this line for a single period
    pub fn line_total(&self) -> Money {
        self.unit_cost * self.quantity
    }
}

/// Iterate over the rows of a material roster which should be included when pricing
pub fn iter_valid_items(roster: &[MaterialItem]) -> impl Iterator<Item = &MaterialItem> {
    roster.iter().filter(|item| item.is_valid())
}
