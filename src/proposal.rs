//! The input snapshot describing a proposal to be priced.
use crate::manpower::ManpowerRole;
use crate::material::MaterialItem;
use crate::period::Period;
use serde_string_enum::{DeserializeLabeledStringEnum, SerializeLabeledStringEnum};

/// How the client price for each period is expressed
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
    clap::ValueEnum,
    strum::Display,
)]
pub enum PricingUnit {
    /// A loaded hourly rate for each role
    #[string = "hour"]
    #[strum(to_string = "Hourly")]
    Hour,
    /// A price per participant
    #[string = "pax"]
    #[strum(to_string = "Per Pax")]
    Pax,
    /// A single package price for the period
    #[default]
    #[string = "lump_sum"]
    #[strum(to_string = "Lump Sum")]
    LumpSum,
}

/// Everything needed to price a proposal.
///
/// This is assembled once (e.g. from input files) and then passed to
/// [`price`](crate::pricing::price).
#[derive(Debug, Clone, PartialEq)]
pub struct ProposalInput {
    /// Billable periods, base periods first
    pub periods: Vec<Period>,
    /// The manpower roster
    pub manpower: Vec<ManpowerRole>,
    /// The material roster
    pub materials: Vec<MaterialItem>,
    /// How to express the client price
    pub pricing_unit: PricingUnit,
    /// Whether to apply tax to the client price
    pub apply_tax: bool,
}
