//! Fixtures for tests
use crate::manpower::{ManpowerRole, Role};
use crate::material::MaterialItem;
use crate::period::build_periods;
use crate::proposal::{PricingUnit, ProposalInput};
use rstest::fixture;

/// Assert that an error with the given message occurs
macro_rules! assert_error {
    ($result:expr, $msg:expr) => {
        assert_eq!(
            $result.unwrap_err().chain().next().unwrap().to_string(),
            $msg
        );
    };
}
pub(crate) use assert_error;

/// Used when building proposals with no option periods
pub const NO_OPTION_PERIODS: [(f64, f64); 0] = [];

/// One base period of 10 hours with a single instructor at 50/hr and no materials
#[fixture]
pub fn single_period_proposal() -> ProposalInput {
    ProposalInput {
        periods: build_periods([(10.0, 0.0)], NO_OPTION_PERIODS),
        manpower: vec![ManpowerRole::new(Role::MainInstructor, 1.0, 50.0)],
        materials: Vec::new(),
        pricing_unit: PricingUnit::LumpSum,
        apply_tax: false,
    }
}

/// As [`single_period_proposal`], but with one material item costing 100 per period
#[fixture]
pub fn proposal(single_period_proposal: ProposalInput) -> ProposalInput {
    ProposalInput {
        materials: vec![MaterialItem::new("Workbook", 1.0, 100.0)],
        ..single_period_proposal
    }
}
