//! The pricing engine.
//!
//! Maps a [`ProposalInput`] to a [`ProposalResult`]: the internal cost of the proposal, the
//! client-facing revenue derived from it and the price of each period expressed in the selected
//! [`PricingUnit`].
//!
//! Internal cost is fixed at [`COST_SHARE_OF_REVENUE`] of revenue. Each period is grossed up
//! independently, with the full material cost charged in every period, so the grand totals are
//! the sums of the per-period figures.
use crate::manpower::{ManpowerRole, Role, iter_valid_roles};
use crate::material::{MaterialItem, iter_valid_items};
use crate::period::{Period, PeriodID, total_hours};
use crate::proposal::{PricingUnit, ProposalInput};
use crate::units::{
    Dimensionless, Hours, Money, MoneyPerHour, MoneyPerParticipant, Participants,
};
use itertools::Itertools;
use log::debug;
use std::fmt;
use thiserror::Error;

/// The proportion of revenue which internal cost must make up
pub const COST_SHARE_OF_REVENUE: Dimensionless = Dimensionless(0.30);

/// The proportion of revenue allocated to the enterprise
pub const ENTERPRISE_SHARE: Dimensionless = Dimensionless(0.30);

/// The proportion of revenue allocated to innovation
pub const INNOVATION_SHARE: Dimensionless = Dimensionless(0.30);

/// The proportion of revenue kept as profit
pub const PROFIT_SHARE: Dimensionless = Dimensionless(0.10);

/// The flat tax rate applied to the client price, if requested
pub const TAX_RATE: Dimensionless = Dimensionless(0.09);

/// Reasons why a proposal could not be priced.
///
/// Both are caused by incomplete user input and can be fixed by editing the proposal.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PricingError {
    /// No period has any hours
    #[error("Please enter Total Hours for at least one period to calculate costs.")]
    NoHoursEntered,
    /// No manpower row has both a positive quantity and a positive hourly rate
    #[error("Please enter at least one instructor with a valid Quantity and Hourly Rate.")]
    NoValidManpower,
}

/// Internal cost of one manpower role across the whole proposal
#[derive(Debug, Clone, PartialEq)]
pub struct RoleCostLine {
    /// The role
    pub role: Role,
    /// Number of staff in the role
    pub quantity: Dimensionless,
    /// Internal hourly rate per member of staff
    pub hourly_rate: MoneyPerHour,
    /// Internal hourly rate for all staff in the role
    pub internal_rate: MoneyPerHour,
    /// Internal cost over all hours of the proposal
    pub total_cost: Money,
}

/// Internal cost of one material item across the whole proposal
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialCostLine {
    /// The item name
    pub name: String,
    /// Number of units per period
    pub quantity: Dimensionless,
    /// Internal cost per unit
    pub unit_cost: Money,
    /// Internal cost for a single period
    pub per_period: Money,
    /// Internal cost over all periods of the proposal
    pub total_cost: Money,
}

/// How revenue is divided between the enterprise, innovation and profit.
///
/// The remainder of revenue is the internal project cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakdown {
    /// Enterprise share
    pub enterprise: Money,
    /// Innovation share
    pub innovation: Money,
    /// Profit share
    pub profit: Money,
}

impl Breakdown {
    /// Split the given (pre-tax) revenue into its fixed shares
    fn from_revenue(revenue: Money) -> Self {
        Self {
            enterprise: revenue * ENTERPRISE_SHARE,
            innovation: revenue * INNOVATION_SHARE,
            profit: revenue * PROFIT_SHARE,
        }
    }

    /// The sum of all the shares
    pub fn total(&self) -> Money {
        self.enterprise + self.innovation + self.profit
    }
}

/// The client-facing hourly rate for one role
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRate {
    /// The role
    pub role: Role,
    /// Number of staff in the role
    pub quantity: Dimensionless,
    /// Hourly rate per member of staff, including materials, overheads, profit and tax
    pub rate: MoneyPerHour,
}

/// Why a period has no client price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnpricedReason {
    /// Hourly pricing was requested, but the period has no hours
    MissingHours,
    /// Per-participant pricing was requested, but the period has no participants
    MissingParticipants,
}

impl fmt::Display for UnpricedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHours => write!(f, "Enter hours to calculate rate"),
            Self::MissingParticipants => write!(f, "Enter pax to calculate rate"),
        }
    }
}

/// The client price for a period, expressed in the selected [`PricingUnit`]
#[derive(Debug, Clone, PartialEq)]
pub enum ClientPrice {
    /// One loaded hourly rate per valid role
    Hourly(Vec<LoadedRate>),
    /// A price per participant
    PerParticipant(MoneyPerParticipant),
    /// A single package price
    LumpSum(Money),
    /// The period can't be priced in the selected unit
    Unpriced(UnpricedReason),
}

/// The priced result for one period
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodPrice {
    /// The period's ID
    pub id: PeriodID,
    /// A human-readable label for the period
    pub label: String,
    /// Hours in the period
    pub hours: Hours,
    /// Participants in the period
    pub participants: Participants,
    /// Internal manpower cost for the period
    pub manpower_cost: Money,
    /// Internal material cost for the period
    pub material_cost: Money,
    /// Total internal cost for the period
    pub internal_cost: Money,
    /// Revenue attributed to the period, before tax
    pub revenue: Money,
    /// Revenue attributed to the period, including tax if applied
    pub revenue_with_tax: Money,
    /// The client price
    pub price: ClientPrice,
}

/// The output of the pricing engine
#[derive(Debug, Clone, PartialEq)]
pub struct ProposalResult {
    /// The unit used for per-period client prices
    pub pricing_unit: PricingUnit,
    /// Number of periods in the proposal
    pub period_count: usize,
    /// Hours summed over all periods
    pub total_hours: Hours,
    /// Internal manpower cost per hour, summed over all valid roles
    pub manpower_hourly_base: MoneyPerHour,
    /// Internal material cost per period
    pub material_per_period: Money,
    /// Internal manpower cost over the whole proposal
    pub manpower_cost: Money,
    /// Internal material cost over the whole proposal
    pub material_cost: Money,
    /// Total internal cost
    pub project_cost: Money,
    /// Client-facing revenue before tax
    pub revenue: Money,
    /// The tax rate which was applied (zero if tax was not requested)
    pub tax_rate: Dimensionless,
    /// The tax amount
    pub tax: Money,
    /// Client-facing revenue including tax
    pub total: Money,
    /// Allocation of revenue to enterprise, innovation and profit
    pub breakdown: Breakdown,
    /// Multiplier converting internal hourly rates into client hourly rates
    pub load_factor: Dimensionless,
    /// Cost line for each valid manpower role
    pub manpower_lines: Vec<RoleCostLine>,
    /// Cost line for each valid material item
    pub material_lines: Vec<MaterialCostLine>,
    /// Priced result for each period, in input order
    pub periods: Vec<PeriodPrice>,
}

/// Convert an internal cost into the revenue required to cover it
pub fn gross_up(cost: Money) -> Money {
    if cost == Money(0.0) {
        return Money(0.0);
    }

    cost / COST_SHARE_OF_REVENUE
}

/// Add tax at the given rate to an amount
fn add_tax<T>(amount: T, tax_rate: Dimensionless) -> T
where
    T: Copy + std::ops::Add<Output = T> + std::ops::Mul<Dimensionless, Output = T>,
{
    amount + amount * tax_rate
}

/// Check that the input can be priced
fn validate(input: &ProposalInput, valid_roles: &[&ManpowerRole]) -> Result<(), PricingError> {
    if !input.periods.iter().any(Period::has_hours) {
        return Err(PricingError::NoHoursEntered);
    }

    if valid_roles.is_empty() {
        return Err(PricingError::NoValidManpower);
    }

    Ok(())
}

/// Calculate the client hourly rate for each role
fn loaded_rates(
    roles: &[&ManpowerRole],
    load_factor: Dimensionless,
    tax_rate: Dimensionless,
) -> Vec<LoadedRate> {
    roles
        .iter()
        .map(|role| LoadedRate {
            role: role.role.clone(),
            quantity: role.quantity,
            rate: add_tax(role.hourly_rate * load_factor, tax_rate),
        })
        .collect()
}

/// Express the revenue for a period in the selected unit
fn client_price(
    period: &Period,
    revenue_with_tax: Money,
    pricing_unit: PricingUnit,
    rates: &[LoadedRate],
) -> ClientPrice {
    match pricing_unit {
        PricingUnit::Hour if period.has_hours() => ClientPrice::Hourly(rates.to_vec()),
        PricingUnit::Hour => ClientPrice::Unpriced(UnpricedReason::MissingHours),
        PricingUnit::Pax if period.has_participants() => {
            ClientPrice::PerParticipant(revenue_with_tax / period.participants)
        }
        PricingUnit::Pax => ClientPrice::Unpriced(UnpricedReason::MissingParticipants),
        PricingUnit::LumpSum => ClientPrice::LumpSum(revenue_with_tax),
    }
}

/// Price a proposal.
///
/// # Arguments
///
/// * `input` - The proposal to price
///
/// # Returns
///
/// The costing and per-period client prices, or an error if no period has hours or there are no
/// valid manpower rows.
pub fn price(input: &ProposalInput) -> Result<ProposalResult, PricingError> {
    let valid_roles = iter_valid_roles(&input.manpower).collect_vec();
    validate(input, &valid_roles)?;
    let valid_items: Vec<&MaterialItem> = iter_valid_items(&input.materials).collect();

    let tax_rate = if input.apply_tax {
        TAX_RATE
    } else {
        Dimensionless(0.0)
    };

    let manpower_hourly_base: MoneyPerHour =
        valid_roles.iter().map(|role| role.internal_rate()).sum();
    let material_per_period: Money = valid_items.iter().map(|item| item.line_total()).sum();
    let total_hours = total_hours(&input.periods);
    let period_count = input.periods.len();
    debug!(
        "Pricing {period_count} period(s), {total_hours} hours in total, internal rate \
        {manpower_hourly_base}/hr, materials {material_per_period}/period"
    );

    // Per-period internal cost and revenue
    let periods = input
        .periods
        .iter()
        .map(|period| {
            let manpower_cost = manpower_hourly_base * period.hours;
            let internal_cost = manpower_cost + material_per_period;
            let revenue = gross_up(internal_cost);
            (period, manpower_cost, internal_cost, revenue)
        })
        .collect_vec();

    // Grand totals
    let manpower_cost: Money = periods.iter().map(|(_, cost, _, _)| *cost).sum();
    let material_cost = material_per_period * Dimensionless(period_count as f64);
    let project_cost = manpower_cost + material_cost;
    let revenue = gross_up(project_cost);
    let tax = revenue * tax_rate;
    let total = revenue + tax;

    let load_factor = if manpower_cost.is_positive() {
        revenue / manpower_cost
    } else {
        Dimensionless(0.0)
    };
    debug!("Load factor: {load_factor}");

    let rates = loaded_rates(&valid_roles, load_factor, tax_rate);
    let period_prices = periods
        .into_iter()
        .map(|(period, manpower_cost, internal_cost, revenue)| {
            let revenue_with_tax = add_tax(revenue, tax_rate);
            PeriodPrice {
                id: period.id.clone(),
                label: period.label(),
                hours: period.hours,
                participants: period.participants,
                manpower_cost,
                material_cost: material_per_period,
                internal_cost,
                revenue,
                revenue_with_tax,
                price: client_price(period, revenue_with_tax, input.pricing_unit, &rates),
            }
        })
        .collect();

    let manpower_lines = valid_roles
        .iter()
        .map(|role| RoleCostLine {
            role: role.role.clone(),
            quantity: role.quantity,
            hourly_rate: role.hourly_rate,
            internal_rate: role.internal_rate(),
            total_cost: role.internal_rate() * total_hours,
        })
        .collect();
    let material_lines = valid_items
        .iter()
        .map(|item| MaterialCostLine {
            name: item.name.clone(),
            quantity: item.quantity,
            unit_cost: item.unit_cost,
            per_period: item.line_total(),
            total_cost: item.line_total() * Dimensionless(period_count as f64),
        })
        .collect();

    Ok(ProposalResult {
        pricing_unit: input.pricing_unit,
        period_count,
        total_hours,
        manpower_hourly_base,
        material_per_period,
        manpower_cost,
        material_cost,
        project_cost,
        revenue,
        tax_rate,
        tax,
        total,
        breakdown: Breakdown::from_revenue(revenue),
        load_factor,
        manpower_lines,
        material_lines,
        periods: period_prices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{NO_OPTION_PERIODS, proposal, single_period_proposal};
    use crate::period::build_periods;
    use float_cmp::assert_approx_eq;
    use rstest::rstest;

    const EPSILON: f64 = 1e-9;

    /// Get the lump sum price for a period, panicking if it was priced differently
    fn lump_sum(period: &PeriodPrice) -> Money {
        match period.price {
            ClientPrice::LumpSum(amount) => amount,
            ref other => panic!("Expected lump sum price, got {other:?}"),
        }
    }

    #[rstest]
    fn test_price_single_period(single_period_proposal: ProposalInput) {
        let result = price(&single_period_proposal).unwrap();

        assert_eq!(result.manpower_hourly_base, MoneyPerHour(50.0));
        assert_eq!(result.material_cost, Money(0.0));
        assert_approx_eq!(Money, result.project_cost, Money(500.0), epsilon = EPSILON);
        assert_approx_eq!(
            Money,
            result.revenue,
            Money(500.0 / 0.3),
            epsilon = EPSILON
        );
        assert_approx_eq!(
            Money,
            result.breakdown.enterprise,
            Money(500.0),
            epsilon = EPSILON
        );
        assert_approx_eq!(
            Money,
            result.breakdown.innovation,
            Money(500.0),
            epsilon = EPSILON
        );
        assert_approx_eq!(
            Money,
            result.breakdown.profit,
            Money(500.0 / 3.0),
            epsilon = EPSILON
        );
        assert_eq!(result.tax, Money(0.0));
        assert_eq!(result.total, result.revenue);
        assert_eq!((result.total.value() * 100.0).round() / 100.0, 1666.67);
    }

    #[rstest]
    fn test_price_single_period_with_tax(mut single_period_proposal: ProposalInput) {
        single_period_proposal.apply_tax = true;
        let result = price(&single_period_proposal).unwrap();

        assert_eq!(result.tax_rate, TAX_RATE);
        assert_approx_eq!(Money, result.tax, Money(150.0), epsilon = EPSILON);
        assert_approx_eq!(
            Money,
            result.total,
            Money(500.0 / 0.3 * 1.09),
            epsilon = EPSILON
        );
        assert_eq!((result.total.value() * 100.0).round() / 100.0, 1816.67);
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn test_material_charged_every_period(mut proposal: ProposalInput, #[case] apply_tax: bool) {
        proposal.periods = build_periods([(5.0, 0.0), (5.0, 0.0)], NO_OPTION_PERIODS);
        proposal.pricing_unit = PricingUnit::LumpSum;
        proposal.apply_tax = apply_tax;
        let result = price(&proposal).unwrap();

        // 1 role at 50/hr and one material item costing 100 per period
        assert_eq!(result.material_cost, Money(200.0));
        assert_approx_eq!(Money, result.project_cost, Money(700.0), epsilon = EPSILON);

        let period_total: Money = result.periods.iter().map(lump_sum).sum();
        assert_approx_eq!(Money, period_total, result.total, epsilon = EPSILON);
        for period in &result.periods {
            assert_eq!(period.internal_cost, Money(350.0));
            assert_approx_eq!(
                Money,
                period.revenue,
                Money(350.0 / 0.3),
                epsilon = EPSILON
            );
        }
    }

    #[rstest]
    fn test_unequal_periods_sum_to_grand_total(mut proposal: ProposalInput) {
        proposal.periods = build_periods([(12.0, 4.0), (3.0, 0.0)], [(0.0, 0.0)]);
        proposal.apply_tax = true;
        let result = price(&proposal).unwrap();

        // Material is also charged for the option period, which has no hours
        assert_eq!(result.material_cost, Money(300.0));
        assert_eq!(result.periods[2].internal_cost, Money(100.0));

        let internal: Money = result.periods.iter().map(|p| p.internal_cost).sum();
        let revenue: Money = result.periods.iter().map(|p| p.revenue).sum();
        let with_tax: Money = result.periods.iter().map(|p| p.revenue_with_tax).sum();
        assert_approx_eq!(Money, internal, result.project_cost, epsilon = EPSILON);
        assert_approx_eq!(Money, revenue, result.revenue, epsilon = EPSILON);
        assert_approx_eq!(Money, with_tax, result.total, epsilon = EPSILON);
    }

    #[rstest]
    fn test_no_hours_entered(mut proposal: ProposalInput) {
        proposal.periods = build_periods([(0.0, 10.0)], [(0.0, 5.0)]);
        assert_eq!(price(&proposal), Err(PricingError::NoHoursEntered));

        // Takes precedence over missing manpower
        proposal.manpower.clear();
        assert_eq!(price(&proposal), Err(PricingError::NoHoursEntered));
    }

    #[rstest]
    #[case(0.0, 50.0)]
    #[case(1.0, 0.0)]
    #[case(-1.0, 50.0)]
    #[case(2.0, -10.0)]
    fn test_no_valid_manpower(
        mut proposal: ProposalInput,
        #[case] quantity: f64,
        #[case] hourly_rate: f64,
    ) {
        proposal.manpower = vec![ManpowerRole::new(Role::MainInstructor, quantity, hourly_rate)];
        assert_eq!(price(&proposal), Err(PricingError::NoValidManpower));
    }

    #[rstest]
    fn test_no_manpower_rows(mut proposal: ProposalInput) {
        proposal.manpower.clear();
        assert_eq!(price(&proposal), Err(PricingError::NoValidManpower));
    }

    #[rstest]
    fn test_empty_material_roster_is_valid(mut proposal: ProposalInput) {
        proposal.materials.clear();
        let result = price(&proposal).unwrap();
        assert_eq!(result.material_cost, Money(0.0));
        assert!(result.material_lines.is_empty());
    }

    #[rstest]
    fn test_zero_rows_same_as_removed(proposal: ProposalInput) {
        let expected = price(&proposal).unwrap();

        let mut padded = proposal.clone();
        padded
            .manpower
            .push(ManpowerRole::new(Role::AssistantInstructor, 0.0, 80.0));
        padded.materials.push(MaterialItem::new("Spare", 0.0, 20.0));
        assert_eq!(price(&padded).unwrap(), expected);
    }

    #[rstest]
    fn test_higher_rate_costs_more(proposal: ProposalInput) {
        let before = price(&proposal).unwrap();

        let mut dearer = proposal.clone();
        dearer.manpower[0].hourly_rate = MoneyPerHour(51.0);
        let after = price(&dearer).unwrap();

        assert!(after.project_cost > before.project_cost);
        assert!(after.revenue > before.revenue);
        assert!(after.total > before.total);
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn test_breakdown_ratios(mut proposal: ProposalInput, #[case] apply_tax: bool) {
        proposal.apply_tax = apply_tax;
        let result = price(&proposal).unwrap();
        let breakdown = result.breakdown;

        assert_eq!(breakdown.enterprise, breakdown.innovation);
        assert_approx_eq!(
            Money,
            breakdown.profit,
            (breakdown.enterprise + breakdown.innovation) * Dimensionless(1.0 / 6.0),
            epsilon = EPSILON
        );
        assert_approx_eq!(
            Money,
            breakdown.total(),
            result.revenue * Dimensionless(0.7),
            epsilon = EPSILON
        );
        assert_approx_eq!(
            Money,
            breakdown.total() + result.project_cost,
            result.revenue,
            epsilon = EPSILON
        );
    }

    #[rstest]
    fn test_tax_toggle(mut proposal: ProposalInput) {
        proposal.apply_tax = false;
        let without = price(&proposal).unwrap();
        proposal.apply_tax = true;
        let with = price(&proposal).unwrap();

        assert_approx_eq!(
            Money,
            with.total,
            without.total * Dimensionless(1.09),
            epsilon = EPSILON
        );
        assert_eq!(with.revenue, without.revenue);
    }

    #[rstest]
    fn test_hourly_rates(mut single_period_proposal: ProposalInput) {
        single_period_proposal.pricing_unit = PricingUnit::Hour;
        single_period_proposal.periods = build_periods([(10.0, 0.0)], [(0.0, 0.0)]);
        single_period_proposal
            .manpower
            .push(ManpowerRole::new("Coach", 2.0, 25.0));
        let result = price(&single_period_proposal).unwrap();

        // 50/hr + 2 x 25/hr = 100/hr internal; no materials so load factor is 1/0.3
        assert_approx_eq!(
            Dimensionless,
            result.load_factor,
            Dimensionless(1.0 / 0.3),
            epsilon = EPSILON
        );

        let ClientPrice::Hourly(rates) = &result.periods[0].price else {
            panic!("Expected hourly rates");
        };
        assert_eq!(rates.len(), 2);
        assert_eq!(rates[0].role, Role::MainInstructor);
        assert_approx_eq!(
            MoneyPerHour,
            rates[0].rate,
            MoneyPerHour(50.0 / 0.3),
            epsilon = EPSILON
        );
        assert_eq!(rates[1].role, Role::Custom("Coach".into()));
        assert_eq!(rates[1].quantity, Dimensionless(2.0));
        assert_approx_eq!(
            MoneyPerHour,
            rates[1].rate,
            MoneyPerHour(25.0 / 0.3),
            epsilon = EPSILON
        );

        // Loaded rates recover the revenue
        let recovered: MoneyPerHour = rates.iter().map(|r| r.rate * r.quantity).sum();
        assert_approx_eq!(
            Money,
            recovered * result.total_hours,
            result.revenue,
            epsilon = EPSILON
        );

        assert_eq!(
            result.periods[1].price,
            ClientPrice::Unpriced(UnpricedReason::MissingHours)
        );
    }

    #[rstest]
    fn test_hourly_rates_include_materials_and_tax(mut proposal: ProposalInput) {
        proposal.pricing_unit = PricingUnit::Hour;
        proposal.apply_tax = true;
        let result = price(&proposal).unwrap();

        // 10 hrs at 50/hr + 100 materials = 600 internal, 2000 revenue, 500 manpower cost
        assert_approx_eq!(
            Dimensionless,
            result.load_factor,
            Dimensionless(4.0),
            epsilon = EPSILON
        );
        let ClientPrice::Hourly(rates) = &result.periods[0].price else {
            panic!("Expected hourly rates");
        };
        assert_approx_eq!(
            MoneyPerHour,
            rates[0].rate,
            MoneyPerHour(200.0 * 1.09),
            epsilon = EPSILON
        );
    }

    #[rstest]
    fn test_per_participant(mut proposal: ProposalInput) {
        proposal.pricing_unit = PricingUnit::Pax;
        proposal.periods = build_periods([(10.0, 20.0)], [(10.0, 0.0)]);
        let result = price(&proposal).unwrap();

        // (500 + 100) / 0.3 = 2000 per period
        assert_eq!(
            result.periods[0].price,
            ClientPrice::PerParticipant(result.periods[0].revenue_with_tax / Participants(20.0))
        );
        let ClientPrice::PerParticipant(rate) = result.periods[0].price else {
            unreachable!()
        };
        assert_approx_eq!(
            MoneyPerParticipant,
            rate,
            MoneyPerParticipant(100.0),
            epsilon = EPSILON
        );
        assert_eq!(
            result.periods[1].price,
            ClientPrice::Unpriced(UnpricedReason::MissingParticipants)
        );
    }

    #[rstest]
    fn test_line_items(mut proposal: ProposalInput) {
        proposal.periods = build_periods([(10.0, 0.0), (6.0, 0.0)], NO_OPTION_PERIODS);
        let result = price(&proposal).unwrap();

        assert_eq!(result.total_hours, Hours(16.0));
        assert_eq!(result.period_count, 2);
        assert_eq!(result.manpower_lines.len(), 1);
        assert_eq!(result.manpower_lines[0].total_cost, Money(800.0));
        assert_eq!(result.material_lines.len(), 1);
        assert_eq!(result.material_lines[0].per_period, Money(100.0));
        assert_eq!(result.material_lines[0].total_cost, Money(200.0));
    }

    #[rstest]
    fn test_price_is_idempotent(proposal: ProposalInput) {
        assert_eq!(price(&proposal).unwrap(), price(&proposal).unwrap());
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(30.0, 100.0)]
    #[case(300.0, 1000.0)]
    fn test_gross_up(#[case] cost: f64, #[case] expected: f64) {
        assert_approx_eq!(
            Money,
            gross_up(Money(cost)),
            Money(expected),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_pricing_error_messages() {
        assert_eq!(
            PricingError::NoHoursEntered.to_string(),
            "Please enter Total Hours for at least one period to calculate costs."
        );
        assert_eq!(
            PricingError::NoValidManpower.to_string(),
            "Please enter at least one instructor with a valid Quantity and Hourly Rate."
        );
    }
}
