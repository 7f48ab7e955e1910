//! The module responsible for writing pricing results to disk.
use crate::manpower::Role;
use crate::period::PeriodID;
use crate::pricing::{
    Breakdown, ClientPrice, MaterialCostLine, PeriodPrice, ProposalResult, RoleCostLine,
};
use crate::proposal::PricingUnit;
use crate::units::{Dimensionless, Hours, Money, MoneyPerHour, Participants};
use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};

pub mod metadata;

/// The root folder in which proposal-specific output folders will be created
const OUTPUT_DIRECTORY_ROOT: &str = "bidbase_results";

/// The output file name for the grand totals
const SUMMARY_FILE_NAME: &str = "summary.toml";

/// The output file name for per-period prices
const PERIOD_PRICES_FILE_NAME: &str = "period_prices.csv";

/// The output file name for manpower cost lines
const MANPOWER_COSTS_FILE_NAME: &str = "manpower_costs.csv";

/// The output file name for material cost lines
const MATERIAL_COSTS_FILE_NAME: &str = "material_costs.csv";

/// Get the default output folder for the proposal in the specified directory
pub fn get_output_dir(proposal_dir: &Path) -> Result<PathBuf> {
    let proposal_dir = proposal_dir
        .canonicalize() // canonicalise in case the user has specified "."
        .context("Could not resolve path to proposal")?;

    let proposal_name = proposal_dir
        .file_name()
        .context("Proposal cannot be in root folder")?
        .to_str()
        .context("Invalid chars in proposal dir name")?;

    Ok([OUTPUT_DIRECTORY_ROOT, proposal_name].iter().collect())
}

/// Create a new output directory, deleting the old one if overwriting is allowed.
///
/// # Returns
///
/// `true` if an existing folder was replaced, `false` otherwise
pub fn create_output_directory(output_dir: &Path, allow_overwrite: bool) -> Result<bool> {
    let overwrite = if let Ok(mut it) = fs::read_dir(output_dir) {
        if it.next().is_none() {
            // Folder exists and is empty, so there's nothing to do
            return Ok(false);
        }

        ensure!(
            allow_overwrite,
            "Output folder already exists and is not empty. \
            Please delete the folder or pass the --overwrite command-line option."
        );

        fs::remove_dir_all(output_dir)?;
        true
    } else {
        false
    };

    fs::create_dir_all(output_dir)?;

    Ok(overwrite)
}

/// Represents the contents of the summary TOML file
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct SummaryFile {
    pricing_unit: PricingUnit,
    period_count: usize,
    total_hours: Hours,
    manpower_hourly_base: MoneyPerHour,
    material_per_period: Money,
    manpower_cost: Money,
    material_cost: Money,
    project_cost: Money,
    revenue: Money,
    tax_rate: Dimensionless,
    tax: Money,
    total: Money,
    load_factor: Dimensionless,
    breakdown: BreakdownTable,
}

/// The `[breakdown]` table of the summary file
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct BreakdownTable {
    enterprise: Money,
    innovation: Money,
    profit: Money,
}

impl From<&Breakdown> for BreakdownTable {
    fn from(breakdown: &Breakdown) -> Self {
        Self {
            enterprise: breakdown.enterprise,
            innovation: breakdown.innovation,
            profit: breakdown.profit,
        }
    }
}

impl SummaryFile {
    fn new(result: &ProposalResult) -> Self {
        Self {
            pricing_unit: result.pricing_unit,
            period_count: result.period_count,
            total_hours: result.total_hours,
            manpower_hourly_base: result.manpower_hourly_base,
            material_per_period: result.material_per_period,
            manpower_cost: result.manpower_cost,
            material_cost: result.material_cost,
            project_cost: result.project_cost,
            revenue: result.revenue,
            tax_rate: result.tax_rate,
            tax: result.tax,
            total: result.total,
            load_factor: result.load_factor,
            breakdown: (&result.breakdown).into(),
        }
    }
}

/// Represents a row in the period prices CSV file.
///
/// Hourly prices have one row per role; every other kind of price has one row per period.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct PeriodPriceRow {
    period_id: PeriodID,
    label: String,
    hours: Hours,
    participants: Participants,
    internal_cost: Money,
    revenue: Money,
    revenue_with_tax: Money,
    price_kind: String,
    role: Option<Role>,
    price: Option<f64>,
}

impl PeriodPriceRow {
    /// Create the rows for a single priced period
    fn from_period(period: &PeriodPrice) -> Vec<Self> {
        let row = |price_kind: &str, role: Option<Role>, price: Option<f64>| Self {
            period_id: period.id.clone(),
            label: period.label.clone(),
            hours: period.hours,
            participants: period.participants,
            internal_cost: period.internal_cost,
            revenue: period.revenue,
            revenue_with_tax: period.revenue_with_tax,
            price_kind: price_kind.to_string(),
            role,
            price,
        };

        match &period.price {
            ClientPrice::Hourly(rates) => rates
                .iter()
                .map(|rate| row("hourly", Some(rate.role.clone()), Some(rate.rate.value())))
                .collect(),
            ClientPrice::PerParticipant(rate) => vec![row("per_pax", None, Some(rate.value()))],
            ClientPrice::LumpSum(amount) => vec![row("lump_sum", None, Some(amount.value()))],
            ClientPrice::Unpriced(_) => vec![row("unpriced", None, None)],
        }
    }
}

/// Represents a row in the manpower costs CSV file
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct ManpowerCostRow {
    role: Role,
    quantity: Dimensionless,
    hourly_rate: MoneyPerHour,
    internal_rate: MoneyPerHour,
    total_cost: Money,
}

impl From<&RoleCostLine> for ManpowerCostRow {
    fn from(line: &RoleCostLine) -> Self {
        Self {
            role: line.role.clone(),
            quantity: line.quantity,
            hourly_rate: line.hourly_rate,
            internal_rate: line.internal_rate,
            total_cost: line.total_cost,
        }
    }
}

/// Represents a row in the material costs CSV file
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct MaterialCostRow {
    name: String,
    quantity: Dimensionless,
    unit_cost: Money,
    per_period: Money,
    total_cost: Money,
}

impl From<&MaterialCostLine> for MaterialCostRow {
    fn from(line: &MaterialCostLine) -> Self {
        Self {
            name: line.name.clone(),
            quantity: line.quantity,
            unit_cost: line.unit_cost,
            per_period: line.per_period,
            total_cost: line.total_cost,
        }
    }
}

/// An object for writing pricing results to file
pub struct DataWriter {
    output_path: PathBuf,
    period_prices_writer: csv::Writer<File>,
    manpower_costs_writer: csv::Writer<File>,
    material_costs_writer: csv::Writer<File>,
}

impl DataWriter {
    /// Open CSV files to write output data to
    ///
    /// # Arguments
    ///
    /// * `output_path` - Folder where files will be saved
    pub fn create(output_path: &Path) -> Result<Self> {
        let new_writer = |file_name| {
            let file_path = output_path.join(file_name);
            csv::Writer::from_path(&file_path)
                .with_context(|| format!("Could not create {}", file_path.display()))
        };

        Ok(Self {
            output_path: output_path.to_path_buf(),
            period_prices_writer: new_writer(PERIOD_PRICES_FILE_NAME)?,
            manpower_costs_writer: new_writer(MANPOWER_COSTS_FILE_NAME)?,
            material_costs_writer: new_writer(MATERIAL_COSTS_FILE_NAME)?,
        })
    }

    /// Write the grand totals to a TOML file
    pub fn write_summary(&self, result: &ProposalResult) -> Result<()> {
        let file_path = self.output_path.join(SUMMARY_FILE_NAME);
        fs::write(&file_path, toml::to_string(&SummaryFile::new(result))?)
            .with_context(|| format!("Could not write {}", file_path.display()))?;

        Ok(())
    }

    /// Write the price of each period to a CSV file
    pub fn write_period_prices(&mut self, periods: &[PeriodPrice]) -> Result<()> {
        for row in periods.iter().flat_map(PeriodPriceRow::from_period) {
            self.period_prices_writer.serialize(row)?;
        }

        Ok(())
    }

    /// Write manpower cost lines to a CSV file
    pub fn write_manpower_costs(&mut self, lines: &[RoleCostLine]) -> Result<()> {
        for line in lines {
            self.manpower_costs_writer
                .serialize(ManpowerCostRow::from(line))?;
        }

        Ok(())
    }

    /// Write material cost lines to a CSV file
    pub fn write_material_costs(&mut self, lines: &[MaterialCostLine]) -> Result<()> {
        for line in lines {
            self.material_costs_writer
                .serialize(MaterialCostRow::from(line))?;
        }

        Ok(())
    }

    /// Write every part of the result
    pub fn write_result(&mut self, result: &ProposalResult) -> Result<()> {
        self.write_summary(result)?;
        self.write_period_prices(&result.periods)?;
        self.write_manpower_costs(&result.manpower_lines)?;
        self.write_material_costs(&result.material_lines)?;

        Ok(())
    }

    /// Flush the underlying streams
    pub fn flush(&mut self) -> Result<()> {
        self.period_prices_writer.flush()?;
        self.manpower_costs_writer.flush()?;
        self.material_costs_writer.flush()?;

        Ok(())
    }
}
