//! Code for reading `proposal.toml`, which describes the periods and pricing options.
use super::{deserialise_lenient_number, input_err_msg, read_toml};
use crate::period::{Period, build_periods};
use crate::proposal::PricingUnit;
use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::path::Path;

const PROPOSAL_FILE_NAME: &str = "proposal.toml";

/// The hours and participants entered for a single period
#[derive(Debug, Deserialize, PartialEq, Default, Clone, Copy)]
pub struct PeriodDurations {
    /// Total billable hours
    #[serde(default, deserialize_with = "deserialise_lenient_number")]
    pub hours: f64,
    /// Number of participants
    #[serde(default, deserialize_with = "deserialise_lenient_number")]
    pub participants: f64,
}

/// Represents the contents of `proposal.toml`
#[derive(Debug, Deserialize, PartialEq)]
pub struct ProposalFile {
    /// How the client price for each period is expressed
    #[serde(default)]
    pub pricing_unit: PricingUnit,
    /// Whether to apply tax
    #[serde(default)]
    pub apply_tax: bool,
    /// Base periods, in order
    pub base_periods: Vec<PeriodDurations>,
    /// Option periods, in order
    #[serde(default)]
    pub option_periods: Vec<PeriodDurations>,
}

impl ProposalFile {
    /// Read `proposal.toml` from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `proposal_dir` - Folder containing proposal input files
    ///
    /// # Returns
    ///
    /// The file contents as a [`ProposalFile`] or an error if the file is invalid
    pub fn from_path<P: AsRef<Path>>(proposal_dir: P) -> Result<ProposalFile> {
        let file_path = proposal_dir.as_ref().join(PROPOSAL_FILE_NAME);
        let proposal_file: ProposalFile = read_toml(&file_path)?;

        proposal_file
            .validate()
            .with_context(|| input_err_msg(&file_path))?;

        Ok(proposal_file)
    }

    /// Validate the contents after reading in the file
    fn validate(&self) -> Result<()> {
        ensure!(
            !self.base_periods.is_empty(),
            "At least one base period must be provided"
        );

        Ok(())
    }

    /// The periods of the proposal, base periods first
    pub fn periods(&self) -> Vec<Period> {
        let durations = |periods: &[PeriodDurations]| {
            periods
                .iter()
                .map(|period| (period.hours, period.participants))
                .collect::<Vec<_>>()
        };

        build_periods(
            durations(&self.base_periods),
            durations(&self.option_periods),
        )
    }
}
