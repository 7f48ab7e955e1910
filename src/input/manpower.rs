//! Code for reading the manpower roster CSV file.
use super::{deserialise_lenient_number, read_csv};
use crate::manpower::ManpowerRole;
use anyhow::Result;
use log::debug;
use serde::Deserialize;
use std::path::Path;

const MANPOWER_FILE_NAME: &str = "manpower.csv";

/// A row of the manpower CSV file
#[derive(PartialEq, Debug, Deserialize)]
struct ManpowerRoleRaw {
    /// Name of the role (e.g. "Main Instructor")
    #[serde(default)]
    role: String,
    /// Number of staff in the role
    #[serde(default, deserialize_with = "deserialise_lenient_number")]
    quantity: f64,
    /// Internal hourly rate per member of staff
    #[serde(default, deserialize_with = "deserialise_lenient_number")]
    hourly_rate: f64,
}

/// Read the manpower roster from the proposal directory.
///
/// Every row is returned, including those which will be excluded when pricing.
///
/// # Arguments
///
/// * `proposal_dir` - Folder containing proposal input files
pub fn read_manpower(proposal_dir: &Path) -> Result<Vec<ManpowerRole>> {
    let file_path = proposal_dir.join(MANPOWER_FILE_NAME);
    let rows: Vec<ManpowerRoleRaw> = read_csv(&file_path)?;
    debug!("Read {} manpower row(s)", rows.len());

    Ok(rows
        .into_iter()
        .map(|row| ManpowerRole::new(row.role, row.quantity, row.hourly_rate))
        .collect())
}
