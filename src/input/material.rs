//! Code for reading the material roster CSV file.
use super::{deserialise_lenient_number, read_csv};
use crate::material::MaterialItem;
use anyhow::Result;
use log::debug;
use serde::Deserialize;
use std::path::Path;

const MATERIALS_FILE_NAME: &str = "materials.csv";

/// A row of the materials CSV file
#[derive(PartialEq, Debug, Deserialize)]
struct MaterialItemRaw {
    /// Description of the item
    #[serde(default)]
    name: String,
    /// Number of units required per period
    #[serde(default, deserialize_with = "deserialise_lenient_number")]
    quantity: f64,
    /// Internal cost of one unit
    #[serde(default, deserialize_with = "deserialise_lenient_number")]
    unit_cost: f64,
}

/// Read the material roster from the proposal directory.
///
/// Materials are optional, so if the file is not present an empty roster is returned.
///
/// # Arguments
///
/// * `proposal_dir` - Folder containing proposal input files
pub fn read_materials(proposal_dir: &Path) -> Result<Vec<MaterialItem>> {
    let file_path = proposal_dir.join(MATERIALS_FILE_NAME);
    if !file_path.is_file() {
        debug!("No {MATERIALS_FILE_NAME} found; assuming no materials");
        return Ok(Vec::new());
    }

    let rows: Vec<MaterialItemRaw> = read_csv(&file_path)?;
    debug!("Read {} material row(s)", rows.len());

    Ok(rows
        .into_iter()
        .map(|row| MaterialItem::new(&row.name, row.quantity, row.unit_cost))
        .collect())
}
