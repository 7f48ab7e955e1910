//! Common routines for handling input data.
//!
//! A proposal is stored as a directory containing `proposal.toml` (the period structure and
//! pricing options), `manpower.csv` and, optionally, `materials.csv`.
use crate::proposal::ProposalInput;
use anyhow::{Context, Result};
use serde::de::{DeserializeOwned, Deserializer, Error, Visitor};
use std::fmt;
use std::fs;
use std::path::Path;

pub mod manpower;
use manpower::read_manpower;
pub mod material;
use material::read_materials;
pub mod proposal;
use proposal::ProposalFile;

/// Read a series of type `T`s from a CSV file.
///
/// Leading and trailing whitespace is trimmed from every field. The file may contain no rows.
///
/// # Arguments
///
/// * `file_path` - Path to the CSV file
pub fn read_csv<T: DeserializeOwned>(file_path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(file_path)
        .with_context(|| input_err_msg(file_path))?;

    let mut vec = Vec::new();
    for result in reader.deserialize() {
        let record: T = result.with_context(|| input_err_msg(file_path))?;
        vec.push(record);
    }

    Ok(vec)
}

/// Parse a TOML file at the specified path.
///
/// # Arguments
///
/// * `file_path` - Path to the TOML file
///
/// # Returns
///
/// * The deserialised TOML data or an error if the file could not be read or parsed.
pub fn read_toml<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    let toml_str = fs::read_to_string(file_path).with_context(|| input_err_msg(file_path))?;
    let toml_data = toml::from_str(&toml_str).with_context(|| input_err_msg(file_path))?;
    Ok(toml_data)
}

/// Format an error message to include the file path
pub fn input_err_msg<P: AsRef<Path>>(file_path: P) -> String {
    format!("Error reading {}", file_path.as_ref().display())
}

/// Parse a number from user-entered text, falling back to zero if it isn't a finite number
fn parse_number_or_zero(s: &str) -> f64 {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Accepts any scalar, converting anything which isn't a finite number to zero
struct LenientNumberVisitor;

impl<'de> Visitor<'de> for LenientNumberVisitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a number")
    }

    fn visit_f64<E: Error>(self, value: f64) -> Result<f64, E> {
        Ok(if value.is_finite() { value } else { 0.0 })
    }

    fn visit_i64<E: Error>(self, value: i64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_u64<E: Error>(self, value: u64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_bool<E: Error>(self, _value: bool) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_str<E: Error>(self, value: &str) -> Result<f64, E> {
        Ok(parse_number_or_zero(value))
    }

    fn visit_unit<E: Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_none<E: Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserialiser: D) -> Result<f64, D::Error> {
        deserialiser.deserialize_any(self)
    }
}

/// Read a number entered by the user.
///
/// Missing, blank, non-numeric and non-finite values are read as zero rather than raising an
/// error. Rows containing such values are then excluded when pricing.
pub fn deserialise_lenient_number<'de, D>(deserialiser: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserialiser.deserialize_any(LenientNumberVisitor)
}

/// Load a proposal from the specified directory.
///
/// # Arguments
///
/// * `proposal_dir` - Folder containing the proposal input files
///
/// # Returns
///
/// The proposal, ready to be priced, or an error if the files could not be read.
pub fn load_proposal(proposal_dir: &Path) -> Result<ProposalInput> {
    let proposal_file = ProposalFile::from_path(proposal_dir)?;
    let manpower = read_manpower(proposal_dir)?;
    let materials = read_materials(proposal_dir)?;

    Ok(ProposalInput {
        periods: proposal_file.periods(),
        manpower,
        materials,
        pricing_unit: proposal_file.pricing_unit,
        apply_tax: proposal_file.apply_tax,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manpower::{ManpowerRole, Role};
    use crate::material::MaterialItem;
    use crate::period::PeriodKind;
    use crate::proposal::PricingUnit;
    use rstest::rstest;
    use serde::Deserialize;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Record {
        name: String,
        #[serde(default, deserialize_with = "deserialise_lenient_number")]
        value: f64,
    }

    /// Create an example CSV file in dir_path
    fn create_csv_file(dir_path: &Path, contents: &str) -> PathBuf {
        let file_path = dir_path.join("test.csv");
        fs::write(&file_path, contents).unwrap();
        file_path
    }

    #[test]
    fn test_read_csv() {
        let dir = tempdir().unwrap();
        let file_path = create_csv_file(dir.path(), "name,value\nhello, 1\nworld,\nfoo,bar\n");
        let records: Vec<Record> = read_csv(&file_path).unwrap();
        assert_eq!(
            records,
            &[
                Record {
                    name: "hello".to_string(),
                    value: 1.0,
                },
                Record {
                    name: "world".to_string(),
                    value: 0.0,
                },
                Record {
                    name: "foo".to_string(),
                    value: 0.0,
                },
            ]
        );
    }

    #[test]
    fn test_read_csv_missing_column() {
        let dir = tempdir().unwrap();
        let file_path = create_csv_file(dir.path(), "name\nhello\n");
        let records: Vec<Record> = read_csv(&file_path).unwrap();
        assert_eq!(records[0].value, 0.0);
    }

    #[test]
    fn test_read_csv_no_rows() {
        let dir = tempdir().unwrap();
        let file_path = create_csv_file(dir.path(), "name,value\n");
        let records: Vec<Record> = read_csv(&file_path).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_toml() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Value {
            value: u32,
        }

        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.toml");
        fs::write(&file_path, "value = 1\n").unwrap();
        assert_eq!(read_toml::<Value>(&file_path).unwrap(), Value { value: 1 });

        // Missing file
        let missing = dir.path().join("missing.toml");
        assert_eq!(
            read_toml::<Value>(&missing)
                .unwrap_err()
                .chain()
                .next()
                .unwrap()
                .to_string(),
            input_err_msg(&missing)
        );
    }

    #[rstest]
    #[case("12.5", 12.5)]
    #[case(" 3 ", 3.0)]
    #[case("-4", -4.0)]
    #[case("", 0.0)]
    #[case("abc", 0.0)]
    #[case("inf", 0.0)]
    #[case("NaN", 0.0)]
    fn test_parse_number_or_zero(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(parse_number_or_zero(input), expected);
    }

    #[test]
    fn test_load_proposal() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("proposal.toml"),
            "pricing_unit = \"pax\"\napply_tax = true\n\
            [[base_periods]]\nhours = 10\nparticipants = 20\n\
            [[option_periods]]\nhours = 4.5\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("manpower.csv"),
            "role,quantity,hourly_rate\nMain Instructor,1,50\nOthers,2,\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("materials.csv"),
            "name,quantity,unit_cost\n,3,10\n",
        )
        .unwrap();

        let proposal = load_proposal(dir.path()).unwrap();
        assert_eq!(proposal.pricing_unit, PricingUnit::Pax);
        assert!(proposal.apply_tax);
        assert_eq!(proposal.periods.len(), 2);
        assert_eq!(proposal.periods[1].kind, PeriodKind::Option);
        assert_eq!(
            proposal.manpower,
            [
                ManpowerRole::new(Role::MainInstructor, 1.0, 50.0),
                ManpowerRole::new(Role::Other, 2.0, 0.0)
            ]
        );
        assert_eq!(proposal.materials, [MaterialItem::new("Item", 3.0, 10.0)]);
    }

    #[test]
    fn test_load_proposal_missing_manpower() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("proposal.toml"),
            "[[base_periods]]\nhours = 1\n",
        )
        .unwrap();
        assert!(load_proposal(dir.path()).is_err());
    }
}
