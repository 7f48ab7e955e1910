//! Code related to the example proposals and the CLI commands for interacting with them.
use super::{PriceOpts, handle_price_command};
use crate::settings::Settings;
use anyhow::{Context, Result, bail, ensure};
use clap::Subcommand;
use include_dir::{Dir, DirEntry, include_dir};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The directory containing the example proposals.
static EXAMPLES_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/demos");

/// The available subcommands for managing example proposals.
#[derive(Subcommand)]
pub enum ExampleSubcommands {
    /// List available examples.
    List,
    /// Provide information about the specified example.
    Info {
        /// The name of the example.
        name: String,
    },
    /// Extract an example proposal to a new directory.
    Extract {
        /// The name of the example to extract.
        name: String,
        /// The destination folder for the example.
        new_path: Option<PathBuf>,
    },
    /// Price an example.
    Run {
        /// The name of the example to run.
        name: String,
        /// Other pricing options
        #[command(flatten)]
        opts: PriceOpts,
    },
}

impl ExampleSubcommands {
    /// Execute the supplied example subcommand
    pub fn execute(self) -> Result<()> {
        match self {
            Self::List => handle_example_list_command(),
            Self::Info { name } => handle_example_info_command(&name)?,
            Self::Extract {
                name,
                new_path: dest,
            } => handle_example_extract_command(&name, dest.as_deref())?,
            Self::Run { name, opts } => handle_example_run_command(&name, &opts, None)?,
        }

        Ok(())
    }
}

/// Names of all the bundled examples
fn example_names() -> impl Iterator<Item = &'static str> {
    EXAMPLES_DIR
        .dirs()
        .filter_map(|entry| entry.path().file_name()?.to_str())
}

/// Handle the `example list` command.
fn handle_example_list_command() {
    for name in example_names() {
        println!("{name}");
    }
}

/// Get the contents of the README for the specified example
fn get_example_readme(name: &str) -> Result<&'static str> {
    let path: PathBuf = [name, "README.txt"].iter().collect();
    EXAMPLES_DIR
        .get_file(path)
        .context("Example not found.")?
        .contents_utf8()
        .context("README.txt is not UTF-8 encoded")
}

/// Handle the `example info` command.
fn handle_example_info_command(name: &str) -> Result<()> {
    println!("{}", get_example_readme(name)?);

    Ok(())
}

/// Handle the `example extract` command
fn handle_example_extract_command(name: &str, dest: Option<&Path>) -> Result<()> {
    let dest = dest.unwrap_or(Path::new(name));
    extract_example(name, dest)
}

/// Extract the specified example to a new directory
fn extract_example(name: &str, new_path: &Path) -> Result<()> {
    let sub_dir = EXAMPLES_DIR.get_dir(name).context("Example not found.")?;

    ensure!(
        !new_path.exists(),
        "Destination directory {} already exists",
        new_path.display()
    );

    // Copy the contents of the subdirectory to the destination
    fs::create_dir(new_path)?;
    for entry in sub_dir.entries() {
        match entry {
            DirEntry::Dir(_) => bail!("Subdirectories in examples not supported"),
            DirEntry::File(f) => {
                let file_name = f
                    .path()
                    .file_name()
                    .context("Example file has no name")?;
                let file_path = new_path.join(file_name);
                fs::write(&file_path, f.contents())?;
            }
        }
    }

    Ok(())
}

/// Handle the `example run` command.
pub fn handle_example_run_command(
    name: &str,
    opts: &PriceOpts,
    settings: Option<Settings>,
) -> Result<()> {
    let temp_dir = TempDir::new().context("Failed to create temporary directory.")?;
    let proposal_path = temp_dir.path().join(name);
    extract_example(name, &proposal_path)?;
    handle_price_command(&proposal_path, opts, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::load_proposal;
    use crate::pricing::price;
    use tempfile::tempdir;

    #[test]
    fn test_all_examples_have_readme() {
        for name in example_names() {
            let readme = get_example_readme(name).unwrap();
            assert!(!readme.trim().is_empty());
        }
    }

    #[test]
    fn test_all_examples_can_be_priced() {
        let dir = tempdir().unwrap();
        let mut count = 0;
        for name in example_names() {
            let proposal_path = dir.path().join(name);
            extract_example(name, &proposal_path).unwrap();
            let input = load_proposal(&proposal_path).unwrap();
            assert!(price(&input).is_ok(), "Example {name} could not be priced");
            count += 1;
        }
        assert!(count > 0);
    }

    #[test]
    fn test_extract_example_unknown() {
        let dir = tempdir().unwrap();
        assert!(extract_example("no_such_example", &dir.path().join("x")).is_err());
    }

    #[test]
    fn test_extract_example_existing_destination() {
        let dir = tempdir().unwrap();
        let name = example_names().next().unwrap();
        assert!(extract_example(name, dir.path()).is_err());
    }
}
