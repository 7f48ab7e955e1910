//! The command line interface for the program.
use crate::input::load_proposal;
use crate::log;
use crate::output::metadata::write_metadata;
use crate::output::{DataWriter, create_output_directory, get_output_dir};
use crate::pricing::price;
use crate::proposal::{PricingUnit, ProposalInput};
use crate::report::render_report;
use crate::settings::Settings;
use ::log::{info, warn};
use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};

pub mod example;
use example::ExampleSubcommands;
pub mod settings;
use settings::SettingsSubcommands;

/// A cost-proposal calculator for training services.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The available commands.
    #[command(subcommand)]
    command: Option<Commands>,
    /// Flag to provide the CLI docs as markdown
    #[arg(long, hide = true)]
    markdown_help: bool,
}

/// Options for the price command
#[derive(Args, Default)]
pub struct PriceOpts {
    /// Directory for output files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
    /// Whether to overwrite the output directory if it already exists
    #[arg(long)]
    pub overwrite: bool,
    /// How to express the client price (overrides the proposal file)
    #[arg(long, value_enum)]
    pub unit: Option<PricingUnit>,
    /// Apply tax to the client price (overrides the proposal file)
    #[arg(long, overrides_with = "no_tax")]
    pub tax: bool,
    /// Don't apply tax to the client price (overrides the proposal file)
    #[arg(long, overrides_with = "tax")]
    pub no_tax: bool,
}

impl PriceOpts {
    /// The tax option given on the command line, if any
    fn apply_tax(&self) -> Option<bool> {
        if self.tax {
            Some(true)
        } else if self.no_tax {
            Some(false)
        } else {
            None
        }
    }

    /// Apply command-line overrides to a loaded proposal
    fn apply_overrides(&self, input: &mut ProposalInput) {
        if let Some(unit) = self.unit {
            input.pricing_unit = unit;
        }
        if let Some(apply_tax) = self.apply_tax() {
            input.apply_tax = apply_tax;
        }
    }
}

/// The available commands.
#[derive(Subcommand)]
enum Commands {
    /// Price a proposal and write the results to disk.
    Price {
        /// Path to the proposal directory.
        proposal_dir: PathBuf,
        /// Other pricing options
        #[command(flatten)]
        opts: PriceOpts,
    },
    /// Manage example proposals.
    Example {
        /// The available subcommands for managing example proposals.
        #[command(subcommand)]
        subcommand: ExampleSubcommands,
    },
    /// Validate a proposal.
    Validate {
        /// The path to the proposal directory.
        proposal_dir: PathBuf,
    },
    /// Manage the program settings file.
    Settings {
        /// The subcommands for managing the settings file.
        #[command(subcommand)]
        subcommand: SettingsSubcommands,
    },
}

impl Commands {
    /// Execute the supplied CLI command
    fn execute(self) -> Result<()> {
        match self {
            Self::Price { proposal_dir, opts } => {
                handle_price_command(&proposal_dir, &opts, None)
            }
            Self::Example { subcommand } => subcommand.execute(),
            Self::Validate { proposal_dir } => handle_validate_command(&proposal_dir, None),
            Self::Settings { subcommand } => subcommand.execute(),
        }
    }
}

/// Parse CLI arguments and start the program
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Invoked as: `$ bidbase --markdown-help`
    if cli.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return Ok(());
    }

    let Some(command) = cli.command else {
        // Output program help
        let help_str = Cli::command().render_long_help().to_string();
        println!("{help_str}");
        return Ok(());
    };

    command.execute()
}

/// Load program settings, if not provided
fn load_settings(settings: Option<Settings>) -> Result<Settings> {
    if let Some(settings) = settings {
        Ok(settings)
    } else {
        Settings::load().context("Failed to load settings.")
    }
}

/// Handle the `price` command.
pub fn handle_price_command(
    proposal_path: &Path,
    opts: &PriceOpts,
    settings: Option<Settings>,
) -> Result<()> {
    let settings = load_settings(settings)?;

    // Get path to output folder
    let pathbuf: PathBuf;
    let output_path = if let Some(p) = opts.output_dir.as_deref() {
        p
    } else {
        pathbuf = get_output_dir(proposal_path)?;
        &pathbuf
    };

    let allow_overwrite = opts.overwrite || settings.overwrite;
    let overwrite =
        create_output_directory(output_path, allow_overwrite).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                output_path.display()
            )
        })?;

    // Initialise program logger
    log::init(&settings.log_level, Some(output_path))
        .context("Failed to initialise logging.")?;

    // NB: We have to wait until the logger is initialised to display this warning
    if overwrite {
        warn!("Output folder will be overwritten");
    }

    let mut input = load_proposal(proposal_path).context("Failed to load proposal.")?;
    opts.apply_overrides(&mut input);
    info!("Loaded proposal from {}", proposal_path.display());
    info!("Output folder: {}", output_path.display());

    let result = price(&input).context("Failed to price proposal.")?;
    print!("{}", render_report(&result));

    let mut writer = DataWriter::create(output_path)?;
    writer.write_result(&result)?;
    writer.flush()?;
    write_metadata(output_path, proposal_path).context("Failed to save metadata.")?;
    info!("Results written to {}", output_path.display());

    Ok(())
}

/// Handle the `validate` command.
pub fn handle_validate_command(proposal_path: &Path, settings: Option<Settings>) -> Result<()> {
    let settings = load_settings(settings)?;

    // Initialise program logger (we won't save log files when running the validate command)
    log::init(&settings.log_level, None).context("Failed to initialise logging.")?;

    // A proposal is only valid if it can also be priced
    let input = load_proposal(proposal_path).context("Failed to validate proposal.")?;
    price(&input).context("Failed to validate proposal.")?;
    info!("Proposal validation successful!");

    Ok(())
}
