//! Common functionality for BidBase, a cost-proposal calculator for training services.
//!
//! The heart of the crate is [`pricing::price`], which turns a [`proposal::ProposalInput`] into
//! a [`pricing::ProposalResult`]. The remaining modules load proposals from disk and present the
//! results.
#![warn(missing_docs)]
use std::path::PathBuf;

pub mod cli;
pub mod id;
pub mod input;
pub mod log;
pub mod manpower;
pub mod material;
pub mod output;
pub mod period;
pub mod pricing;
pub mod proposal;
pub mod report;
pub mod settings;
pub mod units;

#[cfg(test)]
mod fixture;

/// Get the config folder for the program.
///
/// This is a platform-specific folder (e.g. `~/.config/bidbase` on Linux).
pub fn get_bidbase_config_dir() -> PathBuf {
    let Some(mut config_dir) = dirs::config_dir() else {
        // No config dir could be determined, so fall back on the current folder
        return PathBuf::from(".");
    };
    config_dir.push("bidbase");

    config_dir
}
