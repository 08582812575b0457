// SPDX-License-Identifier: MIT OR Apache-2.0
//! Command line arguments.

use crate::config::CONFIG_FILE_NAME;
use clap::Parser;
use std::path::PathBuf;

/// Plays the Kev'n Creates loading screen and reveals the page
#[derive(Parser, Debug)]
#[command(name = "kevn_site", about, version)]
pub struct Cli {
    /// Site config file (defaults are used if it does not exist)
    #[arg(default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_config_path() {
        let cli = Cli::try_parse_from(["kevn_site"]).unwrap();
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE_NAME));

        let cli = Cli::try_parse_from(["kevn_site", "custom.ron"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("custom.ron"));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["kevn_site", "--speed", "2"]).is_err());
    }
}
