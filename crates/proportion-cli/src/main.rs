//! Proportion CLI - command-line interface for the rule-of-three calculator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use proportion_core::ProportionState;
#[cfg(feature = "gui")]
use std::path::{Path, PathBuf};

mod logging;
mod repl;

#[derive(Parser)]
#[command(name = "proportion")]
#[command(version = proportion_core::VERSION)]
#[command(about = "Solve A:B = C:X for X", long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one proportion and print X. Prints an empty line when an
    /// operand is not a number.
    Solve {
        /// First term of the known ratio
        #[arg(allow_hyphen_values = true)]
        a: String,

        /// Second term of the known ratio
        #[arg(allow_hyphen_values = true)]
        b: String,

        /// First term of the unknown ratio
        #[arg(allow_hyphen_values = true)]
        c: String,

        /// Print all fields as JSON
        #[arg(long)]
        json: bool,

        /// Fail with an error naming the first operand that is not a number
        #[arg(long)]
        strict: bool,
    },

    /// Start an interactive session (default)
    Repl,

    /// Open the calculator window
    #[cfg(feature = "gui")]
    Gui {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Solve {
            a,
            b,
            c,
            json,
            strict,
        }) => {
            logging::init(cli.verbose, None);
            let output = solve_command(&a, &b, &c, json, strict)?;
            println!("{output}");
        }

        Some(Commands::Repl) | None => {
            logging::init(cli.verbose, None);
            let mut repl = repl::Repl::new()?;
            repl.run()?;
        }

        #[cfg(feature = "gui")]
        Some(Commands::Gui { config }) => {
            launch_gui(config.as_deref(), cli.verbose)?;
        }
    }

    Ok(())
}

/// Compute the output of `solve`
fn solve_command(a: &str, b: &str, c: &str, json: bool, strict: bool) -> Result<String> {
    if strict {
        proportion_core::solve(a, b, c).context("cannot solve proportion")?;
    }

    let state = ProportionState::with_inputs(a, b, c);
    tracing::debug!(result = state.result(), "solved");

    if json {
        serde_json::to_string_pretty(&state).context("failed to serialize result")
    } else {
        Ok(state.result().to_string())
    }
}

/// Load the window config, then start logging with its `log_filter`
#[cfg(feature = "gui")]
fn load_gui_config(path: Option<&Path>, verbose: bool) -> proportion_gui::CalculatorConfig {
    use proportion_gui::CalculatorConfig;

    let (config, load_error) = CalculatorConfig::load_startup(path);
    logging::init(verbose, Some(&config.log_filter));
    if let Some(err) = load_error {
        tracing::warn!(%err, "using default configuration");
    }
    config
}

#[cfg(feature = "gui")]
fn launch_gui(path: Option<&Path>, verbose: bool) -> Result<()> {
    let config = load_gui_config(path, verbose);
    proportion_gui::launch(config).map_err(|e| anyhow::anyhow!("GUI error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_args() {
        let cli = Cli::try_parse_from(["proportion", "solve", "2", "4", "10"]).unwrap();
        match cli.command {
            Some(Commands::Solve { a, b, c, json, strict }) => {
                assert_eq!((a.as_str(), b.as_str(), c.as_str()), ("2", "4", "10"));
                assert!(!json);
                assert!(!strict);
            }
            _ => panic!("Expected Solve command"),
        }
    }

    #[test]
    fn test_solve_accepts_negative_operands() {
        let cli = Cli::try_parse_from(["proportion", "solve", "1", "-4", "2"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Solve { ref b, .. }) if b == "-4"));
    }

    #[test]
    fn test_solve_requires_three_operands() {
        assert!(Cli::try_parse_from(["proportion", "solve", "1", "2"]).is_err());
    }

    #[test]
    fn test_no_command_and_verbose() {
        let cli = Cli::try_parse_from(["proportion", "-v"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.verbose);
    }

    #[test]
    fn test_repl_command() {
        let cli = Cli::try_parse_from(["proportion", "repl"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Repl)));
    }

    #[cfg(feature = "gui")]
    #[test]
    fn test_gui_with_config() {
        let cli = Cli::try_parse_from(["proportion", "gui", "--config", "gui.toml"]).unwrap();
        match cli.command {
            Some(Commands::Gui { config }) => assert_eq!(config, Some(PathBuf::from("gui.toml"))),
            _ => panic!("Expected Gui command"),
        }
    }

    #[cfg(feature = "gui")]
    #[test]
    fn test_gui_config_log_filter_is_loaded() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_filter = \"debug\"").unwrap();

        let config = load_gui_config(Some(file.path()), false);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(logging::fallback_filter(false, Some(&config.log_filter)), "debug");
    }

    #[test]
    fn test_solve_output() {
        assert_eq!(solve_command("2", "4", "10", false, false).unwrap(), "20.00");
        assert_eq!(solve_command("0", "5", "5", false, false).unwrap(), "Infinity");
        assert_eq!(solve_command("abc", "4", "10", false, false).unwrap(), "");
    }

    #[test]
    fn test_solve_json_output() {
        let output = solve_command("3", "0", "7", true, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["result"], "0.00");
        assert_eq!(value["a"], "3");
    }

    #[test]
    fn test_solve_strict_names_field() {
        let err = solve_command("2", "four", "10", false, true).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Field B is not a number"), "{message}");
    }

    #[test]
    fn test_solve_strict_allows_zero_divisor() {
        assert_eq!(solve_command("0", "5", "5", false, true).unwrap(), "Infinity");
    }
}
