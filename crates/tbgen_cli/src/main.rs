//! tbgen: generate Verilog testbenches from signal lists.
//!
//! Declares the testbench signals, instantiates the unit under test with
//! positional port bindings, and drives either every combination of input
//! values or an explicit list of test values. Settings come from flags, a
//! `tbgen.toml` bench file, or interactive prompts.

#![warn(missing_docs)]

mod generate;
mod interactive;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgGroup, Parser, ValueEnum};

/// tbgen, a Verilog testbench generator.
#[derive(Parser, Debug)]
#[command(
    name = "tbgen",
    version,
    about = "Verilog testbench generator",
    arg_required_else_help = true,
    group(ArgGroup::new("test_values").args(["binary_values", "decimal_values", "hex_values"])),
    after_help = "Exhaustive mode emits 2^N tests for N total input bits; \
                  keep inputs narrow or pass explicit values."
)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Print parsed signals and port bindings.
    #[arg(short, long)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Output format for diagnostics.
    #[arg(long, value_enum, default_value_t = MessageFormat::Text)]
    pub message_format: MessageFormat,

    /// Read settings from a bench file, or from `tbgen.toml` in a directory; flags override it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Prompt for every setting on standard input.
    #[arg(long)]
    pub interactive: bool,

    /// Testbench inputs, e.g. `[3:0]testA opcode` (no range means one bit).
    #[arg(short, long, num_args = 1..)]
    pub inputs: Vec<String>,

    /// Testbench outputs, e.g. `[6:0]H0`.
    #[arg(short, long, num_args = 1..)]
    pub outputs: Vec<String>,

    /// Input port names of the unit under test, in port order.
    #[arg(long = "unit-inputs", visible_alias = "si", num_args = 1..)]
    pub unit_inputs: Vec<String>,

    /// Output port names of the unit under test, in port order.
    #[arg(long = "unit-outputs", visible_alias = "so", num_args = 1..)]
    pub unit_outputs: Vec<String>,

    /// Base name of the testbench; the module becomes `<FILE>_tb`.
    #[arg(short, long)]
    pub file: Option<String>,

    /// Unit-under-test module name (default: testbench name before its first `_`).
    #[arg(long)]
    pub unit: Option<String>,

    /// Length of each test in whole timescale units.
    ///
    /// Fractional delays are not accepted; choose a finer `--timescale`
    /// instead (`-t 25 --timescale 100ps/100ps` rather than `-t 2.5`).
    #[arg(short, long, value_name = "UNITS")]
    pub time: Option<u64>,

    /// Argument of the `` `timescale `` directive.
    #[arg(long)]
    pub timescale: Option<String>,

    /// Binary test values, one per input per test.
    #[arg(long = "bv", num_args = 1..)]
    pub binary_values: Vec<String>,

    /// Decimal test values, one per input per test.
    #[arg(long = "dv", num_args = 1..)]
    pub decimal_values: Vec<String>,

    /// Hexadecimal test values, one per input per test.
    #[arg(long = "hv", num_args = 1..)]
    pub hex_values: Vec<String>,

    /// Bind and group the shorter length on count mismatches instead of failing.
    #[arg(long)]
    pub truncate: bool,

    /// Directory to write `<name>.v` into (default: current directory).
    #[arg(short = 'd', long)]
    pub output_dir: Option<PathBuf>,

    /// Print the testbench to standard output instead of writing a file.
    #[arg(long, conflicts_with = "output_dir")]
    pub stdout: bool,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MessageFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// How to print diagnostics.
    pub message_format: MessageFormat,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose && !cli.quiet,
        color,
        message_format: cli.message_format,
    };

    match generate::run(&cli, &global) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn parse_signal_lists() {
        let cli = Cli::parse_from([
            "tbgen", "-i", "[3:0]testA", "opcode", "-o", "[6:0]H0", "--si", "a", "op", "--so",
            "hex",
        ]);
        assert_eq!(cli.inputs, vec!["[3:0]testA", "opcode"]);
        assert_eq!(cli.outputs, vec!["[6:0]H0"]);
        assert_eq!(cli.unit_inputs, vec!["a", "op"]);
        assert_eq!(cli.unit_outputs, vec!["hex"]);
    }

    #[test]
    fn parse_long_unit_port_names() {
        let cli = Cli::parse_from([
            "tbgen",
            "-i",
            "a",
            "--unit-inputs",
            "x",
            "--unit-outputs",
            "y",
        ]);
        assert_eq!(cli.unit_inputs, vec!["x"]);
        assert_eq!(cli.unit_outputs, vec!["y"]);
    }

    #[test]
    fn parse_defaults() {
        let cli = Cli::parse_from(["tbgen", "-i", "a"]);
        assert!(!cli.quiet);
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Auto);
        assert_eq!(cli.message_format, MessageFormat::Text);
        assert!(cli.config.is_none());
        assert!(cli.file.is_none());
        assert!(cli.time.is_none());
        assert!(cli.binary_values.is_empty());
        assert!(!cli.truncate);
        assert!(!cli.stdout);
    }

    #[test]
    fn parse_file_and_time() {
        let cli = Cli::parse_from(["tbgen", "-i", "a", "-f", "adder", "-t", "25"]);
        assert_eq!(cli.file.as_deref(), Some("adder"));
        assert_eq!(cli.time, Some(25));
    }

    #[test]
    fn parse_decimal_values() {
        let cli = Cli::parse_from([
            "tbgen", "-i", "opcode", "testA", "testB", "--dv", "1", "0", "0", "1", "1", "1",
        ]);
        assert_eq!(cli.decimal_values.len(), 6);
        assert!(cli.binary_values.is_empty());
    }

    #[test]
    fn value_flags_are_exclusive() {
        let result = Cli::try_parse_from(["tbgen", "-i", "a", "--bv", "1", "--hv", "f"]);
        assert!(result.is_err());
    }

    #[test]
    fn stdout_conflicts_with_output_dir() {
        let result = Cli::try_parse_from(["tbgen", "-i", "a", "--stdout", "-d", "out"]);
        assert!(result.is_err());
    }

    #[test]
    fn non_numeric_time_rejected() {
        assert!(Cli::try_parse_from(["tbgen", "-i", "a", "-t", "10ns"]).is_err());
    }

    #[test]
    fn fractional_time_rejected_with_guidance() {
        assert!(Cli::try_parse_from(["tbgen", "-i", "a", "-t", "2.5"]).is_err());

        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("whole timescale units"));
        assert!(help.contains("Fractional delays are not accepted"));
    }

    #[test]
    fn no_arguments_shows_help() {
        assert!(Cli::try_parse_from(["tbgen"]).is_err());
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from([
            "tbgen",
            "--quiet",
            "--color",
            "never",
            "--message-format",
            "json",
            "-i",
            "a",
        ]);
        assert!(cli.quiet);
        assert_eq!(cli.color, ColorChoice::Never);
        assert_eq!(cli.message_format, MessageFormat::Json);
    }

    #[test]
    fn parse_config_and_interactive() {
        let cli = Cli::parse_from(["tbgen", "--config", "bench/tbgen.toml", "--interactive"]);
        assert_eq!(cli.config, Some(PathBuf::from("bench/tbgen.toml")));
        assert!(cli.interactive);
    }
}
