//! The generation pipeline behind `tbgen`.
//!
//! 1. Load the bench file named by `--config`, if any
//! 2. Apply interactive answers, then command-line overrides
//! 3. Validate and resolve into a `GeneratorConfig`
//! 4. Build and render the whole testbench in memory
//! 5. Report diagnostics, fatal ones included
//! 6. Write `<name>.v` (or print it with `--stdout`)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tbgen_config::{BenchConfig, ConfigError, OnMismatch, Radix, VectorMode, CONFIG_FILE_NAME};
use tbgen_diagnostics::{Diagnostic, DiagnosticRenderer, DiagnosticSink, TerminalRenderer};
use tbgen_testbench::{Testbench, VectorSource};

use crate::interactive;
use crate::{Cli, GlobalArgs, MessageFormat};

/// A rendered testbench and the file it belongs in.
struct Rendered {
    file_name: String,
    text: String,
}

/// Runs one generation pass for the parsed command line.
///
/// Returns exit code 0 once the testbench is written and 1 if any error
/// diagnostic was reported, in which case nothing is written.
pub fn run(cli: &Cli, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let sink = DiagnosticSink::new();
    let rendered = match prepare(cli, global, &sink) {
        Ok(rendered) => Some(rendered),
        Err(diag) => {
            sink.emit(diag);
            None
        }
    };
    report(&sink, cli, global);

    let Some(rendered) = rendered.filter(|_| !sink.has_errors()) else {
        return Ok(1);
    };

    if cli.stdout {
        print!("{}", rendered.text);
        return Ok(0);
    }

    let dir = cli.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let path = write_testbench(&dir, &rendered.file_name, &rendered.text)?;
    if !global.quiet {
        eprintln!("     Created {}", path.display());
    }

    Ok(0)
}

/// Everything up to the final write. Fatal problems come back as error diagnostics.
fn prepare(
    cli: &Cli,
    global: &GlobalArgs,
    sink: &DiagnosticSink,
) -> Result<Rendered, Diagnostic> {
    let mut bench = load_bench(cli).map_err(|e| e.to_diagnostic())?;
    apply_overrides(&mut bench, cli);
    tbgen_config::validate_config(&bench).map_err(|e| e.to_diagnostic())?;
    let config = tbgen_config::resolve(&bench);

    let testbench = Testbench::build(&config, sink).map_err(|e| e.to_diagnostic())?;

    if !global.quiet {
        let mode = match &config.source {
            VectorSource::Exhaustive => "exhaustive".to_string(),
            VectorSource::Explicit { radix, .. } => format!("{radix} values"),
        };
        eprintln!(
            "   Generating {} ({} vectors, {mode})",
            testbench.name(),
            testbench.sequence().len()
        );
    }
    if global.verbose {
        describe(&testbench);
    }

    let text = testbench.render().map_err(|e| e.to_diagnostic())?;
    Ok(Rendered {
        file_name: config.file_name(),
        text,
    })
}

fn load_bench(cli: &Cli) -> Result<BenchConfig, ConfigError> {
    let mut bench = match &cli.config {
        Some(path) if path.is_dir() => {
            tbgen_config::load_config(&path.join(CONFIG_FILE_NAME))?
        }
        Some(path) => tbgen_config::load_config(path)?,
        None => BenchConfig::default(),
    };
    if cli.interactive {
        let mut input = io::stdin().lock();
        interactive::prompt_config(&mut bench, &mut input, &mut io::stderr())?;
    }
    Ok(bench)
}

/// Applies command-line settings on top of a loaded bench file.
///
/// Flags that were given replace the file's values; absent flags leave them.
fn apply_overrides(bench: &mut BenchConfig, cli: &Cli) {
    if let Some(file) = &cli.file {
        bench.testbench.name = format!("{file}_tb");
    }
    if let Some(unit) = &cli.unit {
        bench.testbench.unit = Some(unit.clone());
    }
    if let Some(time) = cli.time {
        bench.testbench.time = time;
    }
    if let Some(timescale) = &cli.timescale {
        bench.testbench.timescale = timescale.clone();
    }

    override_list(&mut bench.signals.inputs, &cli.inputs);
    override_list(&mut bench.signals.outputs, &cli.outputs);
    override_list(&mut bench.ports.inputs, &cli.unit_inputs);
    override_list(&mut bench.ports.outputs, &cli.unit_outputs);

    let explicit = [
        (&cli.binary_values, Radix::Binary),
        (&cli.decimal_values, Radix::Decimal),
        (&cli.hex_values, Radix::Hex),
    ]
    .into_iter()
    .find(|(values, _)| !values.is_empty());
    if let Some((values, radix)) = explicit {
        bench.vectors.mode = Some(VectorMode::Explicit);
        bench.vectors.radix = radix;
        bench.vectors.values = values.clone();
    }

    if cli.truncate {
        bench.vectors.on_mismatch = OnMismatch::Truncate;
    }
}

fn override_list(list: &mut Vec<String>, flag: &[String]) {
    if !flag.is_empty() {
        *list = flag.to_vec();
    }
}

/// Prints collected diagnostics in the selected format.
fn report(sink: &DiagnosticSink, cli: &Cli, global: &GlobalArgs) {
    let diagnostics = sink.take_all();
    if diagnostics.is_empty() {
        return;
    }

    match global.message_format {
        MessageFormat::Text => {
            let renderer = TerminalRenderer::new(global.color);
            for diag in &diagnostics {
                eprintln!("{}", renderer.render(diag));
            }
            if !global.quiet {
                let warnings = diagnostics.len() - sink.error_count();
                eprintln!(
                    "   Result: {} error(s), {warnings} warning(s)",
                    sink.error_count()
                );
            }
        }
        MessageFormat::Json => {
            let json =
                serde_json::to_string_pretty(&diagnostics).unwrap_or_else(|_| "[]".to_string());
            // Keep stdout clean for the testbench text.
            if cli.stdout {
                eprintln!("{json}");
            } else {
                println!("{json}");
            }
        }
    }
}

fn describe(testbench: &Testbench) {
    for signal in testbench.inputs().iter().chain(testbench.outputs()) {
        let bits = signal.width();
        let plural = if bits == 1 { "" } else { "s" };
        eprintln!("      {} {} ({bits} bit{plural})", signal.role, signal.name);
    }
    for binding in testbench.bindings() {
        eprintln!("      bind {}", binding.connection());
    }
}

/// Writes `text` to `<dir>/<file_name>`, creating `dir` if needed.
fn write_testbench(dir: &Path, file_name: &str, text: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, text)?;
    Ok(path)
}
