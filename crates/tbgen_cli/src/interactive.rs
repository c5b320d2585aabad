//! Prompt for each setting on a terminal (`tbgen --interactive`).
//!
//! Questions are asked in a fixed order: file name, inputs, outputs, unit
//! inputs, unit outputs, test length, and finally whether to supply explicit
//! values (with their radix). A blank answer keeps the current setting, so
//! prompts can refine a bench file loaded with `--config`.

use std::io::{BufRead, Write};

use tbgen_config::{BenchConfig, ConfigError, Radix, VectorMode};

/// Asks every question on `output`, reads answers from `input`, and applies
/// them to `config`.
///
/// End of input is treated as a blank answer.
pub fn prompt_config<R: BufRead, W: Write>(
    config: &mut BenchConfig,
    input: &mut R,
    output: &mut W,
) -> Result<(), ConfigError> {
    let mut prompter = Prompter { input, output };

    let file = prompter.ask("Testbench file name, without extension (blank for 'system')")?;
    if !file.is_empty() {
        config.testbench.name = format!("{file}_tb");
    }

    let inputs = prompter.ask("Testbench inputs with their sizes (e.g. [2:0]testA [3:0]testB)")?;
    replace_list(&mut config.signals.inputs, &inputs);

    let outputs = prompter.ask("Testbench outputs with their sizes (e.g. [6:0]H0)")?;
    replace_list(&mut config.signals.outputs, &outputs);

    let unit_inputs = prompter.ask("Input port names of the unit under test, in order")?;
    replace_list(&mut config.ports.inputs, &unit_inputs);

    let unit_outputs = prompter.ask("Output port names of the unit under test, in order")?;
    replace_list(&mut config.ports.outputs, &unit_outputs);

    let time = prompter.ask(&format!(
        "Length of each test in time units (blank for {})",
        config.testbench.time
    ))?;
    if !time.is_empty() {
        config.testbench.time = time
            .parse()
            .map_err(|_| {
                ConfigError::ValidationError(format!(
                    "invalid test length '{time}': expected a whole number"
                ))
            })?;
    }

    let explicit = prompter.ask("Specify test values instead of every combination? (y/n)")?;
    match explicit.to_ascii_lowercase().as_str() {
        "" => {}
        "y" | "yes" => {
            let radix = prompter.ask("Radix of the values (b/d/h)")?;
            config.vectors.radix = parse_radix(&radix).map_err(ConfigError::ValidationError)?;
            let values = prompter.ask("Test values, one per input per test, separated by spaces")?;
            config.vectors.mode = Some(VectorMode::Explicit);
            config.vectors.values = split(&values);
        }
        "n" | "no" => {
            config.vectors.mode = Some(VectorMode::Exhaustive);
            config.vectors.values.clear();
        }
        other => {
            return Err(ConfigError::ValidationError(format!(
                "expected 'y' or 'n', found '{other}'"
            )))
        }
    }

    writeln!(prompter.output)?;
    Ok(())
}

struct Prompter<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<R: BufRead, W: Write> Prompter<'_, R, W> {
    fn ask(&mut self, question: &str) -> std::io::Result<String> {
        write!(self.output, "{question}: ")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

fn split(answer: &str) -> Vec<String> {
    answer.split_whitespace().map(str::to_string).collect()
}

fn replace_list(list: &mut Vec<String>, answer: &str) {
    if !answer.is_empty() {
        *list = split(answer);
    }
}

fn parse_radix(answer: &str) -> Result<Radix, String> {
    match answer.to_ascii_lowercase().as_str() {
        "" | "b" | "bin" | "binary" => Ok(Radix::Binary),
        "d" | "dec" | "decimal" => Ok(Radix::Decimal),
        "h" | "hex" | "hexadecimal" => Ok(Radix::Hex),
        other => Err(format!("unknown radix '{other}': expected b, d, or h")),
    }
}
