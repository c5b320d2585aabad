//! Testbench assembly and Verilog text emission.
//!
//! [`Testbench::build`] does all parsing, binding, and vector generation up
//! front, so every fatal error is reported before a single byte is written.
//! [`Testbench::write_to`] then only formats.

use std::io;

use tbgen_diagnostics::DiagnosticSink;

use crate::binding::{bind_ports, render_bindings, PortBinding};
use crate::config::{GeneratorConfig, VectorSource};
use crate::error::GenerateError;
use crate::exhaustive::exhaustive_sequence;
use crate::explicit::{explicit_sequence, group_values};
use crate::radix::normalize_all;
use crate::signal::{names, parse_signals, Role, Signal};
use crate::vector::{literal, TestSequence, TestVector};
use crate::writer::CodeWriter;

/// Instance name given to the unit under test.
const INSTANCE_NAME: &str = "uut";

/// A fully built testbench, ready to be written.
#[derive(Debug)]
pub struct Testbench {
    name: String,
    unit: String,
    timescale: String,
    time_advance: String,
    inputs: Vec<Signal>,
    outputs: Vec<Signal>,
    bindings: Vec<PortBinding>,
    sequence: TestSequence,
}

impl Testbench {
    /// Parses signals, binds ports, and computes the whole test sequence.
    ///
    /// Non-fatal conditions (truncation under
    /// [`MismatchPolicy::Truncate`](crate::MismatchPolicy::Truncate)) are
    /// reported as warnings in `sink`.
    pub fn build(config: &GeneratorConfig, sink: &DiagnosticSink) -> Result<Self, GenerateError> {
        let inputs = parse_signals(&config.inputs, Role::Input)?;
        let outputs = parse_signals(&config.outputs, Role::Output)?;
        if inputs.is_empty() {
            return Err(GenerateError::NoInputs);
        }

        let unit_inputs: Vec<&str> = config.unit_inputs.iter().map(String::as_str).collect();
        let unit_outputs: Vec<&str> = config.unit_outputs.iter().map(String::as_str).collect();
        let bindings = bind_ports(
            &names(&inputs),
            &names(&outputs),
            &unit_inputs,
            &unit_outputs,
            config.on_mismatch,
            sink,
        )?;

        let sequence = match &config.source {
            VectorSource::Exhaustive => exhaustive_sequence(&inputs, sink)?,
            VectorSource::Explicit { radix, values } => {
                let values = normalize_all(values, *radix)?;
                let tests = group_values(&values, inputs.len(), config.on_mismatch, sink)?;
                explicit_sequence(&inputs, &tests)?
            }
        };

        Ok(Self {
            name: config.name.clone(),
            unit: config.unit_name().to_string(),
            timescale: config.timescale.clone(),
            time_advance: config.time_advance(),
            inputs,
            outputs,
            bindings,
            sequence,
        })
    }

    /// The testbench module name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unit-under-test module name.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Parsed input signals, in declared order.
    pub fn inputs(&self) -> &[Signal] {
        &self.inputs
    }

    /// Parsed output signals, in declared order.
    pub fn outputs(&self) -> &[Signal] {
        &self.outputs
    }

    /// Port bindings, inputs then outputs.
    pub fn bindings(&self) -> &[PortBinding] {
        &self.bindings
    }

    /// The test sequence, in application order.
    pub fn sequence(&self) -> &TestSequence {
        &self.sequence
    }

    /// Writes the testbench as Verilog text.
    pub fn write_to<W: io::Write>(&self, w: &mut W) -> Result<(), GenerateError> {
        let mut w = CodeWriter::new(w);

        w.append_line(&format!("`timescale {}", self.timescale))?;
        w.append_newline()?;
        w.append_line(&format!("module {}();", self.name))?;
        w.indent();

        for signal in self.inputs.iter().chain(&self.outputs) {
            w.append_line(&signal.declaration())?;
        }
        w.append_newline()?;

        w.append_line(&format!("{} {INSTANCE_NAME}(", self.unit))?;
        w.indent();
        for line in render_bindings(&self.bindings) {
            w.append_line(&line)?;
        }
        w.unindent()?;
        w.append_line(");")?;
        w.append_newline()?;

        w.append_line("initial begin")?;
        w.indent();
        for vector in &self.sequence {
            w.append_line(&self.assignment_line(vector))?;
            w.append_line(&self.time_advance)?;
        }
        w.append_line("$stop;")?;
        w.unindent()?;
        w.append_line("end")?;

        w.unindent()?;
        w.append("endmodule")?;
        w.append_newline()
    }

    /// Renders the testbench into a string.
    pub fn render(&self) -> Result<String, GenerateError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| GenerateError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    fn assignment_line(&self, vector: &TestVector) -> String {
        self.inputs
            .iter()
            .zip(vector.values())
            .map(|(signal, bits)| format!("{} = {};", signal.name, literal(signal.width(), bits)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Builds and renders a testbench in one step.
pub fn generate(config: &GeneratorConfig, sink: &DiagnosticSink) -> Result<String, GenerateError> {
    Testbench::build(config, sink)?.render()
}
