//! The immutable configuration for one generation pass.

use crate::radix::Radix;

/// Default testbench module name.
pub const DEFAULT_NAME: &str = "system_tb";

/// Default `` `timescale `` directive argument.
pub const DEFAULT_TIMESCALE: &str = "1ns/1ns";

/// Default delay between tests, in timescale units.
pub const DEFAULT_TIME_STEP: u64 = 10;

/// Separator between the unit name and the rest of the testbench name.
const UNIT_SEPARATOR: char = '_';

/// Where the test vectors come from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum VectorSource {
    /// Every combination of input values.
    #[default]
    Exhaustive,
    /// Caller-supplied literals, grouped into tests of one value per input.
    Explicit {
        /// The radix every literal is written in.
        radix: Radix,
        /// All values of all tests, flattened in order.
        values: Vec<String>,
    },
}

/// What to do when positional lists disagree in length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MismatchPolicy {
    /// Fail the generation.
    #[default]
    Error,
    /// Use the shorter length and emit a warning diagnostic.
    Truncate,
}

/// Everything a generation pass needs, built once by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Testbench module name; also the output file stem.
    pub name: String,
    /// Explicit unit-under-test module name, overriding the derived one.
    pub unit: Option<String>,
    /// Argument of the `` `timescale `` directive.
    pub timescale: String,
    /// Delay inserted after each test.
    pub time_step: u64,
    /// Raw input tokens, in port order.
    pub inputs: Vec<String>,
    /// Raw output tokens, in port order.
    pub outputs: Vec<String>,
    /// The unit's input port names, in port order.
    pub unit_inputs: Vec<String>,
    /// The unit's output port names, in port order.
    pub unit_outputs: Vec<String>,
    /// How test vectors are produced.
    pub source: VectorSource,
    /// Handling of length mismatches.
    pub on_mismatch: MismatchPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            unit: None,
            timescale: DEFAULT_TIMESCALE.to_string(),
            time_step: DEFAULT_TIME_STEP,
            inputs: Vec::new(),
            outputs: Vec::new(),
            unit_inputs: Vec::new(),
            unit_outputs: Vec::new(),
            source: VectorSource::Exhaustive,
            on_mismatch: MismatchPolicy::Error,
        }
    }
}

impl GeneratorConfig {
    /// The module name of the unit under test.
    ///
    /// Unless set explicitly, this is the testbench name up to its first `_`
    /// (`alu_core_tb` gives `alu`), or the whole name if it has none.
    pub fn unit_name(&self) -> &str {
        if let Some(unit) = &self.unit {
            return unit;
        }
        match self.name.split_once(UNIT_SEPARATOR) {
            Some((unit, _)) if !unit.is_empty() => unit,
            _ => &self.name,
        }
    }

    /// The output file name, `<name>.v`.
    pub fn file_name(&self) -> String {
        format!("{}.v", self.name)
    }

    /// The delay statement placed after each test, e.g. `#10;`.
    pub fn time_advance(&self) -> String {
        format!("#{};", self.time_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.name, "system_tb");
        assert_eq!(config.timescale, "1ns/1ns");
        assert_eq!(config.time_advance(), "#10;");
        assert_eq!(config.source, VectorSource::Exhaustive);
        assert_eq!(config.on_mismatch, MismatchPolicy::Error);
    }

    #[test]
    fn unit_name_from_testbench_name() {
        let mut config = GeneratorConfig::default();
        assert_eq!(config.unit_name(), "system");

        config.name = "alu_core_tb".into();
        assert_eq!(config.unit_name(), "alu");

        config.name = "adder".into();
        assert_eq!(config.unit_name(), "adder");

        config.name = "_tb".into();
        assert_eq!(config.unit_name(), "_tb");
    }

    #[test]
    fn explicit_unit_name_wins() {
        let config = GeneratorConfig {
            name: "bench_tb".into(),
            unit: Some("cpu".into()),
            ..GeneratorConfig::default()
        };
        assert_eq!(config.unit_name(), "cpu");
    }

    #[test]
    fn file_name_and_time_advance() {
        let config = GeneratorConfig {
            name: "mux_tb".into(),
            time_step: 25,
            ..GeneratorConfig::default()
        };
        assert_eq!(config.file_name(), "mux_tb.v");
        assert_eq!(config.time_advance(), "#25;");
    }
}
