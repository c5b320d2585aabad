//! Resolution of a validated bench description into a generator configuration.

use tbgen_testbench::{GeneratorConfig, MismatchPolicy, VectorSource};

use crate::types::{BenchConfig, OnMismatch, Radix, VectorMode};

/// Builds the immutable [`GeneratorConfig`] for one generation pass.
///
/// Explicit mode is used when selected, or when values are present and no
/// mode is given; otherwise every input combination is enumerated.
pub fn resolve(config: &BenchConfig) -> GeneratorConfig {
    let vectors = &config.vectors;
    let explicit = match vectors.mode {
        Some(VectorMode::Explicit) => true,
        Some(VectorMode::Exhaustive) => false,
        None => !vectors.values.is_empty(),
    };
    let source = if explicit {
        VectorSource::Explicit {
            radix: to_radix(vectors.radix),
            values: vectors.values.clone(),
        }
    } else {
        VectorSource::Exhaustive
    };

    GeneratorConfig {
        name: config.testbench.name.clone(),
        unit: config.testbench.unit.clone(),
        timescale: config.testbench.timescale.clone(),
        time_step: config.testbench.time,
        inputs: config.signals.inputs.clone(),
        outputs: config.signals.outputs.clone(),
        unit_inputs: config.ports.inputs.clone(),
        unit_outputs: config.ports.outputs.clone(),
        source,
        on_mismatch: match vectors.on_mismatch {
            OnMismatch::Error => MismatchPolicy::Error,
            OnMismatch::Truncate => MismatchPolicy::Truncate,
        },
    }
}

fn to_radix(radix: Radix) -> tbgen_testbench::Radix {
    match radix {
        Radix::Binary => tbgen_testbench::Radix::Binary,
        Radix::Decimal => tbgen_testbench::Radix::Decimal,
        Radix::Hex => tbgen_testbench::Radix::Hexadecimal,
    }
}
