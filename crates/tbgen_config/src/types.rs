//! Bench description types deserialized from `tbgen.toml`.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

use tbgen_testbench::config::{DEFAULT_NAME, DEFAULT_TIMESCALE, DEFAULT_TIME_STEP};

/// The top-level bench description.
#[derive(Debug, Default, Deserialize)]
pub struct BenchConfig {
    /// Testbench naming and timing.
    #[serde(default)]
    pub testbench: BenchMeta,
    /// Testbench signal tokens (`[high:low]name` or `name`).
    #[serde(default)]
    pub signals: SignalLists,
    /// Port names of the unit under test, in port order.
    #[serde(default)]
    pub ports: SignalLists,
    /// How test vectors are produced.
    #[serde(default)]
    pub vectors: VectorConfig,
}

/// Testbench module name, unit name, and timing.
#[derive(Debug, Deserialize)]
pub struct BenchMeta {
    /// Testbench module name (and output file stem).
    #[serde(default = "default_name")]
    pub name: String,
    /// Unit-under-test module name; derived from `name` when absent.
    #[serde(default)]
    pub unit: Option<String>,
    /// Delay after each test, in timescale units.
    #[serde(default = "default_time")]
    pub time: u64,
    /// Argument of the `` `timescale `` directive.
    #[serde(default = "default_timescale")]
    pub timescale: String,
}

impl Default for BenchMeta {
    fn default() -> Self {
        Self {
            name: default_name(),
            unit: None,
            time: default_time(),
            timescale: default_timescale(),
        }
    }
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_time() -> u64 {
    DEFAULT_TIME_STEP
}

fn default_timescale() -> String {
    DEFAULT_TIMESCALE.to_string()
}

/// An input list and an output list.
#[derive(Debug, Default, Deserialize)]
pub struct SignalLists {
    /// Inputs, in port order.
    #[serde(default)]
    pub inputs: Vec<String>,
    /// Outputs, in port order.
    #[serde(default)]
    pub outputs: Vec<String>,
}

/// Test vector settings.
#[derive(Debug, Default, Deserialize)]
pub struct VectorConfig {
    /// Generation mode; when absent, supplying values implies explicit mode.
    #[serde(default)]
    pub mode: Option<VectorMode>,
    /// The radix test values are written in.
    #[serde(default)]
    pub radix: Radix,
    /// Test values, flattened across tests.
    ///
    /// Accepts a whitespace-separated string (`"1 0 0 1 1 1"`) or a list
    /// whose elements are strings or non-negative integers.
    #[serde(default, deserialize_with = "deserialize_literals")]
    pub values: Vec<String>,
    /// Handling of length mismatches.
    #[serde(default)]
    pub on_mismatch: OnMismatch,
}

/// Test vector generation mode.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VectorMode {
    /// Every combination of input values.
    Exhaustive,
    /// The listed values only.
    Explicit,
}

/// Radix of the listed test values.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    /// Base 2 (default).
    #[default]
    #[serde(alias = "bin", alias = "b")]
    Binary,
    /// Base 10.
    #[serde(alias = "dec", alias = "d")]
    Decimal,
    /// Base 16.
    #[serde(alias = "hexadecimal", alias = "h")]
    Hex,
}

/// Handling of positional length mismatches.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OnMismatch {
    /// Abort generation (default).
    #[default]
    Error,
    /// Truncate to the shorter list and warn.
    Truncate,
}

/// One test value literal, written as a TOML string or integer.
struct Literal(String);

impl<'de> Deserialize<'de> for Literal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LiteralVisitor;

        impl<'de> Visitor<'de> for LiteralVisitor {
            type Value = Literal;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a test value string or non-negative integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(Literal(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(Literal(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u64::try_from(v)
                    .map(|v| Literal(v.to_string()))
                    .map_err(|_| E::custom(format!("test value {v} is negative")))
            }
        }

        deserializer.deserialize_any(LiteralVisitor)
    }
}

/// Deserializes test values from a whitespace-separated string or a list.
fn deserialize_literals<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct Literals;

    impl<'de> Visitor<'de> for Literals {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a string of values or a list of values")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(v.split_whitespace().map(str::to_string).collect())
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut values = Vec::new();
            while let Some(Literal(value)) = seq.next_element::<Literal>()? {
                values.push(value);
            }
            Ok(values)
        }
    }

    deserializer.deserialize_any(Literals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;

    #[test]
    fn radix_all_variants() {
        for (input, expected) in [
            ("binary", Radix::Binary),
            ("bin", Radix::Binary),
            ("b", Radix::Binary),
            ("decimal", Radix::Decimal),
            ("d", Radix::Decimal),
            ("hex", Radix::Hex),
            ("hexadecimal", Radix::Hex),
            ("h", Radix::Hex),
        ] {
            let toml = format!(
                r#"
[signals]
inputs = ["a"]

[vectors]
radix = "{input}"
values = ["1"]
"#
            );
            let config = load_config_from_str(&toml).unwrap();
            assert_eq!(config.vectors.radix, expected);
        }
    }

    #[test]
    fn values_as_string() {
        let toml = r#"
[signals]
inputs = ["opcode", "testA", "testB"]

[vectors]
values = "1 0 0  1 1 1"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.vectors.values, vec!["1", "0", "0", "1", "1", "1"]);
    }

    #[test]
    fn values_as_mixed_list() {
        let toml = r#"
[signals]
inputs = ["[3:0]a", "b"]

[vectors]
radix = "hex"
values = ["a", 1, "0x3", 0]
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.vectors.values, vec!["a", "1", "0x3", "0"]);
    }

    #[test]
    fn negative_value_rejected() {
        let toml = r#"
[signals]
inputs = ["a"]

[vectors]
values = [-1]
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, crate::ConfigError::ParseError(msg) if msg.contains("negative")));
    }

    #[test]
    fn on_mismatch_variants() {
        for (input, expected) in [("error", OnMismatch::Error), ("truncate", OnMismatch::Truncate)] {
            let toml = format!(
                r#"
[signals]
inputs = ["a"]

[vectors]
on_mismatch = "{input}"
"#
            );
            let config = load_config_from_str(&toml).unwrap();
            assert_eq!(config.vectors.on_mismatch, expected);
        }
    }

    #[test]
    fn meta_defaults() {
        let meta = BenchMeta::default();
        assert_eq!(meta.name, "system_tb");
        assert_eq!(meta.time, 10);
        assert_eq!(meta.timescale, "1ns/1ns");
        assert!(meta.unit.is_none());
    }
}
