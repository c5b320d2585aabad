//! Test vector generation and signal binding for Verilog testbenches.
//!
//! Given bit-width-annotated signal tokens (`[3:0]data`, `clk`), the ports of
//! the unit under test, and a [`GeneratorConfig`], this crate builds a
//! [`Testbench`]: parsed [`Signal`] declarations, positional [`PortBinding`]s,
//! and a [`TestSequence`] that is either an exhaustive odometer enumeration of
//! every input combination or a caller-supplied list of literals normalized to
//! fixed-width binary. The built testbench is then written as Verilog text.

#![warn(missing_docs)]

pub mod binding;
pub mod config;
pub mod counter;
pub mod emit;
pub mod error;
pub mod exhaustive;
pub mod explicit;
pub mod radix;
pub mod signal;
pub mod vector;
mod writer;

pub use binding::{bind_ports, PortBinding};
pub use config::{GeneratorConfig, MismatchPolicy, VectorSource};
pub use counter::{increment, Counter};
pub use emit::{generate, Testbench};
pub use error::{GenerateError, RadixError, SignalError};
pub use exhaustive::{exhaustive_sequence, ExhaustiveVectors, LARGE_SEQUENCE};
pub use explicit::{explicit_sequence, group_values};
pub use radix::{normalize, Radix};
pub use signal::{parse_signals, BitRange, Role, Signal};
pub use vector::{TestSequence, TestVector};
