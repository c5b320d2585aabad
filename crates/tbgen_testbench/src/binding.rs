//! Positional binding of testbench signals to the unit's ports.

use tbgen_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};

use crate::config::MismatchPolicy;
use crate::error::GenerateError;
use crate::signal::Role;

/// Emitted when a port list is truncated under [`MismatchPolicy::Truncate`].
pub const PORT_COUNT_TRUNCATED: DiagnosticCode = DiagnosticCode::new(Category::Warning, 101);

/// One `.port (signal)` connection of the instantiation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortBinding {
    /// The unit's port name.
    pub port: String,
    /// The testbench signal connected to it.
    pub signal: String,
    /// Which list the pairing came from.
    pub role: Role,
}

impl PortBinding {
    /// The connection text without its trailing separator, e.g. `.a (testA)`.
    pub fn connection(&self) -> String {
        format!(".{} ({})", self.port, self.signal)
    }
}

/// Pairs testbench signals with unit ports by position, inputs then outputs.
///
/// Names play no part: position `i` of each testbench list binds to position
/// `i` of the matching unit list. Lists of different lengths fail under
/// [`MismatchPolicy::Error`]; under [`MismatchPolicy::Truncate`] only the
/// common prefix is bound and a warning is emitted into `sink`.
pub fn bind_ports(
    testbench_inputs: &[&str],
    testbench_outputs: &[&str],
    unit_inputs: &[&str],
    unit_outputs: &[&str],
    policy: MismatchPolicy,
    sink: &DiagnosticSink,
) -> Result<Vec<PortBinding>, GenerateError> {
    let mut bindings = Vec::with_capacity(unit_inputs.len() + unit_outputs.len());
    for (role, signals, ports) in [
        (Role::Input, testbench_inputs, unit_inputs),
        (Role::Output, testbench_outputs, unit_outputs),
    ] {
        check_counts(role, signals.len(), ports.len(), policy, sink)?;
        bindings.extend(ports.iter().zip(signals).map(|(port, signal)| PortBinding {
            port: port.to_string(),
            signal: signal.to_string(),
            role,
        }));
    }
    Ok(bindings)
}

fn check_counts(
    role: Role,
    testbench: usize,
    unit: usize,
    policy: MismatchPolicy,
    sink: &DiagnosticSink,
) -> Result<(), GenerateError> {
    if testbench == unit {
        return Ok(());
    }
    match policy {
        MismatchPolicy::Error => Err(GenerateError::PortCountMismatch {
            role,
            testbench,
            unit,
        }),
        MismatchPolicy::Truncate => {
            let bound = testbench.min(unit);
            sink.emit(
                Diagnostic::warning(
                    PORT_COUNT_TRUNCATED,
                    format!("{testbench} testbench {role}(s) but {unit} unit {role} port(s)"),
                )
                .with_context(format!("{role} ports"))
                .with_note(format!("only the first {bound} {role}(s) are connected"))
                .with_help("declare one testbench signal per unit port, in port order"),
            );
            Ok(())
        }
    }
}

/// Renders the bindings as instantiation lines; all but the last end in a comma.
pub fn render_bindings(bindings: &[PortBinding]) -> Vec<String> {
    let last = bindings.len().saturating_sub(1);
    bindings
        .iter()
        .enumerate()
        .map(|(index, binding)| {
            if index == last {
                binding.connection()
            } else {
                format!("{},", binding.connection())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tbgen_diagnostics::Severity;

    fn pairs(bindings: &[PortBinding]) -> Vec<(&str, &str)> {
        bindings
            .iter()
            .map(|b| (b.port.as_str(), b.signal.as_str()))
            .collect()
    }

    #[test]
    fn inputs_then_outputs() {
        let sink = DiagnosticSink::new();
        let bindings = bind_ports(
            &["testA", "testB"],
            &["H0"],
            &["a", "b"],
            &["hex"],
            MismatchPolicy::Error,
            &sink,
        )
        .unwrap();
        assert_eq!(pairs(&bindings), vec![("a", "testA"), ("b", "testB"), ("hex", "H0")]);
        assert_eq!(bindings[2].role, Role::Output);
    }

    #[test]
    fn binding_is_positional_not_by_name() {
        let sink = DiagnosticSink::new();
        let original =
            bind_ports(&["a", "b"], &[], &["x", "y"], &[], MismatchPolicy::Error, &sink).unwrap();
        let renamed = bind_ports(
            &["renamed", "b"],
            &[],
            &["x", "y"],
            &[],
            MismatchPolicy::Error,
            &sink,
        )
        .unwrap();
        assert_eq!(original[0].port, renamed[0].port);
        assert_eq!(renamed[0].signal, "renamed");
    }

    #[test]
    fn mismatch_is_an_error_by_default() {
        let sink = DiagnosticSink::new();
        let err = bind_ports(
            &["a"],
            &["y"],
            &["a"],
            &["p", "q"],
            MismatchPolicy::Error,
            &sink,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GenerateError::PortCountMismatch {
                role: Role::Output,
                testbench: 1,
                unit: 2
            }
        ));
    }

    #[test]
    fn mismatch_truncates_with_warning() {
        let sink = DiagnosticSink::new();
        let bindings = bind_ports(
            &["a", "b", "c"],
            &[],
            &["x", "y"],
            &[],
            MismatchPolicy::Truncate,
            &sink,
        )
        .unwrap();
        assert_eq!(pairs(&bindings), vec![("x", "a"), ("y", "b")]);
        let diags = sink.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert_eq!(diags[0].code, PORT_COUNT_TRUNCATED);
        assert_eq!(diags[0].context.as_deref(), Some("input ports"));
    }

    #[test]
    fn last_line_has_no_comma() {
        let sink = DiagnosticSink::new();
        let bindings =
            bind_ports(&["a", "b"], &["y"], &["x", "z"], &["q"], MismatchPolicy::Error, &sink)
                .unwrap();
        assert_eq!(
            render_bindings(&bindings),
            vec![".x (a),", ".z (b),", ".q (y)"]
        );
    }

    #[test]
    fn last_input_has_no_comma_without_outputs() {
        let sink = DiagnosticSink::new();
        let bindings =
            bind_ports(&["a", "b"], &[], &["x", "z"], &[], MismatchPolicy::Error, &sink).unwrap();
        assert_eq!(render_bindings(&bindings), vec![".x (a),", ".z (b)"]);
    }

    #[test]
    fn no_bindings_renders_nothing() {
        assert!(render_bindings(&[]).is_empty());
    }
}
