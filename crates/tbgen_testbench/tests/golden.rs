//! End-to-end tests comparing generated testbenches against exact expected text.

use tbgen_diagnostics::DiagnosticSink;
use tbgen_testbench::{generate, GeneratorConfig, Radix, VectorSource};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn exhaustive_mux_testbench() {
    let config = GeneratorConfig {
        name: "mux_tb".into(),
        inputs: strings(&["[1:0]a", "b"]),
        outputs: strings(&["y"]),
        unit_inputs: strings(&["in_a", "in_b"]),
        unit_outputs: strings(&["out"]),
        ..GeneratorConfig::default()
    };
    let sink = DiagnosticSink::new();
    let text = generate(&config, &sink).unwrap();

    let expected = "\
`timescale 1ns/1ns

module mux_tb();
\treg [1:0] a;
\treg b;
\twire y;

\tmux uut(
\t\t.in_a (a),
\t\t.in_b (b),
\t\t.out (y)
\t);

\tinitial begin
\t\ta = 2'b00; b = 1'b0;
\t\t#10;
\t\ta = 2'b00; b = 1'b1;
\t\t#10;
\t\ta = 2'b01; b = 1'b0;
\t\t#10;
\t\ta = 2'b01; b = 1'b1;
\t\t#10;
\t\ta = 2'b10; b = 1'b0;
\t\t#10;
\t\ta = 2'b10; b = 1'b1;
\t\t#10;
\t\ta = 2'b11; b = 1'b0;
\t\t#10;
\t\ta = 2'b11; b = 1'b1;
\t\t#10;
\t\t$stop;
\tend
endmodule
";
    assert_eq!(text, expected);
    assert!(sink.diagnostics().is_empty());
}

#[test]
fn explicit_hex_testbench() {
    let config = GeneratorConfig {
        name: "seg_tb".into(),
        unit: Some("seven_seg".into()),
        timescale: "1ps/1ps".into(),
        time_step: 20,
        inputs: strings(&["[3:0]digit", "en"]),
        outputs: strings(&["[6:0]H0"]),
        unit_inputs: strings(&["d", "enable"]),
        unit_outputs: strings(&["seg"]),
        source: VectorSource::Explicit {
            radix: Radix::Hexadecimal,
            values: strings(&["a", "1", "0x3", "0"]),
        },
        ..GeneratorConfig::default()
    };
    let sink = DiagnosticSink::new();
    let text = generate(&config, &sink).unwrap();

    let expected = "\
`timescale 1ps/1ps

module seg_tb();
\treg [3:0] digit;
\treg en;
\twire [6:0] H0;

\tseven_seg uut(
\t\t.d (digit),
\t\t.enable (en),
\t\t.seg (H0)
\t);

\tinitial begin
\t\tdigit = 4'b1010; en = 1'b1;
\t\t#20;
\t\tdigit = 4'b0011; en = 1'b0;
\t\t#20;
\t\t$stop;
\tend
endmodule
";
    assert_eq!(text, expected);
}

#[test]
fn exhaustive_vector_count_matches_total_width() {
    let config = GeneratorConfig {
        inputs: strings(&["[2:0]a", "[1:0]b", "c"]),
        unit_inputs: strings(&["a", "b", "c"]),
        ..GeneratorConfig::default()
    };
    let sink = DiagnosticSink::new();
    let text = generate(&config, &sink).unwrap();
    assert_eq!(text.matches("#10;").count(), 1 << 6);
    assert!(text.contains("a = 3'b000; b = 2'b00; c = 1'b0;"));
    assert!(text.contains("a = 3'b111; b = 2'b11; c = 1'b1;"));
}
