use std::io::Cursor;

use calcline::{
    interpreter::value::RealFormat,
    repl::{Repl, ReplConfig, ReplStats},
};

fn quiet_config() -> ReplConfig {
    ReplConfig { prompt: String::new(),
                 banner: false,
                 ..ReplConfig::default() }
}

fn run_session(input: &str, config: ReplConfig) -> (ReplStats, String) {
    run_raw_session(input.as_bytes(), config)
}

fn run_raw_session(input: &[u8], config: ReplConfig) -> (ReplStats, String) {
    let mut output = Vec::new();
    let repl = Repl::new(Cursor::new(input.to_vec()), &mut output, config);
    let stats = repl.run().expect("in-memory I/O never fails");
    (stats, String::from_utf8(output).expect("output is UTF-8"))
}

#[test]
fn prints_results_and_errors_without_stopping() {
    let input = "5+3\n7 / 3\n7.0 / 3\n5 / 0\n5\nabc + 1\n99999999999999999999 + 1\n";
    let (stats, output) = run_session(input, quiet_config());

    assert_eq!(output,
               "8\n\
                2 (integer division)\n\
                2.33333\n\
                Error: Division by zero\n\
                Invalid format. Use: number operator number\n\
                Error: Invalid number format\n\
                Error: Number out of range\n");
    assert_eq!(stats,
               ReplStats { evaluated: 3,
                           failed:    4,
                           skipped:   0, });
}

#[test]
fn exit_commands_stop_the_session() {
    for command in ["q", "quit", "exit"] {
        let input = format!("1 + 1\n{command}\n2 + 2\n");
        let (stats, output) = run_session(&input, quiet_config());

        assert_eq!(output, "2\nExiting...\n", "{command}");
        assert_eq!(stats.evaluated, 1);
    }
}

#[test]
fn exit_commands_are_matched_exactly() {
    let (_, output) = run_session("Q\n quit\n", quiet_config());

    assert_eq!(output,
               "Invalid format. Use: number operator number\n\
                Invalid format. Use: number operator number\n");
}

#[test]
fn empty_lines_are_skipped_with_a_hint() {
    let (stats, output) = run_session("\n\r\n3*4\n", quiet_config());

    assert_eq!(output,
               "Please enter an expression or 'q' to quit\n\
                Please enter an expression or 'q' to quit\n\
                12\n");
    assert_eq!(stats.skipped, 2);
}

#[test]
fn end_of_input_ends_the_session() {
    let (stats, output) = run_session("6 - 8", quiet_config());

    assert_eq!(output, "-2\n");
    assert_eq!(stats.evaluated, 1);
}

#[test]
fn banner_and_prompt_are_written() {
    let (_, output) = run_session("q\n", ReplConfig::default());

    assert!(output.starts_with("Calculator Demo\n"));
    assert!(output.contains("Enter 'q' to exit\n\nCalculator> Exiting...\n"));
}

#[test]
fn real_format_is_configurable() {
    let config = ReplConfig { format: RealFormat::Fixed { decimals: 3 },
                              ..quiet_config() };
    let (_, output) = run_session("1.0 / 8\n10 / 4\n", config);

    assert_eq!(output, "0.125\n2 (integer division)\n");
}

#[test]
fn invalid_utf8_line_fails_without_ending_the_session() {
    let (stats, output) = run_raw_session(b"1 + 1\n\xff + 2\n3 * 4\n", quiet_config());

    assert_eq!(output,
               "2\n\
                Error: Invalid number format\n\
                12\n");
    assert_eq!(stats,
               ReplStats { evaluated: 2,
                           failed:    1,
                           skipped:   0, });
}
