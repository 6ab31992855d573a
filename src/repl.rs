use std::io::{self, BufRead, Write};

use crate::{error::CalcError, evaluate_line, interpreter::value::RealFormat};

/// Lines that end the session instead of being evaluated.
pub const EXIT_COMMANDS: [&str; 3] = ["q", "quit", "exit"];

/// The prompt shown before each line unless configured otherwise.
pub const DEFAULT_PROMPT: &str = "Calculator> ";

const BANNER: &str = "Calculator Demo
======================================
Use +, -, *, / to perform calculations
Format: number operator number (e.g., 2.5 + 3 or 10 / 2)
Enter 'q' to exit
";

/// Settings for a [`Repl`] session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Text written before each line is read. Empty disables the prompt.
    pub prompt: String,
    /// Whether to print the usage banner when the session starts.
    pub banner: bool,
    /// How real results are printed.
    pub format: RealFormat,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self { prompt: DEFAULT_PROMPT.to_string(),
               banner: true,
               format: RealFormat::default() }
    }
}

/// Counters describing a finished session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplStats {
    /// Lines that produced a value.
    pub evaluated: usize,
    /// Lines that produced a parse or evaluation error.
    pub failed:    usize,
    /// Empty lines.
    pub skipped:   usize,
}

/// What the session should do after handling one line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// A read-evaluate-print loop over arbitrary line input and text output.
///
/// Every failure is reported to `output` and the loop continues, including
/// lines that are not valid UTF-8; only I/O errors end a session early.
pub struct Repl<R, W> {
    input:  R,
    output: W,
    config: ReplConfig,
    stats:  ReplStats,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Creates a session reading from `input` and writing to `output`.
    pub fn new(input: R, output: W, config: ReplConfig) -> Self {
        Self { input,
               output,
               config,
               stats: ReplStats::default() }
    }

    /// Runs the session until an exit command or the end of input.
    ///
    /// # Errors
    /// Returns any I/O error raised while reading input or writing output.
    ///
    /// # Example
    /// ```
    /// use std::io::Cursor;
    ///
    /// use calcline::repl::{Repl, ReplConfig};
    ///
    /// let config = ReplConfig { prompt: String::new(),
    ///                           banner: false,
    ///                           ..ReplConfig::default() };
    /// let mut output = Vec::new();
    /// let repl = Repl::new(Cursor::new("7 / 2\nq\n"), &mut output, config);
    /// let stats = repl.run().unwrap();
    ///
    /// assert_eq!(stats.evaluated, 1);
    /// assert_eq!(String::from_utf8(output).unwrap(),
    ///            "3 (integer division)\nExiting...\n");
    /// ```
    pub fn run(mut self) -> io::Result<ReplStats> {
        if self.config.banner {
            writeln!(self.output, "{BANNER}")?;
        }

        let mut buffer = Vec::new();
        loop {
            if !self.config.prompt.is_empty() {
                write!(self.output, "{}", self.config.prompt)?;
                self.output.flush()?;
            }

            buffer.clear();
            if self.input.read_until(b'\n', &mut buffer)? == 0 {
                log::debug!("end of input reached");
                break;
            }

            // Invalid UTF-8 becomes U+FFFD and fails as a malformed operand.
            let line = String::from_utf8_lossy(&buffer);
            if self.handle_line(line.trim_end_matches(['\n', '\r']))? == Flow::Exit {
                break;
            }
        }

        self.output.flush()?;
        log::info!("session finished: {:?}", self.stats);
        Ok(self.stats)
    }

    fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        if line.is_empty() {
            self.stats.skipped += 1;
            writeln!(self.output, "Please enter an expression or 'q' to quit")?;
            return Ok(Flow::Continue);
        }

        if EXIT_COMMANDS.contains(&line) {
            writeln!(self.output, "Exiting...")?;
            return Ok(Flow::Exit);
        }

        match evaluate_line(line) {
            Ok(evaluation) => {
                self.stats.evaluated += 1;
                writeln!(self.output, "{}", evaluation.format_with(self.config.format))?;
            },
            Err(e) => {
                self.stats.failed += 1;
                log::debug!("line '{line}' failed: {e}");
                writeln!(self.output, "{}", user_message(&e))?;
            },
        }

        Ok(Flow::Continue)
    }
}

/// Returns the message shown to a user for a failed line.
///
/// All parse failures share one message; each evaluation failure has its own.
///
/// # Example
/// ```
/// use calcline::{error::CalcError, evaluate_line, repl::user_message};
///
/// let err = evaluate_line("5 / 0").unwrap_err();
/// assert_eq!(user_message(&err), "Error: Division by zero");
///
/// let err = evaluate_line("5").unwrap_err();
/// assert_eq!(user_message(&err), "Invalid format. Use: number operator number");
/// ```
#[must_use]
pub fn user_message(error: &CalcError) -> String {
    match error {
        CalcError::Parse(_) => "Invalid format. Use: number operator number".to_string(),
        CalcError::Eval(e) => format!("Error: {}", e.user_message()),
    }
}
