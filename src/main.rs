use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use calcline::{
    evaluate_line,
    interpreter::value::RealFormat,
    repl::{DEFAULT_PROMPT, Repl, ReplConfig, user_message},
};
use clap::Parser;

/// calcline evaluates `number operator number` expressions, choosing integer
/// or floating-point arithmetic from how the numbers are written.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates a single expression, prints the result and exits.
    #[arg(short, long, conflicts_with = "file")]
    expression: Option<String>,

    /// Evaluates every line of a file instead of reading from the terminal.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Suppresses the usage banner.
    #[arg(short, long, conflicts_with = "file")]
    quiet: bool,

    /// Text shown before each line in interactive mode.
    #[arg(long, default_value = DEFAULT_PROMPT, conflicts_with = "file")]
    prompt: String,

    /// Prints real results with this many digits after the decimal point.
    #[arg(long, conflicts_with = "shortest")]
    precision: Option<usize>,

    /// Prints real results in the shortest form that reads back exactly.
    #[arg(long)]
    shortest: bool,
}

impl Args {
    fn real_format(&self) -> RealFormat {
        match (self.precision, self.shortest) {
            (Some(decimals), _) => RealFormat::Fixed { decimals },
            (None, true) => RealFormat::Shortest,
            (None, false) => RealFormat::default(),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let format = args.real_format();

    if let Some(expression) = &args.expression {
        return match evaluate_line(expression) {
            Ok(evaluation) => {
                println!("{}", evaluation.format_with(format));
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{}", user_message(&e));
                ExitCode::FAILURE
            },
        };
    }

    let result = if let Some(path) = &args.file {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        };
        let config = ReplConfig { prompt: String::new(),
                                  banner: false,
                                  format };
        Repl::new(BufReader::new(file), io::stdout().lock(), config).run()
    } else {
        let config = ReplConfig { prompt: args.prompt,
                                  banner: !args.quiet,
                                  format };
        Repl::new(io::stdin().lock(), io::stdout().lock(), config).run()
    };

    match result {
        Ok(stats) => {
            log::debug!("{} evaluated, {} failed, {} skipped",
                        stats.evaluated,
                        stats.failed,
                        stats.skipped);
            ExitCode::SUCCESS
        },
        Err(e) => {
            log::warn!("session aborted by an I/O error: {e}");
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        },
    }
}
