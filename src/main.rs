use std::{fs, io, process};

use clap::Parser;
use mindset::interpreter::machine::{Machine, Step};
use tracing_subscriber::EnvFilter;

/// mindset runs MindSet programs, in which the whole machine state is a single
/// set.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the program, or the program itself with `--code`.
    program: String,

    /// Path to the input, or the input itself with `--inputcode`.
    input: Option<String>,

    /// Treat PROGRAM as code instead of a path.
    #[arg(short, long)]
    code: bool,

    /// Treat INPUT as code instead of a path.
    #[arg(short, long)]
    inputcode: bool,

    /// Log every step: the line index, the search, and the new universe.
    #[arg(short, long)]
    verbose: bool,

    /// Wait for a line on stdin after every step.
    #[arg(short, long)]
    step: bool,
}

fn main() {
    let args = Args::parse();

    // `RUST_LOG` wins over the defaults.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                      if args.verbose {
                                                          EnvFilter::new("mindset=debug")
                                                      } else {
                                                          EnvFilter::new("warn")
                                                      }
                                                  });

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_target(false)
                             .without_time()
                             .with_writer(io::stderr)
                             .init();

    let program = read_source(&args.program, args.code, "program");
    let input = args.input
                    .as_deref()
                    .map(|input| read_source(input, args.inputcode, "input"));

    let mut machine = Machine::from_source(&program, input.as_deref()).unwrap_or_else(|e| {
                                                                             eprintln!("{e}");
                                                                             process::exit(1);
                                                                         });

    let result = machine.run_with(|step| {
                            if args.step
                               && let Step::Advanced { index, universe } = step
                            {
                                eprintln!("line {index}: {universe}");
                                wait_for_enter();
                            }
                        });

    match result {
        Ok(set) => println!("{set}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}

/// Blocks until a line arrives on stdin. Exits the process if stdin cannot be
/// read.
fn wait_for_enter() {
    let mut pause = String::new();

    if let Err(e) = io::stdin().read_line(&mut pause) {
        eprintln!("Failed to read from stdin while stepping: {e}");
        process::exit(1);
    }
}

/// Returns `contents` itself when it is code, or the contents of the file it
/// names otherwise. Exits the process if the file cannot be read.
fn read_source(contents: &str, is_code: bool, what: &str) -> String {
    if is_code {
        return contents.to_string();
    }

    fs::read_to_string(contents).unwrap_or_else(|_| {
                                    eprintln!("Failed to read the {what} file '{contents}'. \
                                               Perhaps this file does not exist?");
                                    process::exit(1);
                                })
}
