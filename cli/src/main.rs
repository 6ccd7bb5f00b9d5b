use clap::Parser;
use smp_core::{Error, MapVariableValueProvider, Smp};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

/// Read arithmetic expressions from stdin and print their results.
#[derive(Debug, Parser)]
#[command(name = "smp", version)]
struct Args {
    /// Print the RPN token sequence of each expression
    #[arg(long)]
    print_rpn: bool,

    /// JSON object of variable values; expressions are resolved against it
    #[arg(long, value_name = "FILE")]
    vars: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default)]
struct ReplOptions {
    print_rpn: bool,
    resolve: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args = Args::parse();
    let smp = match &args.vars {
        Some(path) => match load_provider(path) {
            Ok(provider) => {
                info!("loaded {} variables from {}", provider.values().len(), path.display());
                Smp::builder().provider(provider).build()
            }
            Err(e) => {
                eprintln!("Failed to load variables from {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => smp_core::shared().clone(),
    };

    let options = ReplOptions {
        print_rpn: args.print_rpn,
        resolve: args.vars.is_some(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match run(&smp, options, stdin.lock(), &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("I/O error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_provider(path: &Path) -> Result<MapVariableValueProvider, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(MapVariableValueProvider::from_json(&json)?)
}

/// Prompt/read/evaluate until `exit` or end of input.
async fn run<R: BufRead, W: Write>(
    smp: &Smp,
    options: ReplOptions,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(out, "Enter an expression: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let text = line.trim();
        if text.eq_ignore_ascii_case("exit") {
            return Ok(());
        }

        match evaluate(smp, options, text, out).await? {
            Ok(result) => writeln!(out, "Result: {}.", result)?,
            Err(e) => {
                warn!("failed to evaluate '{}': {}", text, e);
                writeln!(out, "Error: {}", e)?;
            }
        }
        writeln!(out)?;
    }
}

async fn evaluate<W: Write>(
    smp: &Smp,
    options: ReplOptions,
    text: &str,
    out: &mut W,
) -> io::Result<Result<f64, Error>> {
    let expression = match smp.parse(text) {
        Ok(expression) => expression,
        Err(e) => return Ok(Err(e.into())),
    };

    if options.print_rpn {
        writeln!(out, "RPN: {}", expression)?;
    }

    let result = if options.resolve {
        expression.compute().await
    } else {
        expression.compute_unresolved().map_err(Error::from)
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    async fn session(smp: &Smp, options: ReplOptions, input: &str) -> String {
        let mut out = Vec::new();
        run(smp, options, Cursor::new(input.as_bytes()), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_prints_results_until_exit() {
        let out = session(smp_core::shared(), ReplOptions::default(), "1+2\nEXIT\n3\n").await;
        assert_eq!(out, "Enter an expression: Result: 3.\n\nEnter an expression: ");
    }

    #[tokio::test]
    async fn test_print_rpn() {
        let options = ReplOptions {
            print_rpn: true,
            resolve: false,
        };
        let out = session(smp_core::shared(), options, "(2+3)*4\n").await;
        assert!(out.contains("RPN: 2 3 + 4 *\n"));
        assert!(out.contains("Result: 20.\n"));
    }

    #[tokio::test]
    async fn test_errors_do_not_stop_the_loop() {
        let out = session(smp_core::shared(), ReplOptions::default(), "x+1\n1+$\n2*3\n").await;
        assert!(out.contains("Error: An error occurred whilst computing an expression: expression contained unresolved variables!"));
        assert!(out.contains("      ^\n"));
        assert!(out.contains("Result: 6.\n"));
    }

    #[tokio::test]
    async fn test_resolves_with_vars() {
        let smp = Smp::builder()
            .provider(MapVariableValueProvider::from_iter([("x", 5.0)]))
            .build();
        let options = ReplOptions {
            print_rpn: false,
            resolve: true,
        };
        let out = session(&smp, options, "x+1\nexit\n").await;
        assert!(out.contains("Result: 6.\n"));
    }

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(["smp", "--print-rpn", "--vars", "vars.json"]).unwrap();
        assert!(args.print_rpn);
        assert_eq!(args.vars, Some(PathBuf::from("vars.json")));
    }
}
