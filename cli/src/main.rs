use clap::Parser;
use clap::error::ErrorKind;
use cron_expand_core::{CronParser, format_output};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "cron-expand", version)]
#[command(about = "Expand a cron expression into the values each field denotes")]
struct Cli {
    /// Full expression in one argument, e.g. "*/15 0 1,15 * 1-5 /usr/bin/find".
    #[arg(value_name = "EXPRESSION", allow_hyphen_values = true, num_args = 0..)]
    expression: Vec<String>,
}

fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            eprintln!("Error: {}", usage_message(&err));
            std::process::exit(1);
        }
    };

    match run(&cli) {
        Ok(report) => println!("{report}"),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> cron_expand_core::Result<String> {
    let parser = CronParser::default();
    let parsed = parser.parse_args(&cli.expression)?;
    debug!(command = %parsed.command, "expression parsed");
    Ok(format_output(&parsed))
}

/// First line of clap's rendered error, without its own `error: ` prefix.
fn usage_message(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphen_expression_reaches_parser() {
        let cli = Cli::try_parse_from(["cron-expand", "-5/3 * * * * /folder/file"]).unwrap();
        assert_eq!(cli.expression, ["-5/3 * * * * /folder/file"]);
        let err = run(&cli).unwrap_err();
        assert!(matches!(
            err,
            cron_expand_core::CronError::OutOfBounds { value: -5, .. }
        ));
    }

    #[test]
    fn test_usage_message_names_offending_argument() {
        let err = Cli::try_parse_from(["cron-expand", "--version=now"]).unwrap_err();
        let message = usage_message(&err);
        assert!(!message.starts_with("error:"), "{message}");
        assert!(message.contains("--version"), "{message}");
    }
}
