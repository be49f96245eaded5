mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "svslink", version, about = "SVS subwoofer control-plane codec CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_encode_subcommand() {
        let cli = Cli::try_parse_from([
            "svslink",
            "--format",
            "json",
            "encode",
            r#"{"command":"set_phase","degrees":90}"#,
        ])
        .expect("encode args should parse");

        assert!(matches!(cli.command, Command::Encode(_)));
        assert!(matches!(cli.format, Some(OutputFormat::Json)));
    }

    #[test]
    fn decode_rejects_chunks_with_file() {
        let err = Cli::try_parse_from(["svslink", "decode", "aa00", "--file", "chunks.txt"])
            .expect_err("conflicting args should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn parses_params_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["svslink", "params", "--log-level", "debug"])
            .expect("params args should parse");
        assert!(matches!(cli.command, Command::Params(_)));
        assert!(matches!(cli.log_level, LogLevel::Debug));
    }
}
