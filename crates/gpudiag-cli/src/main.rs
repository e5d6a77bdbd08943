//! gpudiag - accelerator health diagnostics CLI
//!
//! ## Commands
//!
//! - `run`: replay a captured engine response through the diagnostic
//!   decoder and print per-test results
//! - `tests`: list the software tests the decoder can label

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gpudiag_core::telemetry::init_tracing;
use gpudiag_core::{run_diag, test_label, DiagConfig, DiagLevel, DiagResults, GroupHandle};
use gpudiag_engine::codes::sw_test;
use gpudiag_engine::ReplaySession;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "gpudiag")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Accelerator health diagnostics", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a captured engine response as a diagnostic run
    Run {
        /// Captured response (JSON)
        #[arg(short, long)]
        response: PathBuf,

        /// Diagnostic level: quick, medium, long, extended, or a raw number
        /// (default: GPUDIAG_LEVEL or quick)
        #[arg(short, long)]
        level: Option<DiagLevel>,

        /// Target group id (default: GPUDIAG_GROUP or 0)
        #[arg(short, long)]
        group: Option<u64>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List known software tests
    Tests,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = DiagConfig::from_env().context("Invalid gpudiag environment")?;

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        config.log_level
    };
    init_tracing(cli.json || config.log_json, level);

    match cli.command {
        Commands::Run {
            response,
            level,
            group,
            format,
        } => {
            let level = level.unwrap_or(config.level);
            let group = group.map(GroupHandle::from_raw).unwrap_or(config.group);
            let output = cmd_run(&response, level, group, format).await?;
            print!("{output}");
            Ok(())
        }
        Commands::Tests => {
            print!("{}", cmd_tests());
            Ok(())
        }
    }
}

async fn cmd_run(
    response: &Path,
    level: DiagLevel,
    group: GroupHandle,
    format: OutputFormat,
) -> Result<String> {
    let session = ReplaySession::from_json_file(response)
        .with_context(|| format!("Failed to load captured response {}", response.display()))?;

    info!(response = %response.display(), level = %level, group = %group, "running diagnostic");

    let results = run_diag(&session, level, group)
        .await
        .context("Diagnostic run failed")?;

    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&results)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => Ok(render_table(&results)),
    }
}

fn cmd_tests() -> String {
    let mut out = String::new();
    for id in sw_test::ALL {
        let _ = writeln!(out, "{:>3}  {}", id, test_label(id));
    }
    out
}

fn render_table(results: &DiagResults) -> String {
    let mut out = String::new();
    if results.is_empty() {
        out.push_str("No diagnostic results.\n");
        return out;
    }

    let _ = writeln!(out, "{:<8} {:<52} {:>6}  {}", "STATUS", "TEST", "ERROR", "DETAIL");
    for result in results {
        let status = if result.status.is_empty() {
            "?"
        } else {
            result.status.as_str()
        };
        let test = if result.test_name.is_empty() {
            "(unknown test)"
        } else {
            result.test_name.as_str()
        };
        let detail = if !result.error_message.is_empty() {
            result.error_message.as_str()
        } else {
            result.test_output.as_str()
        };
        let _ = writeln!(
            out,
            "{:<8} {:<52} {:>6}  {}",
            status, test, result.error_code, detail
        );
    }
    let _ = writeln!(
        out,
        "\n{} test(s): {} passed, {} failed",
        results.len(),
        results.passed_count(),
        results.failed_count()
    );
    out
}
