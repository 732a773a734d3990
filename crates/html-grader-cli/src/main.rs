//! html-grader — entry point.

use clap::Parser;

use html_grader_cli::config::{resolve_checks_path, resolve_output_path};
use html_grader_cli::{GradeArgs, Target};

#[derive(Parser)]
#[command(
    name = "html-grader",
    about = "Check an HTML page for the presence of required CSS selectors",
    version
)]
struct Cli {
    /// Path to checks.json (also HTML_GRADER_CHECKS).
    #[arg(short, long, value_name = "check_file")]
    checks: Option<String>,

    /// URL to app; the page is saved to --output before it is checked.
    #[arg(short, long, value_name = "html_file", conflicts_with = "file")]
    url: Option<String>,

    /// Check a local HTML file instead of downloading one.
    #[arg(short, long, value_name = "html_file")]
    file: Option<String>,

    /// Where a downloaded page is saved (also HTML_GRADER_OUTPUT).
    #[arg(short, long, value_name = "path", conflicts_with = "file")]
    output: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let target = match cli.file {
        Some(file) => Target::File(file.into()),
        None => Target::Url {
            url: cli.url,
            output: resolve_output_path(cli.output.as_deref()),
        },
    };
    let args = GradeArgs {
        checks: resolve_checks_path(cli.checks.as_deref()),
        target,
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = html_grader_cli::run(&args, &mut stdout).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
