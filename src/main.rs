//! CLI entry point for `mailcase`.

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};

use mailcase::case::{AuditLog, CaseWorkspace};
use mailcase::config::{self, Config};
use mailcase::decompose::{self, DecompositionReport};
use mailcase::export;
use mailcase::loader;

#[derive(Parser)]
#[command(
    name = "mailcase",
    version,
    about = "Parses an email file and saves headers and payloads into separate \
             files inside a case workspace for further, manual analysis."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Email file to analyze (shorthand for `analyze FILE`)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an email file into a case workspace
    Analyze {
        /// Path to the email in `.eml` format
        file: PathBuf,

        /// Case identifier (defaults to a random UUID)
        #[arg(long, value_name = "ID")]
        case_id: Option<String>,

        /// Root directory for case workspaces
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Generate a man page
    Manpage,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = config::load_config();

    // Configure logging: stderr + optional log file
    let log_level = match cli.verbose {
        0 => config.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    setup_logging(log_level, &config);

    match cli.command {
        Some(Commands::Analyze {
            file,
            case_id,
            output,
            json,
        }) => cmd_analyze(&file, case_id, output, json, &config),
        Some(Commands::Completions { shell }) => cmd_completions(shell),
        Some(Commands::Manpage) => cmd_manpage(),
        None => {
            if let Some(file) = cli.file {
                cmd_analyze(&file, None, None, false, &config)
            } else {
                anyhow::bail!("No email file given. Try `mailcase --help`.");
            }
        }
    }
}

/// Set up tracing with stderr output and optional file logging.
fn setup_logging(level: &str, config: &Config) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    // Try to set up file logging
    let log_dir = config::cache_dir(config);
    if std::fs::create_dir_all(&log_dir).is_ok() {
        let file_appender = tracing_appender::rolling::never(&log_dir, "mailcase.log");
        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .with(file_layer)
            .init();
    } else {
        // Fall back to stderr only
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
    }
}

/// Generate shell completions and print to stdout.
fn cmd_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "mailcase", &mut std::io::stdout());
    Ok(())
}

/// Generate a man page and print to stdout.
fn cmd_manpage() -> anyhow::Result<()> {
    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buf = Vec::new();
    man.render(&mut buf)?;
    std::io::Write::write_all(&mut std::io::stdout(), &buf)?;
    Ok(())
}

/// Analyze one email file into a fresh case workspace.
fn cmd_analyze(
    file: &Path,
    case_id: Option<String>,
    output: Option<PathBuf>,
    json: bool,
    config: &Config,
) -> anyhow::Result<()> {
    if !file.exists() {
        anyhow::bail!("No such email file: {}", file.display());
    }
    let source = std::fs::canonicalize(file).unwrap_or_else(|_| file.to_path_buf());

    let message = loader::eml::load_eml(&source)?;

    let cases_root = output.unwrap_or_else(|| config::cases_root(config));
    let (mut workspace, already_existed) = CaseWorkspace::create(&cases_root, case_id)?;
    let mut audit = AuditLog::new();

    audit.info(format!("Email file analysis for: {}", source.display()));
    if already_existed {
        audit.warn(format!(
            "Case directory {} exists. Overwriting...",
            workspace.directory().display()
        ));
    }
    audit.info(format!("Case ID: {}", workspace.id()));
    audit.info(format!("Case directory: {}", workspace.directory().display()));
    audit.info(format!(
        "Time of analysis: {}",
        workspace.created_at().to_rfc3339()
    ));

    export::original::copy_original(&mut workspace, &source, &mut audit)?;
    export::eml::save_eml(&mut workspace, &message, &mut audit)?;
    let report = decompose::decompose(&message, &mut workspace, &mut audit)?;
    export::headers::log_headers(&message, &mut audit);
    audit.info(format!("Case {} analysis completed.", workspace.id()));
    audit.flush_to(&mut workspace)?;

    if json {
        print_summary_json(&workspace, &report)?;
    } else {
        print_summary_table(&workspace, &report);
    }

    Ok(())
}

/// Print the run summary in a human-readable table.
fn print_summary_table(workspace: &CaseWorkspace, report: &DecompositionReport) {
    use humansize::{format_size, BINARY};

    println!();
    println!("  {:<20} {}", "Case ID", workspace.id());
    println!(
        "  {:<20} {}",
        "Case directory",
        workspace.directory().display()
    );
    println!("  {:<20} {}", "Payload parts", report.part_count);
    println!("  {:<20} {}", "Artifacts written", workspace.artifacts().len());
    println!(
        "  {:<20} {}",
        "Total size",
        format_size(workspace.bytes_written(), BINARY)
    );
    println!();
}

/// Print the run summary as JSON.
fn print_summary_json(
    workspace: &CaseWorkspace,
    report: &DecompositionReport,
) -> anyhow::Result<()> {
    let summary = serde_json::json!({
        "case_id": workspace.id(),
        "case_directory": workspace.directory().to_string_lossy(),
        "created_at": workspace.created_at().to_rfc3339(),
        "decomposition": report,
        "total_bytes": workspace.bytes_written(),
        "artifacts": workspace.artifacts(),
    });

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
