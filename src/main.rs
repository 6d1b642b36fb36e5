use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use kse_update::config::{APP_NAME, log_path, preferences_path};
use kse_update::preferences::PreferenceStore;
use kse_update::update::browser::SystemBrowser;
use kse_update::update::dispatch;
use kse_update::update::prompt::Prompter;
use kse_update::update::source::HttpVersionSource;
use kse_update::update::{UpdateChecker, run_auto_check};
use kse_update::version::Version;

#[derive(Parser)]
#[command(name = "kse-update")]
#[command(version, about = "Check for a newer KeyStore Explorer release")]
struct Cli {
    /// Version of the running application
    #[arg(long, default_value = env!("CARGO_PKG_VERSION"))]
    current_version: String,

    /// Preferences file (defaults to the data directory)
    #[arg(long)]
    preferences: Option<PathBuf>,

    /// Write log lines as JSON
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check now and report every outcome
    Check,
    /// Check only if the configured interval has passed; stay quiet unless an update exists
    Auto,
}

/// Prompts on the controlling terminal
struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn show_info(&self, title: &str, message: &str) {
        println!("[{}] {}", title, message);
    }

    fn confirm(&self, title: &str, message: &str) -> bool {
        print!("[{}] {} [y/N] ", title, message);
        if let Err(e) = io::stdout().flush() {
            debug!("Failed to flush stdout: {}", e);
        }

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }

    fn show_error(&self, title: &str, message: &str) {
        eprintln!("[{}] {}", title, message);
    }
}

fn init_logging(json: bool) -> Option<WorkerGuard> {
    let path = log_path();
    let (Some(dir), Some(file_name)) = (path.parent(), path.file_name()) else {
        eprintln!("kse-update: invalid log path {}, logging disabled", path.display());
        return None;
    };
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!(
            "kse-update: cannot create log directory {}: {}, logging disabled",
            dir.display(),
            e
        );
        return None;
    }

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }

    Some(guard)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.log_json);

    let current = Version::parse(&cli.current_version)
        .with_context(|| format!("invalid --current-version '{}'", cli.current_version))?;

    let store = PreferenceStore::new(&cli.preferences.unwrap_or_else(preferences_path));
    let preferences = store.load().context("failed to load preferences")?;

    let user_agent = format!("{}/{}", APP_NAME.replace(' ', ""), current);
    let source = HttpVersionSource::from_config(&preferences.update, &user_agent)
        .context("failed to create HTTP client")?;
    let checker = UpdateChecker::from_config(
        current,
        &preferences.update,
        Arc::new(source),
        Arc::new(SystemBrowser),
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let prompter = TerminalPrompter;

    match cli.command {
        Command::Check => {
            runtime.block_on(checker.manual_check(&prompter));
        }
        Command::Auto => {
            let (ui, ui_loop) = dispatch::channel();
            let today = Local::now().date_naive();

            let task = runtime.spawn(async move {
                run_auto_check(&store, &checker, today, &ui).await
            });

            // This thread owns the prompter; it returns once the task drops its handle
            ui_loop.run(&prompter);

            if let Err(e) = runtime.block_on(task)? {
                error!("Failed to update preferences: {}", e);
            }
        }
    }

    Ok(())
}
