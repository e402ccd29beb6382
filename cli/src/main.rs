mod view;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use duetrack_core::{
    data_dir, help_text, sample_tracker, Config, FileTrackerRepository, LogicManager,
    ModelManager, TaskTracker, TrackerParser, TrackerRepository,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "duetrack")]
#[command(about = "Track module deadlines and plan what to do today", long_about = None)]
struct Cli {
    /// Directory holding config.json and the task data (default: ~/.duetrack)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Start with an empty tracker instead of sample data when no data file exists
    #[arg(long)]
    empty: bool,

    /// Run a single command (e.g. `duetrack dueIn day/3`) instead of the prompt
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let dir = data_dir(cli.data_dir)?;
    let config = Config::load_or_create(&dir)?;
    let repo = FileTrackerRepository::new(config.tracker_path(&dir));

    let tracker = load_tracker(&repo, &config, cli.empty)?;
    let parser = TrackerParser::new(config.default_due_in_days);
    let mut logic = LogicManager::new(ModelManager::new(tracker), repo, parser);

    if !cli.command.is_empty() {
        run_line(&mut logic, &cli.command.join(" "));
        return Ok(());
    }

    view::show_tasks(logic.model());
    view::show_daily_tasks(logic.model());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break; // EOF
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if run_line(&mut logic, &line) {
            break;
        }
    }
    Ok(())
}

fn load_tracker(repo: &FileTrackerRepository, config: &Config, empty: bool) -> Result<TaskTracker> {
    match repo.load() {
        Ok(Some(tracker)) => Ok(tracker),
        Ok(None) if !empty && config.seed_sample_data => {
            info!("Starting with sample data");
            sample_tracker()
        }
        Ok(None) => Ok(TaskTracker::new()),
        Err(e) => {
            warn!(
                error = %format!("{:#}", e),
                "Data file could not be read, starting with an empty tracker"
            );
            Ok(TaskTracker::new())
        }
    }
}

/// Runs one command and prints the outcome. Returns true when the user asked to exit.
fn run_line<R: TrackerRepository>(logic: &mut LogicManager<R>, line: &str) -> bool {
    match logic.execute(line) {
        Ok(result) => {
            println!("{}", result.feedback);
            if result.show_help {
                println!("\n{}", help_text());
            } else if !result.exit {
                view::show_tasks(logic.model());
                view::show_daily_tasks(logic.model());
            }
            result.exit
        }
        Err(e) => {
            println!("{}", e);
            false
        }
    }
}
