//! CLI entry point for thermal-print-monitor
//!
//! Provides command-line interface for launching the GUI, watching a
//! directory headlessly, and previewing a single job file.

use clap::{Args, Parser, Subcommand};
use colored::*;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::mpsc::channel,
};
use thermal_print_monitor::{
    core::{receipt::render_receipt, receipt::DEFAULT_PAPER_WIDTH, MonitorSettings, PrintJob, DEFAULT_JOB_DIR},
    logging,
    monitor::DirectoryMonitor,
    ui::App,
};

#[derive(Parser)]
#[command(name = "thermal-print-monitor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the GUI monitor (default)
    Gui {
        #[command(flatten)]
        watch: WatchArgs,
    },

    /// Watch a directory and print jobs to the terminal
    Watch {
        #[command(flatten)]
        watch: WatchArgs,

        /// Paper width in columns
        #[arg(short, long, default_value_t = DEFAULT_PAPER_WIDTH)]
        width: usize,

        /// Exit after the first job
        #[arg(long)]
        once: bool,
    },

    /// Render a text file as a thermal receipt
    Preview {
        /// Path to the job file
        file: PathBuf,

        /// Paper width in columns
        #[arg(short, long, default_value_t = DEFAULT_PAPER_WIDTH)]
        width: usize,
    },
}

#[derive(Args, Clone, Default)]
struct WatchArgs {
    /// Directory to monitor (created if missing)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Delete each job file after it has been read
    #[arg(long)]
    delete: bool,

    /// Treat every new file as a job, not just *.txt
    #[arg(long)]
    all_files: bool,
}

impl WatchArgs {
    fn settings(&self) -> MonitorSettings {
        let defaults = MonitorSettings::default();
        MonitorSettings {
            extension: if self.all_files { None } else { defaults.extension.clone() },
            delete_after_read: self.delete,
            ..defaults
        }
    }

    fn expanded_dir(&self) -> anyhow::Result<Option<PathBuf>> {
        self.dir.as_deref().map(expand_path).transpose()
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        None => run_gui(&WatchArgs::default())?,
        Some(Commands::Gui { watch }) => run_gui(&watch)?,
        Some(Commands::Watch { watch, width, once }) => run_watch(&watch, width, once)?,
        Some(Commands::Preview { file, width }) => preview_file(&file, width)?,
    }

    Ok(())
}

/// Expand tilde in path
fn expand_path(path: &Path) -> anyhow::Result<PathBuf> {
    let expanded = shellexpand::tilde(
        path.to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Launch the GTK window
fn run_gui(args: &WatchArgs) -> anyhow::Result<()> {
    let app = App::new(args.settings(), args.expanded_dir()?);
    let exit_code = app.run();

    if exit_code != glib::ExitCode::SUCCESS {
        anyhow::bail!("GUI exited with an error");
    }
    Ok(())
}

/// Watch a directory and print every job as a receipt
fn run_watch(args: &WatchArgs, width: usize, once: bool) -> anyhow::Result<()> {
    let dir = args
        .expanded_dir()?
        .unwrap_or_else(|| PathBuf::from(DEFAULT_JOB_DIR));

    let (tx, rx) = channel();
    let mut monitor = DirectoryMonitor::new(args.settings(), tx);
    let watching = monitor.start(&dir)?;

    println!("{} Watching {} for print jobs", "→".cyan(), watching.display());
    if args.delete {
        println!("{} Job files are deleted after reading", "⚠".yellow());
    }
    println!();

    for job in rx.iter() {
        print_job(&job, width);
        if once {
            break;
        }
    }

    monitor.stop();
    Ok(())
}

/// Render one file as a receipt
fn preview_file(file: &Path, width: usize) -> anyhow::Result<()> {
    let path = expand_path(file)?;
    let content = fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read file: {}", e))?;

    print_job(&PrintJob::new(path, content), width);
    Ok(())
}

fn print_job(job: &PrintJob, width: usize) {
    println!(
        "{} {} {}",
        "✓".green(),
        job.file_name().bold(),
        format!("({})", job.received_at.format("%Y-%m-%d %H:%M:%S")).dimmed()
    );
    println!("{}", render_receipt(&job.content, width));
}
