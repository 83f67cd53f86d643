use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use studyplan_core::{
    PlanningCycle, PlanningState, RankedTask, StudyPlanner, priority_score, score_breakdown,
};
use studyplan_ingest::{
    PlannerInput, demo_input, format_local, load_input_file, now_in_timezone,
    parse_local_timestamp,
};

mod config;
mod logging;
mod output;
mod state;

use config::{Config, init_config, load_config};

#[derive(Parser, Debug)]
#[command(
    name = "studyplan",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("STUDYPLAN_BUILD_SHA"), ")"),
    about = "Rank coursework and fill free time with study sessions"
)]
struct Cli {
    /// Log planner activity to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank tasks, build a study plan, and print reminders
    Plan(PlanArgs),

    /// Show the task ranking without planning
    Rank {
        #[command(flatten)]
        source: SourceArgs,

        /// Print each task's score breakdown
        #[arg(long, default_value_t = false)]
        explain: bool,
    },

    /// Manage ~/.studyplan/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Planner input JSON (defaults to a built-in demo)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Reference instant, e.g. 2026-01-02T18:00 (defaults to now in the configured timezone)
    #[arg(long)]
    now: Option<String>,
}

#[derive(Args, Debug)]
struct PlanArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Task to record progress against
    #[arg(long)]
    progress_task_id: Option<String>,

    /// Minutes completed on --progress-task-id
    #[arg(long, default_value_t = 0, requires = "progress_task_id")]
    progress_minutes: i64,

    /// Rebuild the plan after recording progress
    #[arg(long, default_value_t = false, requires = "progress_task_id")]
    reschedule: bool,

    /// Print one JSON document instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective config
    Show,
    /// Print the config file location
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Plan(args) => {
            let cfg = load_config()?;
            plan(args, &cfg)?;
        }

        Command::Rank { source, explain } => {
            let cfg = load_config()?;
            rank(source, explain, &cfg)?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => init_config()?,
            ConfigCommand::Show => {
                let cfg = load_config()?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
            ConfigCommand::Path => {
                println!("{}", state::config_path()?.display());
            }
        },
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<PlannerInput> {
    match path {
        Some(p) => {
            if !p.exists() {
                bail!("input not found: {} (pass --input <file.json>)", p.display());
            }
            load_input_file(p)
        }
        None => {
            tracing::info!("no --input given, using built-in demo data");
            Ok(demo_input())
        }
    }
}

fn resolve_reference(now: Option<&str>, cfg: &Config) -> Result<NaiveDateTime> {
    match now {
        Some(s) => parse_local_timestamp(s).context("--now"),
        None => now_in_timezone(&cfg.profile.timezone)
            .with_context(|| format!("config.toml [profile] timezone = {:?}", cfg.profile.timezone)),
    }
}

fn plan(args: PlanArgs, cfg: &Config) -> Result<()> {
    let input = read_input(args.source.input.as_deref())?;
    let reference = resolve_reference(args.source.now.as_deref(), cfg)?;

    if args.progress_task_id.is_some() && args.progress_minutes <= 0 {
        tracing::warn!(
            minutes = args.progress_minutes,
            "progress ignored: --progress-minutes must be positive"
        );
    }

    let cycle = PlanningCycle {
        tasks: input.tasks()?,
        intervals: input.intervals()?,
        reference,
        progress: args
            .progress_task_id
            .map(|id| (id, args.progress_minutes)),
        reschedule: args.reschedule,
    };

    let mut planner = StudyPlanner::new(cfg.allocator, cfg.reminders)?;
    let outcome = planner.run(cycle)?;

    if args.json {
        output::print_json(&outcome, planner.log(), reference)?;
        return Ok(());
    }

    println!("# Study plan as of {}", format_local(reference));
    output::print_ranked(&outcome.ranked);
    output::print_plan(&outcome.plan);
    output::print_reminders(&outcome.reminders);
    output::print_log(planner.log());

    Ok(())
}

fn rank(source: SourceArgs, explain: bool, cfg: &Config) -> Result<()> {
    let input = read_input(source.input.as_deref())?;
    let reference = resolve_reference(source.now.as_deref(), cfg)?;

    let mut state = PlanningState::new();
    state.load_tasks(input.tasks()?)?;

    let ranked = state.ranked(reference);
    if explain {
        let explained: Vec<_> = ranked
            .into_iter()
            .map(|t| (score_breakdown(t, reference), t))
            .collect();
        output::print_explained(&explained);
    } else {
        let snapshot: Vec<_> = ranked
            .into_iter()
            .enumerate()
            .map(|(i, t)| RankedTask {
                rank: i + 1,
                score: priority_score(t, reference),
                task: t.clone(),
            })
            .collect();
        output::print_ranked(&snapshot);
    }

    Ok(())
}
