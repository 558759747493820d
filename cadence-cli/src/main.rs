use anyhow::{bail, Context, Result};
use cadence_core::{
    bounds_in, build_agenda, classify_title, format_detail_in, parse_date, parse_titles_md,
    ActionSnapshot, ClassifierOutput, Locale, PeriodCycle,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod state;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "cadence", version, about = "Classify actions and track them by period")]
struct Cli {
    /// Label language (overrides [display] locale): ko | en
    #[arg(long, global = true)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify action titles as routine / mission / reference
    Classify {
        /// Titles to classify (defaults to bullets in ~/.cadence/actions.md)
        titles: Vec<String>,

        /// Markdown file whose bullet items are titles
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print classifier output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the period containing a date
    Bounds {
        /// daily | weekly | monthly | quarterly | yearly
        #[arg(long)]
        cycle: PeriodCycle,

        /// YYYY-MM-DD (default: today in the configured timezone)
        #[arg(long)]
        date: Option<String>,
    },

    /// Evaluate a day's action list from a JSON array of snapshots
    Agenda {
        /// Snapshot file (defaults to ~/.cadence/snapshots.json)
        #[arg(long)]
        file: Option<PathBuf>,

        /// YYYY-MM-DD (default: today in the configured timezone)
        #[arg(long)]
        date: Option<String>,

        /// Include actions that are not due
        #[arg(long)]
        all: bool,

        /// Print the agenda as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage ~/.cadence/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config()?;
    let locale = cli.locale.unwrap_or(cfg.display.locale);

    match cli.command {
        Command::Classify { titles, file, json } => {
            let titles = collect_titles(titles, file)?;
            classify_titles(&titles, json, locale)?;
        }

        Command::Bounds { cycle, date } => {
            let date = resolve_date(date.as_deref(), &cfg)?;
            let b = bounds_in(date, cycle, locale)?;
            println!("{} ~ {}  {}", b.start, b.end, b.label);
        }

        Command::Agenda {
            file,
            date,
            all,
            json,
        } => {
            let date = resolve_date(date.as_deref(), &cfg)?;
            agenda(file, date, all, json, locale)?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config()?,
        },
    }

    Ok(())
}

fn resolve_date(date: Option<&str>, cfg: &Config) -> Result<NaiveDate> {
    match date {
        Some(s) => Ok(parse_date(s)?),
        None => cfg.today(),
    }
}

fn collect_titles(mut titles: Vec<String>, file: Option<PathBuf>) -> Result<Vec<String>> {
    if let Some(path) = file {
        titles.extend(parse_titles_md(&state::read_text(&path)?));
    } else if titles.is_empty() {
        let path = state::actions_path()?;
        if !path.exists() {
            bail!(
                "No titles given and {} does not exist (pass titles or --file <path>)",
                path.display()
            );
        }
        titles = parse_titles_md(&state::read_text(&path)?);
    }

    if titles.is_empty() {
        bail!("no titles to classify");
    }
    Ok(titles)
}

fn classify_titles(titles: &[String], json: bool, locale: Locale) -> Result<()> {
    let outputs: Vec<ClassifierOutput> = titles.iter().map(|t| classify_title(t)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
        return Ok(());
    }

    for (title, out) in titles.iter().zip(&outputs) {
        let detail = format_detail_in(&out.result().settings, locale);
        println!(
            "{:<9} {:<6} {:<10} {}  [{}]",
            out.kind.as_str(),
            out.confidence.as_str(),
            detail,
            title.trim(),
            out.debug.matched_rule
        );
    }
    Ok(())
}

fn agenda(
    file: Option<PathBuf>,
    date: NaiveDate,
    all: bool,
    json: bool,
    locale: Locale,
) -> Result<()> {
    let path = match file {
        Some(p) => p,
        None => state::snapshots_path()?,
    };
    if !path.exists() {
        bail!("Snapshot file not found: {} (pass --file <path>)", path.display());
    }

    let snapshots: Vec<ActionSnapshot> = serde_json::from_str(&state::read_text(&path)?)
        .with_context(|| format!("parsing {}", path.display()))?;
    let agenda = build_agenda(&snapshots, date, locale);

    if json {
        println!("{}", serde_json::to_string_pretty(&agenda)?);
        return Ok(());
    }

    println!("# Agenda for {}\n", agenda.date);
    for e in agenda.entries.iter().filter(|e| all || e.due) {
        let mark = match &e.progress {
            None => " ",
            Some(p) if p.view.is_completed => "x",
            Some(_) => " ",
        };
        let count = match e.progress.as_ref().map(|p| (p.view.check_count, p.view.target)) {
            Some((n, Some(target))) => format!(" {n}/{target}"),
            Some((n, None)) if n > 0 => format!(" {n}"),
            _ => String::new(),
        };
        let period = e
            .progress
            .as_ref()
            .and_then(|p| p.period_label.as_deref())
            .map(|l| format!(" ({l})"))
            .unwrap_or_default();
        let hidden = if e.due { "" } else { " [not due]" };
        let setup = if e.configured { "" } else { " [needs settings]" };
        println!("- [{mark}] {} | {}{count}{period}{hidden}{setup}", e.title, e.detail);
    }

    let s = agenda.summary();
    println!(
        "\nCompleted {}/{} ({:.0}%)",
        s.completed,
        s.total,
        s.rate * 100.0
    );
    Ok(())
}
