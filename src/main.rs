use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use rand::Rng;
use tracing::{info, warn};

use era_schedule::config::EraConfig;
use era_schedule::engine::{assemble, EraSummary};
use era_schedule::models::Era;
use era_schedule::roster::Roster;
use era_schedule::sink::{publish, period_id, DirectorySink, MemorySink, ScheduleSink};

#[derive(Parser)]
#[command(
    name = "era",
    about = "Balanced round-robin era generator",
    version,
    propagate_version = true
)]
struct Cli {
    /// Optional era.toml with defaults for every flag
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an era and publish it
    Generate {
        /// Roster file (spirits, boards, layouts)
        #[arg(short, long)]
        roster: Option<PathBuf>,
        /// Era identifier
        #[arg(short, long)]
        era_id: Option<String>,
        /// Seed; drawn from OS entropy when omitted
        #[arg(short, long)]
        seed: Option<u64>,
        /// Only use layouts designed for this many players
        #[arg(short, long)]
        players: Option<u32>,
        /// Store directory; without it the era is kept in memory only
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Check a roster without generating anything
    Check {
        #[arg(short, long)]
        roster: Option<PathBuf>,
        #[arg(short, long)]
        players: Option<u32>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("era=info".parse()?)
                .add_directive("era_schedule=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate {
            roster,
            era_id,
            seed,
            players,
            out,
            format,
        } => {
            let roster_path = roster.or(config.paths.roster.clone());
            let era_id = era_id
                .or(config.era.id.clone())
                .unwrap_or_else(|| "e01".to_string());
            let players = players.unwrap_or(config.era.players);
            let out = out.or(config.paths.output.clone());
            generate(
                roster_path.as_deref(),
                &era_id,
                seed.or(config.era.seed),
                players,
                out.as_deref(),
                &format,
            )
        }
        Commands::Check { roster, players } => {
            let roster_path = roster.or(config.paths.roster.clone());
            check(roster_path.as_deref(), players.unwrap_or(config.era.players))
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<EraConfig> {
    let Some(path) = path else {
        return Ok(EraConfig::default());
    };
    let config = EraConfig::from_file(path)
        .with_context(|| format!("loading config {}", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(config.resolve_paths(base))
}

fn load_roster(path: Option<&Path>) -> anyhow::Result<Roster> {
    let Some(path) = path else {
        bail!("no roster given: pass --roster or set [paths].roster in the config");
    };
    Roster::from_file(path).with_context(|| format!("loading roster {}", path.display()))
}

fn generate(
    roster_path: Option<&Path>,
    era_id: &str,
    seed: Option<u64>,
    players: u32,
    out: Option<&Path>,
    format: &str,
) -> anyhow::Result<()> {
    let roster = load_roster(roster_path)?;

    let seed = match seed {
        Some(seed) => seed,
        None => {
            let seed = rand::rng().random::<u64>();
            warn!(seed, "no seed given; record this seed to regenerate the era");
            seed
        }
    };

    let request = roster.to_request(players, seed);
    let era = assemble(&request).context("generating era")?;

    match out {
        Some(dir) => {
            let mut sink = DirectorySink::new(dir);
            publish_era(&era, era_id, &mut sink)?;
            info!(era_id, root = %dir.display(), "era stored");
        }
        None => {
            let mut sink = MemorySink::new();
            publish_era(&era, era_id, &mut sink)?;
        }
    }

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&era)?),
        _ => print!("{}", format_era(&era, era_id, &roster)),
    }
    Ok(())
}

fn publish_era<S: ScheduleSink>(era: &Era, era_id: &str, sink: &mut S) -> anyhow::Result<()> {
    publish(era, era_id, sink).with_context(|| format!("publishing era {era_id}"))
}

fn check(roster_path: Option<&Path>, players: u32) -> anyhow::Result<()> {
    let roster = load_roster(roster_path)?;
    let request = roster.to_request(players, 0);

    println!("spirits:  {}", request.spirits.len());
    println!("boards:   {}", request.boards.len());
    println!("layouts:  {} (for {players} players)", request.layouts.len());

    let repetitions = request.check().context("roster cannot form an era")?;
    println!(
        "ok: {} periods x {} incursions, each board used {} time(s) per period",
        request.period_count(),
        request.incursions_per_period(),
        repetitions
    );
    Ok(())
}

fn format_era(era: &Era, era_id: &str, roster: &Roster) -> String {
    let name = |id: &str| {
        roster
            .spirit(id)
            .map(|s| s.display_name().to_string())
            .unwrap_or_else(|| id.to_string())
    };

    let mut out = format!("Era {era_id} (seed {})\n", era.seed());
    for period in era.periods() {
        out.push_str(&format!("\n{}\n", period_id(period.index())));
        for inc in period.incursions() {
            out.push_str(&format!(
                "  {:>2}. {} vs {}  boards {}/{}  layout {}\n",
                inc.index(),
                name(inc.spirits().first()),
                name(inc.spirits().second()),
                inc.boards().first(),
                inc.boards().second(),
                inc.layout()
            ));
        }
    }

    let summary = EraSummary::calculate(era);
    out.push_str("\nBoard usage:\n");
    for (board, count) in &summary.board_usage {
        out.push_str(&format!("  {board}: {count}\n"));
    }
    out.push_str("Layout usage:\n");
    for (layout, count) in &summary.layout_usage {
        out.push_str(&format!("  {layout}: {count}\n"));
    }
    out
}
