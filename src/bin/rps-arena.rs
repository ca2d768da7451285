//! rps-arena
//!
//! Play Rock-Paper-Scissors with friends on one terminal. The roster,
//! scores, round number and bot RNG live in a directory (default
//! `.rps-arena`).
//!
//! Commands: list, add, remove, rename, reset, play

use clap::{Parser, Subcommand};
use rps_arena::{Arena, ArenaConfig, ArenaError, FileStore, Move, PlayerId};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Multiplayer Rock-Paper-Scissors", long_about = None)]
struct Cli {
    /// Directory holding the saved roster
    #[arg(long, default_value = ".rps-arena")]
    store: PathBuf,
    /// Seed for the bot's moves in a new store (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Leave the bot out of this round
    #[arg(long)]
    no_bot: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Show players and scores", alias = "ls")]
    List,
    #[command(about = "Register a player")]
    Add {
        #[arg(required = true)]
        name: Vec<String>,
    },
    #[command(about = "Remove a player", alias = "rm")]
    Remove { id: u32 },
    #[command(about = "Rename a player")]
    Rename {
        id: u32,
        #[arg(required = true)]
        name: Vec<String>,
    },
    #[command(about = "Zero every score")]
    Reset,
    #[command(about = "Play one round, e.g. `play 1=rock 2=paper`")]
    Play {
        #[arg(required = true, value_parser = parse_pick)]
        picks: Vec<(PlayerId, Move)>,
    },
}

fn parse_pick(s: &str) -> Result<(PlayerId, Move), String> {
    let (id, hand) = s
        .split_once('=')
        .ok_or_else(|| format!("expected <id>=<move>, got {:?}", s))?;
    let id = id
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("bad player id {:?}: {}", id, e))?;
    let hand = hand.parse::<Move>().map_err(|e| e.to_string())?;
    Ok((PlayerId::new(id), hand))
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn print_scores(arena: &Arena) {
    for player in arena.roster().leaderboard() {
        let tag = if player.is_bot { "CPU" } else { "Human" };
        println!("{:>4}  {:<20} {:<5} {}", player.id.raw(), player.name, tag, player.score);
    }
}

fn run(cli: Cli) -> Result<(), ArenaError> {
    let config = ArenaConfig::default()
        .with_bot(!cli.no_bot)
        .with_seed(cli.seed.unwrap_or_else(clock_seed));
    let mut store = FileStore::new(&cli.store);
    let mut arena = Arena::load(&store, config);

    match cli.command {
        Command::List => {
            print_scores(&arena);
            return Ok(());
        }
        Command::Add { name } => {
            let id = arena.add_player(&name.join(" "));
            println!("added {} as {}", arena.roster().name_of(id), id);
        }
        Command::Remove { id } => {
            let removed = arena.remove_player(PlayerId::new(id))?;
            println!("removed {}", removed.name);
        }
        Command::Rename { id, name } => {
            arena.rename_player(PlayerId::new(id), &name.join(" "))?;
        }
        Command::Reset => {
            arena.reset_scores();
            println!("scores reset");
        }
        Command::Play { picks } => {
            for (id, hand) in picks {
                arena.select(id, hand)?;
            }
            let report = arena.play_round_seeded()?;
            print!("{}", report);
            println!();
            print_scores(&arena);
        }
    }

    arena.save(&mut store)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(e) = run(Cli::parse()) {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
