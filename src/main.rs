use anyhow::{bail, Context, Result};
use clap::Parser;
use log::LevelFilter;

use rust_track::core::TurnOutcome;
use rust_track::engine::{RoundReport, TurnEngine, DIE_STREAM, GUESS_STREAM};
use rust_track::{Die, GameBuilder, GameConfig, GameRng, LinePrompt, Prompt, LAST_SQUARE};

#[derive(Debug, Parser)]
#[command(name = "rust-track", version)]
#[command(about = "Play the gated board-game track from the command line")]
struct Args {
    /// Player names (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    players: Vec<String>,

    /// Seed for roll order, dice, and automatic guesses
    #[arg(long, default_value_t = GameConfig::default().seed)]
    seed: u64,

    /// Give up after this many rounds
    #[arg(long, default_value_t = GameConfig::default().max_rounds)]
    max_rounds: u32,

    /// Answer number prompts automatically instead of reading stdin
    #[arg(long)]
    auto_guess: bool,

    /// Verbose output (step-by-step movement)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig::default()
            .with_seed(self.seed)
            .with_max_rounds(self.max_rounds)
            .with_auto_guess(self.auto_guess)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.config();
    let rng = GameRng::new(config.seed);
    let prompt: Box<dyn Prompt> = if config.auto_guess {
        Box::new(rng.for_context(GUESS_STREAM))
    } else {
        Box::new(LinePrompt::stdio())
    };

    let mut engine = GameBuilder::new()
        .players(args.players.iter().cloned())
        .config(config.clone())
        .build(rng.for_context(DIE_STREAM), prompt)
        .context("failed to set up the game")?;

    announce_order(&engine);

    for _ in 0..config.max_rounds {
        let report = engine.play_round();
        print_round(&engine, &report);
        if report.game_over {
            break;
        }
    }

    match engine.winner() {
        Some(winner) => {
            println!(
                "{} reached square {} after {} rounds!",
                engine.state().player(winner),
                LAST_SQUARE,
                engine.state().round()
            );
            Ok(())
        }
        None => bail!("no winner after {} rounds", config.max_rounds),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn announce_order<D: Die, P: Prompt>(engine: &TurnEngine<D, P>) {
    let state = engine.state();
    let names: Vec<&str> = state
        .roll_order()
        .iter()
        .map(|&id| state.player(id).name())
        .collect();
    println!("Roll order: {}", names.join(", "));
}

fn print_round<D: Die, P: Prompt>(engine: &TurnEngine<D, P>, report: &RoundReport) {
    let state = engine.state();
    println!("--- Round {} ---", report.round);
    for turn in &report.turns {
        let name = state.player(turn.player).name();
        match turn.outcome {
            TurnOutcome::Skipped => println!("{}: missed turn!", name),
            TurnOutcome::Moved { roll, to, gate, .. } => {
                let square = state.track().square(to).name();
                let note = match gate {
                    Some(g) if g.cleared => ", cleared",
                    Some(_) => ", not cleared yet",
                    None => "",
                };
                println!("{} rolled {} -> {} ({}){}", name, roll, to, square, note);
            }
        }
    }
}
