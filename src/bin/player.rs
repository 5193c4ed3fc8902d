//! Evaluate a merged strategy against a random opponent, random-vs-random,
//! or against itself, optionally emitting a per-decision CSV trace.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pitch_cfr::gameplay::{apply_action, legal_actions, score, utility, Action, State};
use pitch_cfr::strategy::{get_best_action, load_strategy, Strat, MISS};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Copy, Clone, ValueEnum)]
enum Mode {
    /// strategy (player 0) vs a uniform-random opponent.
    StrategyVsRandom,
    /// both players play uniform-random (baseline).
    RandomVsRandom,
    /// strategy vs itself, tracing every decision.
    StrategyVsStrategy,
}

#[derive(Parser)]
#[command(author, version, about = "evaluate a merged CFR strategy")]
struct Args {
    #[arg(long)]
    strategy: PathBuf,

    #[arg(long, default_value_t = 1_000)]
    iterations: usize,

    #[arg(long, value_enum, default_value_t = Mode::StrategyVsRandom)]
    mode: Mode,

    #[arg(long, default_value_t = 1)]
    seed: u32,

    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() {
    pitch_cfr::init();
    if let Err(err) = run() {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let buf = load_strategy(&args.strategy).with_context(|| format!("loading {}", args.strategy.display()))?;

    let mut csv = args
        .csv
        .as_ref()
        .map(File::create)
        .transpose()
        .context("creating csv output")?;
    if let Some(file) = csv.as_mut() {
        writeln!(file, "hand,player,stage,action,misses")?;
    }

    let mut total_utility = 0.0f32;
    let mut nodes_not_found = 0usize;

    for hand in 0..args.iterations {
        let seed = args.seed.wrapping_add(hand as u32);
        let dealer = (hand % 2) as u8;
        let mut state = State::deal(seed, dealer);
        let mut rng = pitch_cfr::cards::Lcg::new(seed ^ 0x5bd1_e995);

        while !state.hand_done {
            let actor = state.to_act;
            let uses_strategy = match args.mode {
                Mode::RandomVsRandom => false,
                Mode::StrategyVsStrategy => true,
                Mode::StrategyVsRandom => actor == 0,
            };

            let action = if uses_strategy {
                pick_strategy_action(&buf, &state, &mut nodes_not_found, &mut rng)
            } else {
                pick_random_action(&state, &mut rng)
            };

            if let Some(file) = csv.as_mut() {
                writeln!(
                    file,
                    "{hand},{actor},{:?},{:#04x},{nodes_not_found}",
                    state.stage,
                    action.to_byte()
                )?;
            }

            apply_action(&mut state, action);
        }

        score(&mut state);
        total_utility += utility(&state);
    }

    log::info!(
        "played {} hands, avg utility {:.3}, nodes_not_found {}",
        args.iterations,
        total_utility / args.iterations as f32,
        nodes_not_found
    );
    Ok(())
}

fn pick_strategy_action(buf: &[Strat], state: &State, misses: &mut usize, rng: &mut pitch_cfr::cards::Lcg) -> Action {
    let byte = get_best_action(buf, state);
    if byte == MISS {
        *misses += 1;
        return pick_random_action(state, rng);
    }
    Action::from_byte(byte)
}

fn pick_random_action(state: &State, rng: &mut pitch_cfr::cards::Lcg) -> Action {
    let actions = legal_actions(state);
    let index = rng.next_range(0, actions.len() as u8 - 1) as usize;
    actions[index]
}
