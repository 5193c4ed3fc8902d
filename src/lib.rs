#![allow(dead_code)]

pub mod abstraction;
pub mod cards;
pub mod cfr;
pub mod gameplay;
pub mod strategy;

/// dimensional analysis types
pub type Probability = f32;
pub type Utility = f32;

// game tree parameters
pub const PLAYERS: usize = 2;
pub const HAND_SIZE: usize = 6;
pub const DECK_SIZE: usize = 52;

// abstraction parameters
pub const KEY_BYTES: usize = 15;
pub const MAX_ACTIONS: usize = 8;

// cfr shard/hash-table parameters
pub const NODE_QTY: usize = 10_000_000;
pub const SEED_STRIDE: u32 = 10_000;

/// trait for randomized test fixtures, mirroring `Arbitrary` from tests
/// written against larger CFR codebases: a type that can be conjured
/// straight from an RNG without any surrounding game context.
pub trait Arbitrary {
    fn random(seed: u32) -> Self;
}

/// initialize terminal logging for the CLI binaries.
pub fn init() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term]).expect("initialize logger");
}
