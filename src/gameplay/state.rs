use crate::cards::{deal, Hand, Suit};
use crate::{Arbitrary, HAND_SIZE, PLAYERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Bid,
    Play,
}

/// per-hand scoring accumulator: low/high trump captured, game points, and
/// whether the jack of trump was captured. `low`/`high` use the sentinels
/// the reference scorer relies on (`15` = no trump seen yet for low, `0` for
/// high) so a hand where neither player ever captures a trump card resolves
/// exactly as the reference implementation resolves it.
#[derive(Debug, Clone, Copy)]
pub struct HandScore {
    pub low: u8,
    pub high: u8,
    pub game_points: u8,
    pub has_jack: bool,
}

impl Default for HandScore {
    fn default() -> Self {
        Self {
            low: 15,
            high: 0,
            game_points: 0,
            has_jack: false,
        }
    }
}

/// the play-history tag recorded for each card a player has already played
/// this hand: whether it led or responded to its trick, whether it was
/// trump, and its raw rank. `abstraction::history_bucket` turns the rank
/// into the 5-bucket classification used by the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayTag {
    pub led: bool,
    pub trump: bool,
    pub rank: u8,
}

/// the full canonical game state: bidding header, trump/trick bookkeeping,
/// both players' hidden hands and play histories, and per-hand scoring.
#[derive(Debug, Clone)]
pub struct State {
    pub dealer: u8,
    pub bid: [u8; PLAYERS],
    pub bid_forced: bool,
    pub bid_stolen: bool,
    pub winning_bidder: u8,
    pub winning_bid: u8,
    pub stage: Stage,
    pub trump: Option<Suit>,
    pub leader: u8,
    pub to_act: u8,
    pub trick_num: u8,
    pub led_suit: Option<Suit>,
    pub hand_done: bool,

    pub hand: [Hand; PLAYERS],
    pub hp: [[Option<crate::cards::Card>; HAND_SIZE]; PLAYERS],
    pub h_type: [[Option<PlayTag>; HAND_SIZE]; PLAYERS],

    pub trick_winner: [u8; HAND_SIZE],
    pub tricks_won: [u8; PLAYERS],
    pub score: [HandScore; PLAYERS],
    pub t_score: [i32; PLAYERS],
}

impl State {
    /// deal a fresh hand: `dealer` set, bidding opens with the non-dealer
    /// to act, no trump declared yet.
    pub fn deal(seed: u32, dealer: u8) -> Self {
        let hand = deal(seed);
        State {
            dealer,
            bid: [0, 0],
            bid_forced: false,
            bid_stolen: false,
            winning_bidder: 0,
            winning_bid: 0,
            stage: Stage::Bid,
            trump: None,
            leader: 0,
            to_act: 1 - dealer,
            trick_num: 0,
            led_suit: None,
            hand_done: false,
            hand,
            hp: [[None; HAND_SIZE]; PLAYERS],
            h_type: [[None; HAND_SIZE]; PLAYERS],
            trick_winner: [0; HAND_SIZE],
            tricks_won: [0, 0],
            score: [HandScore::default(), HandScore::default()],
            t_score: [0, 0],
        }
    }

    pub fn opponent(&self) -> u8 {
        1 - self.to_act
    }
}

impl Arbitrary for State {
    /// a reachable-ish state for property tests: deal, then burn a
    /// deterministic handful of plays from the seed so history/hand
    /// histograms are non-trivial.
    fn random(seed: u32) -> Self {
        use super::play::legal_plays;
        let dealer = (seed % 2) as u8;
        let mut state = State::deal(seed, dealer);
        state.stage = Stage::Play;
        state.trump = None;
        state.leader = state.to_act;

        let plays = 1 + (seed / 7) % 4;
        for step in 0..plays {
            let classes = legal_plays(&state);
            if classes.is_empty() || state.hand_done {
                break;
            }
            let pick = classes[(seed.wrapping_add(step) as usize) % classes.len()];
            super::play::apply_play(&mut state, pick);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_sets_bidding_stage_and_non_dealer_to_act() {
        let state = State::deal(7, 0);
        assert_eq!(state.stage, Stage::Bid);
        assert_eq!(state.to_act, 1);
        assert!(state.trump.is_none());
    }

    #[test]
    fn hand_and_trick_num_invariant_holds_at_deal() {
        let state = State::deal(7, 1);
        for p in 0..PLAYERS {
            assert_eq!(state.hand[p].len() + state.trick_num as usize, HAND_SIZE);
        }
    }
}
