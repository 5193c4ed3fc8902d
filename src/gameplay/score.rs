use super::state::State;
use crate::{PLAYERS, Utility};

/// tally low/high/game/jack from the completed hand's play histories, then
/// apply the bidder's set penalty if they failed their contract.
///
/// Low and High are decided by each player's lowest/highest trump rank
/// *captured*: both cards of a trick are credited to that trick's winner,
/// not to whoever happened to play them, so a player who leads a trump
/// card and then loses the trick gets no credit for it. A tie, or neither
/// player ever capturing a trump card, awards the category to player 1
/// rather than nobody. This mirrors the reference scorer's sentinel-based
/// comparison (`low` init `15`, `high` init `0`) exactly; see DESIGN.md.
pub fn score(state: &mut State) {
    debug_assert!(state.hand_done);
    state.score = Default::default();

    for trick in 0..crate::HAND_SIZE {
        let winner = state.trick_winner[trick] as usize;
        for p in 0..PLAYERS {
            let Some(card) = state.hp[p][trick] else {
                continue;
            };
            if Some(card.suit) != state.trump {
                continue;
            }
            if card.rank < state.score[winner].low {
                state.score[winner].low = card.rank;
            }
            if card.rank > state.score[winner].high {
                state.score[winner].high = card.rank;
            }
            if card.rank == 11 {
                state.score[winner].has_jack = true;
            }
        }
    }

    for trick in 0..crate::HAND_SIZE {
        let winner = state.trick_winner[trick] as usize;
        let points: u8 = (0..PLAYERS)
            .filter_map(|p| state.hp[p][trick])
            .map(|c| c.game_points())
            .sum();
        state.score[winner].game_points += points;
    }

    let low_winner = if state.score[0].low < state.score[1].low { 0 } else { 1 };
    let high_winner = if state.score[0].high > state.score[1].high { 0 } else { 1 };
    let game_winner = if state.score[0].game_points > state.score[1].game_points {
        Some(0)
    } else if state.score[1].game_points > state.score[0].game_points {
        Some(1)
    } else {
        None
    };

    let mut t_score = [0i32, 0];
    t_score[low_winner] += 1;
    t_score[high_winner] += 1;
    if let Some(winner) = game_winner {
        t_score[winner] += 1;
    }
    if state.score[0].has_jack {
        t_score[0] += 1;
    } else if state.score[1].has_jack {
        t_score[1] += 1;
    }

    let bidder = state.winning_bidder as usize;
    let contract = state.winning_bid as i32 + 1;
    if t_score[bidder] < contract {
        t_score[bidder] = -contract;
    }

    state.t_score = t_score;
}

/// utility from player 0's perspective: `t_score[0] - t_score[1]`.
pub fn utility(state: &State) -> Utility {
    debug_assert!(state.hand_done);
    (state.t_score[0] - state.t_score[1]) as Utility
}
