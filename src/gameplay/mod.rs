//! The pure game state machine: dealing, bidding, legal plays, trick
//! resolution, and scoring.

pub mod action;
pub mod bid;
pub mod play;
pub mod score;
pub mod state;

pub use action::{Action, Bid, Context, PlayClass, RankBucket};
pub use bid::{apply_bid, legal_bids};
pub use play::{apply_play, legal_plays};
pub use score::{score, utility};
pub use state::{HandScore, PlayTag, Stage, State};

/// every legal action at `state`'s current decision point, dispatched on
/// `stage` so callers (chiefly the CFR recursion) don't need to know
/// whether they're looking at a bid or a play.
pub fn legal_actions(state: &State) -> Vec<Action> {
    match state.stage {
        Stage::Bid => legal_bids(state).into_iter().map(Action::Bid).collect(),
        Stage::Play => legal_plays(state).into_iter().map(Action::Play).collect(),
    }
}

/// apply whichever action variant matches `state`'s current stage.
pub fn apply_action(state: &mut State, action: Action) {
    match action {
        Action::Bid(bid) => apply_bid(state, bid),
        Action::Play(class) => apply_play(state, class),
    }
}
