use super::action::Bid;
use super::state::{Stage, State};

/// legal bids for whoever is `to_act`, given any bid already placed by the
/// other player this hand.
pub fn legal_bids(state: &State) -> Vec<Bid> {
    debug_assert_eq!(state.stage, Stage::Bid);
    let first_bidder = 1 - state.dealer;
    if state.to_act == first_bidder {
        return vec![Bid::Pass, Bid::Two, Bid::Three, Bid::Four];
    }
    match state.bid[first_bidder as usize] {
        0 => vec![Bid::Pass],
        1 => vec![Bid::Two, Bid::Three, Bid::Four],
        2 => vec![Bid::Three, Bid::Four],
        3 => vec![Bid::Four],
        b => panic!("unexpected first bid value: {b}"),
    }
}

/// record `bid` for the acting player and, once both have bid, resolve the
/// contract and transition into the play stage.
pub fn apply_bid(state: &mut State, bid: Bid) {
    debug_assert_eq!(state.stage, Stage::Bid);
    let first_bidder = 1 - state.dealer;
    state.bid[state.to_act as usize] = bid.to_byte();

    if state.to_act == first_bidder {
        state.to_act = state.dealer;
        return;
    }

    resolve_contract(state);
}

fn resolve_contract(state: &mut State) {
    let first_bidder = (1 - state.dealer) as usize;
    let dealer = state.dealer as usize;
    let first = state.bid[first_bidder];
    let second = state.bid[dealer];

    if first == 0 && second == 0 {
        state.bid_forced = true;
        state.winning_bidder = state.dealer;
        state.winning_bid = Bid::Two.to_byte();
    } else if second == 0 {
        state.winning_bidder = first_bidder as u8;
        state.winning_bid = first;
    } else if second == first {
        state.bid_stolen = true;
        state.winning_bidder = state.dealer;
        state.winning_bid = second;
    } else {
        // second bidder (the dealer) can only pass or bid strictly higher
        // than the first bid, per `legal_bids`, so `second > first` here.
        state.winning_bidder = state.dealer;
        state.winning_bid = second;
    }

    state.stage = Stage::Play;
    state.trump = None;
    state.leader = state.winning_bidder;
    state.to_act = state.winning_bidder;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_pass_forces_dealer_to_two() {
        let mut state = State::deal(1, 0);
        apply_bid(&mut state, Bid::Pass);
        apply_bid(&mut state, Bid::Pass);
        assert!(state.bid_forced);
        assert_eq!(state.winning_bidder, state.dealer);
        assert_eq!(state.winning_bid, Bid::Two.to_byte());
        assert_eq!(state.stage, Stage::Play);
        assert!(state.trump.is_none());
    }

    #[test]
    fn equal_positive_bids_are_a_dealer_steal() {
        let mut state = State::deal(2, 0);
        apply_bid(&mut state, Bid::Two);
        apply_bid(&mut state, Bid::Two);
        assert!(state.bid_stolen);
        assert_eq!(state.winning_bidder, state.dealer);
    }

    #[test]
    fn strictly_higher_second_bid_wins() {
        let mut state = State::deal(3, 0);
        apply_bid(&mut state, Bid::Two);
        apply_bid(&mut state, Bid::Three);
        assert_eq!(state.winning_bidder, state.dealer);
        assert_eq!(state.winning_bid, Bid::Three.to_byte());
        assert!(!state.bid_stolen);
    }

    #[test]
    fn first_bidder_wins_over_a_pass() {
        let mut state = State::deal(4, 0);
        apply_bid(&mut state, Bid::Three);
        apply_bid(&mut state, Bid::Pass);
        assert_eq!(state.winning_bidder, 1 - state.dealer);
        assert_eq!(state.winning_bid, Bid::Three.to_byte());
    }
}
