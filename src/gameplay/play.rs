use super::action::PlayClass;
use super::state::{PlayTag, State};
use crate::cards::Card;

fn card_is_legal(state: &State, card: Card) -> bool {
    if state.trump.is_none() {
        // pre-trump lead: the very first card of the hand, anything goes.
        return true;
    }
    if state.to_act == state.leader {
        return true;
    }
    let led_suit = state.led_suit.expect("led_suit set once trump is declared");
    let holds_led = state.hand[state.to_act as usize].contains_suit(led_suit);
    if !holds_led {
        return true;
    }
    card.suit == led_suit || Some(card.suit) == state.trump
}

/// the distinct legal play classes for whoever is `to_act`, in hand order,
/// with duplicate classes suppressed (actions are bucketed, not per-card).
pub fn legal_plays(state: &State) -> Vec<PlayClass> {
    let mut classes = Vec::with_capacity(crate::MAX_ACTIONS);
    for card in state.hand[state.to_act as usize].iter() {
        if !card_is_legal(state, card) {
            continue;
        }
        let class = PlayClass::classify(card.suit, card.rank, state.trump);
        if !classes.contains(&class) {
            classes.push(class);
        }
    }
    classes
}

/// bind a bucketed action back to a concrete card: the first legal card in
/// hand order whose classification matches. Deterministic by construction
/// so `(key, action)` pairs replay identically.
fn bind_card(state: &State, class: PlayClass) -> usize {
    let hand = &state.hand[state.to_act as usize];
    for index in 0..hand.len() {
        let card = hand.get(index);
        if card_is_legal(state, card) && PlayClass::classify(card.suit, card.rank, state.trump) == class {
            return index;
        }
    }
    panic!("no legal card backs action class {class:?}");
}

/// play the bound card, updating trump/led-suit bookkeeping, history, and
/// (once both players have played) resolving the trick.
pub fn apply_play(state: &mut State, class: PlayClass) {
    let p = state.to_act as usize;
    let index = bind_card(state, class);
    let card = state.hand[p].remove(index);

    if state.trump.is_none() {
        state.trump = Some(card.suit);
        state.led_suit = Some(card.suit);
    } else if state.to_act == state.leader {
        state.led_suit = Some(card.suit);
    }

    let trick = state.trick_num as usize;
    state.hp[p][trick] = Some(card);
    state.h_type[p][trick] = Some(PlayTag {
        led: state.to_act == state.leader,
        trump: Some(card.suit) == state.trump,
        rank: card.rank,
    });

    if state.to_act == state.leader {
        state.to_act = state.opponent();
        return;
    }

    resolve_trick(state);
}

fn resolve_trick(state: &mut State) {
    let trick = state.trick_num as usize;
    let leader = state.leader as usize;
    let responder = 1 - leader;
    let led = state.hp[leader][trick].expect("leader has played this trick");
    let resp = state.hp[responder][trick].expect("responder has played this trick");

    let responder_trumped = state.trump == Some(resp.suit) && state.trump != Some(led.suit);
    let winner = if responder_trumped {
        responder
    } else if resp.suit == led.suit {
        if resp.rank > led.rank {
            responder
        } else {
            leader
        }
    } else {
        leader
    };

    state.trick_winner[trick] = winner as u8;
    state.tricks_won[winner] += 1;
    state.leader = winner as u8;
    state.to_act = winner as u8;
    state.led_suit = None;
    state.trick_num += 1;

    if state.trick_num as usize == crate::HAND_SIZE {
        state.hand_done = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::action::Bid;
    use crate::gameplay::bid::apply_bid;
    use crate::gameplay::state::Stage;

    fn played_out(seed: u32) -> State {
        let mut state = State::deal(seed, 0);
        apply_bid(&mut state, Bid::Two);
        apply_bid(&mut state, Bid::Pass);
        assert_eq!(state.stage, Stage::Play);
        while !state.hand_done {
            let classes = legal_plays(&state);
            assert!(!classes.is_empty());
            apply_play(&mut state, classes[0]);
        }
        state
    }

    #[test]
    fn trump_is_set_by_first_card_led() {
        let mut state = State::deal(11, 0);
        apply_bid(&mut state, Bid::Two);
        apply_bid(&mut state, Bid::Pass);
        let led_card = state.hand[state.to_act as usize].get(0);
        apply_play(&mut state, legal_plays(&state)[0]);
        assert_eq!(state.trump, Some(led_card.suit));
    }

    #[test]
    fn hand_completes_after_six_tricks() {
        let state = played_out(22);
        assert!(state.hand_done);
        assert_eq!(state.tricks_won[0] + state.tricks_won[1], 6);
        for p in 0..crate::PLAYERS {
            assert!(state.hand[p].is_empty());
        }
    }
}
