use super::node::{get_or_create, Node};
use crate::abstraction::build_key;
use crate::gameplay::{apply_action, legal_actions, score, utility, State};
use crate::{Utility, MAX_ACTIONS};

/// regret-matching: turn accumulated regrets into this iteration's mixed
/// strategy, then fold it into the running average (`strategy_sum`) used
/// for the final serialized policy.
pub fn update_strategy(node: &mut Node) {
    let count = node.action_count as usize;
    let positive_sum: f32 = node.regret_sum[..count].iter().map(|&r| r.max(0.0)).sum();

    if positive_sum > 0.0 {
        for i in 0..count {
            node.strategy[i] = node.regret_sum[i].max(0.0) / positive_sum;
        }
    } else {
        let uniform = 1.0 / count as f32;
        node.strategy[..count].fill(uniform);
    }

    for i in 0..count {
        node.strategy_sum[i] += node.strategy[i];
    }
    node.visits += 1;
}

/// vanilla CFR over the fully-explored game tree: look up this decision's
/// node, regret-match a strategy, recurse through every legal action
/// weighted by that strategy, and (only for the acting player whose
/// perspective is `p`) accumulate instantaneous regret. Counterfactual
/// reach weights are implicitly 1; the trainer doesn't track reach
/// probabilities, trading exactness for a far simpler recursion.
pub fn recurse(mut state: State, p: u8, buckets: &mut [Option<Box<Node>>]) -> Utility {
    if state.hand_done {
        score(&mut state);
        let u = utility(&state);
        return if p == 0 { u } else { -u };
    }

    let key = build_key(&state);
    let acting = state.to_act;
    let actions = legal_actions(&state);
    let action_bytes: Vec<u8> = actions.iter().map(|a| a.to_byte()).collect();

    let (strategy, count) = {
        let node = get_or_create(buckets, key, &action_bytes);
        update_strategy(node);
        (node.strategy, node.action_count as usize)
    };

    let mut utilities = [0.0f32; MAX_ACTIONS];
    let mut u = 0.0f32;
    for i in 0..count {
        let mut next = state.clone();
        apply_action(&mut next, actions[i]);
        let u_i = recurse(next, p, buckets);
        utilities[i] = u_i;
        u += strategy[i] * u_i;
    }

    if acting == p {
        let node = get_or_create(buckets, key, &action_bytes);
        for i in 0..count {
            node.regret_sum[i] += utilities[i] - u;
        }
    }

    u
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::State;
    use crate::NODE_QTY;

    fn small_table() -> Vec<Option<Box<Node>>> {
        (0..4096).map(|_| None).collect()
    }

    #[test]
    fn update_strategy_is_uniform_with_zero_regret() {
        let mut buckets = small_table();
        let key = [0u8; crate::KEY_BYTES];
        let actions = [0x01, 0x02, 0x03];
        let node = get_or_create(&mut buckets, key, &actions);
        update_strategy(node);

        let count = node.action_count as usize;
        let sum: f32 = node.strategy[..count].iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        for i in 0..count {
            assert!((node.strategy[i] - 1.0 / count as f32).abs() < 1e-6);
        }
        assert_eq!(node.visits, 1);
    }

    #[test]
    fn a_single_hand_recursion_produces_zero_sum_utility() {
        let mut buckets = small_table();
        let state = State::deal(99, 0);
        let u0 = recurse(state.clone(), 0, &mut buckets);
        let u1 = recurse(state, 1, &mut buckets);
        // each call explores the same tree from a different player's
        // perspective; neither nets a free half-point.
        assert!(u0.abs() <= 4.0 && u1.abs() <= 4.0);
        let _ = NODE_QTY;
    }
}
