// Definition of a search problem.

pub mod water_jug;

use std::fmt::Debug;
use std::hash::Hash;

use rand_pcg::Pcg64;

pub trait Problem {
    // Compared and hashed by value: duplicate detection relies on it.
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Eq + Hash + Debug;

    fn initial_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    // Actions legal in `state`, in a deterministic order. Actions that would
    // leave the state unchanged are never returned.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    // Only defined for actions returned by `actions(state)`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    // Human-readable label for an action.
    fn describe(&self, action: &Self::Action) -> String {
        format!("{:?}", action)
    }
}

fn new_rng(seed: u64) -> Pcg64 {
    Pcg64::new(0xcafef00dd15ea5e5u64.wrapping_add(seed).into(),
               0xa02bdbf7bb3c0a7ac28fa16a64abf96)
}
