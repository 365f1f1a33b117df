// Two water jugs domain.

use core::str::FromStr;
use std::fmt;

use pest::Parser;
use rand::Rng;
use tracing::trace;

use crate::error::{Error, Result};
use super::Problem;

#[derive(Parser)]
#[grammar = "domain/grammars/water_jug.pest"]
struct JugStateParser;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct JugState {
    pub a: u32,
    pub b: u32,
}

impl JugState {
    pub fn new(a: u32, b: u32) -> JugState {
        JugState { a: a, b: b }
    }
}

impl fmt::Display for JugState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

impl FromStr for JugState {
    type Err = Error;

    fn from_str(s: &str) -> Result<JugState> {
        let parse_error = |reason: String| Error::ParseState { input: s.to_string(), reason: reason };

        let root = JugStateParser::parse(Rule::state, s)
            .map_err(|e| parse_error(e.to_string()))?
            .next()
            .ok_or_else(|| parse_error(String::from("empty input")))?;

        let mut amounts = Vec::with_capacity(2);
        for pair in root.into_inner().filter(|p| p.as_rule() == Rule::amount) {
            let n = pair.as_str().parse::<u32>().map_err(|e| parse_error(e.to_string()))?;
            amounts.push(n);
        }

        match amounts.as_slice() {
            [a, b] => Ok(JugState::new(*a, *b)),
            _ => Err(parse_error(format!("expected 2 amounts, found {}", amounts.len()))),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum JugAction {
    FillA,
    FillB,
    EmptyA,
    EmptyB,
    PourAToB,
    PourBToA,
}

use JugAction::{FillA, FillB, EmptyA, EmptyB, PourAToB, PourBToA};

pub const ALL_ACTIONS: [JugAction; 6] = [FillA, FillB, EmptyA, EmptyB, PourAToB, PourBToA];

#[derive(Clone, Debug)]
pub struct WaterJug {
    capacity_a: u32,
    capacity_b: u32,
    target: u32,
    initial: JugState,
    names: [String; 2],
}

impl WaterJug {
    // Both jugs start empty.
    pub fn new(capacity_a: u32, capacity_b: u32, target: u32) -> WaterJug {
        let names = if capacity_a == capacity_b {
            [String::from("JugA"), String::from("JugB")]
        } else {
            [format!("Jug{}", capacity_a), format!("Jug{}", capacity_b)]
        };

        WaterJug {
            capacity_a: capacity_a,
            capacity_b: capacity_b,
            target: target,
            initial: JugState::default(),
            names: names,
        }
    }

    pub fn with_initial(self, initial: JugState) -> Result<WaterJug> {
        if !self.contains(&initial) {
            return Err(Error::StateOutOfBounds {
                state: initial.to_string(),
                capacity_a: self.capacity_a,
                capacity_b: self.capacity_b,
            });
        }

        Ok(WaterJug { initial: initial, ..self })
    }

    // A random instance with capacities in 1..=max_capacity and a target
    // that fits in jug A. Some instances have no solution.
    pub fn generate(seed: u64, max_capacity: u32) -> WaterJug {
        let mut rng = super::new_rng(seed);
        let max_capacity = max_capacity.max(1);

        let capacity_a = rng.gen_range(1..=max_capacity);
        let capacity_b = rng.gen_range(1..=max_capacity);
        let target = rng.gen_range(1..=capacity_a);

        WaterJug::new(capacity_a, capacity_b, target)
    }

    pub fn capacity_a(&self) -> u32 {
        self.capacity_a
    }

    pub fn capacity_b(&self) -> u32 {
        self.capacity_b
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn jug_names(&self) -> (&str, &str) {
        (&self.names[0], &self.names[1])
    }

    pub fn contains(&self, state: &JugState) -> bool {
        state.a <= self.capacity_a && state.b <= self.capacity_b
    }

    pub fn is_legal(&self, state: &JugState, action: &JugAction) -> bool {
        let JugState { a, b } = *state;

        match action {
            FillA => a < self.capacity_a,
            FillB => b < self.capacity_b,
            EmptyA => a > 0,
            EmptyB => b > 0,
            PourAToB => a > 0 && b < self.capacity_b,
            PourBToA => b > 0 && a < self.capacity_a,
        }
    }

    // Like `result`, but rejects actions that are not legal in `state`.
    pub fn try_result(&self, state: &JugState, action: &JugAction) -> Result<JugState> {
        if !self.contains(state) || !self.is_legal(state, action) {
            return Err(Error::IllegalTransition {
                action: self.describe(action),
                state: state.to_string(),
            });
        }

        Ok(self.result(state, action))
    }
}

impl Problem for WaterJug {
    type State = JugState;
    type Action = JugAction;

    fn initial_state(&self) -> JugState {
        self.initial
    }

    fn is_goal(&self, state: &JugState) -> bool {
        state.a == self.target
    }

    fn actions(&self, state: &JugState) -> Vec<JugAction> {
        ALL_ACTIONS.iter().copied().filter(|action| self.is_legal(state, action)).collect()
    }

    fn result(&self, state: &JugState, action: &JugAction) -> JugState {
        if !self.is_legal(state, action) {
            trace!(state = %state, action = ?action, "illegal action leaves state unchanged");
            return *state;
        }

        let JugState { a, b } = *state;

        match action {
            FillA => JugState::new(self.capacity_a, b),
            FillB => JugState::new(a, self.capacity_b),
            EmptyA => JugState::new(0, b),
            EmptyB => JugState::new(a, 0),
            PourAToB => {
                let amount = a.min(self.capacity_b - b);
                JugState::new(a - amount, b + amount)
            },
            PourBToA => {
                let amount = b.min(self.capacity_a - a);
                JugState::new(a + amount, b - amount)
            },
        }
    }

    fn describe(&self, action: &JugAction) -> String {
        let (ja, jb) = self.jug_names();

        match action {
            FillA => format!("Fill {}", ja),
            FillB => format!("Fill {}", jb),
            EmptyA => format!("Empty {}", ja),
            EmptyB => format!("Empty {}", jb),
            PourAToB => format!("Pour {} to {}", ja, jb),
            PourBToA => format!("Pour {} to {}", jb, ja),
        }
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;
    use crate::domain::Problem;
    use crate::error::Error;
    use super::{JugState, JugAction, WaterJug, ALL_ACTIONS};

    #[test]
    fn test_parser() {
        assert_eq!(JugState::from_str("(0, 0)").unwrap(), JugState::new(0, 0));
        assert_eq!(JugState::from_str("(4,3)").unwrap(), JugState::new(4, 3));
        assert_eq!(JugState::from_str(" 2 , 1 ").unwrap(), JugState::new(2, 1));
        assert_eq!(JugState::from_str(&JugState::new(12, 7).to_string()).unwrap(),
                   JugState::new(12, 7));

        assert!(JugState::from_str("(1, 2").is_err());
        assert!(JugState::from_str("(1, 2, 3)").is_err());
        assert!(JugState::from_str("(-1, 2)").is_err());
        assert!(matches!(JugState::from_str("(99999999999, 0)"), Err(Error::ParseState { .. })));
    }

    #[test]
    fn test_actions_never_noop() {
        let d = WaterJug::new(4, 3, 2);

        for a in 0..=4 {
            for b in 0..=3 {
                let s = JugState::new(a, b);
                for action in d.actions(&s) {
                    assert_ne!(d.result(&s, &action), s, "{:?} is a no-op in {}", action, s);
                }
                // Every action left out really is a no-op.
                for action in ALL_ACTIONS.iter().filter(|x| !d.actions(&s).contains(x)) {
                    assert_eq!(d.result(&s, action), s);
                }
            }
        }
    }

    #[test]
    fn test_actions_order() {
        let d = WaterJug::new(4, 3, 2);
        assert_eq!(d.actions(&JugState::new(0, 0)), vec![JugAction::FillA, JugAction::FillB]);
        assert_eq!(d.actions(&JugState::new(2, 1)),
                   vec![JugAction::FillA, JugAction::FillB, JugAction::EmptyA,
                        JugAction::EmptyB, JugAction::PourAToB, JugAction::PourBToA]);
        assert_eq!(d.actions(&JugState::new(4, 3)), vec![JugAction::EmptyA, JugAction::EmptyB]);
    }

    #[test]
    fn test_pour() {
        let d = WaterJug::new(4, 3, 2);
        assert_eq!(d.result(&JugState::new(4, 0), &JugAction::PourAToB), JugState::new(1, 3));
        assert_eq!(d.result(&JugState::new(4, 1), &JugAction::PourAToB), JugState::new(2, 3));
        assert_eq!(d.result(&JugState::new(1, 3), &JugAction::PourBToA), JugState::new(4, 0));
        assert_eq!(d.result(&JugState::new(0, 2), &JugAction::PourBToA), JugState::new(2, 0));
        assert_eq!(d.result(&JugState::new(3, 3), &JugAction::FillA), JugState::new(4, 3));
        assert_eq!(d.result(&JugState::new(3, 3), &JugAction::EmptyB), JugState::new(3, 0));
    }

    #[test]
    fn test_goal_ignores_jug_b() {
        let d = WaterJug::new(4, 3, 2);
        assert!(d.is_goal(&JugState::new(2, 0)));
        assert!(d.is_goal(&JugState::new(2, 3)));
        assert!(!d.is_goal(&JugState::new(0, 2)));
    }

    #[test]
    fn test_illegal_transition() {
        let d = WaterJug::new(4, 3, 2);
        let full = JugState::new(4, 0);
        assert_eq!(d.result(&full, &JugAction::FillA), full);
        assert_eq!(d.try_result(&full, &JugAction::FillA),
                   Err(Error::IllegalTransition { action: String::from("Fill Jug4"),
                                                  state: String::from("(4, 0)") }));
        assert_eq!(d.try_result(&full, &JugAction::FillB), Ok(JugState::new(4, 3)));
    }

    #[test]
    fn test_with_initial() {
        assert!(WaterJug::new(4, 3, 2).with_initial(JugState::new(4, 3)).is_ok());
        assert!(matches!(WaterJug::new(4, 3, 2).with_initial(JugState::new(5, 0)),
                         Err(Error::StateOutOfBounds { capacity_a: 4, capacity_b: 3, .. })));

        let d = WaterJug::new(4, 3, 2).with_initial(JugState::new(1, 2)).unwrap();
        assert_eq!(d.initial_state(), JugState::new(1, 2));
    }

    #[test]
    fn test_describe() {
        let d = WaterJug::new(4, 3, 2);
        assert_eq!(d.describe(&JugAction::FillA), "Fill Jug4");
        assert_eq!(d.describe(&JugAction::EmptyB), "Empty Jug3");
        assert_eq!(d.describe(&JugAction::PourAToB), "Pour Jug4 to Jug3");
        assert_eq!(d.describe(&JugAction::PourBToA), "Pour Jug3 to Jug4");

        let same = WaterJug::new(5, 5, 1);
        assert_eq!(same.describe(&JugAction::PourBToA), "Pour JugB to JugA");
    }

    #[test]
    fn test_generate() {
        for seed in 0..50 {
            let d = WaterJug::generate(seed, 9);
            assert!(d.capacity_a() >= 1 && d.capacity_a() <= 9);
            assert!(d.capacity_b() >= 1 && d.capacity_b() <= 9);
            assert!(d.target() >= 1 && d.target() <= d.capacity_a());
            assert_eq!(d.initial_state(), JugState::new(0, 0));

            let again = WaterJug::generate(seed, 9);
            assert_eq!((again.capacity_a(), again.capacity_b(), again.target()),
                       (d.capacity_a(), d.capacity_b(), d.target()));
        }
    }

    #[test]
    fn test_generate_extreme_seeds() {
        for &seed in &[u64::MAX, u64::MAX - 1, 0x3501_0ff2_2ea1_5a1b] {
            let d = WaterJug::generate(seed, 5);
            assert!(d.capacity_a() >= 1 && d.capacity_a() <= 5);
            assert!(d.target() >= 1 && d.target() <= d.capacity_a());
        }
    }
}
