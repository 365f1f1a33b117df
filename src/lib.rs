use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

pub mod domain;
pub mod error;
pub mod search;
pub mod trace;

#[cfg(feature = "python")]
mod python;

use crate::domain::water_jug::WaterJug;

pub use crate::error::{Error, Result};

extern crate pest;
#[macro_use]
extern crate pest_derive;

pub const DEFAULT_PUZZLE: &str = "jugs-4-3";

thread_local!{
    pub static PUZZLES: RefCell<HashMap<String, Arc<WaterJug>>> = {
        let mut map: HashMap<String, Arc<WaterJug>> = HashMap::new();
        map.insert(String::from(DEFAULT_PUZZLE), Arc::new(WaterJug::new(4, 3, 2)));
        map.insert(String::from("die-hard"), Arc::new(WaterJug::new(5, 3, 4)));
        map.insert(String::from("jugs-8-5"), Arc::new(WaterJug::new(8, 5, 4)));
        // No solution: every reachable amount is even.
        map.insert(String::from("jugs-6-4"), Arc::new(WaterJug::new(6, 4, 3)));
        RefCell::new(map)
    };
}

/// Looks up a named puzzle.
pub fn puzzle(name: &str) -> Result<Arc<WaterJug>> {
    PUZZLES.with(|puzzles| {
        puzzles.borrow().get(name).cloned()
            .ok_or_else(|| Error::UnknownPuzzle { name: name.to_string() })
    })
}

/// Registers a puzzle under `name`. Returns false if it replaced an existing one.
pub fn register_puzzle(name: &str, puzzle: WaterJug) -> bool {
    PUZZLES.with(|puzzles| {
        puzzles.borrow_mut().insert(name.to_string(), Arc::new(puzzle)).is_none()
    })
}

pub fn puzzle_names() -> Vec<String> {
    PUZZLES.with(|puzzles| {
        let mut names = puzzles.borrow().keys().cloned().collect::<Vec<String>>();
        names.sort();
        names
    })
}
