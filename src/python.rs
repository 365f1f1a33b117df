// Python bindings.

use pyo3::prelude::*;
use pyo3::exceptions::PyValueError;
use pyo3::wrap_pyfunction;

use crate::domain::Problem;
use crate::domain::water_jug::{JugState, WaterJug};
use crate::search::{BreadthFirstSearch, Search, SearchLimits};
use crate::trace::ROOT_LABEL;

type Steps = Vec<(String, (u32, u32))>;

fn run(d: &WaterJug, limits: SearchLimits) -> Option<Steps> {
    let goal = BreadthFirstSearch::new(limits).search(d).into_node()?;

    Some(goal.path().iter().map(|n| {
        let label = n.action().map(|a| d.describe(a)).unwrap_or_else(|| String::from(ROOT_LABEL));
        (label, (n.state().a, n.state().b))
    }).collect())
}

/// Solves a two-jug puzzle. Returns None if no solution was found, or the
/// list of (action, state) steps starting from the initial state.
#[pyfunction]
fn solve(capacity_a: u32, capacity_b: u32, target: u32, initial: Option<(u32, u32)>,
         max_expansions: Option<usize>, max_depth: Option<usize>) -> PyResult<Option<Steps>> {
    let (a, b) = initial.unwrap_or((0, 0));
    let d = WaterJug::new(capacity_a, capacity_b, target)
        .with_initial(JugState::new(a, b))
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    Ok(run(&d, SearchLimits { max_expansions: max_expansions, max_depth: max_depth }))
}

/// Solves a registered puzzle by name.
#[pyfunction]
fn solve_puzzle(name: String) -> PyResult<Option<Steps>> {
    let d = crate::puzzle(&name).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(run(&d, SearchLimits::unbounded()))
}

/// Generates a random puzzle, as (capacity_a, capacity_b, target).
#[pyfunction]
fn generate(seed: u64, max_capacity: u32) -> (u32, u32, u32) {
    let d = WaterJug::generate(seed, max_capacity);
    (d.capacity_a(), d.capacity_b(), d.target())
}

#[pyfunction]
fn register_puzzle(name: String, capacity_a: u32, capacity_b: u32, target: u32) -> bool {
    crate::register_puzzle(&name, WaterJug::new(capacity_a, capacity_b, target))
}

#[pymodule]
fn jugsearch(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(solve, m)?)?;
    m.add_function(wrap_pyfunction!(solve_puzzle, m)?)?;
    m.add_function(wrap_pyfunction!(generate, m)?)?;
    m.add_function(wrap_pyfunction!(register_puzzle, m)?)?;

    Ok(())
}
