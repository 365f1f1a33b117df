// Step-by-step rendering of a solution path.

use std::fmt::Display;
use std::rc::Rc;

use crate::domain::Problem;
use crate::search::{ProblemNode, SearchOutcome};

pub const ROOT_LABEL: &str = "Initial State";
pub const SOLVED_BANNER: &str = "✅ Solution found!";
pub const NO_SOLUTION: &str = "❌ No solution could be found.";

fn row(step: &str, action: &str, state: &str) -> String {
    format!("{:<5} | {:<20} | {}\n", step, action, state)
}

/// Renders the path ending at `goal` as a table with one row per step,
/// followed by the total number of steps.
pub fn render_table<P>(problem: &P, goal: &Rc<ProblemNode<P>>, state_header: &str) -> String
where P: Problem,
      P::State: Display,
{
    let mut out = row("Step", "Action Applied", state_header);
    out.push_str(&"-".repeat(60));
    out.push('\n');

    for (step, node) in goal.path().iter().enumerate() {
        let action = match node.action() {
            Some(a) => problem.describe(a),
            None => String::from(ROOT_LABEL),
        };
        out.push_str(&row(&step.to_string(), &action, &node.state().to_string()));
    }

    out.push_str(&format!("\nTotal steps required: {}", goal.depth()));
    out
}

/// The full report for a finished search: banner and table on success,
/// otherwise a message saying why nothing was found.
pub fn render_outcome<P>(problem: &P, outcome: &SearchOutcome<P::State, P::Action>,
                         state_header: &str) -> String
where P: Problem,
      P::State: Display,
{
    match outcome {
        SearchOutcome::Solved(goal) =>
            format!("{}\n{}", SOLVED_BANNER, render_table(problem, goal, state_header)),
        SearchOutcome::Exhausted => String::from(NO_SOLUTION),
        SearchOutcome::Bounded(bound) =>
            format!("Search stopped at the {} before finding a solution.", bound),
    }
}

#[cfg(test)]
mod test {
    use crate::domain::water_jug::WaterJug;
    use crate::search::{breadth_first_graph_search, Bound, BreadthFirstSearch, Search,
                        SearchOutcome};
    use super::{render_outcome, render_table};

    const HEADER: &str = "Current State (Jug4, Jug3)";

    #[test]
    fn test_render_table() {
        let d = WaterJug::new(4, 3, 2);
        let goal = breadth_first_graph_search(&d).unwrap();
        let table = render_table(&d, &goal, HEADER);
        let lines = table.lines().collect::<Vec<&str>>();

        assert_eq!(lines[0], "Step  | Action Applied       | Current State (Jug4, Jug3)");
        assert_eq!(lines[1], "-".repeat(60));
        assert_eq!(lines[2], "0     | Initial State        | (0, 0)");
        assert_eq!(lines[3], "1     | Fill Jug4            | (4, 0)");
        assert_eq!(lines[4], "2     | Pour Jug4 to Jug3    | (1, 3)");
        assert_eq!(lines[8], "6     | Pour Jug4 to Jug3    | (2, 3)");
        assert_eq!(lines[9], "");
        assert_eq!(lines[10], "Total steps required: 6");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_render_outcome() {
        let d = WaterJug::new(4, 3, 2);
        let solved = render_outcome(&d, &BreadthFirstSearch::default().search(&d), HEADER);
        assert!(solved.starts_with("✅ Solution found!\nStep  |"));
        assert!(solved.ends_with("Total steps required: 6"));

        let stuck = WaterJug::new(6, 4, 3);
        assert_eq!(render_outcome(&stuck, &BreadthFirstSearch::default().search(&stuck), HEADER),
                   "❌ No solution could be found.");

        let bounded: SearchOutcome<_, _> = SearchOutcome::Bounded(Bound::Depth(3));
        assert_eq!(render_outcome(&d, &bounded, HEADER),
                   "Search stopped at the depth limit of 3 before finding a solution.");
    }
}
