// Depth-limited and iterative deepening tree search.

use std::rc::Rc;

use tracing::{debug, trace};

use crate::domain::Problem;
use super::{Bound, Node, ProblemNode, Search, SearchLimits, SearchOutcome, SearchStats};

enum Step<S, A> {
    Found(Rc<Node<S, A>>),
    // Some path was cut at the depth limit.
    Cutoff,
    // Every path from here ended without reaching the limit.
    Failure,
    OutOfBudget,
}

/// Iterative deepening: depth-limited tree search with limits 0, 1, 2, ...
///
/// Only states already on the current path are skipped, so memory stays
/// proportional to the depth, at the cost of re-expanding states reached by
/// different paths. Solutions have minimum length, like breadth-first search.
/// An iteration that finishes without cutting any path has seen every simple
/// path, which ends the search as `Exhausted`.
#[derive(Clone, Debug, Default)]
pub struct IterativeDeepeningSearch {
    limits: SearchLimits,
    stats: SearchStats,
}

impl IterativeDeepeningSearch {
    pub fn new(limits: SearchLimits) -> IterativeDeepeningSearch {
        IterativeDeepeningSearch { limits: limits, stats: SearchStats::default() }
    }

    /// One depth-limited pass from the initial state. `Cutoff` and `Failure`
    /// both come back as `None`; use `Search::search` to tell them apart.
    pub fn depth_limited_search<P: Problem>(&mut self, problem: &P, limit: usize)
                                            -> Option<Rc<ProblemNode<P>>> {
        self.stats = SearchStats::default();
        let root = Node::root(problem.initial_state());

        match self.recursive_dls(problem, &root, limit) {
            Step::Found(n) => Some(n),
            _ => None,
        }
    }

    fn recursive_dls<P: Problem>(&mut self, problem: &P, node: &Rc<ProblemNode<P>>, limit: usize)
                                 -> Step<P::State, P::Action> {
        self.stats.max_frontier = self.stats.max_frontier.max(node.depth() + 1);

        if problem.is_goal(node.state()) {
            return Step::Found(Rc::clone(node));
        }

        if node.depth() >= limit {
            return Step::Cutoff;
        }

        if let Some(max) = self.limits.max_expansions {
            if self.stats.expanded >= max {
                return Step::OutOfBudget;
            }
        }

        self.stats.expanded += 1;
        trace!(state = ?node.state(), depth = node.depth(), limit = limit, "expanding");

        let mut cutoff = false;

        for action in problem.actions(node.state()) {
            let child_state = problem.result(node.state(), &action);

            if node.on_path(&child_state) {
                self.stats.revisits += 1;
                continue;
            }

            self.stats.generated += 1;
            let child = Node::child(node, action, child_state);

            match self.recursive_dls(problem, &child, limit) {
                Step::Cutoff => cutoff = true,
                Step::Failure => {},
                done => return done,
            }
        }

        if cutoff { Step::Cutoff } else { Step::Failure }
    }
}

impl Search for IterativeDeepeningSearch {
    fn name(&self) -> &'static str {
        "iterative-deepening"
    }

    fn search<P: Problem>(&mut self, problem: &P) -> SearchOutcome<P::State, P::Action> {
        self.stats = SearchStats::default();

        let root = Node::root(problem.initial_state());
        debug!(initial = ?root.state(), limits = ?self.limits, "starting iterative deepening search");

        let mut limit = 0;

        loop {
            if let Some(max) = self.limits.max_depth {
                if limit > max {
                    debug!(expanded = self.stats.expanded, "depth limit reached");
                    return SearchOutcome::Bounded(Bound::Depth(max));
                }
            }

            match self.recursive_dls(problem, &root, limit) {
                Step::Found(n) => {
                    debug!(depth = n.depth(), expanded = self.stats.expanded, "solution found");
                    return SearchOutcome::Solved(n);
                },
                Step::Failure => {
                    debug!(expanded = self.stats.expanded, "state space exhausted without a solution");
                    return SearchOutcome::Exhausted;
                },
                Step::OutOfBudget => {
                    let max = self.limits.max_expansions.unwrap_or(self.stats.expanded);
                    debug!(expanded = self.stats.expanded, "expansion limit reached");
                    return SearchOutcome::Bounded(Bound::Expansions(max));
                },
                Step::Cutoff => limit += 1,
            }
        }
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
