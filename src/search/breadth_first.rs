// Breadth-first graph search.

use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use tracing::{debug, trace};

use crate::domain::Problem;
use super::{Bound, Node, ProblemNode, Search, SearchLimits, SearchOutcome, SearchStats};

/// Breadth-first graph search with duplicate-state elimination.
///
/// Every distinct state is expanded at most once, and the first goal node
/// generated is at minimum depth. When several actions reach a goal at that
/// depth, the one returned earliest by `Problem::actions` wins.
#[derive(Clone, Debug, Default)]
pub struct BreadthFirstSearch {
    limits: SearchLimits,
    stats: SearchStats,
}

impl BreadthFirstSearch {
    pub fn new(limits: SearchLimits) -> BreadthFirstSearch {
        BreadthFirstSearch { limits: limits, stats: SearchStats::default() }
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Runs the search, calling `on_expand` for every node taken off the
    /// frontier, in expansion order.
    pub fn search_observed<P, F>(&mut self, problem: &P, mut on_expand: F)
                                 -> SearchOutcome<P::State, P::Action>
    where P: Problem,
          F: FnMut(&ProblemNode<P>),
    {
        self.stats = SearchStats::default();

        let root = Node::root(problem.initial_state());
        debug!(initial = ?root.state(), limits = ?self.limits, "starting breadth-first search");

        if problem.is_goal(root.state()) {
            return self.finish(SearchOutcome::Solved(root));
        }

        let mut frontier = VecDeque::new();
        let mut visited = HashSet::new();

        visited.insert(root.state().clone());
        frontier.push_back(root);
        self.stats.max_frontier = 1;

        // Set when a new state was left ungenerated because of max_depth.
        let mut depth_cut = false;

        while let Some(node) = frontier.pop_front() {
            if let Some(max) = self.limits.max_expansions {
                if self.stats.expanded >= max {
                    return self.finish(SearchOutcome::Bounded(Bound::Expansions(max)));
                }
            }

            self.stats.expanded += 1;
            trace!(state = ?node.state(), depth = node.depth(), "expanding");
            on_expand(&*node);

            let at_depth_limit = self.limits.max_depth.map_or(false, |d| node.depth() >= d);

            for action in problem.actions(node.state()) {
                let child_state = problem.result(node.state(), &action);

                if visited.contains(&child_state) {
                    self.stats.revisits += 1;
                    continue;
                }

                if at_depth_limit {
                    depth_cut = true;
                    continue;
                }

                // Marked before enqueueing, so a state reached twice in the
                // same round is only queued once.
                visited.insert(child_state.clone());
                self.stats.generated += 1;

                let child = Node::child(&node, action, child_state);

                if problem.is_goal(child.state()) {
                    return self.finish(SearchOutcome::Solved(child));
                }

                frontier.push_back(child);
            }

            self.stats.max_frontier = self.stats.max_frontier.max(frontier.len());
        }

        match self.limits.max_depth {
            Some(d) if depth_cut => self.finish(SearchOutcome::Bounded(Bound::Depth(d))),
            _ => self.finish(SearchOutcome::Exhausted),
        }
    }

    fn finish<S, A>(&self, outcome: SearchOutcome<S, A>) -> SearchOutcome<S, A> {
        let stats = &self.stats;
        match &outcome {
            SearchOutcome::Solved(n) => debug!(depth = n.depth(), expanded = stats.expanded,
                                               generated = stats.generated, "solution found"),
            SearchOutcome::Exhausted => debug!(expanded = stats.expanded,
                                               "state space exhausted without a solution"),
            SearchOutcome::Bounded(bound) => debug!(expanded = stats.expanded, %bound,
                                                    "search stopped by a limit"),
        }
        outcome
    }
}

impl Search for BreadthFirstSearch {
    fn name(&self) -> &'static str {
        "breadth-first"
    }

    fn search<P: Problem>(&mut self, problem: &P) -> SearchOutcome<P::State, P::Action> {
        self.search_observed(problem, |_| {})
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// Unbounded breadth-first graph search; `None` when no goal is reachable.
pub fn breadth_first_graph_search<P: Problem>(problem: &P) -> Option<Rc<ProblemNode<P>>> {
    BreadthFirstSearch::default().search(problem).into_node()
}
