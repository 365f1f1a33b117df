// Definition of uninformed search strategies.

pub mod breadth_first;
pub mod depth_limited;
pub mod node;

use std::fmt;
use std::rc::Rc;

use crate::domain::Problem;

pub use breadth_first::{breadth_first_graph_search, BreadthFirstSearch};
pub use depth_limited::IterativeDeepeningSearch;
pub use node::Node;

pub type ProblemNode<P> = Node<<P as Problem>::State, <P as Problem>::Action>;

/// Optional bounds guarding against huge or infinite state spaces.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of nodes expanded before giving up.
    pub max_expansions: Option<usize>,
    /// No node deeper than this is generated.
    pub max_depth: Option<usize>,
}

impl SearchLimits {
    pub fn unbounded() -> SearchLimits {
        SearchLimits::default()
    }

    pub fn with_max_expansions(self, max_expansions: usize) -> SearchLimits {
        SearchLimits { max_expansions: Some(max_expansions), ..self }
    }

    pub fn with_max_depth(self, max_depth: usize) -> SearchLimits {
        SearchLimits { max_depth: Some(max_depth), ..self }
    }
}

/// The limit that stopped a search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Bound {
    Expansions(usize),
    Depth(usize),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Expansions(n) => write!(f, "expansion limit of {}", n),
            Bound::Depth(d) => write!(f, "depth limit of {}", d),
        }
    }
}

#[derive(Debug)]
pub enum SearchOutcome<S, A> {
    /// Terminal node of a shortest solution; walk its parents for the path.
    Solved(Rc<Node<S, A>>),
    /// Every reachable state was explored and none is a goal.
    Exhausted,
    /// A limit was hit before a goal was found; the space was not fully explored.
    Bounded(Bound),
}

impl<S, A> SearchOutcome<S, A> {
    pub fn node(&self) -> Option<&Rc<Node<S, A>>> {
        match self {
            SearchOutcome::Solved(n) => Some(n),
            _ => None,
        }
    }

    pub fn into_node(self) -> Option<Rc<Node<S, A>>> {
        match self {
            SearchOutcome::Solved(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.node().is_some()
    }
}

/// Counters collected during one search run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: usize,
    pub generated: usize,
    /// Successors dropped because their state had already been reached.
    pub revisits: usize,
    pub max_frontier: usize,
}

pub trait Search {
    fn name(&self) -> &'static str;

    fn search<P: Problem>(&mut self, problem: &P) -> SearchOutcome<P::State, P::Action>;

    // Statistics of the most recent run.
    fn stats(&self) -> &SearchStats;
}

#[cfg(test)]
mod test {
    use super::{Bound, SearchLimits, SearchOutcome};

    #[test]
    fn test_limits() {
        let limits = SearchLimits::unbounded().with_max_depth(3).with_max_expansions(10);
        assert_eq!(limits, SearchLimits { max_expansions: Some(10), max_depth: Some(3) });
        assert_eq!(SearchLimits::unbounded(), SearchLimits { max_expansions: None, max_depth: None });
    }

    #[test]
    fn test_outcome() {
        let bounded: SearchOutcome<u8, u8> = SearchOutcome::Bounded(Bound::Depth(4));
        assert!(!bounded.is_solved());
        assert!(bounded.into_node().is_none());
        assert_eq!(Bound::Expansions(7).to_string(), "expansion limit of 7");
        assert_eq!(Bound::Depth(4).to_string(), "depth limit of 4");
    }
}
