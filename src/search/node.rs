// Search tree nodes.

use std::iter::successors;
use std::rc::Rc;

// A node in the search tree. Parents are shared between siblings and are
// never mutated, so children hold an `Rc` back-reference and nothing points
// downwards.
#[derive(Debug)]
pub struct Node<S, A> {
    state: S,
    parent: Option<Rc<Node<S, A>>>,
    action: Option<A>,
    depth: usize,
}

impl<S, A> Node<S, A> {
    pub fn root(state: S) -> Rc<Node<S, A>> {
        Rc::new(Node { state: state, parent: None, action: None, depth: 0 })
    }

    pub fn child(parent: &Rc<Node<S, A>>, action: A, state: S) -> Rc<Node<S, A>> {
        Rc::new(Node {
            state: state,
            parent: Some(Rc::clone(parent)),
            action: Some(action),
            depth: parent.depth + 1,
        })
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<&Rc<Node<S, A>>> {
        self.parent.as_ref()
    }

    // None for the root.
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    // Path cost from the root; every action costs 1.
    pub fn depth(&self) -> usize {
        self.depth
    }

    // This node followed by its parent, grandparent, ... up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = &Node<S, A>> {
        successors(Some(self), |n| n.parent.as_deref())
    }

    // Nodes from the root to this one.
    pub fn path(self: &Rc<Self>) -> Vec<Rc<Node<S, A>>> {
        let mut path = Vec::with_capacity(self.depth + 1);
        let mut current = Some(Rc::clone(self));

        while let Some(n) = current {
            current = n.parent.clone();
            path.push(n);
        }

        path.reverse();
        path
    }
}

impl<S, A: Clone> Node<S, A> {
    // Actions leading from the root to this node.
    pub fn solution(&self) -> Vec<A> {
        let mut actions: Vec<A> = self.ancestors().filter_map(|n| n.action.clone()).collect();
        actions.reverse();
        actions
    }
}

impl<S: PartialEq, A> Node<S, A> {
    // Whether `state` appears on the path from the root to this node.
    pub fn on_path(&self, state: &S) -> bool {
        self.ancestors().any(|n| n.state == *state)
    }
}
