//! Test data: a small object graph with optional links, and call-counting
//! stand-ins for delegates.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================================
// World / Tree / Branch / Leaf
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Leaf {
    green: bool,
}

impl Leaf {
    pub fn green() -> Self {
        Self { green: true }
    }

    pub fn withered() -> Self {
        Self { green: false }
    }

    pub fn is_green(&self) -> bool {
        self.green
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Branch {
    leaf: Option<Leaf>,
}

impl Branch {
    pub fn with_leaf(leaf: Leaf) -> Self {
        Self { leaf: Some(leaf) }
    }

    pub fn bare() -> Self {
        Self { leaf: None }
    }

    pub fn leaf(&self) -> Option<&Leaf> {
        self.leaf.as_ref()
    }

    pub fn set_leaf(&mut self, leaf: Option<Leaf>) {
        self.leaf = leaf;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tree {
    branch: Option<Branch>,
}

impl Tree {
    pub fn with_branch(branch: Branch) -> Self {
        Self {
            branch: Some(branch),
        }
    }

    pub fn bare() -> Self {
        Self { branch: None }
    }

    pub fn branch(&self) -> Option<&Branch> {
        self.branch.as_ref()
    }

    pub fn branch_mut(&mut self) -> Option<&mut Branch> {
        self.branch.as_mut()
    }

    pub fn set_branch(&mut self, branch: Option<Branch>) {
        self.branch = branch;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct World {
    tree: Option<Tree>,
}

impl World {
    pub fn with_tree(tree: Tree) -> Self {
        Self { tree: Some(tree) }
    }

    pub fn tree(&self) -> Option<&Tree> {
        self.tree.as_ref()
    }
}

/// A tree whose only branch carries a green leaf.
pub fn green_tree() -> Tree {
    Tree::with_branch(Branch::with_leaf(Leaf::green()))
}

/// A world holding [`green_tree`].
pub fn green_world() -> World {
    World::with_tree(green_tree())
}

// =============================================================================
// Kinds and models for memoization
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    A,
    B,
    C,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    kind: Kind,
    label: String,
}

impl Model {
    pub fn new(kind: Kind, label: &str) -> Self {
        Self {
            kind,
            label: label.to_string(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Records every kind it is asked about; only `Kind::B` is relevant.
#[derive(Debug, Default)]
pub struct RelevanceService {
    calls: Mutex<Vec<Kind>>,
}

impl RelevanceService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_relevant(&self, kind: Kind) -> bool {
        self.calls.lock().expect("calls lock poisoned").push(kind);
        matches!(kind, Kind::B)
    }

    pub fn calls_for(&self, kind: Kind) -> usize {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .iter()
            .filter(|called| **called == kind)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().expect("calls lock poisoned").len()
    }
}

// =============================================================================
// Call counting
// =============================================================================

/// Thread-safe invocation counter.
#[derive(Debug, Default)]
pub struct CallCounter {
    calls: AtomicUsize,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one call and returns how many calls preceded it.
    pub fn tick(&self) -> usize {
        self.calls.fetch_add(1, Ordering::SeqCst)
    }

    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}
