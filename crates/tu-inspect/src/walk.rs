//! Declaration tree traversal.
//!
//! Three interchangeable strategies with different coverage guarantees.
//! Top-level-only iterates the unit root's direct children and misses
//! anything nested in a namespace or class. The two full traversals are
//! behavior-equivalent pre-order walks; recursive descent is the canonical
//! one, and the generic visitor is kept as the alternate expression of the
//! same traversal, pinned to it by an equivalence test.

use crate::frontend::{DeclKind, DeclNode};

/// Which traversal a caller wants. The function-listing binaries pick one
/// at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Direct children of the unit root only.
    TopLevelOnly,
    /// Full pre-order traversal via [`DeclVisitor`] dispatch.
    GenericVisitor,
    /// Full pre-order traversal by explicit recursion.
    #[default]
    RecursiveDescent,
}

/// Top-level-only strategy. Lazy; O(direct children).
pub fn top_level_functions(root: &DeclNode) -> impl Iterator<Item = &DeclNode> {
    root.children.iter().filter(|decl| decl.is_function())
}

/// Generic visitor over every node kind. Traversal is pre-order,
/// depth-first, children in declaration order.
pub trait DeclVisitor<'ast> {
    fn visit_function(
        &mut self,
        _node: &'ast DeclNode,
    ) {
    }

    fn visit_variable(
        &mut self,
        _node: &'ast DeclNode,
    ) {
    }

    fn visit_other(
        &mut self,
        _node: &'ast DeclNode,
    ) {
    }
}

/// Drive a [`DeclVisitor`] over the tree rooted at `node`.
pub fn walk<'ast, V: DeclVisitor<'ast>>(
    node: &'ast DeclNode,
    visitor: &mut V,
) {
    match node.kind {
        DeclKind::Function => visitor.visit_function(node),
        DeclKind::Variable => visitor.visit_variable(node),
        DeclKind::Container | DeclKind::Other => visitor.visit_other(node),
    }
    for child in &node.children {
        walk(child, visitor);
    }
}

/// Generic-visitor strategy: collect every function declaration.
pub fn functions_visitor<'ast>(root: &'ast DeclNode) -> Vec<&'ast DeclNode> {
    struct Collector<'ast> {
        found: Vec<&'ast DeclNode>,
    }

    impl<'ast> DeclVisitor<'ast> for Collector<'ast> {
        fn visit_function(
            &mut self,
            node: &'ast DeclNode,
        ) {
            self.found.push(node);
        }
    }

    let mut collector = Collector {
        found: Vec::new(),
    };
    walk(root, &mut collector);
    collector.found
}

/// Recursive-descent strategy: emit a node if it is a function, then
/// recurse into its children if it is also a container.
pub fn functions_recursive<'ast>(root: &'ast DeclNode) -> Vec<&'ast DeclNode> {
    fn descend<'ast>(
        node: &'ast DeclNode,
        out: &mut Vec<&'ast DeclNode>,
    ) {
        if node.is_function() {
            out.push(node);
        }
        if node.is_container() {
            for child in &node.children {
                descend(child, out);
            }
        }
    }

    let mut out = Vec::new();
    descend(root, &mut out);
    out
}

/// Run the selected strategy. Zero functions is an empty result, never an
/// error.
pub fn collect_functions(
    root: &DeclNode,
    strategy: Strategy,
) -> Vec<&DeclNode> {
    match strategy {
        Strategy::TopLevelOnly => top_level_functions(root).collect(),
        Strategy::GenericVisitor => functions_visitor(root),
        Strategy::RecursiveDescent => functions_recursive(root),
    }
}
