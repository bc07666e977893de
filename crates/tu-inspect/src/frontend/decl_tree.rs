//! The owned declaration tree and the lowering from Clang's JSON AST.
//!
//! Clang's dump interleaves declarations with statement and expression
//! layers. Lowering flattens those layers away: every declaration attaches
//! to its nearest enclosing declaration node, and reference expressions
//! accumulate in a flat scan, both in pre-order (source) order.

use clang_ast::{BareSourceLocation, SourceLocation};
use tracing::debug;

use super::clang_nodes::{Clang, DeclData, Node, RefExprData};
use crate::loc::SourceLoc;

/// Closed set of declaration kinds the queries distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Function,
    Variable,
    /// Namespaces, records, enums, linkage specs and the unit root.
    Container,
    /// Remaining named declarations (typedefs, fields, enum constants).
    Other,
}

/// A node in the declaration tree. Owned by the parsed unit; traversals
/// borrow and never outlive it.
#[derive(Debug, Clone)]
pub struct DeclNode {
    pub kind: DeclKind,
    /// Empty for anonymous entities.
    pub name: String,
    /// `None` for compiler-synthesized declarations.
    pub loc: Option<SourceLoc>,
    /// Child declarations in declaration order. A function's parameters and
    /// body-local variables land here.
    pub children: Vec<DeclNode>,
}

impl DeclNode {
    pub fn is_function(&self) -> bool {
        matches!(self.kind, DeclKind::Function)
    }

    pub fn is_container(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A use site of a named entity inside executable code.
///
/// No link back to the referenced declaration is kept: symbol matching is
/// purely lexical by name.
#[derive(Debug, Clone)]
pub struct RefNode {
    pub name: String,
    pub loc: Option<SourceLoc>,
}

/// Lower a deserialized AST dump into the declaration tree plus the
/// reference scan.
pub(crate) fn lower(root: &Node) -> (DeclNode, Vec<RefNode>) {
    let mut unit = DeclNode {
        kind: DeclKind::Container,
        name: String::new(),
        loc: None,
        children: Vec::new(),
    };
    let mut refs = Vec::new();
    for child in &root.inner {
        lower_node(child, &mut unit.children, &mut refs);
    }
    debug!("[lower] built declaration tree, {} references", refs.len());
    (unit, refs)
}

fn lower_node(
    node: &Node,
    siblings: &mut Vec<DeclNode>,
    refs: &mut Vec<RefNode>,
) {
    match &node.kind {
        Clang::FunctionDecl(data) | Clang::CXXMethodDecl(data) => {
            attach(node, data, DeclKind::Function, siblings, refs);
        },
        Clang::VarDecl(data) | Clang::ParmVarDecl(data) => {
            attach(node, data, DeclKind::Variable, siblings, refs);
        },
        Clang::NamespaceDecl(data)
        | Clang::CXXRecordDecl(data)
        | Clang::EnumDecl(data)
        | Clang::LinkageSpecDecl(data) => {
            attach(node, data, DeclKind::Container, siblings, refs);
        },
        Clang::TypedefDecl(data) | Clang::FieldDecl(data) | Clang::EnumConstantDecl(data) => {
            attach(node, data, DeclKind::Other, siblings, refs);
        },
        Clang::DeclRefExpr(data) => {
            collect_ref(data, refs);
            for child in &node.inner {
                lower_node(child, siblings, refs);
            }
        },
        Clang::Other {
            ..
        } => {
            // Statement/expression layer: pass through to the enclosing decl.
            for child in &node.inner {
                lower_node(child, siblings, refs);
            }
        },
    }
}

fn attach(
    node: &Node,
    data: &DeclData,
    kind: DeclKind,
    siblings: &mut Vec<DeclNode>,
    refs: &mut Vec<RefNode>,
) {
    let mut children = Vec::new();
    for child in &node.inner {
        lower_node(child, &mut children, refs);
    }
    siblings.push(DeclNode {
        kind,
        name: data.name().to_owned(),
        loc: decl_loc(data.loc.as_ref()),
        children,
    });
}

fn collect_ref(
    data: &RefExprData,
    refs: &mut Vec<RefNode>,
) {
    let name = match data.referenced_decl.as_ref().and_then(|r| r.name.as_deref()) {
        Some(n) if !n.is_empty() => n,
        _ => return,
    };

    // Prefer range.begin for the precise token position, fall back to loc.
    let source_loc = data.range.as_ref().map(|r| &r.begin).or(data.loc.as_ref());
    refs.push(RefNode {
        name: name.to_owned(),
        loc: source_loc.and_then(ref_loc),
    });
}

/// For declarations, prefer the spelling location so macro-generated
/// declarations resolve to the declaration text rather than call-site lines.
fn decl_loc(loc: Option<&SourceLocation>) -> Option<SourceLoc> {
    let loc = loc?;
    let bare = loc.spelling_loc.as_ref().or(loc.expansion_loc.as_ref())?;
    to_source_loc(bare)
}

/// For references, prefer the expansion location, the position the user
/// sees in their source file.
fn ref_loc(loc: &SourceLocation) -> Option<SourceLoc> {
    let bare = loc.expansion_loc.as_ref().or(loc.spelling_loc.as_ref())?;
    to_source_loc(bare)
}

fn to_source_loc(bare: &BareSourceLocation) -> Option<SourceLoc> {
    if bare.line == 0 || bare.file.is_empty() {
        return None;
    }
    // The presumed position accounts for #line directives, matching what a
    // compiler diagnostic would print.
    let file = bare.presumed_file.as_deref().unwrap_or(&bare.file);
    let line = bare.presumed_line.unwrap_or(bare.line);
    Some(SourceLoc {
        file: file.to_string(),
        line: line as u32,
        col: bare.col as u32,
    })
}

#[cfg(test)]
#[path = "../../tests/src/frontend/decl_tree_tests.rs"]
mod tests;
