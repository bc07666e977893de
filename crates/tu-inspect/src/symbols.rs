//! Symbol definition and use lookup.
//!
//! Matching is lexical: exact, case-sensitive name equality, with no scope
//! or binding resolution. A target that happens to collide with an
//! unrelated declaration in another scope is still reported; callers that
//! need real binding resolution need a different tool.

use crate::frontend::{DeclKind, DeclNode, ParsedUnit, RefNode};
use crate::loc::SourceLoc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Definition,
    Use,
}

/// One report produced by the locator. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolMatch {
    pub kind: MatchKind,
    pub name: String,
    pub loc: Option<SourceLoc>,
}

/// Definition sites: `Variable`-kind declarations (globals, parameters and
/// body locals alike) whose name equals `target`. Full pre-order, so
/// results come out in source order.
pub fn definitions(
    root: &DeclNode,
    target: &str,
) -> Vec<SymbolMatch> {
    fn descend(
        node: &DeclNode,
        target: &str,
        out: &mut Vec<SymbolMatch>,
    ) {
        if node.kind == DeclKind::Variable && node.name == target {
            out.push(SymbolMatch {
                kind: MatchKind::Definition,
                name: node.name.clone(),
                loc: node.loc.clone(),
            });
        }
        for child in &node.children {
            descend(child, target, out);
        }
    }

    let mut out = Vec::new();
    descend(root, target, &mut out);
    out
}

/// Use sites: entries of the reference scan whose name equals `target`.
/// The scan is already in source order.
pub fn uses(
    references: &[RefNode],
    target: &str,
) -> Vec<SymbolMatch> {
    references
        .iter()
        .filter(|site| site.name == target)
        .map(|site| SymbolMatch {
            kind: MatchKind::Use,
            name: site.name.clone(),
            loc: site.loc.clone(),
        })
        .collect()
}

/// All definition reports, then all use reports. No match is an empty
/// vector, not an error.
pub fn locate(
    unit: &ParsedUnit,
    target: &str,
) -> Vec<SymbolMatch> {
    let mut matches = definitions(unit.root(), target);
    matches.extend(uses(unit.references(), target));
    matches
}
