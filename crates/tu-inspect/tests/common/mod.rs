#![allow(dead_code)]

use tu_inspect::{DeclKind, DeclNode, RefNode, SourceLoc};

pub const UNIT_FILE: &str = "/tmp/unit.cc";

pub fn loc(
    line: u32,
    col: u32,
) -> SourceLoc {
    SourceLoc {
        file: UNIT_FILE.into(),
        line,
        col,
    }
}

pub fn node(
    kind: DeclKind,
    name: &str,
    loc: Option<SourceLoc>,
    children: Vec<DeclNode>,
) -> DeclNode {
    DeclNode {
        kind,
        name: name.into(),
        loc,
        children,
    }
}

pub fn func(
    name: &str,
    line: u32,
) -> DeclNode {
    node(DeclKind::Function, name, Some(loc(line, 1)), Vec::new())
}

pub fn func_with(
    name: &str,
    line: u32,
    children: Vec<DeclNode>,
) -> DeclNode {
    node(DeclKind::Function, name, Some(loc(line, 1)), children)
}

pub fn var(
    name: &str,
    line: u32,
) -> DeclNode {
    node(DeclKind::Variable, name, Some(loc(line, 3)), Vec::new())
}

pub fn container(
    name: &str,
    line: u32,
    children: Vec<DeclNode>,
) -> DeclNode {
    node(DeclKind::Container, name, Some(loc(line, 1)), children)
}

/// A translation-unit root holding `children`.
pub fn unit_root(children: Vec<DeclNode>) -> DeclNode {
    node(DeclKind::Container, "", None, children)
}

pub fn ref_site(
    name: &str,
    line: u32,
    col: u32,
) -> RefNode {
    RefNode {
        name: name.into(),
        loc: Some(loc(line, col)),
    }
}
