//! Line-oriented report rendering.
//!
//! One result per line, no trailing summary. A declaration without a source
//! location (compiler-synthesized) renders as its bare name with no ` at …`
//! suffix.

use std::io;

use crate::frontend::DeclNode;
use crate::symbols::{MatchKind, SymbolMatch};

/// `NAME at FILE:LINE:COL`, or bare `NAME` without a location.
pub fn function_line(decl: &DeclNode) -> String {
    match &decl.loc {
        Some(loc) => format!("{} at {loc}", decl.name),
        None => decl.name.clone(),
    }
}

/// `Def of NAME at FILE:LINE:COL` / `Use of NAME at FILE:LINE:COL`.
pub fn symbol_line(symbol_match: &SymbolMatch) -> String {
    let tag = match symbol_match.kind {
        MatchKind::Definition => "Def",
        MatchKind::Use => "Use",
    };
    match &symbol_match.loc {
        Some(loc) => format!("{tag} of {} at {loc}", symbol_match.name),
        None => format!("{tag} of {}", symbol_match.name),
    }
}

/// Write each line to `out`, newline-terminated.
pub fn emit<W: io::Write>(
    out: &mut W,
    lines: impl IntoIterator<Item = String>,
) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
