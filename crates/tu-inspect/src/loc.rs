use std::fmt;

/// A resolved presumed source position inside the translation unit.
///
/// Compiler-synthesized declarations have no position at all; those are
/// represented as `Option<SourceLoc>` = `None` by the callers, never as a
/// zeroed-out `SourceLoc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLoc {
    /// Absolute or compiler-reported file path.
    pub file: String,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub col: u32,
}

impl fmt::Display for SourceLoc {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.col)
    }
}
