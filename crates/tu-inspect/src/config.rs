/// Front-end invocation settings, passed explicitly to [`parse_unit`].
///
/// Nothing in the crate reads process-wide state for these; every compile is
/// fully described by the value handed in at call time.
///
/// [`parse_unit`]: crate::frontend::parse_unit
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrontendConfig {
    /// Include search directories, passed as `-I <dir>`.
    pub include_paths: Vec<String>,
    /// Extra compiler-style flags appended verbatim.
    pub extra_flags: Vec<String>,
    /// Ask the front-end to capture the preprocessing record. Required for
    /// macro extraction; off for the purely AST-based queries.
    pub detailed_preprocessing: bool,
}

impl FrontendConfig {
    pub fn normalize(&mut self) {
        self.include_paths =
            self.include_paths.iter().map(|p| p.trim().to_string()).filter(|p| !p.is_empty()).collect();
        self.extra_flags = self.extra_flags.iter().map(|f| f.trim().to_string()).filter(|f| !f.is_empty()).collect();
    }
}
