//! The compiler front-end collaborator.
//!
//! Everything under this module runs *before* the queries: invoking clang,
//! deserializing its JSON AST dump, lowering it into the owned declaration
//! tree, and capturing the preprocessing record. The rest of the crate only
//! ever sees the read-only [`ParsedUnit`] handle produced here.

mod clang_nodes;
mod compiler;
mod decl_tree;
mod preprocessing;

use std::path::Path;

use tracing::debug;

pub use decl_tree::{DeclKind, DeclNode, RefNode};
pub use preprocessing::{MacroInfo, PreprocessingRecord, RecordEntry};

use crate::config::FrontendConfig;
use crate::error::{InspectError, Result};

/// Read-only handle to one fully parsed translation unit.
///
/// Built once per invocation; no component mutates it afterwards. All
/// traversal results borrow from it.
#[derive(Debug)]
pub struct ParsedUnit {
    root: DeclNode,
    references: Vec<RefNode>,
    preprocessing: Option<PreprocessingRecord>,
}

impl ParsedUnit {
    /// Assemble a unit from already-lowered parts. The subprocess entry
    /// points below are thin wrappers over this; tests and alternative
    /// front-ends construct units directly.
    pub fn new(
        root: DeclNode,
        references: Vec<RefNode>,
        preprocessing: Option<PreprocessingRecord>,
    ) -> Self {
        Self {
            root,
            references,
            preprocessing,
        }
    }

    /// The translation-unit root of the declaration tree.
    pub fn root(&self) -> &DeclNode {
        &self.root
    }

    /// Reference sites in traversal (source) order.
    pub fn references(&self) -> &[RefNode] {
        &self.references
    }

    /// The preprocessing record, if detailed preprocessing was requested.
    pub fn preprocessing_record(&self) -> Option<&PreprocessingRecord> {
        self.preprocessing.as_ref()
    }

    /// Like [`preprocessing_record`](Self::preprocessing_record), but an
    /// absent record is the fatal configuration error it represents.
    pub fn require_preprocessing_record(&self) -> Result<&PreprocessingRecord> {
        self.preprocessing.as_ref().ok_or(InspectError::PreprocessingDisabled)
    }
}

/// Build a [`ParsedUnit`] from raw front-end output: the JSON AST dump and,
/// optionally, the `-E -dD` preprocessor stream.
pub fn load_unit(
    ast_json: &str,
    preprocessed: Option<&str>,
) -> Result<ParsedUnit> {
    let root_node: clang_nodes::Node = serde_json::from_str(ast_json)?;
    let (root, references) = decl_tree::lower(&root_node);
    let preprocessing = preprocessed.map(PreprocessingRecord::from_preprocessed);
    Ok(ParsedUnit::new(root, references, preprocessing))
}

/// Compile `file` with clang and return the parsed-unit handle.
///
/// Fails fast on any front-end problem (spawn failure, diagnostics,
/// unusable output) without attempting any traversal.
pub fn parse_unit(
    file: &Path,
    config: &FrontendConfig,
) -> Result<ParsedUnit> {
    let ast_json = compiler::run_ast_dump(file, config)?;
    let preprocessed = if config.detailed_preprocessing {
        Some(compiler::run_preprocessor(file, config)?)
    } else {
        None
    };
    debug!("[frontend] parsed {} (detailed preprocessing: {})", file.display(), config.detailed_preprocessing,);
    load_unit(&ast_json, preprocessed.as_deref())
}
