use clang_ast::SourceLocation;
use serde::Deserialize;

pub(crate) type Node = clang_ast::Node<Clang>;

/// Typed representation of the Clang AST node kinds this tool consumes.
///
/// Each variant corresponds to a Clang AST node `"kind"` value. The `Other`
/// fallback skips every unrecognized kind (statements, expressions and the
/// declaration kinds we have no use for).
#[derive(Deserialize)]
pub(crate) enum Clang {
    // --- Function declarations (Clang models methods as a FunctionDecl
    // subclass, so they report like free functions) ---
    FunctionDecl(DeclData),
    CXXMethodDecl(DeclData),

    // --- Variable declarations; ParmVarDecl covers function parameters ---
    VarDecl(DeclData),
    ParmVarDecl(DeclData),

    // --- Containers ---
    NamespaceDecl(DeclData),
    CXXRecordDecl(DeclData),
    EnumDecl(DeclData),
    LinkageSpecDecl(DeclData),

    // --- Named leaf declarations ---
    TypedefDecl(DeclData),
    FieldDecl(DeclData),
    EnumConstantDecl(DeclData),

    // --- References ---
    DeclRefExpr(RefExprData),

    // --- Catch-all ---
    // The `loc` and `range` fields MUST be deserialized even for
    // unrecognized node kinds. The `clang-ast` crate tracks "current file"
    // state across the deserialization stream via `SourceLocation`; if
    // locations are skipped for nodes that set the file path, all
    // subsequent nodes inherit an empty file.
    #[allow(dead_code)]
    Other {
        #[serde(default)]
        loc: Option<SourceLocation>,
        #[serde(default)]
        range: Option<clang_ast::SourceRange>,
    },
}

/// Common data for the declaration nodes.
#[derive(Deserialize, Debug)]
pub(crate) struct DeclData {
    pub name: Option<String>,
    pub loc: Option<SourceLocation>,
}

impl DeclData {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// Reference expression data.
#[derive(Deserialize, Debug)]
pub(crate) struct RefExprData {
    pub loc: Option<SourceLocation>,
    pub range: Option<clang_ast::SourceRange>,
    #[serde(rename = "referencedDecl")]
    pub referenced_decl: Option<ReferencedDecl>,
}

/// Inline summary of the declaration a reference points at. Only the name is
/// kept: matching is lexical, so the identity of the target is never used.
#[derive(Deserialize, Debug)]
pub(crate) struct ReferencedDecl {
    pub name: Option<String>,
}
