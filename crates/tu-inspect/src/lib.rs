pub mod config;
pub mod error;
pub mod frontend;
pub mod loc;
pub mod logging;
pub mod macros;
pub mod report;
pub mod symbols;
pub mod walk;

pub use config::FrontendConfig;
pub use error::{InspectError, Result};
pub use frontend::{
    DeclKind, DeclNode, MacroInfo, ParsedUnit, PreprocessingRecord, RecordEntry, RefNode, load_unit, parse_unit,
};
pub use loc::SourceLoc;
pub use symbols::{MatchKind, SymbolMatch};
pub use walk::{DeclVisitor, Strategy};
