//! Macro table extraction.
//!
//! One report line per `#define` in the record, in record order. The body
//! printed for each entry is the one lexically active at that entry's own
//! end location: a name that is defined, undefined and redefined in the
//! same unit yields one line per definition, each with the body that was
//! bound there.

use tracing::debug;

use crate::frontend::{MacroInfo, PreprocessingRecord, RecordEntry};

/// Render every macro definition in the record.
pub fn macro_lines(record: &PreprocessingRecord) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in record.entries() {
        let RecordEntry::MacroDefinition {
            name,
            end_loc,
        } = entry
        else {
            continue;
        };
        let Some(info) = record.macro_info_at(name, end_loc) else {
            // Nothing active at the definition site (retired before the
            // lookup could apply). Skip, don't fail.
            debug!("[macros] no active binding for {name} at {end_loc}");
            continue;
        };
        lines.push(render_define(name, info));
    }
    lines
}

/// Reconstruct the `#define` line for one resolved macro.
///
/// Body token spellings are concatenated with no inserted separator; the
/// original inter-token whitespace is not recorded, so `a + b` comes back
/// as `a+b`. The separating space after the name (or parameter list) is
/// always present, including for empty bodies.
pub fn render_define(
    name: &str,
    info: &MacroInfo,
) -> String {
    let mut line = String::from("#define ");
    line.push_str(name);
    if info.is_function_like {
        line.push('(');
        line.push_str(&info.params.join(", "));
        line.push(')');
    }
    line.push(' ');
    for token in &info.body_tokens {
        line.push_str(token);
    }
    line
}
