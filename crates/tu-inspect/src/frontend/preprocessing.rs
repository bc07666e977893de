//! Preprocessing record capture.
//!
//! The record is reconstructed from the front-end's `-E -dD` stream: line
//! markers (`# <line> "<file>" <flags>`) track the presumed position,
//! `#define` lines open macro bindings and `#undef` lines close them. The
//! same stream yields both the ordered record entries and the macro table
//! used for the redefinition-sensitive body lookup.

use std::collections::HashMap;

use regex::Regex;
use tracing::debug;

use crate::loc::SourceLoc;

/// An entry in the preprocessing record, in stream (source) order.
#[derive(Debug, Clone)]
pub enum RecordEntry {
    /// A `#define` directive. `end_loc` is the position used to resolve the
    /// effective body, since the name may be redefined later in the unit.
    MacroDefinition { name: String, end_loc: SourceLoc },
    /// Entry into an included file.
    Inclusion { file: String, loc: SourceLoc },
    /// A macro expansion site. The textual capture cannot observe
    /// expansions, so this front-end never produces it; the variant stays
    /// because the record contract names it and consumers must skip it.
    MacroExpansion { name: String, loc: SourceLoc },
}

/// The resolved body of one macro binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroInfo {
    pub is_function_like: bool,
    /// Declared parameter names, in order. Empty for object-like macros and
    /// for `NAME()` definitions alike; `is_function_like` tells them apart.
    pub params: Vec<String>,
    /// Token spellings of the replacement list, in order.
    pub body_tokens: Vec<String>,
}

/// One lifetime of a macro name: from its `#define` until the `#undef` or
/// redefinition that retires it.
#[derive(Debug, Clone)]
struct Binding {
    info: MacroInfo,
    active_from: SourceLoc,
    active_until: Option<SourceLoc>,
}

impl Binding {
    /// Interval check. Bounds constrain only within their own file: binding
    /// and query positions come from the same sequential preprocessing
    /// stream, and every lookup this crate performs happens at a definition
    /// site, which is matched exactly before this runs.
    fn contains(
        &self,
        loc: &SourceLoc,
    ) -> bool {
        if loc.file == self.active_from.file && (loc.line, loc.col) < (self.active_from.line, self.active_from.col)
        {
            return false;
        }
        match &self.active_until {
            None => true,
            Some(end) => end.file != loc.file || (loc.line, loc.col) < (end.line, end.col),
        }
    }
}

/// The ordered preprocessing record plus the macro table.
///
/// Present on a parsed unit only when detailed preprocessing was requested
/// in the front-end configuration.
#[derive(Debug, Default)]
pub struct PreprocessingRecord {
    entries: Vec<RecordEntry>,
    table: HashMap<String, Vec<Binding>>,
}

impl PreprocessingRecord {
    /// Capture the record from a `-E -dD` preprocessor stream.
    pub fn from_preprocessed(stream: &str) -> Self {
        RecordParser::new().parse(stream)
    }

    /// Record entries in source order of the directives.
    pub fn entries(&self) -> &[RecordEntry] {
        &self.entries
    }

    /// Resolve the macro body lexically active at `loc`.
    ///
    /// A definition whose name was later redefined resolves to the binding
    /// open at `loc`, never to the final state of the name. Returns `None`
    /// when no binding is active there (e.g. between an `#undef` and a
    /// redefinition).
    pub fn macro_info_at(
        &self,
        name: &str,
        loc: &SourceLoc,
    ) -> Option<&MacroInfo> {
        let bindings = self.table.get(name)?;
        // The common query is an entry's own end location; match it exactly
        // so multi-file redefinition chains resolve unambiguously.
        if let Some(binding) = bindings.iter().find(|b| b.active_from == *loc) {
            return Some(&binding.info);
        }
        bindings.iter().rev().find(|b| b.contains(loc)).map(|b| &b.info)
    }
}

/// Parser over the preprocessed stream.
struct RecordParser {
    /// GNU line marker: `# <line> "<file>" <flags...>`.
    marker_re: Regex,
}

impl RecordParser {
    fn new() -> Self {
        let marker_re = Regex::new(r#"^#\s+(\d+)\s+"([^"]*)"((?:\s+\d+)*)\s*$"#).unwrap();
        Self {
            marker_re,
        }
    }

    fn parse(
        &self,
        stream: &str,
    ) -> PreprocessingRecord {
        let mut record = PreprocessingRecord::default();
        let mut file = String::new();
        let mut line_no: u32 = 1;

        for line in stream.lines() {
            if let Some(caps) = self.marker_re.captures(line) {
                let target: u32 = caps[1].parse().unwrap_or(1);
                let target_file = caps[2].to_string();
                let entering = caps[3].split_whitespace().any(|flag| flag == "1");
                if entering && !is_pseudo_file(&file) && !is_pseudo_file(&target_file) {
                    record.entries.push(RecordEntry::Inclusion {
                        file: target_file.clone(),
                        loc: SourceLoc {
                            file: file.clone(),
                            line: line_no,
                            col: 1,
                        },
                    });
                }
                file = target_file;
                line_no = target;
                continue;
            }

            if let Some(rest) = line.strip_prefix("#define ") {
                if let Some((name, info)) = parse_define(rest) {
                    let end_loc = SourceLoc {
                        file: file.clone(),
                        line: line_no,
                        col: line.len() as u32 + 1,
                    };
                    define(&mut record, &file, name, info, end_loc);
                }
            } else if let Some(rest) = line.strip_prefix("#undef ") {
                let name = rest.trim();
                let until = SourceLoc {
                    file: file.clone(),
                    line: line_no,
                    col: 1,
                };
                retire(&mut record, name, until);
            }

            line_no += 1;
        }

        debug!("[preprocessing] captured {} record entries, {} macro names", record.entries.len(), record.table.len(),);
        record
    }
}

fn define(
    record: &mut PreprocessingRecord,
    file: &str,
    name: String,
    info: MacroInfo,
    end_loc: SourceLoc,
) {
    // Predefines from the <built-in> and <command line> sections are not
    // macros defined in the unit; they are excluded from both the record
    // and the table.
    if is_pseudo_file(file) {
        return;
    }

    let bindings = record.table.entry(name.clone()).or_default();
    if let Some(open) = bindings.last_mut()
        && open.active_until.is_none()
    {
        // Redefinition without an intervening #undef retires the old body.
        open.active_until = Some(end_loc.clone());
    }
    bindings.push(Binding {
        info,
        active_from: end_loc.clone(),
        active_until: None,
    });
    record.entries.push(RecordEntry::MacroDefinition {
        name,
        end_loc,
    });
}

fn retire(
    record: &mut PreprocessingRecord,
    name: &str,
    until: SourceLoc,
) {
    if let Some(bindings) = record.table.get_mut(name)
        && let Some(open) = bindings.last_mut()
        && open.active_until.is_none()
    {
        open.active_until = Some(until);
    }
}

fn is_pseudo_file(file: &str) -> bool {
    file.is_empty() || file.starts_with('<')
}

/// Split a `#define` directive body (everything after `#define `) into the
/// macro name and its [`MacroInfo`].
///
/// A parameter list only exists when `(` follows the name with no
/// whitespace; `#define PTR (void *)0` is object-like.
fn parse_define(rest: &str) -> Option<(String, MacroInfo)> {
    let name_len = identifier_len(rest);
    if name_len == 0 {
        return None;
    }
    let name = rest[..name_len].to_string();
    let after = &rest[name_len..];

    if let Some(list) = after.strip_prefix('(') {
        let close = list.find(')')?;
        let params_text = &list[..close];
        let params = if params_text.trim().is_empty() {
            Vec::new()
        } else {
            params_text.split(',').map(|p| p.trim().to_string()).collect()
        };
        let info = MacroInfo {
            is_function_like: true,
            params,
            body_tokens: tokenize(&list[close + 1..]),
        };
        Some((name, info))
    } else {
        let info = MacroInfo {
            is_function_like: false,
            params: Vec::new(),
            body_tokens: tokenize(after),
        };
        Some((name, info))
    }
}

fn identifier_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    if bytes.first().is_none_or(|b| !b.is_ascii_alphabetic() && *b != b'_') {
        return 0;
    }
    bytes.iter().take_while(|b| b.is_ascii_alphanumeric() || **b == b'_').count()
}

const PUNCTUATORS_3: &[&str] = &["<<=", ">>=", "...", "->*"];
const PUNCTUATORS_2: &[&str] = &[
    "->", "++", "--", "<<", ">>", "<=", ">=", "==", "!=", "&&", "||", "+=", "-=", "*=", "/=", "%=", "&=", "^=",
    "|=", "##", "::", ".*",
];

/// Scan a replacement list into token spellings.
///
/// Inter-token whitespace is a separator and is not preserved; quoted
/// literals keep their interior verbatim. Punctuators use maximal munch so
/// the spellings mirror what a real lexer would produce.
fn tokenize(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        let start = i;
        if b == b'"' || b == b'\'' {
            i = scan_quoted(bytes, i);
        } else if b.is_ascii_alphabetic() || b == b'_' {
            i += identifier_len(&text[i..]);
        } else if b.is_ascii_digit() || (b == b'.' && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)) {
            i = scan_pp_number(bytes, i);
        } else if let Some(p) = PUNCTUATORS_3.iter().find(|p| text[i..].starts_with(**p)) {
            i += p.len();
        } else if let Some(p) = PUNCTUATORS_2.iter().find(|p| text[i..].starts_with(**p)) {
            i += p.len();
        } else {
            // Single character, including any non-ASCII spelling.
            i += text[i..].chars().next().map_or(1, char::len_utf8);
        }
        tokens.push(text[start..i].to_string());
    }

    tokens
}

fn scan_quoted(
    bytes: &[u8],
    start: usize,
) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn scan_pp_number(
    bytes: &[u8],
    start: usize,
) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        let b = bytes[i];
        if (b == b'e' || b == b'E' || b == b'p' || b == b'P')
            && bytes.get(i + 1).is_some_and(|n| *n == b'+' || *n == b'-')
        {
            i += 2;
        } else if b.is_ascii_alphanumeric() || b == b'.' || b == b'_' {
            i += 1;
        } else {
            break;
        }
    }
    i
}

#[cfg(test)]
#[path = "../../tests/src/frontend/preprocessing_tests.rs"]
mod tests;
