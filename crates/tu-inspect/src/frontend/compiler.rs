//! Subprocess invocation of the clang front-end.
//!
//! Both entry points run clang to completion and hand back raw text; parsing
//! the output belongs to the neighboring modules. Diagnostic failures are
//! fatal here: the core must never traverse a unit that did not compile.

use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

use crate::config::FrontendConfig;
use crate::error::{InspectError, Result};

/// Compiler binary. `CC`-style overrides are deliberately not honored; the
/// AST dump format is clang-specific.
const CLANG: &str = "clang";

fn clang_command(config: &FrontendConfig) -> Command {
    let mut command = Command::new(CLANG);
    for dir in &config.include_paths {
        command.arg("-I").arg(dir);
    }
    command.args(&config.extra_flags);
    command
}

/// Run the JSON AST dump for `file` and return the raw JSON string.
pub(crate) fn run_ast_dump(
    file: &Path,
    config: &FrontendConfig,
) -> Result<String> {
    let mut command = clang_command(config);
    command
        .args(["-Xclang", "-ast-dump=json", "-fsyntax-only", "-fno-color-diagnostics"])
        .arg(file);

    debug!("[ast-dump] {command:?}");
    let output = command.output().map_err(InspectError::Spawn)?;

    if !output.status.success() {
        return Err(InspectError::frontend(failure_message(&output.stderr, file)));
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if !stdout.starts_with('{') {
        warn!("[ast-dump] produced no usable JSON for {}", file.display());
        return Err(InspectError::frontend(format!(
            "AST dump produced no usable JSON for {}",
            file.display()
        )));
    }

    debug!("[ast-dump] produced {} bytes of JSON", stdout.len());
    Ok(stdout)
}

/// Run the preprocessor over `file`, keeping `#define` directives in the
/// output (`-dD`), and return the raw stream.
pub(crate) fn run_preprocessor(
    file: &Path,
    config: &FrontendConfig,
) -> Result<String> {
    let mut command = clang_command(config);
    command.args(["-E", "-dD", "-fno-color-diagnostics"]).arg(file);

    debug!("[preprocess] {command:?}");
    let output = command.output().map_err(InspectError::Spawn)?;

    if !output.status.success() {
        return Err(InspectError::frontend(failure_message(&output.stderr, file)));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Pick the first diagnostic error line for the failure message, falling
/// back to a generic one.
fn failure_message(
    stderr: &[u8],
    file: &Path,
) -> String {
    let stderr = String::from_utf8_lossy(stderr);
    for line in stderr.lines() {
        if line.contains("error:") {
            warn!("[front-end] {line}");
        }
    }
    stderr
        .lines()
        .find(|line| line.contains("error:"))
        .map(str::to_owned)
        .unwrap_or_else(|| format!("front-end failed on {}", file.display()))
}
