//! # Process Plugin
//!
//! A [`SafetyHook`] backed by an external executable.
//!
//! Protocol, one process per call:
//!
//! ```text
//! <program> <args…> scan     stdin: raw text          stdout: ["flag", ...]
//! <program> <args…> refuse   stdin: ["reason", ...]   stdout: refusal text
//! ```
//!
//! A non-zero exit, unreadable output or a spawn failure is reported as a
//! [`HookError`], which the pipeline absorbs.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tetrad_core::{Flag, HookError, SafetyHook};

/// Subcommand passed to the plugin for pattern scans.
pub const SCAN_VERB: &str = "scan";

/// Subcommand passed to the plugin for refusal rendering.
pub const REFUSE_VERB: &str = "refuse";

/// Hook that shells out to a plugin executable.
#[derive(Debug, Clone)]
pub struct ProcessHook {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ProcessHook {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a fixed argument placed before the verb.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run the plugin with `verb`, feed `input` on stdin, return stdout.
    fn invoke(&self, verb: &str, input: &[u8]) -> Result<String, HookError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(verb)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| HookError::Failed(format!("spawn {}: {}", self.program().display(), e)))?;

        // Feed stdin from a second thread so a plugin that writes before it
        // reads cannot fill the stdout pipe and stall both sides.
        let stdin = child.stdin.take();
        let output = std::thread::scope(|scope| {
            if let Some(mut stdin) = stdin {
                scope.spawn(move || {
                    // A plugin may exit without reading its input; a broken
                    // pipe is then judged by the exit status.
                    if let Err(e) = stdin.write_all(input) {
                        tracing::debug!(verb, error = %e, "plugin closed stdin early");
                    }
                });
            }
            child.wait_with_output()
        })
        .map_err(|e| HookError::Failed(format!("wait for plugin: {}", e)))?;

        if !output.status.success() {
            return Err(HookError::Failed(format!("plugin {} exited with {}", verb, output.status)));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| HookError::InvalidOutput(format!("non-UTF-8 output: {}", e)))
    }
}

impl SafetyHook for ProcessHook {
    fn scan_patterns(&self, text: &str) -> Result<Vec<Flag>, HookError> {
        let stdout = self.invoke(SCAN_VERB, text.as_bytes())?;
        let flags: Vec<String> = serde_json::from_str(stdout.trim())
            .map_err(|e| HookError::InvalidOutput(format!("expected JSON array of strings: {}", e)))?;
        Ok(flags.into_iter().map(Flag).collect())
    }

    fn render_refusal(&self, reasons: &[String]) -> Result<String, HookError> {
        let payload =
            serde_json::to_vec(reasons).map_err(|e| HookError::Failed(format!("encode reasons: {}", e)))?;
        let stdout = self.invoke(REFUSE_VERB, &payload)?;
        Ok(stdout.trim_end().to_string())
    }
}
