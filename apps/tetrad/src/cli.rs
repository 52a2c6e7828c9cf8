//! # CLI Commands
//!
//! Command implementations for the `tetrad` binary. Each command writes to
//! the supplied writer so tests can capture what would go to stdout.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tetrad_core::{DEMO_INPUT, FinalOutput, NoopHook, Orchestrator, SafetyHook};
use thiserror::Error;

use crate::plugin::ProcessHook;

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Errors from the command layer. The pipeline itself cannot fail.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering the report as JSON failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Plugin configuration is unusable.
    #[error("Plugin error: {0}")]
    Plugin(String),
}

// =============================================================================
// ARGUMENTS
// =============================================================================

#[derive(Debug, Parser)]
#[command(name = "tetrad", version, about = "Symbol → Memory → Logic → Identity pipeline")]
pub struct Cli {
    /// Print the full output as a JSON document.
    #[arg(long, global = true)]
    pub json: bool,

    /// Plugin executable providing pattern scans and refusals.
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub plugin: Option<PathBuf>,

    /// Extra argument passed to the plugin before the verb (repeatable).
    #[arg(long = "plugin-arg", global = true, value_name = "ARG", requires = "plugin")]
    pub plugin_args: Vec<OsString>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the built-in demo request.
    Demo,
    /// Run one request through the pipeline.
    Step {
        /// Input text.
        text: String,
    },
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Build the orchestrator for the selected plugin, if any.
pub fn build_orchestrator(
    plugin: Option<&PathBuf>,
    plugin_args: &[OsString],
) -> Result<Orchestrator<Box<dyn SafetyHook>>, CliError> {
    let hook: Box<dyn SafetyHook> = match plugin {
        Some(program) if program.as_os_str().is_empty() => {
            return Err(CliError::Plugin("plugin path is empty".to_string()));
        }
        Some(program) => {
            let hook = plugin_args
                .iter()
                .fold(ProcessHook::new(program.clone()), |hook, arg| hook.arg(arg.clone()));
            tracing::info!(plugin = %hook.program().display(), "using process plugin");
            Box::new(hook)
        }
        None => Box::new(NoopHook),
    };
    Ok(Orchestrator::with_hook(hook))
}

/// Render an output in the three-line text form.
pub fn render_text(output: &FinalOutput) -> Result<String, CliError> {
    Ok(format!(
        "Reply: {}\nMeta: {}\nTrace: {}\n",
        output.reply,
        serde_json::to_string(&output.meta)?,
        serde_json::to_string(&output.trace)?,
    ))
}

/// Write one output to `out`.
pub fn write_output<W: Write>(out: &mut W, output: &FinalOutput, json: bool) -> Result<(), CliError> {
    if json {
        serde_json::to_writer_pretty(&mut *out, output)?;
        writeln!(out)?;
    } else {
        out.write_all(render_text(output)?.as_bytes())?;
    }
    Ok(())
}

/// Run `text` through the pipeline and report it.
pub fn cmd_step<H: SafetyHook, W: Write>(
    orchestrator: &Orchestrator<H>,
    text: &str,
    json: bool,
    out: &mut W,
) -> Result<FinalOutput, CliError> {
    let output = orchestrator.step(text);
    write_output(out, &output, json)?;
    Ok(output)
}

/// Run the demo request.
pub fn cmd_demo<H: SafetyHook, W: Write>(
    orchestrator: &Orchestrator<H>,
    json: bool,
    out: &mut W,
) -> Result<FinalOutput, CliError> {
    cmd_step(orchestrator, DEMO_INPUT, json, out)
}

/// Dispatch parsed arguments.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), CliError> {
    let orchestrator = build_orchestrator(cli.plugin.as_ref(), &cli.plugin_args)?;

    match &cli.command {
        None | Some(Commands::Demo) => cmd_demo(&orchestrator, cli.json, out)?,
        Some(Commands::Step { text }) => cmd_step(&orchestrator, text, cli.json, out)?,
    };
    Ok(())
}
