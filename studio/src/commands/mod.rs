//! Command handlers. Each command opens one canvas session over the data directory, runs,
//! and flushes the pending autosave before returning.

mod canvas;
mod files;
mod generate;
mod host;
mod themes;

use crate::cli::Command;
use crate::config::{AppConfig, setup};
use crate::error::{AppError, AppResult};
use engine::persistence::FileStorage;
use engine::translation::MemoryStylePort;
use engine::{CanvasSession, SessionSettings};
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

pub type StudioSession = CanvasSession<MemoryStylePort>;

/// Opens a session whose durable keys live as JSON files under `data_dir`.
pub fn open_session(config: &AppConfig, data_dir: &Path) -> StudioSession {
    let storage = Arc::new(FileStorage::new(data_dir));
    let settings = SessionSettings {
        autosave_window: config.autosave_window(),
    };
    log::debug!("Opening canvas data directory {}", data_dir.display());
    CanvasSession::open(storage, MemoryStylePort::new(), settings)
}

pub async fn run(
    command: Command,
    config: &AppConfig,
    data_dir: &Path,
    out: &mut dyn Write,
) -> AppResult<()> {
    if let Command::Init { path } = &command {
        return init(path.as_deref(), out);
    }

    let mut session = open_session(config, data_dir);
    let outcome = execute(command, config, &mut session, out).await;
    let flushed = session.shutdown();
    outcome?;
    flushed.map_err(AppError::from)
}

async fn execute(
    command: Command,
    config: &AppConfig,
    session: &mut StudioSession,
    out: &mut dyn Write,
) -> AppResult<()> {
    match command {
        Command::Show { section } => canvas::show(session, section.as_deref(), out),
        Command::Set { section, patch } => canvas::set(session, &section, &patch, out),
        Command::Trinity { axis, roles } => canvas::trinity(session, axis, &roles, out),
        Command::Dispatch { tag, payload } => canvas::dispatch(session, &tag, &payload, out),
        Command::Reset => canvas::reset(session, out),
        Command::Css => canvas::css(session, out),
        Command::Apply { output } => {
            let output = output.unwrap_or_else(|| config.export().css_output());
            canvas::apply(session, &output, out)
        }
        Command::Export {
            format,
            name,
            output,
        } => {
            let name = name.as_deref().unwrap_or(config.export().default_name());
            files::export(session, format, name, output.as_deref(), out)
        }
        Command::Import { file } => files::import(session, &file, out),
        Command::Themes { action } => themes::run(session, action, out),
        Command::Host { action } => host::run(session, action, out),
        Command::Generate { action } => {
            generate::run(session, config.generation(), action, out).await
        }
        Command::Init { path } => init(path.as_deref(), out),
    }
}

fn init(path: Option<&Path>, out: &mut dyn Write) -> AppResult<()> {
    match setup::initialize_config(path).map_err(|e| AppError::Config(e.to_string()))? {
        Some(path) => writeln!(out, "Wrote default configuration to {}", path.display())?,
        None => writeln!(out, "Configuration file already exists; nothing written")?,
    }
    Ok(())
}

/// Parses a JSON argument, naming it in the error.
pub(crate) fn parse_json_arg(label: &str, text: &str) -> AppResult<Value> {
    serde_json::from_str(text)
        .map_err(|e| AppError::Validation(format!("{label} is not valid JSON: {e}")))
}

pub(crate) fn print_json(value: &impl serde::Serialize, out: &mut dyn Write) -> AppResult<()> {
    let text = serde_json::to_string_pretty(value).map_err(|e| AppError::Engine(e.to_string()))?;
    writeln!(out, "{text}")?;
    Ok(())
}

/// Writes `contents` to `path`, or to `out` when no path is given.
pub(crate) fn write_output(
    contents: &str,
    path: Option<&Path>,
    out: &mut dyn Write,
) -> AppResult<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                setup::create_dir_if_not_exists(parent)
                    .map_err(|e| AppError::Io(e.to_string()))?;
            }
            std::fs::write(path, contents)
                .map_err(|e| AppError::Io(format!("{}: {e}", path.display())))?;
            log::info!("Wrote {} bytes to {}", contents.len(), path.display());
            writeln!(out, "Wrote {}", path.display())?;
        }
        None => {
            out.write_all(contents.as_bytes())?;
            if !contents.ends_with('\n') {
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
