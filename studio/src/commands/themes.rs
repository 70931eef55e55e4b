use super::{StudioSession, write_output};
use crate::cli::ThemesCommand;
use crate::error::AppResult;
use crate::validation::{
    ExportPathValidator, ImportPathValidator, ThemeNameValidator, Validator,
};
use engine::CanvasError;
use engine::export::ExportFormat;
use std::io::Write;

pub fn run(
    session: &mut StudioSession,
    action: ThemesCommand,
    out: &mut dyn Write,
) -> AppResult<()> {
    match action {
        ThemesCommand::List => {
            let themes = session.themes();
            if themes.is_empty() {
                writeln!(out, "No saved themes")?;
            }
            for theme in themes {
                writeln!(
                    out,
                    "{}  {}  {}",
                    theme.id,
                    theme.date.format("%Y-%m-%d %H:%M"),
                    theme.name
                )?;
            }
        }
        ThemesCommand::Save { name } => {
            ThemeNameValidator.validate(name.as_str())?;
            let snapshot = session.save_theme(&name)?;
            writeln!(out, "Saved theme '{}' as {}", snapshot.name, snapshot.id)?;
        }
        ThemesCommand::Load { id } => {
            session.load_theme(&id)?;
            writeln!(out, "Loaded theme {id}")?;
        }
        ThemesCommand::Delete { id } => {
            if !session.delete_theme(&id)? {
                return Err(CanvasError::SnapshotNotFound(id).into());
            }
            writeln!(out, "Deleted theme {id}")?;
        }
        ThemesCommand::Export { id, output } => {
            if let Some(path) = output.as_deref() {
                ExportPathValidator {
                    format: ExportFormat::Json,
                }
                .validate(path)?;
            }
            let contents = session.library().export_snapshot(&id)?;
            write_output(&contents, output.as_deref(), out)?;
        }
        ThemesCommand::Import { file, name } => {
            ImportPathValidator.validate(file.as_path())?;
            if let Some(name) = name.as_deref() {
                ThemeNameValidator.validate(name)?;
            }
            let text = std::fs::read_to_string(&file)?;
            let snapshot = session.library().import_snapshot(&text, name.as_deref())?;
            writeln!(out, "Imported theme '{}' as {}", snapshot.name, snapshot.id)?;
        }
    }
    Ok(())
}
