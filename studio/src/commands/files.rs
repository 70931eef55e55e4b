use super::{StudioSession, write_output};
use crate::error::AppResult;
use crate::validation::{ExportPathValidator, ImportPathValidator, ThemeNameValidator, Validator};
use engine::export::ExportFormat;
use std::io::Write;
use std::path::Path;

pub fn export(
    session: &StudioSession,
    format: ExportFormat,
    name: &str,
    output: Option<&Path>,
    out: &mut dyn Write,
) -> AppResult<()> {
    if let Some(path) = output {
        ExportPathValidator { format }.validate(path)?;
    }

    let contents = match format {
        ExportFormat::Json => {
            ThemeNameValidator.validate(name)?;
            session.export_json(name)?
        }
        ExportFormat::Css => session.export_css(),
    };

    log::info!("Exporting canvas as {format}");
    write_output(&contents, output, out)
}

pub fn import(session: &mut StudioSession, file: &Path, out: &mut dyn Write) -> AppResult<()> {
    ImportPathValidator.validate(file)?;
    let text = std::fs::read_to_string(file)?;
    session.import(&text)?;
    log::info!("Imported canvas from {}", file.display());
    writeln!(out, "Imported {}", file.display())?;
    Ok(())
}
