use super::{StudioSession, parse_json_arg, print_json, write_output};
use crate::error::{AppError, AppResult};
use crate::validation::{ExportPathValidator, Validator};
use engine::CanvasAction;
use engine::export::ExportFormat;
use engine::schema::{TrinityAxis, TrinityAxisPatch};
use engine::translation::CssValue;
use std::io::Write;
use std::path::Path;

pub fn show(session: &StudioSession, section: Option<&str>, out: &mut dyn Write) -> AppResult<()> {
    let document =
        serde_json::to_value(session.state()).map_err(|e| AppError::Engine(e.to_string()))?;

    match section {
        None => print_json(&document, out),
        Some(key) => match document.get(key) {
            Some(value) => print_json(value, out),
            None => Err(AppError::Validation(format!(
                "unknown canvas section '{key}'"
            ))),
        },
    }
}

pub fn set(
    session: &mut StudioSession,
    section: &str,
    patch: &str,
    out: &mut dyn Write,
) -> AppResult<()> {
    let payload = parse_json_arg("patch", patch)?;
    session.update_section(section, &payload)?;
    log::info!("Updated canvas section {section}");
    show(session, Some(section), out)
}

pub fn trinity(
    session: &mut StudioSession,
    axis: TrinityAxis,
    roles: &str,
    out: &mut dyn Write,
) -> AppResult<()> {
    let roles = parse_json_arg("roles", roles)?;
    let patch = TrinityAxisPatch::from_json(axis, &roles)?;
    let state = session.dispatch(CanvasAction::SetTrinityAxis(patch));
    let value = serde_json::to_value(&state.palette.trinity)
        .map_err(|e| AppError::Engine(e.to_string()))?;
    print_json(&value[axis.as_str()], out)
}

pub fn dispatch(
    session: &mut StudioSession,
    tag: &str,
    payload: &str,
    out: &mut dyn Write,
) -> AppResult<()> {
    let payload = parse_json_arg("payload", payload)?;
    let before = session.revision();
    session.dispatch_tagged(tag, &payload)?;
    if session.revision() == before {
        writeln!(out, "Ignored unknown action {tag}")?;
    } else {
        writeln!(out, "Dispatched {tag} (revision {})", session.revision())?;
    }
    Ok(())
}

pub fn reset(session: &mut StudioSession, out: &mut dyn Write) -> AppResult<()> {
    session.reset();
    writeln!(out, "Canvas reset to defaults")?;
    Ok(())
}

/// Prints the projection in declaration order; removed entries are left out.
pub fn css(session: &StudioSession, out: &mut dyn Write) -> AppResult<()> {
    let properties = session.css_properties();
    writeln!(out, ":root {{")?;
    for (name, value) in properties.iter() {
        if let CssValue::Set(value) = value {
            writeln!(out, "  {name}: {value};")?;
        }
    }
    writeln!(out, "}}")?;
    Ok(())
}

pub fn apply(session: &mut StudioSession, output: &Path, out: &mut dyn Write) -> AppResult<()> {
    ExportPathValidator {
        format: ExportFormat::Css,
    }
    .validate(output)?;

    let fragment = session.apply()?;
    writeln!(
        out,
        "Applied canvas to host appearance (radius {}rem, glass blur {}px)",
        fragment.styling.radius, fragment.styling.glass_intensity
    )?;

    let block = session.style_port().to_css_block();
    write_output(&block, Some(output), out)
}
