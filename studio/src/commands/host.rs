use super::{StudioSession, parse_json_arg, print_json};
use crate::cli::HostCommand;
use crate::error::{AppError, AppResult};
use std::io::Write;

pub fn run(session: &mut StudioSession, action: HostCommand, out: &mut dyn Write) -> AppResult<()> {
    match action {
        HostCommand::Show => print_json(session.host().config(), out),
        HostCommand::Set { section, patch } => {
            let patch = parse_json_arg("patch", &patch)?;
            let config = session.host_mut().update_section(&section, &patch)?;
            let value =
                serde_json::to_value(config).map_err(|e| AppError::Engine(e.to_string()))?;
            print_json(&value[section.as_str()], out)
        }
        HostCommand::Reset => {
            session.host_mut().reset()?;
            writeln!(out, "Host appearance reset to defaults")?;
            Ok(())
        }
    }
}
