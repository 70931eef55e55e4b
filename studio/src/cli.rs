use clap::{Parser, Subcommand};
use engine::export::ExportFormat;
use engine::generation::{DeviceType, ModelId};
use engine::schema::TrinityAxis;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "canvas-studio",
    author,
    version,
    about = "Edit, save and export StarSeed design canvas themes",
    long_about = None
)]
pub struct Cli {
    /// Extra configuration file, applied over canvas.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the canvas data files (overrides the configuration)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the canvas document, or one section of it
    Show {
        /// Section key, e.g. `palette` or `tabsConfig`
        section: Option<String>,
    },
    /// Merge a JSON object into one section
    Set {
        section: String,
        /// JSON object with the fields to change
        patch: String,
    },
    /// Change the roles of one trinity axis
    Trinity {
        axis: TrinityAxis,
        /// JSON object of roles, e.g. `{"glow": "#00D4FF"}`
        roles: String,
    },
    /// Dispatch a raw tagged action such as SET_PROGRESS
    Dispatch { tag: String, payload: String },
    /// Restore the default canvas document
    Reset,
    /// Print the CSS custom properties of the current document
    Css,
    /// Push the document into the host appearance and write the resulting CSS file
    Apply {
        /// CSS file to write (defaults to export.css_output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export the document as a theme file
    Export {
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,
        /// Theme name stored in a JSON export
        #[arg(short, long)]
        name: Option<String>,
        /// Output path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replace the document with an exported theme file
    Import { file: PathBuf },
    /// Manage the saved theme library
    Themes {
        #[command(subcommand)]
        action: ThemesCommand,
    },
    /// Inspect or edit the host appearance configuration
    Host {
        #[command(subcommand)]
        action: HostCommand,
    },
    /// Ask the generation service for a component or a theme
    Generate {
        #[command(subcommand)]
        action: GenerateCommand,
    },
    /// Write the default configuration file
    Init {
        /// Target path (defaults to the user configuration file)
        path: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ThemesCommand {
    /// List saved themes, newest first
    List,
    /// Apply the document and save it under a name
    Save { name: String },
    /// Load a saved theme into the canvas
    Load { id: String },
    /// Delete a saved theme
    Delete { id: String },
    /// Write one saved theme as JSON
    Export {
        id: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Add a theme file to the library without loading it
    Import {
        file: PathBuf,
        #[arg(short, long)]
        name: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum HostCommand {
    /// Print the host appearance configuration
    Show,
    /// Merge a JSON object into one host section, e.g. `styling`
    Set { section: String, patch: String },
    /// Restore the host defaults
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum GenerateCommand {
    /// Generate component code and store it in the canvas
    Component {
        prompt: String,
        #[arg(long)]
        device: Option<DeviceType>,
        #[arg(long)]
        model: Option<ModelId>,
    },
    /// Generate a partial theme and merge it into the canvas
    Theme {
        prompt: String,
        #[arg(long)]
        model: Option<ModelId>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_trinity_axis() {
        let cli = Cli::try_parse_from([
            "canvas-studio",
            "trinity",
            "zenith",
            r##"{"active":"#111111"}"##,
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Trinity {
                axis: TrinityAxis::Zenith,
                ..
            }
        ));
    }

    #[test]
    fn test_export_defaults_to_json() {
        let cli = Cli::try_parse_from(["canvas-studio", "export"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Export {
                format: ExportFormat::Json,
                name: None,
                output: None
            }
        ));
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["canvas-studio", "export", "--format", "scss"]).is_err());
    }

    #[test]
    fn test_global_data_dir() {
        let cli = Cli::try_parse_from(["canvas-studio", "themes", "list", "--data-dir", "/tmp/c"])
            .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/c")));
    }
}
