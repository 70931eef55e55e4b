use clap::Parser;
use std::process::ExitCode;
use studio::cli::{Cli, Command};
use studio::config::{self, ConfigLoadResult};
use studio::error::ErrorReporter;
use studio::{commands, logger};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let reporter = ErrorReporter::new();

    // `init` must work before any configuration exists.
    let app_config = match config::load_config(cli.config.as_deref()) {
        ConfigLoadResult::Success(app_config) => *app_config,
        _ if matches!(cli.command, Command::Init { .. }) => config::AppConfig::default(),
        failure => {
            let message = failure
                .error_message()
                .unwrap_or_else(|| "unknown configuration error".to_string());
            reporter.report_config_error(message);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::setup_logger(app_config.logging()) {
        eprintln!("Warning: Failed to initialize logger: {e}");
    }

    let data_dir = cli.data_dir.clone().unwrap_or_else(|| app_config.data_dir());
    let command_name = command_name(&cli.command);
    log::info!("Running {command_name} against {}", data_dir.display());

    let mut stdout = std::io::stdout();
    match commands::run(cli.command, &app_config, &data_dir, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            reporter.report_command_error(command_name, error);
            ExitCode::FAILURE
        }
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Show { .. } => "show",
        Command::Set { .. } => "set",
        Command::Trinity { .. } => "trinity",
        Command::Dispatch { .. } => "dispatch",
        Command::Reset => "reset",
        Command::Css => "css",
        Command::Apply { .. } => "apply",
        Command::Export { .. } => "export",
        Command::Import { .. } => "import",
        Command::Themes { .. } => "themes",
        Command::Host { .. } => "host",
        Command::Generate { .. } => "generate",
        Command::Init { .. } => "init",
    }
}
