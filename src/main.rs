#![allow(dead_code)]

mod app;
mod apply;
mod catalog;
mod engine;
mod host;
mod infra;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::info;

use app::controller::ScreenCoordinator;
use apply::apply_wallpaper;
use catalog::assets::BundledAssets;
use catalog::models::{WallpaperEntry, WallpaperId};
use catalog::presets::Catalog;
use host::{DesktopWallpaper, HostContext, StderrNotifier};
use infra::config::AppConfig;

fn main() -> ExitCode {
    infra::logging::init_logging();
    let args: Vec<String> = std::env::args().collect();

    let invocation = match parse_invocation(&args) {
        Ok(invocation) => invocation,
        Err(error) => return report(error),
    };

    let config = match AppConfig::load_or_default(invocation.config_path.as_deref()) {
        Ok(config) => config,
        Err(error) => return report(CommandError::Runtime(error.to_string())),
    };

    match run_command(invocation.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report(error),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Ui,
    List,
    Apply { id: WallpaperId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Invocation {
    config_path: Option<PathBuf>,
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CommandError {
    Usage(String),
    Runtime(String),
    /// Failure the user was already told about through the notifier.
    Reported,
}

impl CommandError {
    fn exit_status(&self) -> u8 {
        match self {
            Self::Usage(_) => 2,
            Self::Runtime(_) | Self::Reported => 1,
        }
    }
}

fn report(error: CommandError) -> ExitCode {
    match &error {
        CommandError::Usage(msg) => {
            eprintln!("{msg}");
            print_usage();
        }
        CommandError::Runtime(msg) => eprintln!("{msg}"),
        CommandError::Reported => {}
    }
    ExitCode::from(error.exit_status())
}

fn parse_invocation(args: &[String]) -> Result<Invocation, CommandError> {
    let mut rest = args.get(1..).unwrap_or_default();
    let mut config_path = None;

    if rest.first().map(String::as_str) == Some("--config") {
        let path = rest
            .get(1)
            .ok_or_else(|| CommandError::Usage("missing config path".to_string()))?;
        config_path = Some(PathBuf::from(path));
        rest = &rest[2..];
    }

    let command = match rest.first().map(String::as_str) {
        None | Some("ui") => Command::Ui,
        Some("list") => Command::List,
        Some("apply") => {
            let raw = rest
                .get(1)
                .ok_or_else(|| CommandError::Usage("missing wallpaper id".to_string()))?;
            let id = raw
                .parse::<u32>()
                .map_err(|_| CommandError::Usage(format!("invalid wallpaper id: {raw}")))?;
            Command::Apply {
                id: WallpaperId::new(id),
            }
        }
        Some(other) => return Err(CommandError::Usage(format!("unknown command: {other}"))),
    };

    Ok(Invocation {
        config_path,
        command,
    })
}

fn run_command(command: Command, config: &AppConfig) -> Result<(), CommandError> {
    let catalog = Catalog::bundled();
    info!(wallpapers = catalog.len(), "catalog loaded");

    match command {
        Command::Ui => {
            ui::app_shell::launch_window(ScreenCoordinator::new(catalog), config)
                .map_err(CommandError::Runtime)
        }
        Command::List => {
            if catalog.is_empty() {
                println!("no wallpapers in catalog");
                return Ok(());
            }
            for entry in catalog.entries() {
                println!("{}", list_line(entry));
            }
            Ok(())
        }
        Command::Apply { id } => {
            let entry = catalog
                .find(id)
                .ok_or_else(|| CommandError::Usage(format!("no wallpaper with id {id}")))?;
            let wallpaper = DesktopWallpaper::new(&config.staging_dir);
            let host = HostContext::new(&BundledAssets, &wallpaper, &StderrNotifier);
            // The notifier already printed the result; the cause goes to the log.
            if apply_wallpaper(&host, entry.image).is_applied() {
                Ok(())
            } else {
                Err(CommandError::Reported)
            }
        }
    }
}

fn list_line(entry: &WallpaperEntry) -> String {
    format!("{}\t{}\t{}", entry.id, entry.title, entry.image.asset_name())
}

fn print_usage() {
    println!("usage:");
    println!("  wallpick [--config <file>] [ui]");
    println!("  wallpick [--config <file>] list");
    println!("  wallpick [--config <file>] apply <wallpaper_id>");
}
