#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::{MotionPreference, PortfolioResult, SiteSettings, PROFILE};
use tracing_subscriber::EnvFilter;

/// Global site settings, set once from the command line
static SETTINGS: OnceLock<SiteSettings> = OnceLock::new();

/// Get the site settings (set from command line or default)
pub fn get_settings() -> SiteSettings {
    SETTINGS.get().cloned().unwrap_or_default()
}

/// Portfolio - single-page personal site
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Personal portfolio page with animated section reveals")]
struct Args {
    /// JSON settings file (motion timing, trigger margin, easing)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Complete every transition instantly and jump instead of scrolling
    #[arg(long)]
    reduced_motion: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

impl Args {
    fn site_settings(&self) -> PortfolioResult<SiteSettings> {
        let mut settings = match &self.settings {
            Some(path) => SiteSettings::load(path)?,
            None => SiteSettings::default(),
        };
        if self.reduced_motion {
            settings.motion = MotionPreference::Reduced;
        }
        Ok(settings)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let settings = match args.site_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load settings: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        motion = ?settings.motion,
        width = args.width,
        height = args.height,
        "Starting portfolio"
    );

    // Store settings globally
    let _ = SETTINGS.set(settings);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(PROFILE.name)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    ExitCode::SUCCESS
}
