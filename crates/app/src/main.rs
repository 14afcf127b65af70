use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, ResourceIntakeService, StudyLibrary, StudyTimer, TokioTimeSource};
use study_core::DEFAULT_DURATION_SECS;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

/// Study Sprint: flashcards, notes and a focus timer for exam prep.
#[derive(Debug, Parser)]
#[command(name = "study-sprint", version, about)]
struct Args {
    /// Length of one focus session, in seconds.
    #[arg(long, env = "STUDY_SPRINT_TIMER_SECS", default_value_t = DEFAULT_DURATION_SECS)]
    timer_secs: u32,

    /// TOML deck file to study instead of the built-in cards.
    #[arg(long, env = "STUDY_SPRINT_DECK")]
    deck: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv). `RUST_LOG` wins when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn clock(&self) -> Clock {
        self.services.clock()
    }

    fn library(&self) -> Arc<StudyLibrary> {
        self.services.library()
    }

    fn resource_intake(&self) -> Arc<ResourceIntakeService> {
        self.services.resource_intake()
    }

    fn timer_duration_secs(&self) -> u32 {
        self.services.timer_duration_secs()
    }

    fn new_timer(&self) -> StudyTimer {
        self.services.new_timer()
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<()> {
    let clock = Clock::system();
    let time_source = Arc::new(TokioTimeSource::current());
    let services = AppServices::load(clock, args.deck.as_deref(), time_source.clone())
        .with_context(|| match &args.deck {
            Some(path) => format!("failed to load deck file {}", path.display()),
            None => "failed to build the built-in study library".to_string(),
        })?
        .with_timer_duration(args.timer_secs);

    tracing::info!(
        cards = services.library().deck().len().get(),
        timer_secs = services.timer_duration_secs(),
        "starting study sprint"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Study Sprint")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);

    time_source.shutdown();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    run(args)
}
