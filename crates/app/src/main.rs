use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing_subscriber::EnvFilter;

use services::{FeedbackProvider, TutorService};
use ui::{App, UiApp, build_app_context};

struct DesktopApp {
    feedback: Arc<TutorService>,
}

impl UiApp for DesktopApp {
    fn feedback(&self) -> Arc<dyn FeedbackProvider> {
        Arc::clone(&self.feedback) as Arc<dyn FeedbackProvider>
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FRACTION_AI_API_KEY    enables generated explanations");
    eprintln!("  FRACTION_AI_BASE_URL   chat-completions endpoint (default: OpenAI)");
    eprintln!("  FRACTION_AI_MODEL      model name (default: gpt-4o-mini)");
    eprintln!("  RUST_LOG               tracing filter (default: info)");
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("unknown argument: {other}");
                print_usage();
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "unknown argument",
                )
                .into());
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let tutor = TutorService::from_env();
    tracing::info!(explanations_enabled = tutor.enabled(), "starting fraction tutor");

    let app = DesktopApp {
        feedback: Arc::new(tutor),
    };
    let context = build_app_context(Arc::new(app));

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Fraction Tutor")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
