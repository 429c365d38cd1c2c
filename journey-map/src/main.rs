use serde::Serialize;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use journey_map::preview::PreviewConfig;
use journey_map::render::{
    CancelToken, IntervalScheduler, RecordingSurface, RenderReport, Renderer, SurfaceCommand,
    TracingSurface,
};
use journey_map::wire::JourneyInput;

/// Everything the preview prints: the summary and the full command list a
/// browser client could replay.
#[derive(Serialize)]
struct PreviewOutput {
    report: RenderReport,
    commands: Vec<SurfaceCommand>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = PreviewConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });

    // An unreadable file is treated like a missing result: nothing is drawn.
    let input = match JourneyInput::from_path(&config.journey_file) {
        Ok(input) => Some(input),
        Err(e) => {
            warn!(error = %e, "Could not load route result");
            None
        }
    };

    // Stop the animation on Ctrl-C, keeping whatever was drawn so far.
    let cancel = CancelToken::new();
    let cancel_on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_on_signal.cancel();
        }
    });

    let mut scheduler = IntervalScheduler::new(config.render.frame_interval);
    let mut surface = TracingSurface::new(RecordingSurface::new());
    let renderer = Renderer::new(config.render);

    let report = renderer
        .render_journey(input.as_ref(), &mut surface, &mut scheduler, &cancel)
        .await;

    let output = PreviewOutput {
        report,
        commands: surface.into_inner().into_commands(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&output).expect("render output is serializable")
    );
}
