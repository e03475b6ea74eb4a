//! Posture monitoring over a recorded keypoint session.

use anyhow::Result;
use clap::Parser;
use log::info;
use posture_watch::app::PostureApp;
use posture_watch::config::Config;
use posture_watch::render::LogRenderer;
use posture_watch::source::ReplaySource;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Keypoint recording to play back (JSON Lines)
    #[arg(short, long)]
    replay: String,

    /// Loop the recording instead of stopping at its end
    #[arg(long)]
    r#loop: bool,

    /// Stop after this many frames
    #[arg(short = 'n', long)]
    max_frames: Option<usize>,

    /// Request a baseline reset after this many frames
    #[arg(long)]
    reset_after: Option<usize>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Posture Watch");

    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {config_path}");
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {e}. Using defaults.");
                Config::default()
            }
        }
    } else {
        Config::default()
    };
    if args.max_frames.is_some() {
        config.pipeline.max_frames = args.max_frames;
    }

    let source = ReplaySource::from_file(&args.replay, args.r#loop)?;
    info!("Replaying {} frames from {}", source.len(), args.replay);

    let mut app = PostureApp::new(config, Box::new(source), Box::new(LogRenderer::new()))?;

    // Scripted reset exercises the manual control surface during replay.
    if let Some(after) = args.reset_after {
        let control = app.control_handle();
        std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(after as u64 * 33));
            info!("Requesting baseline reset");
            control.reset_baseline();
        });
    }

    app.run()?;

    Ok(())
}
