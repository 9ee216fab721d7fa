//! Trace-replay driver for the laugh detection pipeline.
//!
//! Replays a recorded landmark trace through the detector at the same
//! boundary a live camera pipeline would use, logging state transitions and
//! printing a session summary. The trace is a YAML sequence of frames, each
//! either `null` (no face detected) or a list of `[x, y, z]` points.

use anyhow::{Context, Result};
use clap::Parser;
use laugh_detection::config::Config;
use laugh_detection::detector::LaughDetector;
use laugh_detection::landmarks::LandmarkSet;
use laugh_detection::session::SessionTracker;
use log::info;
use nalgebra::Point3;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Landmark trace file to replay (YAML)
    trace: String,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Sensitivity override (clamped to the configured bounds)
    #[arg(short, long)]
    sensitivity: Option<f32>,

    /// Capture a neutral baseline from the first N face frames
    #[arg(long)]
    calibrate: Option<usize>,

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

    // Load configuration if provided
    let config = if let Some(config_path) = &args.config {
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
    config.validate().context("invalid configuration")?;

    let mut detector = LaughDetector::new(config.detection);
    if let Some(sensitivity) = args.sensitivity {
        detector.set_sensitivity(sensitivity);
    }
    info!(
        "Laugh detector ready (sensitivity: {:.1})",
        detector.sensitivity()
    );

    let frames = load_trace(&args.trace)
        .with_context(|| format!("failed to load trace {}", args.trace))?;
    info!("Replaying {} frames from {}", frames.len(), args.trace);

    // Optionally treat the first N face frames as a neutral-expression batch
    if let Some(n) = args.calibrate {
        let batch: Vec<LandmarkSet> = frames.iter().flatten().take(n).cloned().collect();
        if !detector.calibrate(&batch) {
            log::warn!("calibration skipped: no usable face frames in trace");
        }
    }

    let mut session = SessionTracker::new();
    for landmarks in frames {
        let result = detector.detect(landmarks);
        session.update(&result);
    }

    let summary = session.summary();
    println!("frames processed:   {}", session.frames());
    println!("laugh detected:     {}", summary.laugh_detected);
    println!("laugh episodes:     {}", summary.episodes);
    println!("laughing frames:    {}", summary.samples);
    println!("average intensity:  {:.3}", summary.avg_intensity);
    println!("peak intensity:     {:.3}", summary.max_intensity);
    println!("average confidence: {:.3}", summary.avg_confidence);
    println!("reaction score:     {:.0}/100", summary.score);

    Ok(())
}

/// Parse a YAML landmark trace into per-frame optional landmark sets
fn load_trace(path: &str) -> Result<Vec<Option<LandmarkSet>>> {
    let content = std::fs::read_to_string(path)?;
    let raw: Vec<Option<Vec<[f32; 3]>>> =
        serde_yaml::from_str(&content).context("failed to parse trace YAML")?;

    Ok(raw
        .into_iter()
        .map(|frame| {
            frame.map(|points| {
                points
                    .into_iter()
                    .map(|[x, y, z]| Point3::new(x, y, z))
                    .collect()
            })
        })
        .collect())
}
