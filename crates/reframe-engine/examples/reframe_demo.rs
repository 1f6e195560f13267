//! Demo: face-centered reframing filter synthesis
//!
//! Run with: cargo run -p reframe-engine --example reframe_demo

use reframe_engine::{
    centered_crop_filter, dynamic_crop, dynamic_crop_filter, should_track, static_crop,
    static_crop_filter, TrackerConfig,
};
use reframe_models::{FaceSample, FrameSize};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    // Face centers as an external detector would report them, one per frame
    let samples = [
        FaceSample::new(960.0, 540.0),
        FaceSample::new(965.0, 545.0),
        FaceSample::new(970.0, 540.0),
        FaceSample::new(968.0, 538.0),
        FaceSample::new(970.0, 540.0),
    ];

    let frame = FrameSize::new(1920, 1080);
    let fps = 30.0;
    let duration_seconds = 42.0;
    let config = TrackerConfig::default();

    println!("\n{}", "=".repeat(60));
    println!("INPUT: {} @ {:.0} fps, {:.0}s", frame, fps, duration_seconds);
    println!("{}", "=".repeat(60));

    if !should_track(duration_seconds) {
        let fallback = centered_crop_filter(frame, &config).expect("frame dimensions are valid");
        println!("Tracking skipped; centered fallback: {}", fallback);
        return;
    }

    // Static mode: one rectangle centered on the average face position
    let crop = static_crop(&samples, frame, &config).expect("samples are non-empty");
    println!("\nStatic crop:  {}", static_crop_filter(&crop));

    // Dynamic mode: per-frame stepping expressions
    let spec = dynamic_crop(&samples, frame, fps, &config).expect("samples are non-empty");
    println!("Dynamic crop: {}", dynamic_crop_filter(&spec));

    println!(
        "\nDynamicFilterSpec:\n{}",
        serde_json::to_string_pretty(&spec).expect("serialization should be infallible")
    );
}
