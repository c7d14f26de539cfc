use canny_detector::image::io::{load_rgb_image, save_rgb_image, write_json_file};
use canny_detector::{EdgeDetector, EdgeParams};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DetectToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub detector: EdgeParams,
    pub output: DetectOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct DetectOutputConfig {
    #[serde(rename = "edge_image")]
    pub edge_image: PathBuf,
    #[serde(rename = "report_json")]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<DetectToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let detector = EdgeDetector::new(config.detector).map_err(|e| e.to_string())?;
    let mut image = load_rgb_image(&config.input)?;
    let report = detector
        .process_with_diagnostics(&mut image)
        .map_err(|e| e.to_string())?;

    save_rgb_image(&image, &config.output.edge_image)?;
    if let Some(report_path) = &config.output.report_json {
        write_json_file(report_path, &report)?;
    }

    println!(
        "{} -> {}: edges={} mask={} total_ms={:.3}",
        config.input.display(),
        config.output.edge_image.display(),
        report.result.edge_pixels,
        report.result.mask_size,
        report.trace.timing.total_ms
    );
    Ok(())
}

fn usage() -> String {
    "Usage: detect_edges <config.json>\n\
     config: {\"input\": \"in.png\", \
     \"detector\": {\"sigma\": 1.0, \"low_threshold\": 50, \"high_threshold\": 100}, \
     \"output\": {\"edge_image\": \"edges.png\", \"report_json\": \"report.json\"}}"
        .to_string()
}
