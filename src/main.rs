//! Command-line entry point for dominant color detection
//!
//! Loads the reference palette, runs the pipeline on one image, and prints
//! the (color name, color code) report ordered by descending dominance.

use clap::Parser;
use dominant_colors::{detect_colors, DetectConfig, NamedColor, ReferencePalette};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "dominant-colors",
    about = "Detect the dominant colors in an image and name them against a reference palette"
)]
struct Cli {
    /// Path to the image to analyze
    image: Option<PathBuf>,

    /// Reference palette CSV (columns: color, code, R, G, B)
    #[arg(long = "colors")]
    colors: Option<PathBuf>,

    /// Maximum dimension after downsampling
    #[arg(long)]
    threshold: Option<u32>,

    /// Sampling interval over frequency-ranked detected colors
    #[arg(long)]
    stride: Option<usize>,

    /// JSON configuration file; command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit the report as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match DetectConfig::from_json_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Failed to read config file {}: {}", path.display(), error);
                process::exit(1);
            }
        },
        None => DetectConfig::default(),
    };

    if let Some(image) = cli.image {
        config.image_path = image;
    }
    if let Some(colors) = cli.colors {
        config.palette_path = colors;
    }
    if let Some(threshold) = cli.threshold {
        config.resize_threshold = threshold;
    }
    if let Some(stride) = cli.stride {
        config.sample_stride = stride;
    }

    if config.image_path.as_os_str().is_empty() {
        eprintln!("Error: no image path given (positional argument or config file)");
        process::exit(2);
    }

    let palette = match ReferencePalette::from_csv_file(&config.palette_path) {
        Ok(palette) => palette,
        Err(error) => {
            eprintln!("Failed to load palette: {}", error);
            eprintln!("Suggestion: {}", error.user_message());
            process::exit(1);
        }
    };

    match detect_colors(&config, &palette) {
        Ok(report) => print_report(&report, cli.json),
        Err(error) => {
            eprintln!("Detection failed: {}", error);
            eprintln!("Suggestion: {}", error.user_message());
            process::exit(1);
        }
    }
}

fn print_report(report: &[NamedColor], as_json: bool) {
    if as_json {
        match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{}", json),
            Err(error) => {
                eprintln!("Error serializing report: {}", error);
                process::exit(1);
            }
        }
        return;
    }

    if report.is_empty() {
        println!("No colors matched.");
        return;
    }

    // Aligned two-column table, most dominant color first
    let name_width = report
        .iter()
        .map(|entry| entry.name.len())
        .max()
        .unwrap_or(0)
        .max("color name".len());

    println!("{:<name_width$}  color code", "color name");
    println!("{:-<name_width$}  ----------", "");
    for entry in report {
        println!("{:<name_width$}  {}", entry.name, entry.code);
    }
}
