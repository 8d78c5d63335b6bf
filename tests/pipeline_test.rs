//! Integration tests for the complete detection pipeline
//!
//! These tests validate the end-to-end workflow including:
//! - Image loading and downsampling
//! - Color tallying and palette matching
//! - Name resolution and output ordering
//! - Error handling for edge cases
//!
//! Image and palette fixtures are synthesized into a temp directory per
//! test; no checked-in assets are required.

use dominant_colors::{detect_colors, DetectConfig, DetectError, NamedColor, ReferencePalette};
use image::{Rgb, RgbImage};
use std::io::Write;
use std::path::{Path, PathBuf};

// ============================================================================
// Fixtures
// ============================================================================

fn write_palette(dir: &Path, rows: &[(&str, &str, u8, u8, u8)]) -> PathBuf {
    let path = dir.join("colors.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "color,code,R,G,B").unwrap();
    for (name, code, r, g, b) in rows {
        writeln!(file, "{},{},{},{},{}", name, code, r, g, b).unwrap();
    }
    path
}

fn rgb_palette(dir: &Path) -> PathBuf {
    write_palette(
        dir,
        &[
            ("red", "#FF0000", 255, 0, 0),
            ("green", "#00FF00", 0, 255, 0),
            ("blue", "#0000FF", 0, 0, 255),
        ],
    )
}

fn config(image_path: PathBuf, palette_path: PathBuf, stride: usize) -> DetectConfig {
    DetectConfig {
        image_path,
        palette_path,
        sample_stride: stride,
        ..DetectConfig::default()
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_missing_image_file() {
    let dir = tempfile::tempdir().unwrap();
    let palette = ReferencePalette::from_csv_file(&rgb_palette(dir.path())).unwrap();

    let result = detect_colors(
        &config(PathBuf::from("nonexistent_file.png"), rgb_palette(dir.path()), 10),
        &palette,
    );

    assert!(matches!(result, Err(DetectError::ImageLoad { .. })));
}

#[test]
fn test_corrupt_image_file() {
    let dir = tempfile::tempdir().unwrap();
    let bogus = dir.path().join("not_an_image.png");
    std::fs::write(&bogus, b"this is not a png").unwrap();
    let palette = ReferencePalette::from_csv_file(&rgb_palette(dir.path())).unwrap();

    let result = detect_colors(&config(bogus, rgb_palette(dir.path()), 10), &palette);

    assert!(matches!(result, Err(DetectError::ImageLoad { .. })));
}

#[test]
fn test_empty_palette_fails_run() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("pixel.png");
    RgbImage::from_pixel(1, 1, Rgb([1, 2, 3]))
        .save(&image_path)
        .unwrap();
    let palette_path = write_palette(dir.path(), &[]);
    let palette = ReferencePalette::from_csv_file(&palette_path).unwrap();

    let result = detect_colors(&config(image_path, palette_path, 10), &palette);

    assert!(matches!(result, Err(DetectError::EmptyPalette)));
}

// ============================================================================
// End-to-End Scenario Tests
// ============================================================================

#[test]
fn test_two_by_two_scenario() {
    // 2x2 image: two red pixels in the top row, green and blue below.
    // With stride 1 every tallied color is matched, and the report must come
    // back red (dominant, count 2), then green, then blue (scan order).
    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("tiny.png");

    let mut img = RgbImage::new(2, 2);
    img.put_pixel(0, 0, Rgb([255, 0, 0]));
    img.put_pixel(1, 0, Rgb([255, 0, 0]));
    img.put_pixel(0, 1, Rgb([0, 255, 0]));
    img.put_pixel(1, 1, Rgb([0, 0, 255]));
    img.save(&image_path).unwrap();

    let palette_path = rgb_palette(dir.path());
    let palette = ReferencePalette::from_csv_file(&palette_path).unwrap();

    let report = detect_colors(&config(image_path, palette_path, 1), &palette).unwrap();

    assert_eq!(
        report,
        vec![
            NamedColor {
                name: "red".to_string(),
                code: "#FF0000".to_string()
            },
            NamedColor {
                name: "green".to_string(),
                code: "#00FF00".to_string()
            },
            NamedColor {
                name: "blue".to_string(),
                code: "#0000FF".to_string()
            },
        ]
    );
}

#[test]
fn test_uniform_image_single_match() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("uniform.png");
    RgbImage::from_pixel(40, 40, Rgb([250, 5, 5]))
        .save(&image_path)
        .unwrap();

    let palette_path = rgb_palette(dir.path());
    let palette = ReferencePalette::from_csv_file(&palette_path).unwrap();

    let report = detect_colors(&config(image_path, palette_path, 10), &palette).unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(report[0].name, "red");
    assert_eq!(report[0].code, "#FF0000");
}

#[test]
fn test_large_image_is_downsampled_and_detected() {
    // 400x200 solid green; downsampling to 100x50 must not change the result
    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("large.png");
    RgbImage::from_pixel(400, 200, Rgb([0, 255, 0]))
        .save(&image_path)
        .unwrap();

    let palette_path = rgb_palette(dir.path());
    let palette = ReferencePalette::from_csv_file(&palette_path).unwrap();

    let report = detect_colors(&config(image_path, palette_path, 10), &palette).unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(report[0].name, "green");
}

#[test]
fn test_default_stride_samples_dominant_color() {
    // With the default stride of 10 only every 10th frequency rank is
    // matched, but rank 0 (the dominant color) is always sampled.
    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("mostly_blue.png");

    let mut img = RgbImage::from_pixel(10, 10, Rgb([0, 0, 255]));
    img.put_pixel(0, 0, Rgb([255, 0, 0]));
    img.save(&image_path).unwrap();

    let palette_path = rgb_palette(dir.path());
    let palette = ReferencePalette::from_csv_file(&palette_path).unwrap();

    let report = detect_colors(&config(image_path, palette_path, 10), &palette).unwrap();

    assert_eq!(report[0].name, "blue");
}

#[test]
fn test_jpeg_input() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("photo.jpg");
    RgbImage::from_pixel(32, 32, Rgb([255, 0, 0]))
        .save(&image_path)
        .unwrap();

    let palette_path = rgb_palette(dir.path());
    let palette = ReferencePalette::from_csv_file(&palette_path).unwrap();

    // JPEG is lossy; solid red may decode to nearby shades, but every shade
    // is still nearest to the red palette row.
    let report = detect_colors(&config(image_path, palette_path, 1), &palette).unwrap();

    assert!(!report.is_empty());
    assert_eq!(report[0].name, "red");
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_config_file_round_trip_drives_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("pixel.png");
    RgbImage::from_pixel(1, 1, Rgb([0, 0, 255]))
        .save(&image_path)
        .unwrap();
    let palette_path = rgb_palette(dir.path());

    let config_path = dir.path().join("run.json");
    config(image_path, palette_path, 1)
        .to_json_file(&config_path)
        .unwrap();

    let loaded = DetectConfig::from_json_file(&config_path).unwrap();
    let palette = ReferencePalette::from_csv_file(&loaded.palette_path).unwrap();
    let report = detect_colors(&loaded, &palette).unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(report[0].name, "blue");
}

#[test]
fn test_zero_stride_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("pixel.png");
    RgbImage::from_pixel(1, 1, Rgb([1, 2, 3]))
        .save(&image_path)
        .unwrap();

    let palette_path = rgb_palette(dir.path());
    let palette = ReferencePalette::from_csv_file(&palette_path).unwrap();

    let result = detect_colors(&config(image_path, palette_path, 0), &palette);

    assert!(matches!(result, Err(DetectError::InvalidParameter { .. })));
}
