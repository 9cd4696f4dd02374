use crate::config::Config;
use crate::error::Result;
use crate::gradient::GradientMap;
use image::DynamicImage;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub struct BatchReport {
    pub processed: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
    pub total_bytes: u64,
}

/// Applies a gradient map to one image file and writes the result.
///
/// Formats without an alpha channel (JPEG) are written as RGB.
pub fn apply_to_file(map: &GradientMap, input: &Path, output: &Path) -> Result<()> {
    let mut img = image::open(input)?.to_rgba8();
    map.apply_to(&mut img)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let drops_alpha = output
        .extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
        .unwrap_or(false);
    if drops_alpha {
        DynamicImage::ImageRgba8(img).to_rgb8().save(output)?;
    } else {
        img.save(output)?;
    }
    debug!(input = %input.display(), output = %output.display(), "applied gradient map");
    Ok(())
}

/// Every file under `root` with one of the configured image extensions, sorted.
pub fn collect_images(root: &Path, config: &Config) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|s| s.to_str())
                .map(|ext| config.accepts_extension(ext))
                .unwrap_or(false)
        })
        .map(|e| e.into_path())
        .collect();
    paths.sort();
    paths
}

/// Applies a gradient map to every image under `input_root`, mirroring the
/// directory layout under `output_root`.
///
/// A file that fails is recorded in the report and does not stop the batch.
pub fn apply_to_dir(
    map: &GradientMap,
    input_root: &Path,
    output_root: &Path,
    config: &Config,
) -> BatchReport {
    let entries = collect_images(input_root, config);
    let total_bytes: u64 = entries
        .iter()
        .filter_map(|p| fs::metadata(p).ok())
        .map(|m| m.len())
        .sum();

    let pb = ProgressBar::new(entries.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg}\n[{bar:40.cyan/blue}] {pos}/{len} {percent}%")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▇▆▅▄▃▂▁  "),
    );

    let mut report = BatchReport {
        total_bytes,
        ..BatchReport::default()
    };
    for path in entries {
        let relative = path.strip_prefix(input_root).unwrap_or(&path).to_path_buf();
        let target = output_root.join(&relative);
        pb.set_message(format!("Mapping {:<30}", relative.display()));

        match apply_to_file(map, &path, &target) {
            Ok(()) => report.processed.push(target),
            Err(err) => {
                warn!(path = %path.display(), "failed to apply gradient map: {}", err);
                report.failed.push((path, err.to_string()));
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("✅ All images mapped!");

    report
}
