use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::app_config::{Config, SubtitleFormat};
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::webvtt::{self, SubtitleDocument};

// @module: Application controller for subtitle conversion

/// Result of converting a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// Output written to the given path
    Converted(PathBuf),
    /// Output left alone; the reason is logged
    Skipped(PathBuf),
}

/// Counts reported after a folder run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl FolderSummary {
    pub fn total(&self) -> usize {
        self.converted + self.skipped + self.failed
    }
}

/// Main application controller for subtitle conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Parse WebVTT text with the configured base timestamp
    pub fn parse_document(&self, content: &str) -> Result<SubtitleDocument, AppError> {
        let document = webvtt::parse(content, self.config.base_timestamp_ms)?;
        debug!(
            "Parsed {} cue(s), MPEGTS {}",
            document.cues.len(),
            document.mpegts_timestamp
        );
        Ok(document)
    }

    /// Convert WebVTT text into the configured output format
    pub fn convert_text(&self, content: &str) -> Result<String, AppError> {
        let document = self.parse_document(content)?;
        Ok(match self.config.output_format {
            SubtitleFormat::Srt => document.to_srt_text(),
            SubtitleFormat::Vtt => document.to_vtt_text(),
        })
    }

    /// Output path for an input file in the given directory
    pub fn output_path_for(&self, input_file: &Path, output_dir: &Path) -> PathBuf {
        FileManager::generate_output_path(
            input_file,
            output_dir,
            self.config.output_suffix.as_deref(),
            self.config.output_format.extension(),
        )
    }

    /// Convert one WebVTT file and write the result into `output_dir`
    pub fn run(&self, input_file: &Path, output_dir: &Path, force_overwrite: bool) -> Result<ConversionOutcome> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_path = self.output_path_for(input_file, output_dir);
        if output_path == input_file {
            warn!("Skipping {:?}: output would overwrite the input (set an output suffix or directory)", input_file);
            return Ok(ConversionOutcome::Skipped(output_path));
        }
        if output_path.exists() && !force_overwrite {
            warn!("Skipping file, output already exists (use -f to force overwrite): {:?}", output_path);
            return Ok(ConversionOutcome::Skipped(output_path));
        }

        let content = FileManager::read_to_string(input_file)?;
        let converted = self
            .convert_text(&content)
            .with_context(|| format!("Failed to convert subtitle file: {:?}", input_file))?;

        FileManager::ensure_dir(output_dir)?;
        FileManager::write_to_file(&output_path, &converted)?;

        info!(
            "Converted {:?} -> {:?} ({})",
            input_file,
            output_path,
            self.config.output_format.display_name()
        );
        Ok(ConversionOutcome::Converted(output_path))
    }

    /// Convert every `.vtt` file below `input_dir`, writing next to each input.
    ///
    /// Per-file failures are logged and counted; they do not stop the run.
    pub fn run_folder(&self, input_dir: &Path, force_overwrite: bool) -> Result<FolderSummary> {
        let start_time = Instant::now();

        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let vtt_files = FileManager::find_files(input_dir, "vtt")?;
        if vtt_files.is_empty() {
            return Err(anyhow!("No WebVTT files found in directory: {:?}", input_dir));
        }

        let folder_pb = ProgressBar::new(vtt_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("=>-"));
        folder_pb.set_message("Converting files");

        let mut summary = FolderSummary::default();

        for vtt_file in &vtt_files {
            let file_name = vtt_file
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            folder_pb.set_message(format!("Converting: {}", file_name));

            let output_dir = vtt_file.parent().unwrap_or(input_dir);
            match self.run(vtt_file, output_dir, force_overwrite) {
                Ok(ConversionOutcome::Converted(_)) => summary.converted += 1,
                Ok(ConversionOutcome::Skipped(_)) => summary.skipped += 1,
                Err(e) => {
                    error!("Error processing file {}: {:#}", file_name, e);
                    summary.failed += 1;
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Folder conversion complete");

        info!(
            "Folder conversion completed in {}: {} converted, {} skipped, {} errors",
            Self::format_duration(start_time.elapsed()),
            summary.converted,
            summary.skipped,
            summary.failed
        );

        Ok(summary)
    }

    fn format_duration(duration: std::time::Duration) -> String {
        let seconds = duration.as_secs();
        if seconds >= 60 {
            format!("{}m {}s", seconds / 60, seconds % 60)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
