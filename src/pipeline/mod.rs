//! Batch conversion pipeline
//!
//! A run lists the eligible images of one folder, then resizes and re-encodes
//! them one at a time into the folder's `resized` subdirectory. The first
//! error ends the run; files converted before it stay on disk.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::{JobConfig, OutputFormat, Selection};
use crate::error::{ErrorContext, ErrorKind, Result};
use crate::processing::{output_path_for, target_dimensions, ImageCodec, StandardCodec};

pub mod progress;
pub mod scan;

pub use progress::*;
pub use scan::*;

/// What happened to one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRecord {
    pub input: PathBuf,
    pub output: PathBuf,
    pub original: (u32, u32),
    pub target: (u32, u32),
}

/// Result of a run that converted every candidate
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub records: Vec<ConversionRecord>,
}

impl RunSummary {
    pub fn converted(&self) -> usize {
        self.records.len()
    }
}

/// Terminal outcome of a run, shown to the user exactly once
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Success { converted: usize },
    Failure { kind: ErrorKind, message: String },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Text for the completion notice
    pub fn message(&self) -> String {
        match self {
            Self::Success { .. } => {
                "All supported image files have been resized and compressed successfully!"
                    .to_string()
            }
            Self::Failure {
                kind: ErrorKind::Configuration,
                message,
            } => message.clone(),
            Self::Failure { message, .. } => format!("An error occurred: {}", message),
        }
    }
}

/// Drives the conversion of a folder through an [`ImageCodec`]
pub struct Converter<C = StandardCodec> {
    codec: C,
}

impl<C: ImageCodec> Converter<C> {
    pub fn new(codec: C) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Convert every eligible file of `job.input_dir`.
    ///
    /// Reports `(0, total)` once the candidates are known and `(n, total)`
    /// after the n-th file is written. Stops at the first error.
    pub fn convert<S: ProgressSink>(&self, job: &JobConfig, progress: &mut S) -> Result<RunSummary> {
        let start_time = Instant::now();

        // list before creating the output folder so it can never be a candidate
        let files = eligible_files(&job.input_dir)?;

        let output_dir = job.output_dir();
        fs::create_dir_all(&output_dir).with_file_context(&output_dir)?;

        info!(
            "Converting {} files in {:?} at {}% to {}",
            files.len(),
            job.input_dir,
            job.scale_percent,
            job.output_format
        );

        let total = files.len();
        progress.report(Progress::new(0, total));

        let mut summary = RunSummary::default();
        let mut written = HashSet::new();

        for input in &files {
            let output = output_path_for(input, &output_dir, job.output_format);
            if !written.insert(output.clone()) {
                warn!("{:?} overwrites an output written earlier in this run", output);
            }

            let record = self
                .convert_file(input, &output, job.scale_percent, job.output_format)
                .with_file_context(input)?;

            summary.records.push(record);
            progress.report(Progress::new(summary.converted(), total));
        }

        info!(
            "Converted {} files in {:.2}s",
            summary.converted(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(summary)
    }

    fn convert_file(
        &self,
        input: &Path,
        output: &Path,
        scale_percent: u8,
        format: OutputFormat,
    ) -> Result<ConversionRecord> {
        debug!("Processing file: {:?} -> {:?}", input, output);

        let image = self.codec.decode(input)?;
        let original = (image.width(), image.height());
        let target = target_dimensions(original.0, original.1, scale_percent);

        let resized = self.codec.resize(&image, target.0, target.1)?;
        drop(image);

        self.codec.encode(&resized, output, format)?;

        Ok(ConversionRecord {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            original,
            target,
        })
    }
}

impl Default for Converter<StandardCodec> {
    fn default() -> Self {
        Self::new(StandardCodec::new())
    }
}

/// Validate `selection` and convert it, turning any error into a failure outcome.
pub fn run<C, S>(selection: Selection, codec: C, progress: &mut S) -> RunOutcome
where
    C: ImageCodec,
    S: ProgressSink,
{
    let result = selection
        .validate()
        .and_then(|job| Converter::new(codec).convert(&job, progress));

    match result {
        Ok(summary) => RunOutcome::Success {
            converted: summary.converted(),
        },
        Err(error) => {
            debug!("Run failed: {}", error);
            RunOutcome::Failure {
                kind: error.kind(),
                message: error.user_message(),
            }
        }
    }
}
