//! Job selection and validation

use std::path::PathBuf;

use crate::config::OutputFormat;
use crate::error::{ResizeError, Result};

/// Name of the subdirectory that receives converted images
pub const OUTPUT_DIR_NAME: &str = "resized";

const MISSING_SELECTION: &str =
    "Please select an input folder, scaling factor, and output format.";

/// Raw values gathered from the user before a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub input_dir: Option<PathBuf>,
    pub scale_percent: Option<u8>,
    pub output_format: Option<OutputFormat>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = Some(dir.into());
        self
    }

    pub fn scale_percent(mut self, percent: u8) -> Self {
        self.scale_percent = Some(percent);
        self
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    /// Check that every field is present and turn the selection into a job.
    ///
    /// Only presence is checked here: the directory is not touched, so a
    /// nonexistent folder is reported later by the pipeline. An empty path
    /// and a scale of zero count as absent.
    pub fn validate(self) -> Result<JobConfig> {
        let input_dir = self.input_dir.filter(|dir| !dir.as_os_str().is_empty());
        let scale_percent = self.scale_percent.filter(|&percent| percent > 0);

        let (Some(input_dir), Some(scale_percent), Some(output_format)) =
            (input_dir, scale_percent, self.output_format)
        else {
            return Err(ResizeError::config(MISSING_SELECTION));
        };

        if scale_percent > 100 {
            return Err(ResizeError::config(format!(
                "Scaling factor must be between 1 and 100, got {}",
                scale_percent
            )));
        }

        Ok(JobConfig {
            input_dir,
            scale_percent,
            output_format,
        })
    }
}

/// A validated job. Immutable for the duration of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfig {
    pub input_dir: PathBuf,
    pub scale_percent: u8,
    pub output_format: OutputFormat,
}

impl JobConfig {
    /// Directory the converted files are written to
    pub fn output_dir(&self) -> PathBuf {
        self.input_dir.join(OUTPUT_DIR_NAME)
    }
}
