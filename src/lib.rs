//! Batch Resizer - batch image resizing and compression
//!
//! Scales every supported image in a folder by a percentage and re-encodes
//! it into a `resized` subfolder, reporting progress after each file.
//!
//! # Features
//!
//! - **Formats**: reads PNG, JPEG, GIF, BMP and TIFF; writes PNG, JPG/JPEG,
//!   GIF, BMP and TIFF
//! - **Predictable sizing**: each dimension is scaled and rounded down
//! - **Fail fast**: the first unreadable or unwritable file ends the run
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use batch_resizer::{run, OutputFormat, Progress, Selection, StandardCodec};
//!
//! let selection = Selection::new()
//!     .input_dir("photos")
//!     .scale_percent(50)
//!     .output_format(OutputFormat::Png);
//!
//! let outcome = run(selection, StandardCodec::new(), &mut |p: Progress| {
//!     println!("{}/{}", p.processed, p.total);
//! });
//!
//! println!("{}", outcome.message());
//! ```

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod processing;

// Re-export commonly used types
pub use config::{JobConfig, OutputFormat, Selection, Settings};
pub use error::{ErrorKind, ResizeError, Result};
pub use pipeline::{run, Converter, Progress, ProgressSink, RunOutcome, RunSummary};
pub use processing::{FilterType, ImageCodec, StandardCodec};

use tracing::info;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `level` when set. Calling this more than
/// once is harmless; only the first subscriber is kept.
pub fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        info!("Batch Resizer v{} initialized", VERSION);
    }
}
