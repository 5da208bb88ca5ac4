use reqwest::StatusCode;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single URL failed
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network, DNS, timeout or malformed-URL failure
    #[error("{0}")]
    Connection(#[from] reqwest::Error),

    #[error("HTTP {status} for url ({url})")]
    Status { status: StatusCode, url: String },

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    /// Connection and status errors; everything else is unexpected
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Status { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotImage,
    Duplicate,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotImage => f.write_str("Not an image"),
            Self::Duplicate => f.write_str("Duplicate image"),
        }
    }
}

/// Result of processing one URL
#[derive(Debug)]
pub enum FetchOutcome {
    Saved { filename: String, path: PathBuf },
    Skipped(SkipReason),
    Failed(FetchError),
}

/// Per-run counters, one bucket per outcome kind
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub saved: usize,
    pub not_image: usize,
    pub duplicate: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &FetchOutcome) {
        match outcome {
            FetchOutcome::Saved { .. } => self.saved += 1,
            FetchOutcome::Skipped(SkipReason::NotImage) => self.not_image += 1,
            FetchOutcome::Skipped(SkipReason::Duplicate) => self.duplicate += 1,
            FetchOutcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.saved + self.not_image + self.duplicate + self.failed
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed {} URL(s): {} saved, {} not an image, {} duplicate, {} failed",
            self.total(),
            self.saved,
            self.not_image,
            self.duplicate,
            self.failed
        )
    }
}
