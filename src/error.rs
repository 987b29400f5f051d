use std::path::PathBuf;

use thiserror::Error;

/// Caller contract violations in packed detection data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectionError {
    #[error("box coordinate count {0} is not a multiple of 4")]
    RaggedBoxes(usize),

    #[error("score count {scores} does not match class count {classes}")]
    ScoreClassMismatch { scores: usize, classes: usize },

    #[error("{boxes} boxes supplied for {scores} scores")]
    BoxScoreMismatch { boxes: usize, scores: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize configuration")]
    Serialize(#[source] serde_json::Error),
}
