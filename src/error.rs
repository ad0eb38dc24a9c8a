use std::{io, path::PathBuf, result};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read cards file {0:?}: {1}")]
    Read(PathBuf, #[source] io::Error),
    #[error("cannot fetch cards from {0}: {1}")]
    Fetch(String, #[source] reqwest::Error),
    #[error("cards request to {0} failed with status {1}")]
    Status(String, reqwest::StatusCode),
    #[error("cannot parse cards document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("cards loader stopped before reporting a result")]
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title must not be empty")]
    EmptyTitle,
    #[error("Content must not be empty")]
    EmptyContent,
}

pub type Result<T> = result::Result<T, LoadError>;
