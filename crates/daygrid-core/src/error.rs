//! Core error types for daygrid-core.
//!
//! This module defines the error hierarchy used across the library with
//! thiserror. Per-event problems ([`ValidationError`]) are collected next to
//! a layout result; everything else aborts the call.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for daygrid-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Event validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Geometry errors
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Calendar source errors
    #[error("Calendar source error: {0}")]
    Source(#[from] SourceError),

    /// Requested day range runs past the last representable date
    #[error("Date range of {days} days starting {first_day} is out of range")]
    DateOutOfRange {
        first_day: chrono::NaiveDate,
        days: u32,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single event that cannot be placed on the timeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// End is not after start
    #[error("Invalid time range for event '{id}': end ({end}) must be greater than start ({start})")]
    InvalidTimeRange { id: String, start: f64, end: f64 },

    /// A bound falls outside the 0..=24 hour day
    #[error("Event '{id}' has {field} = {value}, outside the 0-24 hour day")]
    OutOfRange {
        id: String,
        field: &'static str,
        value: f64,
    },

    /// NaN or infinite bound
    #[error("Event '{id}' has a non-finite {field}")]
    NotFinite { id: String, field: &'static str },

    /// Id already used by another event of the same day
    #[error("Duplicate event id '{id}'")]
    DuplicateId { id: String },
}

impl ValidationError {
    /// Id of the offending event.
    pub fn event_id(&self) -> &str {
        match self {
            Self::InvalidTimeRange { id, .. }
            | Self::OutOfRange { id, .. }
            | Self::NotFinite { id, .. }
            | Self::DuplicateId { id } => id.as_str(),
        }
    }
}

/// Invalid dimensions handed to the geometry projection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Day height or width is zero, negative or NaN
    #[error("Day {dimension} must be positive, got {value}")]
    NonPositive { dimension: &'static str, value: f64 },

    /// Gap or minimum height below zero
    #[error("{setting} must not be negative, got {value}")]
    Negative { setting: &'static str, value: f64 },
}

/// Calendar source errors.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Failed to read the backing file
    #[error("Failed to read events from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backing file is not a valid event list
    #[error("Failed to parse events from {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Source cannot answer right now
    #[error("Calendar source '{source_name}' unavailable: {message}")]
    Unavailable {
        source_name: String,
        message: String,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
