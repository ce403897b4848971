//! Core error types for scheduly-core.
//!
//! This module defines the error hierarchy using thiserror. Invalid input
//! is rejected at the boundary (time parsing, card counts); the schedule
//! builders themselves are total and never fail.

use std::path::PathBuf;
use thiserror::Error;

use crate::clock::AnchoredTime;

/// Core error type for scheduly-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Clock-time parsing errors
    #[error("Clock error: {0}")]
    Clock(#[from] ClockError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Clock-time errors.
#[derive(Error, Debug)]
pub enum ClockError {
    /// Malformed clock-time string
    #[error("Invalid time '{0}': expected HH:MM")]
    InvalidTimeFormat(String),

    /// Components outside the 24-hour clock
    #[error("Time out of range: hour {hour}, minute {minute}")]
    OutOfRange { hour: u8, minute: u8 },
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Card count above the accepted input range
    #[error("Card count {cards} exceeds the maximum of {max}")]
    CardCountOutOfRange { cards: u32, max: u32 },

    /// Block id not present on today's schedule
    #[error("No block with id '{block_id}' on today's schedule")]
    UnknownBlock { block_id: String },

    /// Invalid block range
    #[error("Invalid block range: end ({end}) must be after start ({start})")]
    InvalidBlockRange {
        start: AnchoredTime,
        end: AnchoredTime,
    },
}

/// Storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read or parse the state snapshot
    #[error("Failed to load state from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to serialize or write the state snapshot
    #[error("Failed to save state to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Data directory cannot be prepared
    #[error("Cannot prepare data directory {path}: {message}")]
    DataDir { path: PathBuf, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
