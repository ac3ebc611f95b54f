//! Centralized error types for the game.
//!
//! This module defines all error types used throughout the application,
//! providing a consistent error handling approach.

use std::io;

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
/// It can represent any error that can occur during game operation.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Score service error: {0}")]
    Score(#[from] ScoreError),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Errors raised by the remote score service client.
///
/// These never surface past the client's worker threads; they are reported
/// through the client's channel and rendered as placeholder/alert states.
#[derive(thiserror::Error, Debug)]
pub enum ScoreError {
    #[error("Request failed: {0}")]
    Http(String),

    #[error("Unexpected status code: {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Parse(String),

    #[error("Submission rejected with status: {0}")]
    Rejected(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
