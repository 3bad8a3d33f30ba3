//! Error types and result handling for keyed-dispatch.
//!
//! This module defines the main error type [`Error`] and a convenience
//! [`Result`] type alias used throughout the crate.

use thiserror::Error;

/// The main error type for keyed-dispatch operations.
///
/// Failures from the Kafka client library are wrapped here so callers get
/// an explicit result to act on instead of an ambiguous runtime crash.
/// There is no retry or partial-failure handling; the first error ends
/// the run.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error in the fixed producer settings.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Kafka client or producer error.
    #[error("Kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    /// Broker metadata did not describe the topic usably.
    #[error("Metadata error for topic '{topic}': {message}")]
    Metadata {
        /// Topic the metadata lookup was for
        topic: String,
        /// Description of what was missing or invalid
        message: String,
    },
}

/// A convenient Result type alias for keyed-dispatch operations.
///
/// This is equivalent to `std::result::Result<T, keyed_dispatch::Error>`.
pub type Result<T> = std::result::Result<T, Error>;
