//! Error types for Recipe Organizer.

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Database-related errors.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Connection pool error: {0}")]
    Pool(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Migration failed: {0}")]
    Migration(String),
}

/// Errors raised while handling a single platform request.
///
/// Store faults are not in here: they are answered with speech instead.
#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    #[error("Request addressed to application {received}, expected {expected}")]
    ApplicationMismatch { expected: String, received: String },

    #[error("Request carries no application id")]
    MissingApplication,

    #[error("Intent request carries no user id")]
    MissingUser,
}
