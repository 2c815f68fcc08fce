//! Custom error types for parlife operations.

use thiserror::Error;

/// Result type alias for parlife operations
pub type Result<T> = std::result::Result<T, LifeError>;

/// Error type for parlife operations
#[derive(Error, Debug)]
pub enum LifeError {
    /// Invalid parameter value provided
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// The parameter name
        parameter: String,
        /// Explanation of why it's invalid
        reason: String,
    },

    /// Board dimensions too small to hold a border plus interior
    #[error("Invalid board dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        /// Requested board width
        width: usize,
        /// Requested board height
        height: usize,
        /// Explanation of the problem
        reason: String,
    },

    /// Malformed pattern text
    #[error("Invalid pattern at line {line}: {reason}")]
    InvalidPattern {
        /// 1-based line number of the offending line
        line: usize,
        /// Explanation of the problem
        reason: String,
    },

    /// File format error
    #[error("Invalid {file_type} file '{path}': {reason}")]
    InvalidFileFormat {
        /// Type of file (e.g., "pattern")
        file_type: String,
        /// Path to the file
        path: String,
        /// Explanation of the problem
        reason: String,
    },

    /// I/O failure reading or writing a file
    #[error("I/O error on '{path}'")]
    Io {
        /// Path to the file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The OS refused to create a worker thread during simulation setup
    #[error("Failed to spawn worker thread {worker_id}")]
    WorkerSpawn {
        /// Id of the worker that could not be started
        worker_id: usize,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// A worker thread panicked during simulation
    #[error("Worker thread {worker_id} panicked")]
    WorkerPanicked {
        /// Id of the worker that panicked
        worker_id: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter() {
        let error = LifeError::InvalidParameter {
            parameter: "threads".to_string(),
            reason: "must be >= 1".to_string(),
        };
        let msg = format!("{error}");
        assert!(msg.contains("Invalid parameter 'threads'"));
        assert!(msg.contains("must be >= 1"));
    }

    #[test]
    fn test_invalid_dimensions() {
        let error = LifeError::InvalidDimensions {
            width: 2,
            height: 8,
            reason: "width must be >= 3".to_string(),
        };
        let msg = format!("{error}");
        assert!(msg.contains("2x8"));
        assert!(msg.contains("width must be >= 3"));
    }

    #[test]
    fn test_invalid_pattern() {
        let error = LifeError::InvalidPattern {
            line: 4,
            reason: "unexpected character 'x'".to_string(),
        };
        let msg = format!("{error}");
        assert!(msg.contains("line 4"));
        assert!(msg.contains("unexpected character"));
    }

    #[test]
    fn test_worker_spawn_preserves_source() {
        let error = LifeError::WorkerSpawn {
            worker_id: 3,
            source: std::io::Error::other("out of threads"),
        };
        let msg = format!("{error}");
        assert!(msg.contains("worker thread 3"));
        assert!(std::error::Error::source(&error).is_some());
    }
}
