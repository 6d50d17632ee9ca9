//! Error types for network construction, edge queries and solver parameters
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::io;

/// Result alias used across the crate
pub type FlowResult<T> = Result<T, FlowError>;

/// Flow network errors
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// An edge description that cannot become a `FlowEdge`
    #[error("Malformed topology at line {line}: {reason}")]
    MalformedTopology { line: usize, reason: String },

    /// Source and sink are equal or not part of the network
    #[error("Invalid source/sink: {0}")]
    InvalidEndpoints(String),

    /// Edge query naming a node that is not one of the edge's endpoints
    #[error("Node {node} is not an endpoint of edge {edge}")]
    InvalidEndpoint { node: String, edge: String },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("File IO problem: {0}")]
    Io(#[from] io::Error),
}

impl FlowError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        FlowError::MalformedTopology {
            line,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FlowError::malformed(3, "expected 3 fields, found 2");
        assert_eq!(
            err.to_string(),
            "Malformed topology at line 3: expected 3 fields, found 2"
        );

        let err = FlowError::InvalidEndpoints("source and sink are the same: A".to_string());
        assert_eq!(err.to_string(), "Invalid source/sink: source and sink are the same: A");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err: FlowError = io_err.into();
        assert!(matches!(err, FlowError::Io(_)));
    }
}
