use thiserror::Error;

/// Convenient result alias for the pointpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a point fails validation at construction time.
    #[error("invalid point {id:?}: {reason}")]
    InvalidPoint { id: String, reason: String },

    /// Raised when a union (or a plain connection) fails validation.
    #[error("invalid union between {point1} and {point2}: {reason}")]
    InvalidUnion {
        point1: String,
        point2: String,
        reason: String,
    },

    /// Raised when a caller-supplied union identifier is not a UUID.
    #[error("invalid union identifier {id:?}; expected a UUID")]
    InvalidUnionId { id: String },

    /// Raised when a network snapshot declares the same point more than once.
    #[error("duplicate point identifier: {id}")]
    DuplicatePoint { id: String },

    /// Raised when a network snapshot union names an undeclared point.
    #[error("union {union} references unknown point {point}")]
    UnknownUnionEndpoint { union: String, point: String },

    /// Raised when the start or end of a path request is not a known point.
    #[error("points not found: {}{}", .missing.join(", "), format_suggestions(.suggestions))]
    PointsNotFound {
        missing: Vec<String>,
        suggestions: Vec<String>,
    },

    /// Raised when the end point cannot be reached from the start point.
    #[error("no path found between {start} and {end}")]
    NoPath { start: String, end: String },

    /// Raised when a shortest path would exceed the range of `f64`.
    #[error("path distance between {start} and {end} exceeds the representable range")]
    DistanceOverflow { start: String, end: String },

    /// Raised when a path result is built without any points.
    #[error("path was empty")]
    EmptyPath,

    /// Raised when a path result is built with a non-finite or negative distance.
    #[error("path distance {distance} is not a finite, non-negative number")]
    InvalidPathDistance { distance: f64 },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the network snapshot")]
    ProjectDirsUnavailable,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error is the engine's connectivity failure.
    pub fn is_no_path(&self) -> bool {
        matches!(self, Error::NoPath { .. })
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_message_names_both_endpoints() {
        let err = Error::NoPath {
            start: "A".to_string(),
            end: "D".to_string(),
        };
        assert_eq!(err.to_string(), "no path found between A and D");
        assert!(err.is_no_path());
    }

    #[test]
    fn points_not_found_lists_suggestions() {
        let err = Error::PointsNotFound {
            missing: vec!["Alpah".to_string()],
            suggestions: vec!["Alpha".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "points not found: Alpah. Did you mean 'Alpha'?"
        );
        assert!(!err.is_no_path());
    }

    #[test]
    fn distance_overflow_names_both_endpoints() {
        let err = Error::DistanceOverflow {
            start: "A".to_string(),
            end: "C".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "path distance between A and C exceeds the representable range"
        );
        assert!(!err.is_no_path());
    }

    #[test]
    fn points_not_found_without_suggestions() {
        let err = Error::PointsNotFound {
            missing: vec!["X".to_string(), "Y".to_string()],
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "points not found: X, Y");
    }
}
