use crate::errors::DemoCleanupError;

#[derive(Debug, thiserror::Error)]
pub enum CleanupError {
    #[error("Failed to traverse '{path}': {source}")]
    TraversalFailed {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read metadata for '{path}': {source}")]
    MetadataUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Age threshold of {days} days is out of range")]
    InvalidMaxAge { days: u64 },

    #[error("Failed to delete '{path}': {source}")]
    DeleteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl DemoCleanupError for CleanupError {
    fn error_code(&self) -> &'static str {
        match self {
            CleanupError::TraversalFailed { .. } => "CLEANUP_TRAVERSAL_FAILED",
            CleanupError::MetadataUnreadable { .. } => "CLEANUP_METADATA_UNREADABLE",
            CleanupError::InvalidMaxAge { .. } => "CLEANUP_INVALID_MAX_AGE",
            CleanupError::DeleteFailed { .. } => "CLEANUP_DELETE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            CleanupError::TraversalFailed { .. } | CleanupError::InvalidMaxAge { .. }
        )
    }
}
