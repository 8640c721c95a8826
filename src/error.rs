// Error types for cidrwatch
//
// Structured errors via thiserror. Only a missing domain file is allowed to
// abort a run; every other failure is matched at the point of occurrence and
// converted into a logged message plus a skipped domain or a fallback subnet.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cidrwatch operations
#[derive(Debug, Error)]
pub enum WatchError {
    /// The domain list is absent. The one fatal error: nothing has been
    /// written yet, so the process exits non-zero immediately.
    #[error("domain file {path:?} does not exist")]
    DomainFileMissing { path: PathBuf },

    /// DNS resolution failed for a domain; the domain is skipped.
    #[error("DNS resolution failed for {domain}: {source}")]
    ResolutionFailed {
        domain: String,
        #[source]
        source: hickory_resolver::error::ResolveError,
    },

    /// The lookup service answered with a non-success status.
    #[error("HTTP error (status {status}): {details}")]
    HttpError { status: u16, details: String },

    /// The lookup response body was malformed or missing the expected field.
    #[error("parse error: {message}")]
    ParseError { message: String },

    /// A file could not be read or written.
    #[error("file system error: {path}: {source}")]
    FileSystem {
        path: String,
        #[source]
        source: io::Error,
    },
}
