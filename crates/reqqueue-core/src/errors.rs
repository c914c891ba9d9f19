use reqqueue_core_types::RequestId;
use thiserror::Error;

/// Result type alias using the structured error facility
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable by tests, logs and the
/// remote protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    InvalidInput,
    UnknownCommand,

    // Storage
    NotFound,
    NotAccessible,
    Io,
    Serialization,

    // Remote
    Transport,
    Protocol,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::UnknownCommand => "ERR_UNKNOWN_COMMAND",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::NotAccessible => "ERR_NOT_ACCESSIBLE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Transport => "ERR_TRANSPORT",
            ExErrorKind::Protocol => "ERR_PROTOCOL",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the context
/// needed to explain the failure to the operator. The `message` is what
/// ends up in an `Error` command status.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for queue, storage and remote operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReqQueueError {
    /// Command argument text does not describe a record
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// No command with the given name exists in the command set
    #[error("unknown command \"{name}\"")]
    UnknownCommand { name: String },

    /// Backing file exists but cannot be both read and written
    #[error("The specified file has to be readable and writable by the application: {path}")]
    StorageNotAccessible { path: String },

    /// A file named on the command line does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// File contents are not a JSON array of records
    #[error("Malformed storage file {path}: {reason}")]
    MalformedStorage { path: String, reason: String },

    /// The connection to the server failed
    #[error("Request failed: {reason}")]
    Transport { reason: String },

    /// The server answered with something the client does not understand
    #[error("Protocol violation: {reason}")]
    Protocol { reason: String },
}

impl From<ReqQueueError> for ExError {
    fn from(err: ReqQueueError) -> Self {
        let message = err.to_string();
        match err {
            ReqQueueError::InvalidArgument { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("parse_argument")
                .with_message(message),

            ReqQueueError::UnknownCommand { .. } => ExError::new(ExErrorKind::UnknownCommand)
                .with_op("dispatch")
                .with_message(message),

            ReqQueueError::StorageNotAccessible { path } => {
                ExError::new(ExErrorKind::NotAccessible)
                    .with_op("open_storage")
                    .with_path(path)
                    .with_message(message)
            }

            ReqQueueError::FileNotFound { path } => ExError::new(ExErrorKind::NotFound)
                .with_path(path)
                .with_message(message),

            ReqQueueError::MalformedStorage { path, .. } => {
                ExError::new(ExErrorKind::Serialization)
                    .with_op("read_storage")
                    .with_path(path)
                    .with_message(message)
            }

            ReqQueueError::Transport { .. } => ExError::new(ExErrorKind::Transport)
                .with_op("fetch_response")
                .with_message(message),

            ReqQueueError::Protocol { .. } => ExError::new(ExErrorKind::Protocol)
                .with_op("decode_response")
                .with_message(message),
        }
    }
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create a serialization error
pub fn serialization_error(operation: &str, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
