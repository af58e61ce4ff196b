#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::hash::{Hash, Hasher};

/// Specifies a kind of failure raised by the domain model or solvers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An operation requires more points than the graph has.
    InvalidGraph,
    /// An operation was attempted on a graph without points.
    EmptyGraph,
    /// A point lookup failed.
    PointNotFound,
    /// An equal point is already present.
    DuplicatePoint,
    /// A position or index is out of range.
    InvalidIndex,
    /// An argument or parameter has an unacceptable value.
    InvalidInput,
    /// An algorithm cannot be applied, e.g. input exceeds its practical bound.
    AlgorithmError,
    /// Load or save failure: missing file, malformed content.
    FileIO,
}

impl ErrorKind {
    fn title(&self) -> &'static str {
        match self {
            ErrorKind::InvalidGraph => "Invalid Graph",
            ErrorKind::EmptyGraph => "Empty Graph",
            ErrorKind::PointNotFound => "Point Not Found",
            ErrorKind::DuplicatePoint => "Duplicate Point",
            ErrorKind::InvalidIndex => "Invalid Index",
            ErrorKind::InvalidInput => "Invalid Input",
            ErrorKind::AlgorithmError => "Algorithm Error",
            ErrorKind::FileIO => "File Error",
        }
    }
}

/// A basic error type: a failure kind with a human readable message.
#[derive(Clone, Debug)]
pub struct TspError {
    kind: ErrorKind,
    message: String,
}

/// A type alias for result type with `TspError`.
pub type TspResult<T> = Result<T, TspError>;

impl TspError {
    /// Creates a new instance of `TspError`.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    /// Returns a kind of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns an error message without kind prefix.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

macro_rules! error_constructors {
    ($($fn_name:ident => $kind:ident),+ $(,)?) => {
        impl TspError {
            $(
                #[doc = concat!("Creates an error of `", stringify!($kind), "` kind.")]
                pub fn $fn_name(message: impl Into<String>) -> Self {
                    Self::new(ErrorKind::$kind, message)
                }
            )+
        }
    };
}

error_constructors! {
    invalid_graph => InvalidGraph,
    empty_graph => EmptyGraph,
    point_not_found => PointNotFound,
    duplicate_point => DuplicatePoint,
    invalid_index => InvalidIndex,
    invalid_input => InvalidInput,
    algorithm => AlgorithmError,
    file_io => FileIO,
}

impl std::fmt::Display for TspError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.title(), self.message)
    }
}

impl std::error::Error for TspError {}

impl From<std::io::Error> for TspError {
    fn from(value: std::io::Error) -> Self {
        Self::file_io(value.to_string())
    }
}

impl PartialEq<Self> for TspError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl Eq for TspError {}

impl Hash for TspError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.message.hash(state);
    }
}
