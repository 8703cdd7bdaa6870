//! Error types for duration decoding.

use std::fmt;

use thiserror::Error;

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Text that does not match the duration grammar.
///
/// Every variant carries the complete original input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Malformed number, empty input after a sign, or a value outside the
    /// representable range.
    #[error("invalid duration {input:?}")]
    Invalid { input: String },

    /// A number with no unit suffix (e.g. `"1"`).
    #[error("missing unit in duration {input:?}")]
    MissingUnit { input: String },

    /// An unrecognized unit suffix (e.g. `"1d"`).
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },
}

impl ParseError {
    pub(crate) fn invalid(input: &str) -> Self {
        Self::Invalid {
            input: input.to_string(),
        }
    }

    /// Returns the text that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            Self::Invalid { input }
            | Self::MissingUnit { input }
            | Self::UnknownUnit { input, .. } => input,
        }
    }
}

/// The codec path a decode error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    Text,
    Json,
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Codec::Text => f.write_str("text"),
            Codec::Json => f.write_str("json"),
        }
    }
}

/// JSON value types that cannot hold a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    Array,
    Object,
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "bool",
            JsonKind::Number => "number",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Errors returned by the text and JSON decoders.
#[derive(Debug, Error)]
pub enum Error {
    /// The decoded string is not a valid duration.
    #[error("{codec} decode: {source}")]
    Parse {
        codec: Codec,
        #[source]
        source: ParseError,
    },

    /// Text input is not valid UTF-8.
    #[error("text decode: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The JSON value is well-formed but not a string.
    #[error("json decode: expected a duration string, found {0}")]
    JsonType(JsonKind),

    /// Malformed JSON.
    #[error("json decode: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns which codec produced this error.
    pub fn codec(&self) -> Codec {
        match self {
            Error::Parse { codec, .. } => *codec,
            Error::Utf8(_) => Codec::Text,
            Error::JsonType(_) | Error::Json(_) => Codec::Json,
        }
    }

    /// Returns the grammar error, if the failure happened while parsing.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Error returned when converting between [`Duration`](crate::Duration) and
/// another interval type whose range does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("duration out of range")]
pub struct OutOfRangeError;
