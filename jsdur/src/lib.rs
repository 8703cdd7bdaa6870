//! Human-readable durations for JSON and text.
//!
//! This crate provides [`Duration`], a signed nanosecond interval that
//! serializes to/from strings such as `"5h12m47s"` instead of raw numbers:
//!
//! - Text codec: [`Duration::to_text`] / [`Duration::from_text`], plus
//!   [`Display`](std::fmt::Display) and [`FromStr`](std::str::FromStr)
//! - JSON codec: [`Duration::to_json`] / [`Duration::from_json`], plus
//!   `serde` support so struct fields serialize as duration strings
//!
//! The zero duration renders as `""`, and both `""` and `"0"` parse back to
//! zero. Units are `h`, `m`, `s`, `ms`, `us`/`µs` and `ns`.
//!
//! # Example
//!
//! ```rust
//! use giztoy_jsdur::Duration;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Config {
//!     #[serde(default)]
//!     timeout: Duration,
//! }
//!
//! let cfg: Config = serde_json::from_str(r#"{"timeout":"1h30m"}"#).unwrap();
//! assert_eq!(cfg.timeout, Duration::from_mins(90));
//!
//! let json = serde_json::to_string(&cfg).unwrap();
//! assert_eq!(json, r#"{"timeout":"1h30m0s"}"#);
//!
//! // Zero renders as the empty string.
//! let json = serde_json::to_string(&Config { timeout: Duration::ZERO }).unwrap();
//! assert_eq!(json, r#"{"timeout":""}"#);
//! ```

mod codec;
mod duration;
mod error;
mod format;
mod parse;

pub use duration::Duration;
pub use error::{Codec, Error, JsonKind, OutOfRangeError, ParseError, Result};
pub use format::format_duration;
pub use parse::parse_duration;
