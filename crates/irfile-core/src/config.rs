//! Parser configuration.
//!
//! Options derive serde traits so they can be embedded in a caller's own
//! configuration file; every field falls back to its default when absent.

use serde::{Deserialize, Serialize};

/// Options accepted by [`parse_with`](crate::parse_with).
///
/// # Examples
/// ```
/// use irfile_core::{HeaderCapture, ParseOptions};
///
/// let options: ParseOptions = serde_json::from_str(r#"{"header_capture":"first_non_empty"}"#)?;
/// assert_eq!(options.header_capture, HeaderCapture::FirstNonEmpty);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// How the one-shot `Filetype:` and `Version:` headers are captured.
    pub header_capture: HeaderCapture,
}

/// Policy for capturing a header line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderCapture {
    /// The first matching line wins, even when its value is empty.
    #[default]
    FirstLine,
    /// Matching lines are captured until one has a non-empty value.
    ///
    /// Matches files written by tooling that treats an empty header as
    /// "not seen yet".
    FirstNonEmpty,
}
