//! Codec for IR remote-control signal files.
//!
//! Signal files are line-oriented text: a `Filetype:` and `Version:` header
//! followed by `#`-delimited records of `key: value` fields. Each record is
//! either a decoded signal (protocol, address, command) or a raw pulse train
//! (carrier frequency, duty cycle, mark/space samples in microseconds).
//!
//! [`parse`] turns bytes into a [`SignalLibrary`] and [`serialize`] writes it
//! back. The codec performs no I/O; callers read and write the buffers.
//!
//! Invariants:
//! - Signal order is file order and survives a parse/serialize round trip.
//! - Only the fields of a signal's [`SignalKind`] are written.
//! - Numeric fields are strict; structure and unknown keys are permissive.
//!
//! # Examples
//! ```
//! use irfile_core::{SignalLibrary, parse, serialize};
//!
//! let input = "Filetype: IR signals file\nVersion: 1\n#\nname: Mute\ntype: raw\nfrequency: 38000\nduty_cycle: 0.330000\ndata: 100 200 -300\n";
//! let library: SignalLibrary = parse(input.as_bytes())?;
//! assert_eq!(library.signals[0].data, vec![100, 200, -300]);
//! assert_eq!(serialize(&library), input.as_bytes());
//! # Ok::<(), irfile_core::ParseError>(())
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

mod config;
mod format;

pub use config::{HeaderCapture, ParseOptions};
pub use format::{
    HexError, ParseError, decode_le_hex32, encode_le_hex32, parse, parse_with, serialize,
};

/// File kind written by universal remote libraries.
pub const FILETYPE_LIBRARY: &str = "IR library file";
/// File kind written for custom remotes.
pub const FILETYPE_SIGNALS: &str = "IR signals file";

/// Conventional protocol names found in decoded signals.
///
/// The codec never checks protocols against this list; any string is kept.
pub mod protocol {
    pub const NEC: &str = "NEC";
    pub const NEC42: &str = "NEC42";
    pub const NEC_EXT: &str = "NECext";
    pub const RC5: &str = "RC5";
    pub const RC5X: &str = "RC5X";
    pub const RC6: &str = "RC6";
    pub const SAMSUNG32: &str = "Samsung32";
    pub const SIRC: &str = "SIRC";
    pub const RCA: &str = "RCA";
    pub const PIONEER: &str = "Pioneer";
    pub const KASEIKYO: &str = "Kaseikyo";

    pub const KNOWN: &[&str] = &[
        NEC, NEC42, NEC_EXT, RC5, RC5X, RC6, SAMSUNG32, SIRC, RCA, PIONEER, KASEIKYO,
    ];
}

/// A parsed signal file.
///
/// # Examples
/// ```
/// use irfile_core::{FILETYPE_LIBRARY, SignalLibrary};
///
/// let library = SignalLibrary::new(FILETYPE_LIBRARY, "1");
/// assert!(library.is_library());
/// assert!(library.signals.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalLibrary {
    /// Verbatim `Filetype:` header value.
    pub file_kind: String,
    /// Verbatim `Version:` header value.
    pub version: String,
    /// Signals in file order.
    pub signals: Vec<Signal>,
}

impl SignalLibrary {
    pub fn new(file_kind: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            file_kind: file_kind.into(),
            version: version.into(),
            signals: Vec::new(),
        }
    }

    /// Whether the header names a universal remote library.
    pub fn is_library(&self) -> bool {
        self.file_kind == FILETYPE_LIBRARY
    }
}

impl fmt::Display for SignalLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::writer::write_library(f, self)
    }
}

impl FromStr for SignalLibrary {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        format::parser::parse_str(s, &ParseOptions::default())
    }
}

/// One named IR signal.
///
/// Both field groups are always present in memory; [`Signal::kind`] decides
/// which one is written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub name: String,
    pub kind: SignalKind,

    /// Protocol name for decoded signals (e.g. `NEC`).
    pub protocol: String,
    pub address: u32,
    pub command: u32,

    /// Carrier frequency in Hz for raw signals.
    pub frequency: i64,
    /// Carrier duty cycle as a fraction, written with six decimals.
    pub duty_cycle: f64,
    /// Alternating mark/space durations in microseconds.
    pub data: Vec<i64>,
}

impl Signal {
    /// Build a decoded signal.
    ///
    /// # Examples
    /// ```
    /// use irfile_core::{Signal, SignalKind, protocol};
    ///
    /// let signal = Signal::parsed("Power", protocol::NEC, 0x00, 0x15);
    /// assert_eq!(signal.kind, SignalKind::Parsed);
    /// ```
    pub fn parsed(
        name: impl Into<String>,
        protocol: impl Into<String>,
        address: u32,
        command: u32,
    ) -> Self {
        Self {
            name: name.into(),
            kind: SignalKind::Parsed,
            protocol: protocol.into(),
            address,
            command,
            ..Self::default()
        }
    }

    /// Build a raw pulse-train signal.
    pub fn raw(name: impl Into<String>, frequency: i64, duty_cycle: f64, data: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            kind: SignalKind::Raw,
            frequency,
            duty_cycle,
            data,
            ..Self::default()
        }
    }
}

/// The `type:` tag of a signal.
///
/// Tags other than `parsed` and `raw` are kept verbatim so they survive a
/// round trip, but no kind-specific fields are written for them. Equality and
/// hashing follow the tag text, so `Unknown("raw")` equals `Raw`.
///
/// # Examples
/// ```
/// use irfile_core::SignalKind;
///
/// assert_eq!(SignalKind::from("raw"), SignalKind::Raw);
/// assert_eq!(SignalKind::from("RAW").as_str(), "RAW");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SignalKind {
    Parsed,
    Raw,
    Unknown(String),
}

impl SignalKind {
    pub fn as_str(&self) -> &str {
        match self {
            SignalKind::Parsed => format::layout::TYPE_PARSED,
            SignalKind::Raw => format::layout::TYPE_RAW,
            SignalKind::Unknown(tag) => tag,
        }
    }
}

impl PartialEq for SignalKind {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for SignalKind {}

impl Hash for SignalKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Default for SignalKind {
    fn default() -> Self {
        SignalKind::Unknown(String::new())
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SignalKind {
    fn from(tag: &str) -> Self {
        match tag {
            format::layout::TYPE_PARSED => SignalKind::Parsed,
            format::layout::TYPE_RAW => SignalKind::Raw,
            other => SignalKind::Unknown(other.to_string()),
        }
    }
}

impl From<String> for SignalKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            format::layout::TYPE_PARSED => SignalKind::Parsed,
            format::layout::TYPE_RAW => SignalKind::Raw,
            _ => SignalKind::Unknown(tag),
        }
    }
}

impl From<SignalKind> for String {
    fn from(kind: SignalKind) -> Self {
        match kind {
            SignalKind::Unknown(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}
