use std::borrow::Cow;

use log::{debug, trace};

use super::error::ParseError;
use super::layout;
use super::reader::{Field, Line, LineReader};
use crate::config::{HeaderCapture, ParseOptions};
use crate::{Signal, SignalKind, SignalLibrary};

/// Parse a signal file with default [`ParseOptions`].
///
/// Blank lines, unknown keys, unrecognized `type` values and stray record
/// delimiters are tolerated. Any malformed numeric field fails the whole
/// parse with the 1-based line number of the field.
///
/// # Examples
/// ```
/// use irfile_core::{SignalKind, parse};
///
/// let input = b"Filetype: IR signals file\nVersion: 1\n#\nname: Power\ntype: parsed\nprotocol: NEC\naddress: 00 00 00 00\ncommand: 15 00 00 00\n";
/// let library = parse(input)?;
/// assert_eq!(library.signals.len(), 1);
/// assert_eq!(library.signals[0].kind, SignalKind::Parsed);
/// assert_eq!(library.signals[0].command, 0x15);
/// # Ok::<(), irfile_core::ParseError>(())
/// ```
pub fn parse(input: &[u8]) -> Result<SignalLibrary, ParseError> {
    parse_with(input, &ParseOptions::default())
}

/// Parse a signal file with explicit options.
///
/// Invalid UTF-8 sequences are replaced rather than rejected; only the
/// numeric fields are validated.
pub fn parse_with(input: &[u8], options: &ParseOptions) -> Result<SignalLibrary, ParseError> {
    let text: Cow<'_, str> = String::from_utf8_lossy(input);
    parse_str(&text, options)
}

pub(crate) fn parse_str(text: &str, options: &ParseOptions) -> Result<SignalLibrary, ParseError> {
    let mut library = SignalLibrary::default();
    let mut file_kind = HeaderSlot::new(options.header_capture);
    let mut version = HeaderSlot::new(options.header_capture);
    let mut builder = SignalBuilder::default();

    for line in LineReader::new(text) {
        if let Some(value) = file_kind.take(&line, layout::FILETYPE_PREFIX) {
            library.file_kind = value;
            continue;
        }
        if let Some(value) = version.take(&line, layout::VERSION_PREFIX) {
            library.version = value;
            continue;
        }
        if line.is_record_delimiter() {
            if let Some(signal) = builder.flush() {
                library.signals.push(signal);
            }
            continue;
        }
        match line.field() {
            Some(field) => builder.apply(&field)?,
            None => debug!("line {}: no key/value separator, skipped", line.number),
        }
    }

    if let Some(signal) = builder.flush() {
        library.signals.push(signal);
    }

    Ok(library)
}

/// One-shot capture of a header line such as `Filetype:`.
struct HeaderSlot {
    policy: HeaderCapture,
    captured: bool,
}

impl HeaderSlot {
    fn new(policy: HeaderCapture) -> Self {
        Self {
            policy,
            captured: false,
        }
    }

    fn take(&mut self, line: &Line<'_>, prefix: &str) -> Option<String> {
        if self.captured {
            return None;
        }
        let value = line.header_value(prefix)?;
        self.captured = match self.policy {
            HeaderCapture::FirstLine => true,
            HeaderCapture::FirstNonEmpty => !value.is_empty(),
        };
        Some(value.to_string())
    }
}

/// Record currently being accumulated between delimiters.
#[derive(Default)]
struct SignalBuilder {
    current: Signal,
}

impl SignalBuilder {
    fn apply(&mut self, field: &Field<'_>) -> Result<(), ParseError> {
        let signal = &mut self.current;
        match field.key {
            layout::KEY_NAME => signal.name = field.read_string(),
            layout::KEY_TYPE => signal.kind = SignalKind::from(field.value),
            layout::KEY_PROTOCOL => signal.protocol = field.read_string(),
            layout::KEY_ADDRESS => signal.address = field.read_address()?,
            layout::KEY_COMMAND => signal.command = field.read_command()?,
            layout::KEY_FREQUENCY => signal.frequency = field.read_frequency()?,
            layout::KEY_DUTY_CYCLE => signal.duty_cycle = field.read_duty_cycle()?,
            layout::KEY_DATA => signal.data = field.read_samples()?,
            other => debug!("line {}: ignoring unknown key {:?}", field.line, other),
        }
        Ok(())
    }

    /// Hand over the accumulated record if it has a name.
    ///
    /// Without a name nothing is in progress and the builder is left
    /// untouched, so fields seen so far carry over to the next named record.
    fn flush(&mut self) -> Option<Signal> {
        if self.current.name.is_empty() {
            return None;
        }
        let signal = std::mem::take(&mut self.current);
        trace!("flushed signal {:?} ({})", signal.name, signal.kind);
        Some(signal)
    }
}
