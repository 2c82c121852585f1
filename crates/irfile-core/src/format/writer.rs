use std::fmt::{self, Write};

use super::hex::encode_le_hex32;
use super::layout;
use crate::{Signal, SignalKind, SignalLibrary};

/// Serialize a library to its text form.
///
/// Serialization never fails. Only the fields belonging to each signal's
/// kind are written; signals with an unrecognized kind get `name` and `type`
/// lines only.
///
/// # Examples
/// ```
/// use irfile_core::{FILETYPE_SIGNALS, Signal, SignalLibrary, serialize};
///
/// let mut library = SignalLibrary::new(FILETYPE_SIGNALS, "1");
/// library.signals.push(Signal::parsed("Power", "NEC", 0x04, 0x08));
///
/// let text = String::from_utf8(serialize(&library)).unwrap();
/// assert!(text.contains("address: 04 00 00 00\n"));
/// ```
pub fn serialize(library: &SignalLibrary) -> Vec<u8> {
    library.to_string().into_bytes()
}

pub(crate) fn write_library<W: Write>(out: &mut W, library: &SignalLibrary) -> fmt::Result {
    writeln!(out, "{} {}", layout::FILETYPE_PREFIX, library.file_kind)?;
    writeln!(out, "{} {}", layout::VERSION_PREFIX, library.version)?;
    for signal in &library.signals {
        write_signal(out, signal)?;
    }
    Ok(())
}

fn write_signal<W: Write>(out: &mut W, signal: &Signal) -> fmt::Result {
    writeln!(out, "{}", layout::RECORD_DELIMITER)?;
    write_field(out, layout::KEY_NAME, &signal.name)?;
    write_field(out, layout::KEY_TYPE, &signal.kind)?;

    match SignalKind::from(signal.kind.as_str()) {
        SignalKind::Parsed => {
            write_field(out, layout::KEY_PROTOCOL, &signal.protocol)?;
            write_field(out, layout::KEY_ADDRESS, encode_le_hex32(signal.address))?;
            write_field(out, layout::KEY_COMMAND, encode_le_hex32(signal.command))?;
        }
        SignalKind::Raw => {
            write_field(out, layout::KEY_FREQUENCY, signal.frequency)?;
            let duty_cycle = format!("{:.*}", layout::DUTY_CYCLE_DECIMALS, signal.duty_cycle);
            write_field(out, layout::KEY_DUTY_CYCLE, duty_cycle)?;
            write!(out, "{}{}", layout::KEY_DATA, layout::KEY_VALUE_SEPARATOR)?;
            for sample in &signal.data {
                write!(out, " {sample}")?;
            }
            writeln!(out)?;
        }
        SignalKind::Unknown(_) => {}
    }
    Ok(())
}

fn write_field<W: Write>(out: &mut W, key: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(out, "{key}{} {value}", layout::KEY_VALUE_SEPARATOR)
}
