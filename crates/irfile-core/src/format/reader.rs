use std::iter::Enumerate;
use std::str::Split;

use super::error::ParseError;
use super::hex::decode_le_hex32;
use super::layout;

/// Yields trimmed, non-blank lines together with their 1-based line number.
pub struct LineReader<'a> {
    lines: Enumerate<Split<'a, char>>,
}

impl<'a> LineReader<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split(layout::LINE_SEPARATOR).enumerate(),
        }
    }
}

impl<'a> Iterator for LineReader<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.find_map(|(index, raw)| {
            let text = raw.trim();
            if text.is_empty() {
                None
            } else {
                Some(Line {
                    number: index + 1,
                    text,
                })
            }
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    pub number: usize,
    pub text: &'a str,
}

impl<'a> Line<'a> {
    /// Trimmed remainder after a case-sensitive header prefix.
    pub fn header_value(&self, prefix: &str) -> Option<&'a str> {
        self.text.strip_prefix(prefix).map(str::trim)
    }

    pub fn is_record_delimiter(&self) -> bool {
        self.text == layout::RECORD_DELIMITER
    }

    /// Split on the first colon; `None` when the line has no colon.
    pub fn field(&self) -> Option<Field<'a>> {
        let (key, value) = self.text.split_once(layout::KEY_VALUE_SEPARATOR)?;
        Some(Field {
            line: self.number,
            key: key.trim(),
            value: value.trim(),
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    pub line: usize,
    pub key: &'a str,
    pub value: &'a str,
}

impl Field<'_> {
    pub fn read_string(&self) -> String {
        self.value.to_string()
    }

    pub fn read_address(&self) -> Result<u32, ParseError> {
        decode_le_hex32(self.value).map_err(|source| ParseError::MalformedAddress {
            line: self.line,
            source,
        })
    }

    pub fn read_command(&self) -> Result<u32, ParseError> {
        decode_le_hex32(self.value).map_err(|source| ParseError::MalformedCommand {
            line: self.line,
            source,
        })
    }

    pub fn read_frequency(&self) -> Result<i64, ParseError> {
        self.value
            .parse()
            .map_err(|source| ParseError::MalformedFrequency {
                line: self.line,
                source,
            })
    }

    pub fn read_duty_cycle(&self) -> Result<f64, ParseError> {
        self.value
            .parse()
            .map_err(|source| ParseError::MalformedDutyCycle {
                line: self.line,
                source,
            })
    }

    pub fn read_samples(&self) -> Result<Vec<i64>, ParseError> {
        self.value
            .split_whitespace()
            .map(|token| {
                token
                    .parse()
                    .map_err(|source| ParseError::MalformedDataSample {
                        line: self.line,
                        token: token.to_string(),
                        source,
                    })
            })
            .collect()
    }
}
