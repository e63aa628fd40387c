//! # Character Sources
//!
//! The tokenizer reads one character at a time from a [`CharSource`]. A source
//! either yields the next character or signals the end of the stream with
//! `None`. Two sources are provided:
//!
//! * [`StrSource`]: a cursor over an in-memory string
//! * [`ReaderSource`]: any [`std::io::Read`], decoded as UTF-8 byte by byte

use std::{
    char::REPLACEMENT_CHARACTER,
    io::{self, Read},
    ops::RangeInclusive,
    str::Chars,
};

/// Something that can hand out characters one at a time.
pub trait CharSource {
    /// Returns the next character, or `None` once the stream is exhausted.
    fn next_char(&mut self) -> Option<char>;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn next_char(&mut self) -> Option<char> {
        (**self).next_char()
    }
}

#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    chars: Chars<'a>,
}

impl<'a> StrSource<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
        }
    }

    /// The input that has not been read yet.
    pub fn as_str(&self) -> &'a str {
        self.chars.as_str()
    }
}

impl CharSource for StrSource<'_> {
    fn next_char(&mut self) -> Option<char> {
        self.chars.next()
    }
}

/// Decodes UTF-8 from a reader one byte at a time.
///
/// Invalid sequences decode to `U+FFFD`. A read error ends the stream; the
/// error is kept and can be retrieved with [`ReaderSource::take_error`].
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    pending: Option<u8>,
    error: Option<io::Error>,
    exhausted: bool,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
            error: None,
            exhausted: false,
        }
    }

    /// Returns the I/O error that ended the stream, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_byte(&mut self) -> Option<u8> {
        if let Some(byte) = self.pending.take() {
            return Some(byte);
        }
        if self.exhausted {
            return None;
        }

        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    self.exhausted = true;
                    return None;
                }
                Ok(_) => return Some(byte[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::warn!("read failed, treating as end of input: {}", e);
                    self.error = Some(e);
                    self.exhausted = true;
                    return None;
                }
            }
        }
    }
}

/// Length of the UTF-8 sequence introduced by `lead`, or 0 if `lead` cannot
/// start one.
fn sequence_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

/// Bytes allowed right after `lead`. The narrower ranges exclude overlong
/// forms, surrogates and code points above U+10FFFF.
fn second_byte_range(lead: u8) -> RangeInclusive<u8> {
    match lead {
        0xE0 => 0xA0..=0xBF,
        0xED => 0x80..=0x9F,
        0xF0 => 0x90..=0xBF,
        0xF4 => 0x80..=0x8F,
        _ => 0x80..=0xBF,
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> Option<char> {
        let lead = self.read_byte()?;
        let width = sequence_width(lead);
        match width {
            0 => return Some(REPLACEMENT_CHARACTER),
            1 => return Some(char::from(lead)),
            _ => {}
        }

        let mut buf = [lead, 0, 0, 0];
        for (index, slot) in buf.iter_mut().enumerate().take(width).skip(1) {
            let allowed = if index == 1 {
                second_byte_range(lead)
            } else {
                0x80..=0xBF
            };
            match self.read_byte() {
                Some(byte) if allowed.contains(&byte) => *slot = byte,
                Some(byte) => {
                    // not a valid continuation here: it starts the next character
                    self.pending = Some(byte);
                    return Some(REPLACEMENT_CHARACTER);
                }
                None => return Some(REPLACEMENT_CHARACTER),
            }
        }

        let decoded = std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next());
        Some(decoded.unwrap_or(REPLACEMENT_CHARACTER))
    }
}
