//! Text codec registry used by the string operations.
//!
//! [`TextEncoding`] names every codec the buffer can apply when converting
//! between text and bytes. The set is closed, so a buffer can never hold an
//! unsupported codec; runtime identifier validation (for callers starting
//! from a string such as `"utf16le"`) lives in the [`FromStr`] impl and
//! [`TextEncoding::is_supported`].
//!
//! Conversions are strict in both directions. Encoding rejects characters a
//! codec cannot represent, and decoding rejects byte sequences that are not
//! valid for the codec; nothing is replaced or dropped silently.

use alloc::{string::String, vec::Vec};
use core::{fmt, str::FromStr};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::BufferError;

/// A text codec applied by the string read/write operations.
///
/// The default codec for a freshly constructed buffer is [`Utf8`].
///
/// [`Utf8`]: TextEncoding::Utf8
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    /// UTF-8. Decoding validates strictly; encoding never fails.
    #[default]
    Utf8,
    /// UTF-16 little-endian code units. Decoding requires an even byte
    /// count and rejects unpaired surrogates.
    Utf16Le,
    /// ISO-8859-1: bytes map 1:1 onto the first 256 code points. Encoding
    /// rejects characters above U+00FF; decoding never fails.
    Latin1,
    /// 7-bit ASCII. Both directions reject anything outside `0x00..=0x7F`.
    Ascii,
    /// Hexadecimal text. Encoding parses hex digits into the bytes they
    /// denote; decoding renders bytes as lowercase hex digits.
    Hex,
    /// Standard base64 text. Encoding parses base64 into the bytes it
    /// denotes; decoding renders bytes as base64.
    Base64,
}

impl TextEncoding {
    /// Canonical identifier for this codec, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Utf16Le => "utf16le",
            Self::Latin1 => "latin1",
            Self::Ascii => "ascii",
            Self::Hex => "hex",
            Self::Base64 => "base64",
        }
    }

    /// Returns `true` if `identifier` names a supported codec.
    #[must_use]
    pub fn is_supported(identifier: &str) -> bool {
        Self::from_str(identifier).is_ok()
    }

    /// Encodes `text` into the byte sequence this codec stores for it.
    ///
    /// For [`Hex`] and [`Base64`] the text itself is the encoded form, so
    /// this parses it into the raw bytes it denotes.
    ///
    /// # Errors
    ///
    /// [`BufferError::Unencodable`] for characters outside the codec's
    /// repertoire, [`BufferError::MalformedText`] for hex/base64 text that
    /// does not parse.
    ///
    /// [`Hex`]: TextEncoding::Hex
    /// [`Base64`]: TextEncoding::Base64
    pub fn encode(self, text: &str) -> Result<Vec<u8>, BufferError> {
        match self {
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Utf16Le => {
                let mut out = Vec::with_capacity(text.len() * 2);
                for unit in text.encode_utf16() {
                    out.extend_from_slice(&unit.to_le_bytes());
                }
                Ok(out)
            }
            Self::Latin1 => {
                let mut out = Vec::with_capacity(text.len());
                for ch in text.chars() {
                    match u8::try_from(u32::from(ch)) {
                        Ok(byte) => out.push(byte),
                        Err(_) => return Err(BufferError::Unencodable(ch, self)),
                    }
                }
                Ok(out)
            }
            Self::Ascii => match text.chars().find(|ch| !ch.is_ascii()) {
                Some(ch) => Err(BufferError::Unencodable(ch, self)),
                None => Ok(text.as_bytes().to_vec()),
            },
            Self::Hex => {
                if text.len() % 2 != 0 {
                    return Err(BufferError::MalformedText(self, "odd number of hex digits"));
                }
                let mut out = Vec::with_capacity(text.len() / 2);
                for pair in text.as_bytes().chunks_exact(2) {
                    let digit = |raw: u8| {
                        char::from(raw)
                            .to_digit(16)
                            .ok_or(BufferError::MalformedText(self, "non-hexadecimal digit"))
                    };
                    let value = digit(pair[0])? * 16 + digit(pair[1])?;
                    #[allow(clippy::cast_possible_truncation)] // two hex digits fit a byte
                    out.push(value as u8);
                }
                Ok(out)
            }
            Self::Base64 => BASE64
                .decode(text)
                .map_err(|_| BufferError::MalformedText(self, "invalid base64 text")),
        }
    }

    /// Decodes `bytes` into the text this codec reads them as.
    ///
    /// # Errors
    ///
    /// [`BufferError::MalformedText`] when the bytes are not valid for the
    /// codec. [`Latin1`], [`Hex`] and [`Base64`] accept any byte sequence.
    ///
    /// [`Latin1`]: TextEncoding::Latin1
    /// [`Hex`]: TextEncoding::Hex
    /// [`Base64`]: TextEncoding::Base64
    pub fn decode(self, bytes: &[u8]) -> Result<String, BufferError> {
        match self {
            Self::Utf8 => core::str::from_utf8(bytes)
                .map(String::from)
                .map_err(|_| BufferError::MalformedText(self, "invalid UTF-8")),
            Self::Utf16Le => {
                if bytes.len() % 2 != 0 {
                    return Err(BufferError::MalformedText(self, "odd number of bytes"));
                }
                let units = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
                char::decode_utf16(units)
                    .collect::<Result<String, _>>()
                    .map_err(|_| BufferError::MalformedText(self, "unpaired surrogate"))
            }
            Self::Latin1 => Ok(bytes.iter().map(|&byte| char::from(byte)).collect()),
            Self::Ascii => {
                if bytes.is_ascii() {
                    Ok(bytes.iter().map(|&byte| char::from(byte)).collect())
                } else {
                    Err(BufferError::MalformedText(self, "byte outside the ASCII range"))
                }
            }
            Self::Hex => {
                const DIGITS: &[u8; 16] = b"0123456789abcdef";
                let mut out = String::with_capacity(bytes.len() * 2);
                for &byte in bytes {
                    out.push(char::from(DIGITS[usize::from(byte >> 4)]));
                    out.push(char::from(DIGITS[usize::from(byte & 0x0f)]));
                }
                Ok(out)
            }
            Self::Base64 => Ok(BASE64.encode(bytes)),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = BufferError;

    /// Resolves a codec identifier, case-insensitively. Aliases are
    /// accepted: `"utf-8"`, `"ucs2"`/`"ucs-2"` for UTF-16LE, and
    /// `"binary"` for Latin-1.
    fn from_str(identifier: &str) -> Result<Self, Self::Err> {
        let lowered = identifier.to_ascii_lowercase();
        match lowered.as_str() {
            "utf8" | "utf-8" => Ok(Self::Utf8),
            "utf16le" | "utf-16le" | "ucs2" | "ucs-2" => Ok(Self::Utf16Le),
            "latin1" | "binary" => Ok(Self::Latin1),
            "ascii" => Ok(Self::Ascii),
            "hex" => Ok(Self::Hex),
            "base64" => Ok(Self::Base64),
            _ => Err(BufferError::UnknownEncoding(String::from(identifier))),
        }
    }
}
