//! Byte → text decoding of daily meeting logs.
//!
//! Meeting tools usually export attendance as UTF-16 with a byte order mark;
//! hand-edited files are often UTF-8.

use crate::config::InputEncoding;
use crate::errors::{AppError, AppResult};

const BOM_UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];
const BOM_UTF16_LE: &[u8] = &[0xFF, 0xFE];
const BOM_UTF16_BE: &[u8] = &[0xFE, 0xFF];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endian {
    Little,
    Big,
}

/// Decode `bytes` according to `encoding`; `source` is only used in errors.
pub fn decode_text(bytes: &[u8], encoding: InputEncoding, source: &str) -> AppResult<String> {
    let mismatch = |reason: &str| AppError::EncodingMismatch {
        path: source.to_string(),
        expected: encoding.as_str().to_string(),
        reason: reason.to_string(),
    };

    match encoding {
        InputEncoding::Utf16 => {
            if let Some(rest) = bytes.strip_prefix(BOM_UTF16_LE) {
                decode_utf16(rest, Endian::Little).map_err(|r| mismatch(&r))
            } else if let Some(rest) = bytes.strip_prefix(BOM_UTF16_BE) {
                decode_utf16(rest, Endian::Big).map_err(|r| mismatch(&r))
            } else {
                Err(mismatch("missing UTF-16 byte order mark"))
            }
        }
        InputEncoding::Utf8 => decode_utf8(bytes).map_err(|r| mismatch(&r)),
        InputEncoding::Auto => {
            if let Some(rest) = bytes.strip_prefix(BOM_UTF16_LE) {
                decode_utf16(rest, Endian::Little).map_err(|r| mismatch(&r))
            } else if let Some(rest) = bytes.strip_prefix(BOM_UTF16_BE) {
                decode_utf16(rest, Endian::Big).map_err(|r| mismatch(&r))
            } else {
                decode_utf8(bytes).map_err(|r| mismatch(&r))
            }
        }
    }
}

fn decode_utf8(bytes: &[u8]) -> Result<String, String> {
    let body = bytes.strip_prefix(BOM_UTF8).unwrap_or(bytes);
    String::from_utf8(body.to_vec()).map_err(|e| format!("invalid UTF-8 ({e})"))
}

fn decode_utf16(bytes: &[u8], endian: Endian) -> Result<String, String> {
    if bytes.len() % 2 != 0 {
        return Err("odd number of bytes for UTF-16 content".to_string());
    }

    let units = bytes.chunks_exact(2).map(|pair| match endian {
        Endian::Little => u16::from_le_bytes([pair[0], pair[1]]),
        Endian::Big => u16::from_be_bytes([pair[0], pair[1]]),
    });

    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|e| format!("unpaired surrogate 0x{:04X}", e.unpaired_surrogate()))
}
