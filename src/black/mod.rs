//! Parser for EVE Online `.black` material files.
//!
//! `.black` files are a tokenized binary scene-graph format. Each file contains:
//! - A 12-byte header with magic number, format version, and string table length
//! - A string table of NUL-terminated UTF-8 strings
//! - An unstructured data section interleaving string table indices with raw
//!   payload bytes (floats, padding), with no explicit record delimiters
//!
//! Only the header and string table have a fixed layout. The data section is
//! scanned heuristically for the texture and parameter records relevant to
//! planet shading; see [`texture`] and [`params`].

pub mod classify;
pub mod names;
pub mod params;
pub mod texture;

use thiserror::Error;
use tracing::debug;
use winnow::Parser;
use winnow::binary::le_u32;
use winnow::error::ContextError;

use crate::preset::ShaderPreset;

/// Common result type for winnow parsers.
pub(crate) type WResult<T> = Result<T, winnow::error::ErrMode<ContextError>>;

/// The `.black` magic number, first 4 bytes of every file.
pub const BLACK_MAGIC: u32 = 0xB1AC_F11E;

/// Fixed header size: magic, version, string table length (all `u32` LE).
pub const HEADER_SIZE: usize = 12;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("bad magic: {found:#010x}")]
    BadMagic { found: u32 },
    #[error("file truncated: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },
}

/// A parsed `.black` file: validated header, decoded string table, and the
/// raw data section for the heuristic scans.
#[derive(Debug)]
pub struct BlackFile<'a> {
    version: u32,
    strings: Vec<String>,
    data_region: &'a [u8],
}

impl<'a> BlackFile<'a> {
    /// Parse the header and string table from raw file bytes.
    ///
    /// Fails with [`FormatError::BadMagic`] if the signature doesn't match, or
    /// [`FormatError::Truncated`] if the buffer can't hold the header or the
    /// string table it declares. Nothing past the magic is read when the magic
    /// is wrong.
    pub fn parse(data: &'a [u8]) -> Result<Self, FormatError> {
        let input = &mut &data[..];

        let magic = le_u32.parse_next(input).map_err(
            |_: winnow::error::ErrMode<ContextError>| FormatError::Truncated {
                needed: HEADER_SIZE,
                available: data.len(),
            },
        )?;
        if magic != BLACK_MAGIC {
            return Err(FormatError::BadMagic { found: magic });
        }

        let version = le_u32.parse_next(input).map_err(
            |_: winnow::error::ErrMode<ContextError>| FormatError::Truncated {
                needed: HEADER_SIZE,
                available: data.len(),
            },
        )?;
        let table_len = le_u32.parse_next(input).map_err(
            |_: winnow::error::ErrMode<ContextError>| FormatError::Truncated {
                needed: HEADER_SIZE,
                available: data.len(),
            },
        )? as usize;

        let table_end = HEADER_SIZE.saturating_add(table_len);
        if data.len() < table_end {
            return Err(FormatError::Truncated {
                needed: table_end,
                available: data.len(),
            });
        }

        let strings = split_string_table(&data[HEADER_SIZE..table_end]);
        debug!(
            version,
            strings = strings.len(),
            data_bytes = data.len() - table_end,
            "parsed .black header"
        );

        Ok(Self {
            version,
            strings,
            data_region: &data[table_end..],
        })
    }

    /// The header version field. Read but not validated; kept so callers can
    /// dispatch on it if the format ever changes underneath us.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Decoded string table entries, in order of occurrence.
    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    /// The raw bytes following the string table.
    pub fn data_region(&self) -> &[u8] {
        self.data_region
    }

    /// Position of the first string table entry exactly equal to `text`.
    pub fn string_index(&self, text: &str) -> Option<usize> {
        self.strings.iter().position(|s| s == text)
    }

    /// Run all three extraction passes and assemble the shader preset.
    ///
    /// The passes are independent and best-effort: a file that parsed
    /// successfully always yields a preset, however empty.
    pub fn extract(&self) -> ShaderPreset {
        ShaderPreset {
            kind: classify::classify(&self.strings),
            textures: texture::extract(&self.strings),
            parameters: params::extract(&self.strings, self.data_region),
        }
    }
}

/// Decode a `.black` file into a [`ShaderPreset`] in one step.
pub fn decode(data: &[u8]) -> Result<ShaderPreset, FormatError> {
    Ok(BlackFile::parse(data)?.extract())
}

/// Split the string table region on NUL bytes.
///
/// Empty runs (consecutive NULs) are skipped rather than emitted as empty
/// strings. A trailing run with no terminator is still emitted. Invalid UTF-8
/// is replaced, never fatal.
fn split_string_table(region: &[u8]) -> Vec<String> {
    region
        .split(|&b| b == 0)
        .filter(|run| !run.is_empty())
        .map(|run| String::from_utf8_lossy(run).into_owned())
        .collect()
}
