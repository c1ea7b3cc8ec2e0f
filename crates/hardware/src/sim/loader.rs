//! Program image loading.
//!
//! This module reads `$readmemh`-style hexadecimal images. It accepts:
//! 1. **Words:** One hexadecimal word per whitespace-separated token, with an
//!    optional `0x` prefix and `_` digit separators.
//! 2. **Comments:** `//` and `#` run to the end of the line.
//! 3. **Address directives:** `@<hex word index>` moves the load position;
//!    skipped words are zero-filled.
//!
//! Images are capped at [`MAX_IMAGE_WORDS`]; the capacity of the memory the
//! image is loaded into is checked separately by `WordMemory::load`.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::LoaderError;

/// Largest image, in words, the parser will build (4 MiB).
pub const MAX_IMAGE_WORDS: usize = 1 << 20;

/// Parses a hexadecimal program image into words, word 0 first.
///
/// # Errors
///
/// Returns [`LoaderError::Parse`] for any token that is not a 32-bit
/// hexadecimal word or a valid `@` directive, and for directives that move
/// backwards over words already placed.
///
/// Returns [`LoaderError::OutOfRange`] when a word or an `@` directive lies
/// beyond [`MAX_IMAGE_WORDS`]; nothing is allocated for it.
///
/// # Examples
///
/// ```
/// use rv32sc_core::sim::loader::parse_hex;
///
/// let image = parse_hex("00500113 // addi x2, x0, 5\n@3\n0x0000_0063\n").unwrap();
/// assert_eq!(image, vec![0x00500113, 0, 0, 0x63]);
/// ```
pub fn parse_hex(text: &str) -> Result<Vec<u32>, LoaderError> {
    let mut image = Vec::new();

    for (line_idx, raw_line) in text.lines().enumerate() {
        let line = strip_comment(raw_line);
        for token in line.split_whitespace() {
            let bad = || LoaderError::Parse {
                line: line_idx + 1,
                text: token.to_string(),
            };

            if let Some(addr) = token.strip_prefix('@') {
                let target = usize::try_from(parse_word(addr).ok_or_else(bad)?)
                    .map_err(|_| bad())?;
                if target < image.len() {
                    return Err(bad());
                }
                if target > MAX_IMAGE_WORDS {
                    return Err(LoaderError::OutOfRange {
                        index: target,
                        capacity: MAX_IMAGE_WORDS,
                    });
                }
                image.resize(target, 0);
            } else {
                let word = parse_word(token).ok_or_else(bad)?;
                if image.len() >= MAX_IMAGE_WORDS {
                    return Err(LoaderError::OutOfRange {
                        index: image.len(),
                        capacity: MAX_IMAGE_WORDS,
                    });
                }
                image.push(word);
            }
        }
    }

    Ok(image)
}

/// Reads and parses a hexadecimal program image file.
///
/// # Errors
///
/// Returns [`LoaderError::Io`] if the file cannot be read, otherwise as
/// [`parse_hex`].
pub fn load_hex_file(path: impl AsRef<Path>) -> Result<Vec<u32>, LoaderError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = parse_hex(&text)?;
    debug!(path = %path.display(), words = image.len(), "parsed program image");
    Ok(image)
}

/// Drops a trailing `//` or `#` comment.
fn strip_comment(line: &str) -> &str {
    let end = [line.find("//"), line.find('#')]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    &line[..end]
}

/// Parses one hexadecimal word, tolerating `0x` and `_`.
fn parse_word(token: &str) -> Option<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(&digits, 16).ok()
}
