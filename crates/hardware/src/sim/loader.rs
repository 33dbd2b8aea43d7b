//! Program Loader.
//!
//! This module turns a text program image into machine state. It performs:
//! 1. **Parsing:** Splits the text on whitespace and parses each token as a 32-bit
//!    hexadecimal word (an optional `0x`/`0X` prefix is accepted).
//! 2. **Placement:** Stores word `i` big-endian at byte offset `4 * i`.
//! 3. **Initialization:** Sets the program counter to 0 and the text pointer to
//!    `4 * word_count`, which doubles as the halt sentinel.

use std::fs;
use std::path::Path;

use crate::common::LoadError;
use crate::core::Cpu;

/// Parses a whitespace-separated list of hexadecimal instruction words.
///
/// # Examples
///
/// ```
/// use mipsim_core::sim::loader::parse_words;
///
/// let words = parse_words("20040005 0x2005000a\n00851820").unwrap();
/// assert_eq!(words, vec![0x20040005, 0x2005000a, 0x00851820]);
/// assert!(parse_words("2004000g").is_err());
/// ```
pub fn parse_words(text: &str) -> Result<Vec<u32>, LoadError> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            parse_word(token).ok_or_else(|| LoadError::InvalidToken {
                index: i + 1,
                token: token.to_owned(),
            })
        })
        .collect()
}

/// Parses one hexadecimal token, rejecting signs and empty digit strings.
fn parse_word(token: &str) -> Option<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Reads and parses a program file.
pub fn read_program(path: impl AsRef<Path>) -> Result<Vec<u32>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_words(&text)
}

/// Places `words` at address 0, resets the program counter and text pointer, and
/// clears any latched fault.
///
/// Memory beyond the program and all registers are left as they are.
///
/// # Arguments
///
/// * `cpu` - The machine to load into.
/// * `words` - Instruction words in program order.
pub fn load_into(cpu: &mut Cpu, words: &[u32]) -> Result<(), LoadError> {
    let capacity = cpu.memory.capacity();
    let too_large = || LoadError::ProgramTooLarge {
        words: words.len(),
        capacity,
    };

    let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_be_bytes()).collect();
    if bytes.len() > capacity {
        return Err(too_large());
    }
    let tp = u32::try_from(bytes.len()).map_err(|_| too_large())?;
    cpu.memory.write_bytes(0, &bytes).map_err(|_| too_large())?;

    cpu.pc = 0;
    cpu.tp = tp;
    cpu.faulted = false;
    tracing::debug!(words = words.len(), tp, "program loaded");
    Ok(())
}

/// Reads a program file and loads it into `cpu`, returning the number of words loaded.
pub fn load_file(cpu: &mut Cpu, path: impl AsRef<Path>) -> Result<usize, LoadError> {
    let path = path.as_ref();
    let words = read_program(path)?;
    tracing::debug!(path = %path.display(), "loading program");
    load_into(cpu, &words)?;
    Ok(words.len())
}
