//! RFC 4648 §6 base32 codec for OTP secrets.
//!
//! Encoding always pads with `=` to a multiple of 8 characters. Decoding
//! accepts two shapes:
//! - padded input, checked against the RFC 4648 final-block rules, where a
//!   short final block yields only the whole bytes its symbols cover;
//! - unpadded input, where a short final block is zero-filled to a full
//!   40-bit block. This is how authenticator secrets such as `SECRET` have
//!   always been read, and it is HMAC-equivalent to strict decoding for keys
//!   shorter than the hash block size.
//!
//! Lookups are case-sensitive against the canonical uppercase alphabet.

use std::iter;

use crate::error::OtpError;

/// The 32-symbol alphabet, indexed by 5-bit value.
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Padding character.
pub const PAD: u8 = b'=';

/// Characters per encoded block.
const BLOCK_CHARS: usize = 8;

/// Bytes per decoded block.
const BLOCK_BYTES: usize = 5;

/// Right shift that isolates each symbol of a 40-bit block, most significant first.
const SYMBOL_SHIFTS: [u32; BLOCK_CHARS] = [35, 30, 25, 20, 15, 10, 5, 0];

/// Symbols emitted for a final group of `n` bytes, indexed by `n`.
const SYMBOLS_FOR_BYTES: [usize; BLOCK_BYTES + 1] = [0, 2, 4, 5, 7, 8];

/// Map a trailing padding count to the (data symbols, bytes) of the final block.
///
/// Only the counts RFC 4648 can produce are accepted.
const fn final_block_shape(padding: usize) -> Option<(usize, usize)> {
    match padding {
        0 => Some((8, 5)),
        1 => Some((7, 4)),
        3 => Some((5, 3)),
        4 => Some((4, 2)),
        6 => Some((2, 1)),
        _ => None,
    }
}

/// Look up the alphabet character for the low 5 bits of `value`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn symbol(value: u64) -> char {
    // Masked to 5 bits, always a valid alphabet index.
    char::from(ALPHABET[(value & 0x1F) as usize])
}

/// Reverse lookup of a base32 character.
fn symbol_value(c: u8) -> Option<u8> {
    ALPHABET
        .iter()
        .position(|&s| s == c)
        .and_then(|index| u8::try_from(index).ok())
}

fn reject(reason: String) -> OtpError {
    tracing::debug!(%reason, "rejected base32 secret");
    OtpError::Decode(reason)
}

/// Encode bytes as RFC 4648 base32 with `=` padding.
#[must_use]
pub fn encode(data: &[u8]) -> String {
    let blocks = data.len().div_ceil(BLOCK_BYTES);
    let mut out = String::with_capacity(blocks.saturating_mul(BLOCK_CHARS));

    for chunk in data.chunks(BLOCK_BYTES) {
        // Right-align the group in a u64 so the 40 data bits are the low bits.
        let mut be = [0u8; 8];
        for (dst, src) in be[3..].iter_mut().zip(chunk) {
            *dst = *src;
        }
        let bits = u64::from_be_bytes(be);

        let symbols = SYMBOLS_FOR_BYTES[chunk.len()];
        for shift in &SYMBOL_SHIFTS[..symbols] {
            out.push(symbol(bits.wrapping_shr(*shift)));
        }
        out.extend(iter::repeat(char::from(PAD)).take(BLOCK_CHARS.saturating_sub(symbols)));
    }

    out
}

/// Decode an RFC 4648 base32 secret.
///
/// Empty input decodes to an empty vector. Null bytes produced by bit
/// regrouping are kept.
///
/// # Errors
///
/// Returns [`OtpError::Decode`] if:
/// - the trailing `=` count is not one of 0, 1, 3, 4 or 6
/// - padding is present but the final block does not hold exactly the data
///   symbols that count implies
/// - any character is outside the uppercase `A–Z2–7` alphabet
pub fn decode(secret: &str) -> Result<Vec<u8>, OtpError> {
    if secret.is_empty() {
        return Ok(Vec::new());
    }

    let input = secret.as_bytes();
    let padding = input.iter().rev().take_while(|&&c| c == PAD).count();
    let Some((final_symbols, final_bytes)) = final_block_shape(padding) else {
        return Err(reject(format!("invalid padding length {padding}")));
    };

    let (data, _) = input.split_at(input.len().saturating_sub(padding));

    if padding > 0 {
        let tail = data.chunks(BLOCK_CHARS).last().map_or(0, <[u8]>::len);
        if tail != final_symbols {
            return Err(reject(format!(
                "final block has {tail} symbols but {padding} padding characters require {final_symbols}"
            )));
        }
    }

    let values = data
        .iter()
        .enumerate()
        .map(|(position, &c)| {
            symbol_value(c)
                .ok_or_else(|| reject(format!("invalid character at position {position}")))
        })
        .collect::<Result<Vec<u8>, OtpError>>()?;

    let mut out = Vec::with_capacity(
        values
            .len()
            .div_ceil(BLOCK_CHARS)
            .saturating_mul(BLOCK_BYTES),
    );

    let mut blocks = values.chunks(BLOCK_CHARS).peekable();
    while let Some(block) = blocks.next() {
        // Short unpadded blocks are zero-filled to 8 symbols.
        let bits = block
            .iter()
            .copied()
            .chain(iter::repeat(0))
            .take(BLOCK_CHARS)
            .fold(0u64, |acc, v| acc.wrapping_shl(5) | u64::from(v));

        let keep = if blocks.peek().is_none() && padding > 0 {
            final_bytes
        } else {
            BLOCK_BYTES
        };
        out.extend(bits.to_be_bytes()[3..].iter().take(keep));
    }

    Ok(out)
}
