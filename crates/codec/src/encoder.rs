use tracing::{debug, warn};

use crate::width::DigitWidth;

/// Binary representation of `byte`, left-padded with `'0'` to `width` digits.
///
/// A byte whose natural representation is longer than `width` is emitted in
/// full rather than truncated, so the result may be longer than `width`.
pub fn byte_to_binary(byte: u8, width: DigitWidth) -> String {
    let mut out = String::with_capacity(width.get().max(8));
    push_binary(&mut out, byte, width.get());
    out
}

/// Encode bytes as a binary-text artifact.
///
/// Each byte becomes [`byte_to_binary`] and the groups are concatenated with
/// no separator. With `width >= 8` the output is exactly
/// `bytes.len() * width` digits long.
pub fn encode(bytes: &[u8], width: DigitWidth) -> String {
    debug!(bytes = bytes.len(), width = %width, "encoding to binary text");

    let (out, overflowed) = encode_segment(bytes, width);
    warn_overflow(overflowed, width);
    out
}

/// Encode without logging, returning the text and how many bytes did not
/// fit in `width` digits.
pub(crate) fn encode_segment(bytes: &[u8], width: DigitWidth) -> (String, usize) {
    let mut out = String::with_capacity(bytes.len() * width.get().max(8));
    let mut overflowed = 0usize;
    for &byte in bytes {
        if natural_len(byte) > width.get() {
            overflowed += 1;
        }
        push_binary(&mut out, byte, width.get());
    }
    (out, overflowed)
}

pub(crate) fn warn_overflow(overflowed: usize, width: DigitWidth) {
    if overflowed > 0 {
        warn!(
            overflowed,
            width = %width,
            "bytes wider than the digit width were emitted unpadded; the artifact cannot be re-chunked at this width"
        );
    }
}

/// Number of digits in the unpadded binary representation (at least one).
#[inline]
fn natural_len(byte: u8) -> usize {
    (u8::BITS - byte.leading_zeros()).max(1) as usize
}

fn push_binary(out: &mut String, byte: u8, width: usize) {
    let len = natural_len(byte);
    for _ in len..width {
        out.push('0');
    }
    for shift in (0..len).rev() {
        out.push(if (byte >> shift) & 1 == 1 { '1' } else { '0' });
    }
}
