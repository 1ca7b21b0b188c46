//! Standard-alphabet base64 (RFC 4648, with `=` padding).

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Marks bytes outside of the alphabet in [`DECODE_TABLE`].
const INVALID: u8 = 0x80;

const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

fn lookup(index: u8) -> char {
    ALPHABET[(index & 0x3F) as usize] as char
}

/// Encodes `data`, padding the last quadruple with `=` when needed.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len().div_ceil(3) * 4);

    let mut chunks = data.chunks_exact(3);
    for chunk in &mut chunks {
        out.push(lookup(chunk[0] >> 2));
        out.push(lookup(((chunk[0] & 0x3) << 4) | (chunk[1] >> 4)));
        out.push(lookup((chunk[1] << 2) | (chunk[2] >> 6)));
        out.push(lookup(chunk[2]));
    }

    match *chunks.remainder() {
        [a] => {
            out.push(lookup(a >> 2));
            out.push(lookup((a & 0x3) << 4));
            out.push_str("==");
        }
        [a, b] => {
            out.push(lookup(a >> 2));
            out.push(lookup(((a & 0x3) << 4) | (b >> 4)));
            out.push(lookup(b << 2));
            out.push('=');
        }
        _ => {}
    }

    out
}

/// Decodes `input`, returning `None` for malformed input: a length that is
/// not a multiple of four, more than two padding characters, or any
/// character outside of the alphabet.
pub fn decode(input: &str) -> Option<Vec<u8>> {
    let bytes = input.as_bytes();

    if bytes.len() % 4 != 0 {
        tracing::trace!(len = bytes.len(), "base64 input length is not a multiple of 4");
        return None;
    }

    let padding = bytes.iter().rev().take_while(|&&b| b == b'=').count();
    if padding > 2 {
        tracing::trace!(padding, "base64 input has too much padding");
        return None;
    }

    let mut out = Vec::with_capacity(bytes.len() / 4 * 3 - padding);
    let (body, tail) = if padding > 0 {
        bytes.split_at(bytes.len() - 4)
    } else {
        (bytes, &[][..])
    };

    for quad in body.chunks_exact(4) {
        let [a, b, c, d] = sextets(quad)?;
        out.push((a << 2) | (b >> 4));
        out.push((b << 4) | (c >> 2));
        out.push((c << 6) | d);
    }

    match padding {
        2 => {
            let [a, b] = sextets(&tail[..2])?;
            out.push((a << 2) | (b >> 4));
        }
        1 => {
            let [a, b, c] = sextets(&tail[..3])?;
            out.push((a << 2) | (b >> 4));
            out.push((b << 4) | (c >> 2));
        }
        _ => {}
    }

    Some(out)
}

fn sextets<const N: usize>(chars: &[u8]) -> Option<[u8; N]> {
    let mut out = [0u8; N];
    for (slot, &c) in out.iter_mut().zip(chars) {
        let value = DECODE_TABLE[c as usize];
        if value == INVALID {
            return None;
        }
        *slot = value;
    }
    Some(out)
}
