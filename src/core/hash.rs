//! Non-cryptographic string hashes usable in `const` context.
//!
//! [`fnv1a`] doubles as a switch discriminant for strings, see
//! [`string_switch!`](crate::string_switch).

const FNV_OFFSET_BASIS: u32 = 2166136261;
const FNV_PRIME: u32 = 16777619;

/// 32-bit FNV-1a over `data`.
pub const fn fnv1a(data: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < data.len() {
        hash = (hash ^ data[i] as u32).wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

pub const fn fnv1a_str(s: &str) -> u32 {
    fnv1a(s.as_bytes())
}

const fn get16bits(data: &[u8], at: usize) -> u32 {
    (data[at] as u32) | ((data[at + 1] as u32) << 8)
}

/// Paul Hsieh's SuperFastHash. Empty input hashes to 0.
pub const fn hsieh(data: &[u8]) -> u32 {
    if data.is_empty() {
        return 0;
    }

    let mut hash = data.len() as u32;
    let rem = data.len() & 3;
    let mut blocks = data.len() >> 2;
    let mut i = 0;

    while blocks > 0 {
        hash = hash.wrapping_add(get16bits(data, i));
        let tmp = (get16bits(data, i + 2) << 11) ^ hash;
        hash = (hash << 16) ^ tmp;
        hash = hash.wrapping_add(hash >> 11);
        i += 4;
        blocks -= 1;
    }

    // trailing bytes are mixed in as signed chars
    match rem {
        3 => {
            hash = hash.wrapping_add(get16bits(data, i));
            hash ^= hash << 16;
            hash ^= ((data[i + 2] as i8 as i32) << 18) as u32;
            hash = hash.wrapping_add(hash >> 11);
        }
        2 => {
            hash = hash.wrapping_add(get16bits(data, i));
            hash ^= hash << 11;
            hash = hash.wrapping_add(hash >> 17);
        }
        1 => {
            hash = hash.wrapping_add(data[i] as i8 as i32 as u32);
            hash ^= hash << 10;
            hash = hash.wrapping_add(hash >> 1);
        }
        _ => {}
    }

    hash ^= hash << 3;
    hash = hash.wrapping_add(hash >> 5);
    hash ^= hash << 4;
    hash = hash.wrapping_add(hash >> 17);
    hash ^= hash << 25;
    hash = hash.wrapping_add(hash >> 6);

    hash
}

/// Dispatches on a string through its FNV-1a hash.
///
/// Case hashes are computed in `const` context. A matching hash is confirmed
/// with a string comparison, so colliding inputs fall through to `_`.
///
/// ```
/// use kl_toolkit::string_switch;
///
/// let command = String::from("stop");
/// let code = string_switch!(command, {
///     "start" => 1,
///     "stop" => 2,
///     _ => 0,
/// });
/// assert_eq!(code, 2);
/// ```
#[macro_export]
macro_rules! string_switch {
    ($value:expr, { $($case:literal => $arm:expr,)* _ => $default:expr $(,)? }) => {{
        let value: &str = ::std::convert::AsRef::<str>::as_ref(&$value);
        match $crate::core::hash::fnv1a_str(value) {
            $(
                hash if hash == {
                    const CASE: u32 = $crate::core::hash::fnv1a_str($case);
                    CASE
                } && value == $case => $arm,
            )*
            _ => $default,
        }
    }};
}
