//! Const evaluation utilities
//!
//! Byte search, decimal rendering and hashing helpers shared by every layer.
//! All of them are `const fn` so they can run inside `const` items and
//! inline `const` blocks as well as at runtime.

/// Compare two strings for equality in a const context
pub const fn str_eq(a: &str, b: &str) -> bool {
    bytes_eq(a.as_bytes(), b.as_bytes())
}

/// Compare two byte slices for equality in a const context
pub const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Does `hay[at..]` begin with `needle`?
pub const fn starts_with_at(hay: &[u8], at: usize, needle: &[u8]) -> bool {
    if at > hay.len() || hay.len() - at < needle.len() {
        return false;
    }
    let mut i = 0;
    while i < needle.len() {
        if hay[at + i] != needle[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Absolute index of the first `needle` byte in `hay[from..]`.
pub const fn find_offset(hay: &[u8], from: usize, needle: u8) -> Option<usize> {
    let mut i = from;
    while i < hay.len() {
        if hay[i] == needle {
            return Some(i);
        }
        i += 1;
    }
    None
}

// =============================================================================
// Decimal rendering
// =============================================================================

/// Number of digits of `n` in `base`. Zero has no digits.
pub const fn num_digits(n: usize, base: usize) -> usize {
    let mut n = n;
    let mut count = 0;
    while n != 0 {
        n /= base;
        count += 1;
    }
    count
}

/// Digit `i` of `n` in `base`, counting from the least significant digit.
pub const fn get_digit(n: usize, i: usize, base: usize) -> usize {
    let mut n = n;
    let mut i = i;
    while i != 0 {
        n /= base;
        i -= 1;
    }
    n % base
}

/// Length of `n` rendered in decimal. Zero renders as `"0"`.
pub const fn decimal_len(n: usize) -> usize {
    if n == 0 { 1 } else { num_digits(n, 10) }
}

/// Length of a fixed-width numeric name such as `"uint32_t"`.
pub const fn numeric_name_len(category: &str, width: usize) -> usize {
    category.len() + decimal_len(width) + "_t".len()
}

// =============================================================================
// Rolling hash
// =============================================================================

/// Order-sensitive rolling hash: `h' = (h * 33) ^ byte` for every byte.
pub const fn hash33_xor(seed: u64, bytes: &[u8]) -> u64 {
    let mut hash = seed;
    let mut i = 0;
    while i < bytes.len() {
        hash = hash.wrapping_mul(33) ^ (bytes[i] as u64);
        i += 1;
    }
    hash
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const _: () = assert!(num_digits(0b1, 2) == 1);
    const _: () = assert!(num_digits(0b100, 2) == 3);
    const _: () = assert!(num_digits(128, 10) == 3);
    const _: () = assert!(get_digit(128, 0, 10) == 8);
    const _: () = assert!(get_digit(128, 2, 10) == 1);

    #[test]
    fn test_num_digits() {
        assert_eq!(num_digits(0, 10), 0);
        assert_eq!(num_digits(16, 10), 2);
        assert_eq!(num_digits(64, 10), 2);
        assert_eq!(num_digits(0b1000, 2), 4);
        assert_eq!(decimal_len(0), 1);
        assert_eq!(decimal_len(255), 3);
    }

    #[test]
    fn test_get_digit_binary() {
        assert_eq!(get_digit(0b1101, 0, 2), 1);
        assert_eq!(get_digit(0b1101, 1, 2), 0);
        assert_eq!(get_digit(0b1101, 2, 2), 1);
        assert_eq!(get_digit(0b1101, 3, 2), 1);
    }

    #[test]
    fn test_search() {
        let hay = b"declname::signature::Probe<()>";
        assert_eq!(find_offset(hay, 0, b'<'), Some(26));
        assert_eq!(find_offset(hay, 27, b'<'), None);
        assert!(starts_with_at(hay, 27, b"()>"));
        assert!(!starts_with_at(hay, 28, b"()>"));
        assert!(starts_with_at(hay, hay.len(), b""));
        assert!(str_eq("abc", "abc"));
        assert!(!str_eq("abc", "abd"));
    }

    #[test]
    fn test_hash33_xor() {
        assert_eq!(hash33_xor(0, b""), 0);
        assert_eq!(hash33_xor(0, b"a"), 97);
        assert_eq!(hash33_xor(0, b"ab"), (97 * 33) ^ 98);
        // Order sensitive
        assert_ne!(hash33_xor(0, b"ab"), hash33_xor(0, b"ba"));
        // Splitting the input does not change the result
        assert_eq!(hash33_xor(hash33_xor(0, b"uint"), b"8_t"), hash33_xor(0, b"uint8_t"));
    }
}
