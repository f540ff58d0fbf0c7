//! Immutable fixed-length strings.
//!
//! [`FixedStr<N>`] owns exactly `N` ASCII bytes; the length is part of the
//! type. Construction, slicing and concatenation are `const fn`, which is how
//! fixed-width numeric names are assembled at compile time:
//!
//! ```
//! use declname::primitives::fixed_str::FixedStr;
//!
//! const NAME: FixedStr<8> = FixedStr::<4>::new("uint")
//!     .concat::<2, 6>(&FixedStr::<2>::decimal(32))
//!     .concat::<2, 8>(&FixedStr::new("_t"));
//!
//! assert_eq!(NAME.as_str(), "uint32_t");
//! assert_eq!(NAME.slice::<4>(0), "uint");
//! ```

use core::fmt;
use core::ops::Index;

use super::const_utils::{get_digit, numeric_name_len, num_digits};
use super::seq::Seq;

/// `N` immutable ASCII bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedStr<const N: usize>(Seq<u8, N>);

impl<const N: usize> FixedStr<N> {
    /// Copy the first `N` bytes of `s`.
    pub const fn new(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }

    /// Copy the first `N` bytes of `bytes`, which must be ASCII.
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        let seq = Seq::<u8, N>::from_slice(bytes);
        let mut i = 0;
        while i < N {
            assert!(seq.get(i).is_ascii(), "FixedStr only holds ASCII");
            i += 1;
        }
        Self(seq)
    }

    /// `N` copies of `byte`.
    pub const fn filled(byte: u8) -> Self {
        assert!(byte.is_ascii(), "FixedStr only holds ASCII");
        Self(Seq::new([byte; N]))
    }

    /// `n` in decimal. `N` must be its exact digit count.
    pub const fn decimal(n: usize) -> Self {
        let digits = if n == 0 { 1 } else { num_digits(n, 10) };
        assert!(digits == N, "decimal: N must equal the digit count");
        let mut out = [b'0'; N];
        let mut i = 0;
        while i < N {
            out[N - 1 - i] = b'0' + get_digit(n, i, 10) as u8;
            i += 1;
        }
        Self(Seq::new(out))
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub const fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    pub const fn as_str(&self) -> &str {
        match core::str::from_utf8(self.as_bytes()) {
            Ok(s) => s,
            Err(_) => unreachable!(),
        }
    }

    /// Byte `i`.
    pub const fn get(&self, i: usize) -> u8 {
        self.0.get(i)
    }

    /// The `M` bytes starting at `offset`.
    pub const fn slice<const M: usize>(&self, offset: usize) -> FixedStr<M> {
        assert!(offset + M <= N, "slice out of bounds");
        FixedStr(self.0.gather(&Seq::<usize, M>::range(offset, offset + M)))
    }

    /// `self` followed by `other`. `O` must equal `N + M`.
    pub const fn concat<const M: usize, const O: usize>(&self, other: &FixedStr<M>) -> FixedStr<O> {
        FixedStr(self.0.concat(&other.0))
    }
}

/// `category` + decimal `width` + `"_t"`, e.g. `numeric_name::<8>("uint", 32)`.
/// `N` must be [`numeric_name_len`]`(category, width)`.
pub const fn numeric_name<const N: usize>(category: &str, width: usize) -> FixedStr<N> {
    assert!(N == numeric_name_len(category, width), "numeric_name: wrong length");
    let mut out = [0u8; N];
    let head = category.as_bytes();
    let mut i = 0;
    while i < head.len() {
        out[i] = head[i];
        i += 1;
    }
    let digits = N - head.len() - 2;
    let mut d = 0;
    while d < digits {
        out[head.len() + digits - 1 - d] = b'0' + get_digit(width, d, 10) as u8;
        d += 1;
    }
    out[N - 2] = b'_';
    out[N - 1] = b't';
    FixedStr::from_bytes(&out)
}

impl<const N: usize> Default for FixedStr<N> {
    fn default() -> Self {
        Self::filled(0)
    }
}

impl<const N: usize> Index<usize> for FixedStr<N> {
    type Output = u8;

    fn index(&self, i: usize) -> &u8 {
        &self.0[i]
    }
}

impl<const N: usize> AsRef<str> for FixedStr<N> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> PartialEq<str> for FixedStr<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for FixedStr<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<const N: usize> fmt::Display for FixedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> fmt::Debug for FixedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

// =============================================================================
// Digits
// =============================================================================

/// Decimal rendering of a `usize` with the length decided at runtime.
///
/// Used where the digit count depends on a generic parameter, e.g. array
/// extents; build it in an inline `const` block to keep it compile-time.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digits {
    buf: [u8; 20],
    len: usize,
}

impl Digits {
    pub const fn new(n: usize) -> Self {
        let len = if n == 0 { 1 } else { num_digits(n, 10) };
        let mut buf = [b'0'; 20];
        let mut i = 0;
        while i < len {
            buf[len - 1 - i] = b'0' + get_digit(n, i, 10) as u8;
            i += 1;
        }
        Self { buf, len }
    }

    pub const fn as_str(&self) -> &str {
        let (digits, _) = self.buf.split_at(self.len);
        match core::str::from_utf8(digits) {
            Ok(s) => s,
            Err(_) => unreachable!(),
        }
    }
}

impl fmt::Debug for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

// =============================================================================
// Tests
// =============================================================================
