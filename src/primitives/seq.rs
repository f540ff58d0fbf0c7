//! Fixed-length compile-time sequences.
//!
//! A [`Seq`] is an immutable list of `N` values of one [`Element`] category.
//! Every operation is a `const fn` that returns a new sequence, so sequences
//! can be composed inside `const` items:
//!
//! ```
//! use declname::primitives::seq::Seq;
//!
//! const A: Seq<usize, 3> = Seq::range(0, 3);
//! const B: Seq<usize, 2> = Seq::range(7, 9);
//! const AB: Seq<usize, 5> = A.concat(&B);
//!
//! assert_eq!(AB.as_slice(), &[0, 1, 2, 7, 8]);
//! ```
//!
//! Stable Rust cannot spell `Seq<T, { N + M }>`, so operations that change the
//! length take the output length as a parameter and assert it. Evaluated in a
//! `const`, a wrong length is a compilation error.

use core::ops::Index;

/// Values that can live in a [`Seq`].
///
/// `ZERO` is only used to pre-fill storage before it is overwritten.
pub trait Element: Copy + 'static {
    const ZERO: Self;
}

macro_rules! impl_element {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Element for $ty {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_element!(
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    char => '\0', bool => false,
);

/// An ordered, fixed-length, immutable sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seq<T: Element, const N: usize>([T; N]);

impl<T: Element, const N: usize> Seq<T, N> {
    /// Wrap an array.
    pub const fn new(items: [T; N]) -> Self {
        Self(items)
    }

    /// Copy the first `N` items of `items`.
    pub const fn from_slice(items: &[T]) -> Self {
        assert!(items.len() >= N, "slice is shorter than the sequence");
        let mut out = [T::ZERO; N];
        let mut i = 0;
        while i < N {
            out[i] = items[i];
            i += 1;
        }
        Self(out)
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub const fn get(&self, i: usize) -> T {
        self.0[i]
    }

    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub const fn into_array(self) -> [T; N] {
        self.0
    }

    /// `self` followed by `other`. `O` must equal `N + M`.
    pub const fn concat<const M: usize, const O: usize>(&self, other: &Seq<T, M>) -> Seq<T, O> {
        assert!(N + M == O, "concat: output length must be N + M");
        let mut out = [T::ZERO; O];
        let mut i = 0;
        while i < N {
            out[i] = self.0[i];
            i += 1;
        }
        let mut j = 0;
        while j < M {
            out[N + j] = other.0[j];
            j += 1;
        }
        Seq(out)
    }

    /// Pick elements by index: `out[k] = self[indices[k]]`.
    pub const fn gather<const M: usize>(&self, indices: &Seq<usize, M>) -> Seq<T, M> {
        let mut out = [T::ZERO; M];
        let mut k = 0;
        while k < M {
            out[k] = self.0[indices.0[k]];
            k += 1;
        }
        Seq(out)
    }
}

// =============================================================================
// Index ranges
// =============================================================================

impl<const N: usize> Seq<usize, N> {
    /// The ascending indices `[min, max)`. `N` must equal `max - min`.
    ///
    /// Filled by bisection, so the recursion depth is logarithmic in `N`.
    pub const fn range(min: usize, max: usize) -> Self {
        assert!(min <= max, "range: min must not exceed max");
        assert!(max - min == N, "range: sequence length must equal max - min");
        let mut out = [0usize; N];
        fill_range(&mut out, 0, N, min);
        Seq(out)
    }
}

/// Write `base + lo .. base + hi` into `out[lo..hi]`.
const fn fill_range(out: &mut [usize], lo: usize, hi: usize, base: usize) {
    match hi - lo {
        0 => {}
        1 => out[lo] = base + lo,
        len => {
            let mid = lo + len / 2;
            fill_range(out, lo, mid, base);
            fill_range(out, mid, hi, base);
        }
    }
}

impl<T: Element, const N: usize> Index<usize> for Seq<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T: Element, const N: usize> Default for Seq<T, N> {
    fn default() -> Self {
        Self([T::ZERO; N])
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const LARGE: Seq<usize, 1024> = Seq::range(0, 1 << 10);

    #[test]
    fn test_range() {
        assert_eq!(Seq::<usize, 4>::range(0, 4).as_slice(), &[0, 1, 2, 3]);
        assert_eq!(Seq::<usize, 1>::range(5, 6).as_slice(), &[5]);
        assert!(Seq::<usize, 0>::range(8, 8).is_empty());
        assert_eq!(LARGE.get(0), 0);
        assert_eq!(LARGE.get(1023), 1023);
    }

    #[test]
    fn test_concat() {
        const A: Seq<usize, 3> = Seq::new([0, 3, 2]);
        const B: Seq<usize, 2> = Seq::new([1, 4]);
        const AB: Seq<usize, 5> = A.concat(&B);
        assert_eq!(AB.as_slice(), &[0, 3, 2, 1, 4]);
    }

    #[test]
    fn test_gather() {
        let chars = Seq::<char, 4>::new(['w', 'x', 'y', 'z']);
        let picked = chars.gather(&Seq::<usize, 2>::range(1, 3));
        assert_eq!(picked.as_slice(), &['x', 'y']);
    }

    #[test]
    #[should_panic(expected = "concat")]
    fn test_concat_length_mismatch() {
        let a = Seq::<u8, 1>::new([1]);
        let _ = a.concat::<1, 3>(&Seq::new([2]));
    }
}
