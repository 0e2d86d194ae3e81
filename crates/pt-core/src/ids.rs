//! Strongly typed, zero-cost identifier wrappers.
//!
//! Ids are never reused.  Both kinds come out of an [`IdCounter`] owned by the
//! collection that mints them, so ordering by id is ordering by creation.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Raw integer value.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $label, self.0)
            }
        }

        impl From<u64> for $name {
            #[inline(always)]
            fn from(n: u64) -> $name {
                $name(n)
            }
        }
    };
}

typed_id! {
    /// Opaque identity of one walking dog, minted at spawn time.
    pub struct WalkId(u64) => "walk";
}

typed_id! {
    /// Identity of one paw print.  Global and strictly increasing.
    pub struct PrintId(u64) => "paw";
}

/// Monotonic id source.  The first id handed out is `1`.
#[derive(Clone, Debug, Default)]
pub struct IdCounter {
    last: u64,
}

impl IdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next id.
    #[inline]
    pub fn mint<T: From<u64>>(&mut self) -> T {
        self.last += 1;
        T::from(self.last)
    }

    /// The most recently minted raw value (`0` before the first call).
    pub fn last(&self) -> u64 {
        self.last
    }
}
