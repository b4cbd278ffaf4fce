//! Strongly typed identifier wrappers.
//!
//! Both IDs are 1-based: customers are numbered from 1 in arrival order and
//! stations from 1 in fleet order.  Use [`StationId::slot`] to index the
//! engine's station `Vec`.

use std::fmt;

/// Generate a typed 1-based ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The first ID handed out.
            pub const FIRST: $name = $name(1);

            /// Zero-based position, for indexing into a `Vec` ordered by ID.
            #[inline(always)]
            pub fn slot(self) -> usize {
                (self.0 as usize).saturating_sub(1)
            }

            /// The ID whose `slot()` is `slot`.
            #[inline]
            pub fn from_slot(slot: usize) -> $name {
                $name((slot + 1) as $inner)
            }

            /// The ID that follows this one.
            #[inline]
            pub fn next(self) -> $name {
                $name(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " #{}"), self.0)
            }
        }
    };
}

typed_id! {
    /// Customer identifier, monotonic within one run and never reused.
    pub struct CustomerId(u32) => "customer";
}

typed_id! {
    /// Checkout station identifier, fixed at fleet construction.
    pub struct StationId(u16) => "station";
}
