//! Typed identifiers for stations, links, and troons.
//!
//! Each id is a `u32` index into one flat table (the station directory, the
//! link `Vec`, the spawn sequence), so `.index()` is the only conversion the
//! engine needs.  Ids are `Copy + Ord + Hash`: the troon id doubles as the
//! deterministic tie-break key in dispatch and report ordering.

use std::fmt;

/// Declare a `u32` id newtype whose `Display` is `<tag><n>`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident, $tag:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Placeholder for an id that was never assigned.
            pub const INVALID: $name = $name(u32::MAX);

            /// Position in the owning table.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($tag, "{}"), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                u32::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a station in the directory.  Assigned in input order.
    pub struct StationId, "station#";
}

typed_id! {
    /// Index of a directed track segment in the flat link collection.
    pub struct LinkId, "link#";
}

typed_id! {
    /// Globally unique troon identity, assigned at spawn and never reused.
    pub struct TroonId, "troon#";
}
