//! Dense identifiers for cities and roads.
//!
//! Both are positions in a `Vec` owned by the world: cities are numbered
//! `0..city_count` in the order they were added, roads `0..road_count` in the
//! order they were laid.  The wrapped `u32` is public so tests and callers
//! can spell ids directly (`CityId(3)`).

use std::fmt;

/// Declare dense `u32` ids.  Each entry names the type and the noun its
/// `Display` uses, so `CityId(7)` prints as `city 7`.
macro_rules! dense_ids {
    ($($(#[$attr:meta])* $name:ident => $noun:literal;)+) => {$(
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub u32);

        impl $name {
            /// Position in the owning `Vec`.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// The id at position `index`, or `None` past `u32::MAX`.
            #[inline]
            pub fn from_index(index: usize) -> Option<Self> {
                u32::try_from(index).ok().map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($noun, " {}"), self.0)
            }
        }
    )+};
}

dense_ids! {
    /// Identity of a city.
    CityId => "city";
    /// Position of a road in the world's road registry.
    RoadId => "road";
}
