//! Time slabs
//!
//! A slab is the key of the time bucket an instant falls into at a chosen
//! resolution: `2016012317` for an hour, `2016M31` for a MONTH3 group,
//! `ALL` for everything. Keys are deterministic for a resolution and UTC
//! instant, and two instants share a key exactly when they share a bucket.

mod engine;
mod format;
mod resolution;
mod step;

pub use engine::{bounded_slab_range, to_slab, to_slab_range, SlabIter};
pub use resolution::Resolution;
pub use step::CalendarStep;

/// Slab key type
pub type Slab = String;

/// The single slab of [`Resolution::All`]
pub const ALL_SLAB: &str = "ALL";
