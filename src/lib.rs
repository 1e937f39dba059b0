//! # timeslab
//!
//! Turns instants into time-bucket keys ("slabs") for partitioning
//! time-indexed data, and enumerates the slabs an interval spans.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use timeslab::{to_slab, to_slab_range, Resolution};
//!
//! let t = Utc.with_ymd_and_hms(2009, 11, 10, 23, 1, 2).unwrap();
//! assert_eq!(to_slab(Resolution::from_code_str("h"), &t), "2009111023");
//! assert_eq!(to_slab(Resolution::Month2, &t), "2009M25");
//!
//! let end = Utc.with_ymd_and_hms(2009, 11, 12, 0, 0, 0).unwrap();
//! assert_eq!(
//!     to_slab_range(Resolution::Day, &t, &end),
//!     vec!["20091110", "20091111", "20091112"]
//! );
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod slab;

pub use config::SlabConfig;
pub use error::{Error, Result};
pub use slab::{
    bounded_slab_range, to_slab, to_slab_range, CalendarStep, Resolution, Slab, SlabIter,
    ALL_SLAB,
};
