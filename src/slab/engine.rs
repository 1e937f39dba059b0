//! Slab computation for single instants and time ranges

use std::iter::FusedIterator;

use chrono::{DateTime, TimeZone, Utc};
use tracing::{trace, warn};

use crate::config::SlabConfig;
use crate::error::{Error, Result};
use crate::slab::format;
use crate::slab::step::CalendarStep;
use crate::slab::{Resolution, Slab, ALL_SLAB};

/// Compute the slab `instant` falls in.
///
/// The instant is normalized to UTC first. WEEK is the one exception: its
/// ISO week is taken from the calendar of the zone `instant` carries, so the
/// same instant seen from different zones can land in different weeks.
pub fn to_slab<Tz: TimeZone>(resolution: Resolution, instant: &DateTime<Tz>) -> Slab {
    match resolution {
        Resolution::Week => format::week_key(instant),
        _ => resolution.format(&instant.with_timezone(&Utc)),
    }
}

/// Compute every slab from the one containing `start` through the one
/// containing `end`, in chronological order.
///
/// Both bounds are normalized to UTC. A cursor starts at `start` and moves
/// one calendar step at a time, emitting the slab under it, until it reaches
/// `end` plus one step. The cursor is not aligned to slab boundaries, so the
/// result has `ceil((end - start) / step) + 1` entries for fixed steps.
///
/// MONTH3 and unrecognized resolutions stop at `end` itself and so may omit
/// the slab containing `end`. HOUR steps like the unrecognized fallback but
/// is inclusive. ALL always yields `["ALL"]`.
pub fn to_slab_range<Tz1: TimeZone, Tz2: TimeZone>(
    resolution: Resolution,
    start: &DateTime<Tz1>,
    end: &DateTime<Tz2>,
) -> Vec<Slab> {
    let slabs: Vec<Slab> = SlabIter::new(resolution, start, end).collect();
    trace!(%resolution, count = slabs.len(), "enumerated slab range");
    slabs
}

/// Like [`to_slab_range`], but fails instead of producing more slabs than
/// `config.max_range_slabs` allows.
pub fn bounded_slab_range<Tz1: TimeZone, Tz2: TimeZone>(
    config: &SlabConfig,
    resolution: Resolution,
    start: &DateTime<Tz1>,
    end: &DateTime<Tz2>,
) -> Result<Vec<Slab>> {
    let Some(limit) = config.max_range_slabs else {
        return Ok(to_slab_range(resolution, start, end));
    };

    let slabs: Vec<Slab> = SlabIter::new(resolution, start, end)
        .take(limit.saturating_add(1))
        .collect();

    if slabs.len() > limit {
        warn!(%resolution, limit, "slab range exceeds configured limit");
        return Err(Error::range_too_large(limit));
    }

    Ok(slabs)
}

/// Lazy generator behind [`to_slab_range`]
#[derive(Debug, Clone)]
pub struct SlabIter {
    resolution: Resolution,
    walk: Walk,
}

#[derive(Debug, Clone)]
enum Walk {
    /// ALL: one sentinel slab, then done
    Sentinel { emitted: bool },
    /// `stop` is exclusive; `None` walks until the cursor cannot advance
    Stepping {
        step: CalendarStep,
        cursor: Option<DateTime<Utc>>,
        stop: Option<DateTime<Utc>>,
    },
}

impl SlabIter {
    /// Create an iterator over the slabs between `start` and `end`
    pub fn new<Tz1: TimeZone, Tz2: TimeZone>(
        resolution: Resolution,
        start: &DateTime<Tz1>,
        end: &DateTime<Tz2>,
    ) -> Self {
        let walk = match resolution.step() {
            None => Walk::Sentinel { emitted: false },
            Some(step) => {
                let end = end.with_timezone(&Utc);
                let stop = if resolution.includes_range_end() {
                    step.advance(&end)
                } else {
                    Some(end)
                };

                Walk::Stepping {
                    step,
                    cursor: Some(start.with_timezone(&Utc)),
                    stop,
                }
            }
        };

        Self { resolution, walk }
    }

    /// Get the resolution being enumerated
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }
}

impl Iterator for SlabIter {
    type Item = Slab;

    fn next(&mut self) -> Option<Slab> {
        match &mut self.walk {
            Walk::Sentinel { emitted } => {
                if *emitted {
                    return None;
                }
                *emitted = true;
                Some(ALL_SLAB.to_string())
            }
            Walk::Stepping { step, cursor, stop } => {
                let current = (*cursor)?;
                if matches!(stop, Some(stop) if current >= *stop) {
                    *cursor = None;
                    return None;
                }

                *cursor = step.advance(&current);
                Some(self.resolution.format(&current))
            }
        }
    }
}

impl FusedIterator for SlabIter {}
