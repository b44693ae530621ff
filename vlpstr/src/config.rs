//! Types for use as [crate::Read::Cfg].
//!
//! Decoding is configured with a [Config], which selects how reserved flag bits are treated and
//! which decoded lengths are acceptable.

use core::ops::{Bound, RangeBounds};

/// Bounds on the decoded length of a string.
///
/// Lengths are read from the buffer before any payload is touched, so bounding them is the
/// cheapest place to reject untrusted input.
///
/// # Examples
///
/// ```
/// use commonware_vlpstr::RangeCfg;
///
/// let cfg = RangeCfg::new(0..=1024);
/// assert!(cfg.contains(&500));
/// assert!(!cfg.contains(&2000));
///
/// let cfg: RangeCfg = (128..).into();
/// assert!(!cfg.contains(&127));
/// assert!(cfg.contains(&u64::MAX));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RangeCfg<T: Copy + PartialOrd = u64> {
    start: Bound<T>,
    end: Bound<T>,
}

macro_rules! impl_from_range {
    ($($range:ident),*) => {
        $(
            impl<T: Copy + PartialOrd> From<core::ops::$range<T>> for RangeCfg<T> {
                fn from(r: core::ops::$range<T>) -> Self {
                    Self::new(r)
                }
            }
        )*
    };
}
impl_from_range!(Range, RangeInclusive, RangeFrom, RangeTo, RangeToInclusive);

impl<T: Copy + PartialOrd> From<core::ops::RangeFull> for RangeCfg<T> {
    fn from(_: core::ops::RangeFull) -> Self {
        Self::new(..)
    }
}

impl<T: Copy + PartialOrd> Default for RangeCfg<T> {
    fn default() -> Self {
        Self::new(..)
    }
}

impl<T: Copy + PartialOrd> RangeCfg<T> {
    /// Creates a new `RangeCfg` from any type implementing `RangeBounds<T>`.
    pub fn new(r: impl RangeBounds<T>) -> Self {
        Self {
            start: r.start_bound().cloned(),
            end: r.end_bound().cloned(),
        }
    }

    /// Creates a `RangeCfg` that only accepts exactly `value`.
    pub fn exact(value: T) -> Self {
        Self {
            start: Bound::Included(value),
            end: Bound::Included(value),
        }
    }

    /// Returns true if the value is within this range.
    pub fn contains(&self, value: &T) -> bool {
        let above_start = match &self.start {
            Bound::Included(s) => value >= s,
            Bound::Excluded(s) => value > s,
            Bound::Unbounded => true,
        };
        let below_end = match &self.end {
            Bound::Included(e) => value <= e,
            Bound::Excluded(e) => value < e,
            Bound::Unbounded => true,
        };
        above_start && below_end
    }
}

impl<T: Copy + PartialOrd> RangeBounds<T> for RangeCfg<T> {
    fn start_bound(&self) -> Bound<&T> {
        self.start.as_ref()
    }

    fn end_bound(&self) -> Bound<&T> {
        self.end.as_ref()
    }
}

/// How a decoder treats bits 4-6 of a multibyte flags byte.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Reserved {
    /// Reject any flags byte with a reserved bit set.
    #[default]
    Reject,
    /// Mask reserved bits out and decode as if they were zero.
    Ignore,
}

/// Configuration for decoding an encoded string.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Config {
    /// Treatment of reserved flag bits.
    pub reserved: Reserved,

    /// Accepted decoded lengths.
    pub len: RangeCfg,
}

impl Config {
    /// Accepts reserved bits and any length.
    pub fn permissive() -> Self {
        Self {
            reserved: Reserved::Ignore,
            len: RangeCfg::default(),
        }
    }

    /// Returns a copy of this config that only accepts lengths within `range`.
    pub fn with_len(mut self, range: impl Into<RangeCfg>) -> Self {
        self.len = range.into();
        self
    }
}
