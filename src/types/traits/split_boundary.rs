use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::fmt::Display;

/// The instants a split boundary stands for, both inclusive.
///
/// An exact timestamp resolves to a single instant (`start == end`); a bare date
/// covers the whole day.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BoundaryRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl BoundaryRange {
    fn instant(ts: NaiveDateTime) -> Self {
        Self { start: ts, end: ts }
    }
}

/// Anything that can mark the edge between two chronological splits.
///
/// Timestamps in the engineered dataset are timezone-naive, so zoned inputs are
/// converted to UTC and then stripped of their zone.
///
/// Strings are tried, in order, as RFC 3339 (`2015-06-30T23:00:00Z`), as
/// `YYYY-MM-DD HH:MM:SS`, as `YYYY-MM-DDTHH:MM:SS` and as `YYYY-MM-DD`.
pub trait SplitBoundary: Display {
    fn resolve_boundary(&self) -> Option<BoundaryRange>;
}

impl SplitBoundary for NaiveDateTime {
    fn resolve_boundary(&self) -> Option<BoundaryRange> {
        Some(BoundaryRange::instant(*self))
    }
}

impl SplitBoundary for DateTime<Utc> {
    fn resolve_boundary(&self) -> Option<BoundaryRange> {
        Some(BoundaryRange::instant(self.naive_utc()))
    }
}

impl SplitBoundary for NaiveDate {
    fn resolve_boundary(&self) -> Option<BoundaryRange> {
        Some(BoundaryRange {
            start: self.and_hms_opt(0, 0, 0)?,
            end: self.and_hms_micro_opt(23, 59, 59, 999_999)?,
        })
    }
}

impl SplitBoundary for str {
    fn resolve_boundary(&self) -> Option<BoundaryRange> {
        let s = self.trim();
        if let Ok(dt) = s.parse::<DateTime<Utc>>() {
            return dt.resolve_boundary();
        }
        for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
            if let Ok(naive_dt) = NaiveDateTime::parse_from_str(s, format) {
                return naive_dt.resolve_boundary();
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()?
            .resolve_boundary()
    }
}

impl SplitBoundary for &str {
    fn resolve_boundary(&self) -> Option<BoundaryRange> {
        (**self).resolve_boundary()
    }
}

impl SplitBoundary for String {
    fn resolve_boundary(&self) -> Option<BoundaryRange> {
        self.as_str().resolve_boundary()
    }
}
