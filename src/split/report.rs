//! Diagnostic summary of a chronological split: the date range and row count of
//! every slice.

use crate::types::columns::COL_DATETIME;
use chrono::{DateTime, NaiveDateTime};
use polars::prelude::*;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitName {
    Train,
    Validation,
    Test,
}

impl SplitName {
    fn label(&self) -> &'static str {
        match self {
            SplitName::Train => "Training",
            SplitName::Validation => "Validation",
            SplitName::Test => "Test",
        }
    }
}

impl fmt::Display for SplitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Earliest and latest timestamp and row count of one slice.
///
/// `start` and `end` are `None` when the slice is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplitSummary {
    pub split: SplitName,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub rows: usize,
}

impl SplitSummary {
    pub(crate) fn of_frame(split: SplitName, frame: &DataFrame) -> PolarsResult<Self> {
        let stamps = frame.column(COL_DATETIME)?.datetime()?;
        let to_datetime =
            |ms: i64| DateTime::from_timestamp_millis(ms).map(|dt| dt.naive_utc());
        Ok(Self {
            split,
            start: stamps.into_iter().flatten().min().and_then(to_datetime),
            end: stamps.into_iter().flatten().max().and_then(to_datetime),
            rows: frame.height(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}

impl fmt::Display for SplitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = format!("{} Range", self.split.label());
        let show = |ts: Option<NaiveDateTime>| ts.map_or_else(|| "-".to_string(), |t| t.to_string());
        write!(
            f,
            "{:<20}: {} to {}  (n={})",
            label,
            show(self.start),
            show(self.end),
            self.rows
        )
    }
}

/// Summaries of the train, validation and test slices, in that order.
///
/// Displays as three lines, one per slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    summaries: [SplitSummary; 3],
}

impl SplitReport {
    pub(crate) fn new(train: SplitSummary, validation: SplitSummary, test: SplitSummary) -> Self {
        Self {
            summaries: [train, validation, test],
        }
    }

    pub fn train(&self) -> &SplitSummary {
        &self.summaries[0]
    }

    pub fn validation(&self) -> &SplitSummary {
        &self.summaries[1]
    }

    pub fn test(&self) -> &SplitSummary {
        &self.summaries[2]
    }

    pub fn get(&self, split: SplitName) -> &SplitSummary {
        match split {
            SplitName::Train => self.train(),
            SplitName::Validation => self.validation(),
            SplitName::Test => self.test(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SplitSummary> {
        self.summaries.iter()
    }
}

impl fmt::Display for SplitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, summary) in self.summaries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2015, 6, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn summary_of_frame() -> Result<(), Box<dyn std::error::Error>> {
        let df = df!(COL_DATETIME => [at(29, 4), at(30, 23), at(29, 1)])?;
        let summary = SplitSummary::of_frame(SplitName::Validation, &df)?;
        assert_eq!(summary.start, Some(at(29, 1)));
        assert_eq!(summary.end, Some(at(30, 23)));
        assert_eq!(summary.rows, 3);
        Ok(())
    }

    #[test]
    fn empty_frame_has_no_range() -> Result<(), Box<dyn std::error::Error>> {
        let df = df!(COL_DATETIME => Vec::<NaiveDateTime>::new())?;
        let summary = SplitSummary::of_frame(SplitName::Test, &df)?;
        assert!(summary.is_empty());
        assert_eq!(summary.start, None);
        assert_eq!(summary.to_string(), "Test Range          : - to -  (n=0)");
        Ok(())
    }

    #[test]
    fn report_serializes_for_run_logs() -> Result<(), Box<dyn std::error::Error>> {
        let train = df!(COL_DATETIME => [at(1, 0), at(29, 23)])?;
        let empty = df!(COL_DATETIME => Vec::<NaiveDateTime>::new())?;
        let report = SplitReport::new(
            SplitSummary::of_frame(SplitName::Train, &train)?,
            SplitSummary::of_frame(SplitName::Validation, &train)?,
            SplitSummary::of_frame(SplitName::Test, &empty)?,
        );

        let json = serde_json::to_value(report)?;
        let summaries = json["summaries"].as_array().unwrap();
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0]["split"], "train");
        assert_eq!(summaries[0]["start"], "2015-06-01T00:00:00");
        assert_eq!(summaries[0]["end"], "2015-06-29T23:00:00");
        assert_eq!(summaries[0]["rows"], 2);
        assert_eq!(summaries[1]["split"], "validation");
        assert_eq!(summaries[2]["split"], "test");
        assert!(summaries[2]["start"].is_null());
        assert_eq!(summaries[2]["rows"], 0);
        Ok(())
    }

    #[test]
    fn report_prints_three_aligned_lines() {
        let summary = |split, rows| SplitSummary {
            split,
            start: Some(at(1, 0)),
            end: Some(at(30, 23)),
            rows,
        };
        let report = SplitReport::new(
            summary(SplitName::Train, 720),
            summary(SplitName::Validation, 10),
            summary(SplitName::Test, 5),
        );
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Training Range      : 2015-06-01 00:00:00 to 2015-06-30 23:00:00  (n=720)",
                "Validation Range    : 2015-06-01 00:00:00 to 2015-06-30 23:00:00  (n=10)",
                "Test Range          : 2015-06-01 00:00:00 to 2015-06-30 23:00:00  (n=5)",
            ]
        );
        assert_eq!(report.get(SplitName::Validation).rows, 10);
    }
}
