//! 学期与时间段值类型

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::errors::{LmsError, Result};

/// 学期季节
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
        }
    }
}

impl FromStr for Season {
    type Err = LmsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" => Ok(Season::Fall),
            other => Err(LmsError::validation(format!("Unknown season: {other}"))),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 学期键 (季节, 年份)，不同学期的开课互不冲突
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SemesterKey {
    pub season: Season,
    pub year: u16,
}

impl SemesterKey {
    pub fn new(season: Season, year: u16) -> Self {
        Self { season, year }
    }
}

impl fmt::Display for SemesterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.season, self.year)
    }
}

/// 每周重复的上课时间段 `[start, end)`
///
/// 只能通过 [`TimeRange::new`] 构造，保证 `start < end`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start >= end {
            return Err(LmsError::invalid_range(format!(
                "start time {start} must be earlier than end time {end}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// 半开区间重叠判定：一节课结束时另一节课开始不算冲突
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn range(s: (u32, u32), e: (u32, u32)) -> TimeRange {
        TimeRange::new(t(s.0, s.1), t(e.0, e.1)).unwrap()
    }

    #[test]
    fn test_rejects_empty_and_inverted_ranges() {
        let err = TimeRange::new(t(9, 0), t(9, 0)).unwrap_err();
        assert_eq!(err.code(), "E001");
        assert!(TimeRange::new(t(10, 0), t(9, 0)).is_err());
    }

    #[test]
    fn test_back_to_back_does_not_overlap() {
        let first = range((9, 0), (10, 0));
        let second = range((10, 0), (11, 0));
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }

    #[test]
    fn test_one_minute_overlap() {
        let first = range((9, 0), (10, 0));
        let second = range((9, 59), (10, 30));
        assert!(first.overlaps(&second));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = range((8, 0), (12, 0));
        let inner = range((9, 0), (10, 0));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let ranges = [
            range((8, 0), (9, 0)),
            range((8, 30), (9, 30)),
            range((9, 0), (10, 0)),
            range((9, 59), (10, 30)),
            range((7, 0), (12, 0)),
            range((13, 0), (14, 15)),
        ];
        for a in &ranges {
            for b in &ranges {
                assert_eq!(a.overlaps(b), b.overlaps(a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_season_parsing() {
        assert_eq!("fall".parse::<Season>().unwrap(), Season::Fall);
        assert_eq!(" Spring ".parse::<Season>().unwrap(), Season::Spring);
        assert!("Winter".parse::<Season>().is_err());
    }

    #[test]
    fn test_semester_display() {
        let key = SemesterKey::new(Season::Summer, 2024);
        assert_eq!(key.to_string(), "Summer 2024");
    }
}
