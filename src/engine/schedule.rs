//! 开课冲突检测
//!
//! 同一学期内：同一课程至多一次开课；同一教室、同一教师的上课时间段不得重叠。

use serde::Serialize;

use crate::errors::Result;
use crate::models::offerings::entities::{NewOffering, Offering};

/// 冲突检测结果，任一字段为 true 即应拒绝该开课
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConflictResult {
    pub room_conflict: bool,
    pub instructor_conflict: bool,
    pub same_course_conflict: bool,
}

impl ConflictResult {
    pub fn has_conflict(&self) -> bool {
        self.room_conflict || self.instructor_conflict || self.same_course_conflict
    }

    /// 冲突原因，用于日志和响应消息
    pub fn reasons(&self) -> Vec<&'static str> {
        let mut reasons = Vec::new();
        if self.same_course_conflict {
            reasons.push("course already offered this semester");
        }
        if self.room_conflict {
            reasons.push("room occupied during this time");
        }
        if self.instructor_conflict {
            reasons.push("instructor teaching during this time");
        }
        reasons
    }
}

/// 检查候选开课与已有开课是否冲突
///
/// `existing` 可以包含任意学期的开课，函数内部按学期过滤；
/// 调用方需保证其中不包含候选开课自身。
/// 候选时间段非法（开始不早于结束）时返回 `InvalidRange`。
pub fn check_offering_conflict(
    candidate: &NewOffering,
    existing: &[Offering],
) -> Result<ConflictResult> {
    let candidate_range = candidate.time_range()?;
    let mut result = ConflictResult::default();

    for other in existing
        .iter()
        .filter(|o| o.semester == candidate.semester)
    {
        if other.course_id == candidate.course_id {
            result.same_course_conflict = true;
        }

        // 非法时间段不与任何时间段重叠
        let overlaps = other
            .time_range()
            .map(|range| range.overlaps(&candidate_range))
            .unwrap_or(false);
        if !overlaps {
            continue;
        }

        // 教室名不区分大小写
        if other.room.trim().eq_ignore_ascii_case(candidate.room.trim()) {
            result.room_conflict = true;
        }
        if other.instructor_id == candidate.instructor_id {
            result.instructor_conflict = true;
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::time::{Season, SemesterKey};
    use chrono::NaiveTime;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn fall_2024() -> SemesterKey {
        SemesterKey::new(Season::Fall, 2024)
    }

    fn candidate(start: NaiveTime, end: NaiveTime) -> NewOffering {
        NewOffering {
            course_id: 5530,
            semester: fall_2024(),
            room: "WEB L104".to_string(),
            start_time: start,
            end_time: end,
            instructor_id: 7,
        }
    }

    fn existing(id: i64, course_id: i64, room: &str, instructor_id: i64) -> Offering {
        Offering {
            id,
            course_id,
            semester: fall_2024(),
            room: room.to_string(),
            start_time: t(9, 0),
            end_time: t(10, 0),
            instructor_id,
        }
    }

    #[test]
    fn test_no_existing_offerings() {
        let result = check_offering_conflict(&candidate(t(9, 0), t(10, 0)), &[]).unwrap();
        assert!(!result.has_conflict());
        assert!(result.reasons().is_empty());
    }

    #[test]
    fn test_back_to_back_in_same_room_is_allowed() {
        let rows = [existing(1, 3500, "WEB L104", 7)];
        let result = check_offering_conflict(&candidate(t(10, 0), t(11, 0)), &rows).unwrap();
        assert_eq!(result, ConflictResult::default());
    }

    #[test]
    fn test_one_minute_overlap_in_same_room() {
        let rows = [existing(1, 3500, "WEB L104", 99)];
        let result = check_offering_conflict(&candidate(t(9, 59), t(10, 30)), &rows).unwrap();
        assert!(result.room_conflict);
        assert!(!result.instructor_conflict);
        assert!(!result.same_course_conflict);
    }

    #[test]
    fn test_room_match_ignores_case() {
        let rows = [existing(1, 3500, "web l104", 99)];
        let result = check_offering_conflict(&candidate(t(9, 0), t(10, 0)), &rows).unwrap();
        assert!(result.room_conflict);
        assert!(!result.instructor_conflict);
    }

    #[test]
    fn test_instructor_overlap_in_other_room() {
        let rows = [existing(1, 3500, "MEB 3147", 7)];
        let result = check_offering_conflict(&candidate(t(8, 30), t(9, 30)), &rows).unwrap();
        assert!(!result.room_conflict);
        assert!(result.instructor_conflict);
    }

    #[test]
    fn test_same_course_conflicts_regardless_of_time() {
        let rows = [existing(1, 5530, "MEB 3147", 99)];
        let result = check_offering_conflict(&candidate(t(14, 0), t(15, 0)), &rows).unwrap();
        assert!(result.same_course_conflict);
        assert!(!result.room_conflict);
        assert!(!result.instructor_conflict);
        assert_eq!(result.reasons(), vec!["course already offered this semester"]);
    }

    #[test]
    fn test_other_semester_never_conflicts() {
        let mut row = existing(1, 5530, "WEB L104", 7);
        row.semester = SemesterKey::new(Season::Spring, 2024);
        let mut next_year = row.clone();
        next_year.id = 2;
        next_year.semester = SemesterKey::new(Season::Fall, 2025);

        let result =
            check_offering_conflict(&candidate(t(9, 0), t(10, 0)), &[row, next_year]).unwrap();
        assert!(!result.has_conflict());
    }

    #[test]
    fn test_all_conflicts_reported_together() {
        let rows = [
            existing(1, 5530, "MEB 3147", 99),
            existing(2, 3500, "WEB L104", 99),
            existing(3, 3810, "JFB 101", 7),
        ];
        let result = check_offering_conflict(&candidate(t(9, 30), t(10, 30)), &rows).unwrap();
        assert!(result.same_course_conflict);
        assert!(result.room_conflict);
        assert!(result.instructor_conflict);
        assert_eq!(result.reasons().len(), 3);
    }

    #[test]
    fn test_invalid_candidate_range() {
        let err = check_offering_conflict(&candidate(t(10, 0), t(10, 0)), &[]).unwrap_err();
        assert_eq!(err.code(), "E001");

        let err = check_offering_conflict(&candidate(t(11, 0), t(10, 0)), &[]).unwrap_err();
        assert_eq!(err.code(), "E001");
    }

    #[test]
    fn test_invalid_existing_range_never_overlaps() {
        let mut row = existing(1, 3500, "WEB L104", 7);
        row.start_time = t(9, 30);
        row.end_time = t(9, 30);
        let result = check_offering_conflict(&candidate(t(9, 0), t(10, 0)), &[row]).unwrap();
        assert!(!result.has_conflict());
    }
}
