use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::engine::time::{SemesterKey, TimeRange};
use crate::errors::Result;

/// 已排定的开课（即"班级"）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offering {
    // 唯一 ID，同时作为 class_id
    pub id: i64,
    // 课程 ID
    pub course_id: i64,
    // 学期
    pub semester: SemesterKey,
    // 教室
    pub room: String,
    // 每周上课开始时间
    pub start_time: NaiveTime,
    // 每周上课结束时间
    pub end_time: NaiveTime,
    // 授课教师 ID
    pub instructor_id: i64,
}

impl Offering {
    pub fn time_range(&self) -> Result<TimeRange> {
        TimeRange::new(self.start_time, self.end_time)
    }
}

/// 待创建的开课
#[derive(Debug, Clone, PartialEq)]
pub struct NewOffering {
    pub course_id: i64,
    pub semester: SemesterKey,
    pub room: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub instructor_id: i64,
}

impl NewOffering {
    pub fn time_range(&self) -> Result<TimeRange> {
        TimeRange::new(self.start_time, self.end_time)
    }

    pub fn into_offering(self, id: i64) -> Offering {
        Offering {
            id,
            course_id: self.course_id,
            semester: self.semester,
            room: self.room,
            start_time: self.start_time,
            end_time: self.end_time,
            instructor_id: self.instructor_id,
        }
    }
}
