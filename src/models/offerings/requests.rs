use serde::Deserialize;

use crate::engine::time::{Season, SemesterKey};
use crate::errors::Result;
use crate::models::offerings::entities::NewOffering;
use crate::utils::{parse_clock_time, validate_room};

// 创建开课请求
//
// 时间为每周上课的钟点，接受 `HH:MM` 或 `HH:MM:SS`。
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOfferingRequest {
    pub course_id: i64,
    pub season: Season,
    pub year: u16,
    pub room: String,
    pub start_time: String,
    pub end_time: String,
    pub instructor_id: i64,
}

impl CreateOfferingRequest {
    /// 解析为待创建的开课，时间段本身的合法性由冲突检查负责
    pub fn into_new_offering(self) -> Result<NewOffering> {
        validate_room(&self.room)?;
        Ok(NewOffering {
            course_id: self.course_id,
            semester: SemesterKey::new(self.season, self.year),
            room: self.room.trim().to_string(),
            start_time: parse_clock_time(&self.start_time)?,
            end_time: parse_clock_time(&self.end_time)?,
            instructor_id: self.instructor_id,
        })
    }
}

// 学期查询参数
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SemesterQuery {
    pub season: Season,
    pub year: u16,
}

impl From<SemesterQuery> for SemesterKey {
    fn from(query: SemesterQuery) -> Self {
        SemesterKey::new(query.season, query.year)
    }
}
