use chrono::NaiveTime;

use crate::errors::Result;

/// 解析钟点时间，接受 `HH:MM:SS` 或 `HH:MM`
pub fn parse_clock_time(value: &str) -> Result<NaiveTime> {
    let value = value.trim();
    match NaiveTime::parse_from_str(value, "%H:%M:%S") {
        Ok(time) => Ok(time),
        Err(_) => Ok(NaiveTime::parse_from_str(value, "%H:%M")?),
    }
}
