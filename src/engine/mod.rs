//! 计算核心
//!
//! 纯函数，不访问存储、不持有状态，可在任意请求中并发调用。
//! - `schedule`: 开课冲突检测
//! - `grading`: 分类加权成绩与字母成绩
//! - `gpa`: GPA 计算
//! - `time` / `letter`: 共享值类型

pub mod gpa;
pub mod grading;
pub mod letter;
pub mod schedule;
pub mod time;

pub use gpa::{compute_gpa, counted_classes, grade_point};
pub use grading::{ClassPercentage, compute_class_percentage, percentage_to_letter};
pub use letter::{EnrollmentGrade, LetterGrade};
pub use schedule::{ConflictResult, check_offering_conflict};
pub use time::{Season, SemesterKey, TimeRange};
