//! 字母成绩

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{LmsError, Result};

/// 尚未评分的哨兵值
pub const NO_GRADE_CODE: &str = "--";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D-")]
    DMinus,
    #[serde(rename = "E")]
    E,
}

impl LetterGrade {
    /// 从高到低排列
    pub const ALL: [LetterGrade; 12] = [
        LetterGrade::A,
        LetterGrade::AMinus,
        LetterGrade::BPlus,
        LetterGrade::B,
        LetterGrade::BMinus,
        LetterGrade::CPlus,
        LetterGrade::C,
        LetterGrade::CMinus,
        LetterGrade::DPlus,
        LetterGrade::D,
        LetterGrade::DMinus,
        LetterGrade::E,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::AMinus => "A-",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::BMinus => "B-",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::CMinus => "C-",
            LetterGrade::DPlus => "D+",
            LetterGrade::D => "D",
            LetterGrade::DMinus => "D-",
            LetterGrade::E => "E",
        }
    }

    /// 4.0 制绩点
    pub fn grade_point(&self) -> f64 {
        match self {
            LetterGrade::A => 4.0,
            LetterGrade::AMinus => 3.7,
            LetterGrade::BPlus => 3.3,
            LetterGrade::B => 3.0,
            LetterGrade::BMinus => 2.7,
            LetterGrade::CPlus => 2.3,
            LetterGrade::C => 2.0,
            LetterGrade::CMinus => 1.7,
            LetterGrade::DPlus => 1.3,
            LetterGrade::D => 1.0,
            LetterGrade::DMinus => 0.7,
            LetterGrade::E => 0.0,
        }
    }
}

impl FromStr for LetterGrade {
    type Err = LmsError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim().to_ascii_uppercase();
        LetterGrade::ALL
            .into_iter()
            .find(|letter| letter.as_str() == code)
            .ok_or_else(|| LmsError::unknown_grade_letter(format!("'{}'", s.trim())))
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 选课记录上保存的成绩
///
/// `NoGrade` 对应 `"--"`；`Unrecognized` 保留外部代码（X、WF、EW、EU、F 等）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EnrollmentGrade {
    Letter(LetterGrade),
    NoGrade,
    Unrecognized(String),
}

impl EnrollmentGrade {
    /// 解析成绩代码，永不失败
    pub fn parse(code: &str) -> Self {
        let trimmed = code.trim();
        if trimmed.is_empty() || trimmed == NO_GRADE_CODE {
            return EnrollmentGrade::NoGrade;
        }
        match trimmed.parse::<LetterGrade>() {
            Ok(letter) => EnrollmentGrade::Letter(letter),
            Err(_) => EnrollmentGrade::Unrecognized(trimmed.to_ascii_uppercase()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EnrollmentGrade::Letter(letter) => letter.as_str(),
            EnrollmentGrade::NoGrade => NO_GRADE_CODE,
            EnrollmentGrade::Unrecognized(code) => code,
        }
    }

    pub fn is_graded(&self) -> bool {
        !matches!(self, EnrollmentGrade::NoGrade)
    }
}

impl From<LetterGrade> for EnrollmentGrade {
    fn from(letter: LetterGrade) -> Self {
        EnrollmentGrade::Letter(letter)
    }
}

impl From<String> for EnrollmentGrade {
    fn from(code: String) -> Self {
        EnrollmentGrade::parse(&code)
    }
}

impl From<EnrollmentGrade> for String {
    fn from(grade: EnrollmentGrade) -> Self {
        grade.as_str().to_string()
    }
}

impl fmt::Display for EnrollmentGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
