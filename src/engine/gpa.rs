//! GPA 计算

use crate::engine::letter::EnrollmentGrade;

/// 每门课固定学分
pub const CREDIT_HOURS_PER_CLASS: f64 = 4.0;

/// 成绩对应的绩点；无法识别的代码按 0.0 计（不报错）
pub fn grade_point(grade: &EnrollmentGrade) -> f64 {
    match grade {
        EnrollmentGrade::Letter(letter) => letter.grade_point(),
        EnrollmentGrade::NoGrade | EnrollmentGrade::Unrecognized(_) => 0.0,
    }
}

/// 计入 GPA 的班级数，`NoGrade` 不计入
pub fn counted_classes(grades: &[EnrollmentGrade]) -> usize {
    grades.iter().filter(|g| g.is_graded()).count()
}

/// 按学分加权平均计算 GPA，没有已评分班级时为 0.0
pub fn compute_gpa(grades: &[EnrollmentGrade]) -> f64 {
    let (total_points, total_credits) = grades
        .iter()
        .filter(|g| g.is_graded())
        .fold((0.0, 0.0), |(points, credits), grade| {
            (
                points + grade_point(grade) * CREDIT_HOURS_PER_CLASS,
                credits + CREDIT_HOURS_PER_CLASS,
            )
        });

    if total_credits > 0.0 {
        total_points / total_credits
    } else {
        0.0
    }
}
