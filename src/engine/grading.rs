//! 班级成绩汇总
//!
//! 每个非空分类先算得分率 `earned / possible`，再按分类权重加权平均。
//! 没有作业的分类既不计入分子也不计入分母；有作业但满分合计为 0 的分类同样跳过。

use std::collections::HashMap;

use serde::Serialize;

use crate::engine::letter::{EnrollmentGrade, LetterGrade};
use crate::models::gradebook::entities::{Assignment, Category, Submission};

const GRADE_POINT_SCALE: f64 = 1e9;

/// 班级百分制成绩
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassPercentage {
    pub percentage: f64,
    pub has_any_graded_category: bool,
    // 满分合计为 0 而被跳过的分类 ID
    pub skipped_categories: Vec<i64>,
}

impl ClassPercentage {
    /// 没有任何可计分分类时为 `NoGrade`
    pub fn grade(&self) -> EnrollmentGrade {
        if self.has_any_graded_category {
            EnrollmentGrade::Letter(percentage_to_letter(self.percentage))
        } else {
            EnrollmentGrade::NoGrade
        }
    }
}

/// 计算学生在一个班级中的加权百分比
///
/// 没有提交与提交未评分同样按 0 分计，但作业满分始终计入分母。
pub fn compute_class_percentage(
    categories: &[Category],
    assignments_by_category: &HashMap<i64, Vec<Assignment>>,
    submissions_by_assignment: &HashMap<i64, Vec<Submission>>,
    student_id: i64,
) -> ClassPercentage {
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    let mut skipped_categories = Vec::new();

    for category in categories {
        let assignments = match assignments_by_category.get(&category.id) {
            Some(list) if !list.is_empty() => list,
            _ => continue,
        };

        let mut earned = 0u64;
        let mut possible = 0u64;
        for assignment in assignments {
            possible += u64::from(assignment.max_points);
            earned += submissions_by_assignment
                .get(&assignment.id)
                .and_then(|subs| subs.iter().find(|s| s.student_id == student_id))
                .and_then(|s| s.score)
                .map(u64::from)
                .unwrap_or(0);
        }

        if possible == 0 {
            skipped_categories.push(category.id);
            continue;
        }

        let weight = f64::from(category.weight);
        weighted_sum += earned as f64 / possible as f64 * weight;
        weight_total += weight;
    }

    if weight_total == 0.0 {
        return ClassPercentage {
            percentage: 0.0,
            has_any_graded_category: false,
            skipped_categories,
        };
    }

    ClassPercentage {
        percentage: weighted_sum / weight_total * 100.0,
        has_any_graded_category: true,
        skipped_categories,
    }
}

/// 百分比转字母成绩
///
/// 先换算为 4.0 制绩点，再按降序阈值表取第一个满足的档位。
/// 只有恰好 4.0 才是 A。
///
/// 绩点对齐到 1e-9 后再与阈值比较。
pub fn percentage_to_letter(percentage: f64) -> LetterGrade {
    let grade_point = (percentage / 100.0 * 4.0 * GRADE_POINT_SCALE).round() / GRADE_POINT_SCALE;

    if grade_point == 4.0 {
        LetterGrade::A
    } else if grade_point >= 3.7 {
        LetterGrade::AMinus
    } else if grade_point >= 3.3 {
        LetterGrade::BPlus
    } else if grade_point >= 3.0 {
        LetterGrade::B
    } else if grade_point >= 2.7 {
        LetterGrade::BMinus
    } else if grade_point >= 2.3 {
        LetterGrade::CPlus
    } else if grade_point >= 2.0 {
        LetterGrade::C
    } else if grade_point >= 1.7 {
        LetterGrade::CMinus
    } else if grade_point >= 1.3 {
        LetterGrade::DPlus
    } else if grade_point >= 1.0 {
        LetterGrade::D
    } else if grade_point >= 0.7 {
        LetterGrade::DMinus
    } else {
        LetterGrade::E
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STUDENT: i64 = 1001;

    fn category(id: i64, weight: u32) -> Category {
        Category {
            id,
            class_id: 1,
            name: format!("category-{id}"),
            weight,
        }
    }

    fn assignment(id: i64, category_id: i64, max_points: u32) -> Assignment {
        Assignment {
            id,
            category_id,
            name: format!("assignment-{id}"),
            max_points,
            contents: None,
            due: None,
        }
    }

    fn submission(assignment_id: i64, student_id: i64, score: Option<u32>) -> Submission {
        Submission {
            assignment_id,
            student_id,
            score,
            contents: None,
            submitted_at: chrono::Utc::now(),
        }
    }

    struct Gradebook {
        categories: Vec<Category>,
        assignments: HashMap<i64, Vec<Assignment>>,
        submissions: HashMap<i64, Vec<Submission>>,
    }

    impl Gradebook {
        fn new() -> Self {
            Self {
                categories: Vec::new(),
                assignments: HashMap::new(),
                submissions: HashMap::new(),
            }
        }

        fn category(mut self, id: i64, weight: u32) -> Self {
            self.categories.push(category(id, weight));
            self
        }

        fn assignment(mut self, id: i64, category_id: i64, max_points: u32) -> Self {
            self.assignments
                .entry(category_id)
                .or_default()
                .push(assignment(id, category_id, max_points));
            self
        }

        fn score(mut self, assignment_id: i64, student_id: i64, score: Option<u32>) -> Self {
            self.submissions
                .entry(assignment_id)
                .or_default()
                .push(submission(assignment_id, student_id, score));
            self
        }

        fn compute(&self) -> ClassPercentage {
            compute_class_percentage(
                &self.categories,
                &self.assignments,
                &self.submissions,
                STUDENT,
            )
        }
    }

    #[test]
    fn test_no_categories() {
        let result = Gradebook::new().compute();
        assert_eq!(result.percentage, 0.0);
        assert!(!result.has_any_graded_category);
        assert_eq!(result.grade(), EnrollmentGrade::NoGrade);
    }

    #[test]
    fn test_full_credit_is_an_a() {
        let book = Gradebook::new()
            .category(1, 30)
            .category(2, 70)
            .assignment(10, 1, 10)
            .assignment(11, 1, 25)
            .assignment(20, 2, 100)
            .score(10, STUDENT, Some(10))
            .score(11, STUDENT, Some(25))
            .score(20, STUDENT, Some(100));

        let result = book.compute();
        assert_eq!(result.percentage, 100.0);
        assert_eq!(result.grade(), EnrollmentGrade::Letter(LetterGrade::A));
    }

    #[test]
    fn test_weighted_average() {
        // Homework 50% (weight 40), exams 100% (weight 60) => 80%
        let book = Gradebook::new()
            .category(1, 40)
            .category(2, 60)
            .assignment(10, 1, 20)
            .assignment(20, 2, 50)
            .score(10, STUDENT, Some(10))
            .score(20, STUDENT, Some(50));

        let result = book.compute();
        assert!((result.percentage - 80.0).abs() < 1e-9);
        assert_eq!(result.grade(), EnrollmentGrade::Letter(LetterGrade::B));
    }

    #[test]
    fn test_empty_category_is_excluded_regardless_of_weight() {
        let base = Gradebook::new()
            .category(1, 50)
            .assignment(10, 1, 20)
            .score(10, STUDENT, Some(15));
        let with_empty = Gradebook::new()
            .category(1, 50)
            .category(2, 1000)
            .assignment(10, 1, 20)
            .score(10, STUDENT, Some(15));

        assert_eq!(base.compute().percentage, 75.0);
        assert_eq!(with_empty.compute().percentage, base.compute().percentage);
    }

    #[test]
    fn test_weights_are_renormalized_over_non_empty_categories() {
        // Weights sum to 40, not 100
        let book = Gradebook::new()
            .category(1, 10)
            .category(2, 30)
            .assignment(10, 1, 10)
            .assignment(20, 2, 10)
            .score(10, STUDENT, Some(10))
            .score(20, STUDENT, Some(5));

        let result = book.compute();
        assert!((result.percentage - 62.5).abs() < 1e-9);
    }

    #[test]
    fn test_missing_and_ungraded_submissions_count_as_zero() {
        let book = Gradebook::new()
            .category(1, 100)
            .assignment(10, 1, 10)
            .assignment(11, 1, 10)
            .assignment(12, 1, 20)
            .score(10, STUDENT, Some(10))
            .score(11, STUDENT, None);

        let result = book.compute();
        assert_eq!(result.percentage, 25.0);
        assert!(result.has_any_graded_category);
    }

    #[test]
    fn test_other_students_scores_are_ignored() {
        let book = Gradebook::new()
            .category(1, 100)
            .assignment(10, 1, 10)
            .score(10, 2002, Some(10))
            .score(10, STUDENT, Some(4));

        assert!((book.compute().percentage - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_possible_points_category_is_skipped() {
        let book = Gradebook::new()
            .category(1, 50)
            .category(2, 50)
            .assignment(10, 1, 0)
            .assignment(20, 2, 10)
            .score(20, STUDENT, Some(9));

        let result = book.compute();
        assert_eq!(result.skipped_categories, vec![1]);
        assert!((result.percentage - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_only_zero_point_categories_is_ungraded() {
        let book = Gradebook::new().category(1, 50).assignment(10, 1, 0);
        let result = book.compute();
        assert!(!result.has_any_graded_category);
        assert_eq!(result.percentage, 0.0);
    }

    #[test]
    fn test_zero_weight_categories_only_is_ungraded() {
        let book = Gradebook::new()
            .category(1, 0)
            .assignment(10, 1, 10)
            .score(10, STUDENT, Some(10));
        let result = book.compute();
        assert!(!result.has_any_graded_category);
        assert_eq!(result.grade(), EnrollmentGrade::NoGrade);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let book = Gradebook::new()
            .category(1, 35)
            .category(2, 65)
            .assignment(10, 1, 7)
            .assignment(20, 2, 13)
            .score(10, STUDENT, Some(3))
            .score(20, STUDENT, Some(11));

        assert_eq!(book.compute(), book.compute());
    }

    #[test]
    fn test_exact_boundary_after_weighting_is_not_rounded_down() {
        // (1/50 * 40 + 41/50 * 60) / 100 = 50%
        let half = Gradebook::new()
            .category(1, 40)
            .category(2, 60)
            .assignment(10, 1, 50)
            .assignment(20, 2, 50)
            .score(10, STUDENT, Some(1))
            .score(20, STUDENT, Some(41));
        assert_eq!(half.compute().grade(), EnrollmentGrade::Letter(LetterGrade::C));

        // 33/40 = 82.5%
        let b_plus = Gradebook::new()
            .category(1, 3)
            .assignment(10, 1, 40)
            .score(10, STUDENT, Some(33));
        assert_eq!(
            b_plus.compute().grade(),
            EnrollmentGrade::Letter(LetterGrade::BPlus)
        );

        // 37/40 = 92.5%
        let a_minus = Gradebook::new()
            .category(1, 7)
            .category(2, 0)
            .assignment(10, 1, 40)
            .assignment(20, 2, 10)
            .score(10, STUDENT, Some(37));
        assert_eq!(
            a_minus.compute().grade(),
            EnrollmentGrade::Letter(LetterGrade::AMinus)
        );
    }

    #[test]
    fn test_letter_boundaries() {
        assert_eq!(percentage_to_letter(100.0), LetterGrade::A);
        assert_eq!(percentage_to_letter(99.99), LetterGrade::AMinus);
        assert_eq!(percentage_to_letter(92.5), LetterGrade::AMinus);
        assert_eq!(percentage_to_letter(92.49975), LetterGrade::BPlus);
        assert_eq!(percentage_to_letter(82.5), LetterGrade::BPlus);
        assert_eq!(percentage_to_letter(75.0), LetterGrade::B);
        assert_eq!(percentage_to_letter(67.5), LetterGrade::BMinus);
        assert_eq!(percentage_to_letter(57.5), LetterGrade::CPlus);
        assert_eq!(percentage_to_letter(50.0), LetterGrade::C);
        assert_eq!(percentage_to_letter(42.5), LetterGrade::CMinus);
        assert_eq!(percentage_to_letter(32.5), LetterGrade::DPlus);
        assert_eq!(percentage_to_letter(25.0), LetterGrade::D);
        assert_eq!(percentage_to_letter(17.5), LetterGrade::DMinus);
        assert_eq!(percentage_to_letter(17.0), LetterGrade::E);
        assert_eq!(percentage_to_letter(0.0), LetterGrade::E);
    }
}
