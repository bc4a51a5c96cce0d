//! Pure answer checks, separate from the session so they can be tested and
//! reused without any state.

use crate::model::Problem;

/// Parse a user-typed answer field. Whitespace is ignored; anything that is
/// not a non-negative integer is `None`.
#[must_use]
pub fn parse_answer(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// True exactly when the pair equals `(target_groups, total_groups)`.
/// A swapped pair is wrong even though the numbers both appear in the problem.
#[must_use]
pub fn check_representation(problem: &Problem, numerator: u32, denominator: u32) -> bool {
    numerator == problem.target_groups() && denominator == problem.total_groups()
}

/// True exactly when the guess equals `target_items`.
#[must_use]
pub fn check_value(problem: &Problem, value: u32) -> bool {
    value == problem.target_items()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemType, LessonType, SubType};

    fn problem() -> Problem {
        Problem::new(
            LessonType::Representation,
            SubType::Discrete,
            4,
            3,
            2,
            ItemType::Orange,
        )
        .unwrap()
    }

    #[test]
    fn parse_accepts_padded_integers() {
        assert_eq!(parse_answer(" 12 "), Some(12));
        assert_eq!(parse_answer("0"), Some(0));
        assert_eq!(parse_answer(""), None);
        assert_eq!(parse_answer("twelve"), None);
        assert_eq!(parse_answer("-3"), None);
    }

    #[test]
    fn representation_check_is_exact() {
        let problem = problem();
        assert!(check_representation(&problem, 2, 3));
        // Swapped values are wrong.
        assert!(!check_representation(&problem, 3, 2));
        assert!(!check_representation(&problem, 2, 2));
        assert!(!check_representation(&problem, 1, 3));
    }

    #[test]
    fn value_check_is_exact() {
        let problem = problem();
        assert!(check_value(&problem, 8));
        assert!(!check_value(&problem, 12));
        assert!(!check_value(&problem, 0));
    }
}
