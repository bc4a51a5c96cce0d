//! Randomized problem generation.
//!
//! Randomness is injected so callers can seed a `StdRng` and get a
//! deterministic stream of problems in tests.

use rand::Rng;

use crate::model::{ItemType, LessonType, Problem, SubType};

/// Unit sizes a problem may use.
pub const GROUP_SIZES: [u32; 4] = [2, 3, 4, 5];

/// Cap on the whole quantity so the visual stays countable at a glance.
///
/// With the fixed `GROUP_SIZES` set the smallest admissible group count is
/// `20 / 5 = 4`, so the `[2, max_groups]` draw below is never empty.
pub const MAX_TOTAL_ITEMS: u32 = 20;

const DISCRETE_ITEMS: [ItemType; 4] = [
    ItemType::Orange,
    ItemType::Apple,
    ItemType::Strawberry,
    ItemType::Star,
];

/// Draw a fresh problem for the given lesson.
///
/// Representation problems are always discrete; value-finding problems are a
/// coin flip between a discrete group picture and a ruler.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, lesson_type: LessonType) -> Problem {
    let group_size = GROUP_SIZES[rng.random_range(0..GROUP_SIZES.len())];
    let max_groups = MAX_TOTAL_ITEMS / group_size;
    let total_groups = rng.random_range(2..=max_groups);
    let target_groups = rng.random_range(1..total_groups);

    let (sub_type, item_type) = match lesson_type {
        LessonType::ValueFinding if rng.random_bool(0.5) => (SubType::Length, ItemType::Ruler),
        _ => (
            SubType::Discrete,
            DISCRETE_ITEMS[rng.random_range(0..DISCRETE_ITEMS.len())],
        ),
    };

    Problem::from_parts(
        lesson_type,
        sub_type,
        group_size,
        total_groups,
        target_groups,
        item_type,
    )
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn generated_problems_satisfy_all_invariants() {
        let mut rng = StdRng::seed_from_u64(7);
        for lesson in [LessonType::Representation, LessonType::ValueFinding] {
            for _ in 0..500 {
                let problem = generate(&mut rng, lesson);
                assert!(GROUP_SIZES.contains(&problem.group_size()));
                assert!(problem.total_groups() >= 2);
                assert!(problem.total_items() <= MAX_TOTAL_ITEMS);
                assert_eq!(
                    problem.total_items(),
                    problem.group_size() * problem.total_groups()
                );
                assert_eq!(
                    problem.target_items(),
                    problem.group_size() * problem.target_groups()
                );
                assert!(problem.target_groups() >= 1);
                assert!(problem.target_groups() < problem.total_groups());
            }
        }
    }

    #[test]
    fn representation_is_always_discrete() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let problem = generate(&mut rng, LessonType::Representation);
            assert_eq!(problem.sub_type(), SubType::Discrete);
            assert_ne!(problem.item_type(), ItemType::Ruler);
        }
    }

    #[test]
    fn value_finding_pairs_ruler_with_length() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut saw_length = false;
        let mut saw_discrete = false;
        for _ in 0..200 {
            let problem = generate(&mut rng, LessonType::ValueFinding);
            match problem.sub_type() {
                SubType::Length => {
                    saw_length = true;
                    assert_eq!(problem.item_type(), ItemType::Ruler);
                }
                SubType::Discrete => {
                    saw_discrete = true;
                    assert_ne!(problem.item_type(), ItemType::Ruler);
                }
            }
        }
        assert!(saw_length && saw_discrete);
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let a = generate(&mut StdRng::seed_from_u64(42), LessonType::ValueFinding);
        let b = generate(&mut StdRng::seed_from_u64(42), LessonType::ValueFinding);
        assert_eq!(a, b);
    }
}
