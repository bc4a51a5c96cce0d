use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised when constructing a `Problem` from raw parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProblemError {
    #[error("group size {0} is not one of 2, 3, 4, 5")]
    GroupSizeOutOfRange(u32),

    #[error("total groups must be at least 2, got {0}")]
    TooFewGroups(u32),

    #[error("{group_size} x {total_groups} exceeds the {max} item cap")]
    TooManyItems {
        group_size: u32,
        total_groups: u32,
        max: u32,
    },

    #[error("target groups {target_groups} not in 1..{total_groups}")]
    TargetOutOfRange {
        target_groups: u32,
        total_groups: u32,
    },

    #[error("representation problems must use the discrete sub-type")]
    RepresentationNotDiscrete,

    #[error("ruler item is only valid for length problems, and vice versa")]
    ItemSubTypeMismatch,
}

//
// ─── ENUMS ────────────────────────────────────────────────────────────────────
//

/// Which exercise variant is active.
///
/// - `Representation`: read groups off the picture and write the fraction.
/// - `ValueFinding`: compute the scalar value of a fraction of the whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LessonType {
    Representation,
    ValueFinding,
}

impl LessonType {
    /// Stable identifier used in routes and diagnostics.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            LessonType::Representation => "representation",
            LessonType::ValueFinding => "value-finding",
        }
    }

    /// Parses a slug produced by [`LessonType::slug`].
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "representation" => Some(Self::Representation),
            "value-finding" => Some(Self::ValueFinding),
            _ => None,
        }
    }
}

/// Visual representation family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubType {
    /// Countable items arranged in groups.
    Discrete,
    /// A number line split into equal segments.
    Length,
}

/// Cosmetic item drawn by the visualizer. `Ruler` iff the sub-type is `Length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    Orange,
    Apple,
    Strawberry,
    Star,
    Ruler,
}

//
// ─── PROBLEM ──────────────────────────────────────────────────────────────────
//

/// A single generated fraction exercise. Immutable once created.
///
/// The whole quantity `total_items` is split into `total_groups` groups of
/// `group_size`; the exercise targets `target_groups` of them, worth
/// `target_items` in scalar terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    lesson_type: LessonType,
    sub_type: SubType,
    group_size: u32,
    total_groups: u32,
    total_items: u32,
    target_groups: u32,
    target_items: u32,
    item_type: ItemType,
}

impl Problem {
    /// Build a problem from raw parameters, checking every invariant.
    ///
    /// # Errors
    ///
    /// Returns a `ProblemError` when any bound is violated: group size outside
    /// `{2,3,4,5}`, fewer than 2 groups, more than 20 total items, numerator
    /// outside `[1, total_groups - 1]`, or a sub-type/item mismatch.
    pub fn new(
        lesson_type: LessonType,
        sub_type: SubType,
        group_size: u32,
        total_groups: u32,
        target_groups: u32,
        item_type: ItemType,
    ) -> Result<Self, ProblemError> {
        if !(2..=5).contains(&group_size) {
            return Err(ProblemError::GroupSizeOutOfRange(group_size));
        }
        if total_groups < 2 {
            return Err(ProblemError::TooFewGroups(total_groups));
        }
        let max = crate::generator::MAX_TOTAL_ITEMS;
        if group_size.checked_mul(total_groups).is_none_or(|total| total > max) {
            return Err(ProblemError::TooManyItems {
                group_size,
                total_groups,
                max,
            });
        }
        if target_groups < 1 || target_groups >= total_groups {
            return Err(ProblemError::TargetOutOfRange {
                target_groups,
                total_groups,
            });
        }
        if lesson_type == LessonType::Representation && sub_type != SubType::Discrete {
            return Err(ProblemError::RepresentationNotDiscrete);
        }
        if (item_type == ItemType::Ruler) != (sub_type == SubType::Length) {
            return Err(ProblemError::ItemSubTypeMismatch);
        }

        Ok(Self::from_parts(
            lesson_type,
            sub_type,
            group_size,
            total_groups,
            target_groups,
            item_type,
        ))
    }

    /// Crate-internal constructor for parameters already drawn from valid
    /// ranges (the generator). Derived quantities are computed here so the
    /// arithmetic invariants hold by construction.
    pub(crate) fn from_parts(
        lesson_type: LessonType,
        sub_type: SubType,
        group_size: u32,
        total_groups: u32,
        target_groups: u32,
        item_type: ItemType,
    ) -> Self {
        debug_assert!((2..=5).contains(&group_size));
        debug_assert!(total_groups >= 2);
        debug_assert!((1..total_groups).contains(&target_groups));

        Self {
            lesson_type,
            sub_type,
            group_size,
            total_groups,
            total_items: group_size * total_groups,
            target_groups,
            target_items: target_groups * group_size,
            item_type,
        }
    }

    #[must_use]
    pub fn lesson_type(&self) -> LessonType {
        self.lesson_type
    }

    #[must_use]
    pub fn sub_type(&self) -> SubType {
        self.sub_type
    }

    /// Unit size per group or per ruler segment.
    #[must_use]
    pub fn group_size(&self) -> u32 {
        self.group_size
    }

    /// The denominator.
    #[must_use]
    pub fn total_groups(&self) -> u32 {
        self.total_groups
    }

    /// The whole quantity: item count or length in cm.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.total_items
    }

    /// The numerator. Always strictly less than `total_groups`; the trivial
    /// "whole thing" fraction is deliberately never posed.
    #[must_use]
    pub fn target_groups(&self) -> u32 {
        self.target_groups
    }

    /// The scalar answer for value-finding problems.
    #[must_use]
    pub fn target_items(&self) -> u32 {
        self.target_items
    }

    #[must_use]
    pub fn item_type(&self) -> ItemType {
        self.item_type
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Problem {
        Problem::new(
            LessonType::Representation,
            SubType::Discrete,
            4,
            3,
            2,
            ItemType::Apple,
        )
        .unwrap()
    }

    #[test]
    fn derived_quantities_are_computed() {
        let problem = valid();
        assert_eq!(problem.total_items(), 12);
        assert_eq!(problem.target_items(), 8);
    }

    #[test]
    fn rejects_group_size_outside_multiplier_set() {
        let err = Problem::new(
            LessonType::Representation,
            SubType::Discrete,
            6,
            3,
            1,
            ItemType::Star,
        )
        .unwrap_err();
        assert_eq!(err, ProblemError::GroupSizeOutOfRange(6));
    }

    #[test]
    fn rejects_item_cap_overflow() {
        let err = Problem::new(
            LessonType::ValueFinding,
            SubType::Discrete,
            5,
            5,
            2,
            ItemType::Orange,
        )
        .unwrap_err();
        assert!(matches!(err, ProblemError::TooManyItems { .. }));
    }

    #[test]
    fn rejects_whole_thing_numerator() {
        let err = Problem::new(
            LessonType::Representation,
            SubType::Discrete,
            2,
            4,
            4,
            ItemType::Star,
        )
        .unwrap_err();
        assert!(matches!(err, ProblemError::TargetOutOfRange { .. }));
    }

    #[test]
    fn rejects_length_representation() {
        let err = Problem::new(
            LessonType::Representation,
            SubType::Length,
            2,
            4,
            1,
            ItemType::Ruler,
        )
        .unwrap_err();
        assert_eq!(err, ProblemError::RepresentationNotDiscrete);
    }

    #[test]
    fn ruler_item_requires_length_sub_type() {
        let err = Problem::new(
            LessonType::ValueFinding,
            SubType::Discrete,
            2,
            4,
            1,
            ItemType::Ruler,
        )
        .unwrap_err();
        assert_eq!(err, ProblemError::ItemSubTypeMismatch);

        let err = Problem::new(
            LessonType::ValueFinding,
            SubType::Length,
            2,
            4,
            1,
            ItemType::Apple,
        )
        .unwrap_err();
        assert_eq!(err, ProblemError::ItemSubTypeMismatch);
    }

    #[test]
    fn lesson_slugs_round_trip() {
        for lesson in [LessonType::Representation, LessonType::ValueFinding] {
            assert_eq!(LessonType::from_slug(lesson.slug()), Some(lesson));
        }
        assert_eq!(LessonType::from_slug("fractions"), None);
    }
}
