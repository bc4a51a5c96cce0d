//! The interactive session state machine.
//!
//! One `PracticeSession` exists per posed problem. The phase is an explicit
//! tagged variant rather than a pile of booleans, so a resolved session
//! cannot also be waiting on the discovery step.

use crate::model::{LessonType, Problem, SubType};
use crate::validator::{check_representation, check_value, parse_answer};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Value-finding only: the unit size has not been discovered yet.
    Discovering,
    /// Answer inputs are live.
    Solving,
    /// A check has run; the session only leaves this phase by replacement.
    Resolved { correct: bool },
}

/// Outcome of a unit-size discovery attempt (typed guess or ruler tick).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discovery {
    /// The guess matched the unit size; the session moved to `Solving`.
    Unlocked { group_size: u32 },
    /// Wrong guess. Carries the numbers for a division hint; retries are
    /// unlimited and the phase does not change.
    Hint { total_items: u32, total_groups: u32 },
    /// The typed guess did not parse as an integer.
    NotANumber,
    /// No discovery step is pending in the current phase.
    NotDiscovering,
}

/// Outcome of a segment-painting click. Painting is a visualization aid on
/// length problems, never validated as the answer itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPaint {
    Painted { count: u32, reached_target: bool },
    /// Clicks past the numerator are rejected and leave the count unchanged.
    TooMany { limit: u32 },
    /// Painting is not available (wrong sub-type or phase).
    NotPaintable,
}

/// Outcome of submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerCheck {
    Resolved { correct: bool },
    /// One or more fields were empty or non-numeric; nothing transitioned.
    MissingInput,
    /// The session is not accepting this answer right now.
    NotSolving,
}

/// Mutable state for one posed problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeSession {
    problem: Problem,
    phase: Phase,
    active_segments: u32,
}

impl PracticeSession {
    /// Representation problems start directly in `Solving`; value-finding
    /// problems (both sub-types) must discover the unit size first.
    #[must_use]
    pub fn new(problem: Problem) -> Self {
        let phase = match problem.lesson_type() {
            LessonType::Representation => Phase::Solving,
            LessonType::ValueFinding => Phase::Discovering,
        };
        Self {
            problem,
            phase,
            active_segments: 0,
        }
    }

    #[must_use]
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the discovery step is behind us.
    #[must_use]
    pub fn is_partitioned(&self) -> bool {
        self.phase != Phase::Discovering
    }

    #[must_use]
    pub fn active_segments(&self) -> u32 {
        self.active_segments
    }

    /// `None` until the first successful check.
    #[must_use]
    pub fn is_correct(&self) -> Option<bool> {
        match self.phase {
            Phase::Resolved { correct } => Some(correct),
            _ => None,
        }
    }

    /// Discrete discovery: check a typed unit-size guess.
    pub fn check_unit_guess(&mut self, raw: &str) -> Discovery {
        if self.phase != Phase::Discovering {
            return Discovery::NotDiscovering;
        }
        match parse_answer(raw) {
            Some(value) => self.apply_discovery(value),
            None => Discovery::NotANumber,
        }
    }

    /// Length discovery: the user clicked the ruler tick labeled `value`.
    pub fn click_ruler_tick(&mut self, value: u32) -> Discovery {
        if self.phase != Phase::Discovering {
            return Discovery::NotDiscovering;
        }
        self.apply_discovery(value)
    }

    fn apply_discovery(&mut self, value: u32) -> Discovery {
        if value == self.problem.group_size() {
            self.phase = Phase::Solving;
            Discovery::Unlocked { group_size: value }
        } else {
            Discovery::Hint {
                total_items: self.problem.total_items(),
                total_groups: self.problem.total_groups(),
            }
        }
    }

    /// Paint segments up to 0-based `index` on a length problem.
    pub fn click_segment(&mut self, index: u32) -> SegmentPaint {
        if self.phase != Phase::Solving || self.problem.sub_type() != SubType::Length {
            return SegmentPaint::NotPaintable;
        }
        let count = index + 1;
        let limit = self.problem.target_groups();
        if count > limit {
            return SegmentPaint::TooMany { limit };
        }
        self.active_segments = count;
        SegmentPaint::Painted {
            count,
            reached_target: count == limit,
        }
    }

    /// Check a representation answer: numerator and denominator as typed.
    pub fn submit_representation(&mut self, numerator: &str, denominator: &str) -> AnswerCheck {
        if self.phase != Phase::Solving
            || self.problem.lesson_type() != LessonType::Representation
        {
            return AnswerCheck::NotSolving;
        }
        let (Some(numerator), Some(denominator)) =
            (parse_answer(numerator), parse_answer(denominator))
        else {
            return AnswerCheck::MissingInput;
        };
        let correct = check_representation(&self.problem, numerator, denominator);
        self.phase = Phase::Resolved { correct };
        AnswerCheck::Resolved { correct }
    }

    /// Check a value-finding answer as typed.
    pub fn submit_value(&mut self, raw: &str) -> AnswerCheck {
        if self.phase != Phase::Solving || self.problem.lesson_type() != LessonType::ValueFinding {
            return AnswerCheck::NotSolving;
        }
        let Some(value) = parse_answer(raw) else {
            return AnswerCheck::MissingInput;
        };
        let correct = check_value(&self.problem, value);
        self.phase = Phase::Resolved { correct };
        AnswerCheck::Resolved { correct }
    }
}
