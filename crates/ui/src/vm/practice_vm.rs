//! View model for the practice screen.
//!
//! Owns the core session plus everything the core deliberately does not:
//! tutor-message wording, the instant local feedback, and the epoch stamp
//! that keeps a slow explanation response from overwriting a newer problem's
//! guidance.

use std::sync::Arc;

use rand::Rng;

use fraction_core::{
    AnswerCheck, Discovery, LessonType, Phase, PracticeSession, Problem, SegmentPaint, SubType,
    generate,
};
use services::{ExplanationRequest, FeedbackProvider};

/// Everything the view needs to launch the background explanation fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingExplanation {
    pub epoch: u64,
    pub request: ExplanationRequest,
}

pub struct PracticeVm {
    lesson: LessonType,
    session: PracticeSession,
    feedback: Arc<dyn FeedbackProvider>,
    epoch: u64,
    tutor_message: String,
}

impl PracticeVm {
    /// Start with a freshly generated problem for the lesson.
    #[must_use]
    pub fn start<R: Rng + ?Sized>(
        feedback: Arc<dyn FeedbackProvider>,
        rng: &mut R,
        lesson: LessonType,
    ) -> Self {
        let problem = generate(rng, lesson);
        Self::with_problem(feedback, problem)
    }

    /// Start with a specific problem (deterministic tests, previews).
    #[must_use]
    pub fn with_problem(feedback: Arc<dyn FeedbackProvider>, problem: Problem) -> Self {
        let tutor_message = intro_message(&problem);
        Self {
            lesson: problem.lesson_type(),
            session: PracticeSession::new(problem),
            feedback,
            epoch: 0,
            tutor_message,
        }
    }

    #[must_use]
    pub fn lesson(&self) -> LessonType {
        self.lesson
    }

    #[must_use]
    pub fn problem(&self) -> &Problem {
        self.session.problem()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    #[must_use]
    pub fn is_partitioned(&self) -> bool {
        self.session.is_partitioned()
    }

    #[must_use]
    pub fn active_segments(&self) -> u32 {
        self.session.active_segments()
    }

    #[must_use]
    pub fn is_correct(&self) -> Option<bool> {
        self.session.is_correct()
    }

    #[must_use]
    pub fn tutor_message(&self) -> &str {
        &self.tutor_message
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn check_unit_guess(&mut self, raw: &str) {
        let outcome = self.session.check_unit_guess(raw);
        self.note_discovery(outcome);
    }

    pub fn click_ruler_tick(&mut self, value: u32) {
        let outcome = self.session.click_ruler_tick(value);
        self.note_discovery(outcome);
    }

    fn note_discovery(&mut self, outcome: Discovery) {
        match outcome {
            Discovery::Unlocked { group_size } => {
                self.tutor_message = match self.session.problem().sub_type() {
                    SubType::Length => format!(
                        "🎉 Ding-dong! Each segment is {group_size}. Now paint the squares!"
                    ),
                    SubType::Discrete => format!(
                        "🎉 That's right! Each group has {group_size}. Now find the full answer!"
                    ),
                };
            }
            Discovery::Hint {
                total_items,
                total_groups,
            } => {
                self.tutor_message = format!(
                    "🤔 Try again! Split {total_items} into {total_groups} equal groups. \
                     ({total_items} ÷ {total_groups} = ?)"
                );
            }
            Discovery::NotANumber => {
                self.tutor_message = "Please type a number!".to_string();
            }
            Discovery::NotDiscovering => {}
        }
    }

    pub fn click_segment(&mut self, index: u32) {
        match self.session.click_segment(index) {
            SegmentPaint::Painted {
                reached_target: true,
                ..
            } => {
                self.tutor_message = "👍 That's it! Now fill in the blank!".to_string();
            }
            SegmentPaint::Painted { .. } => {
                self.tutor_message = "You're doing great, keep going!".to_string();
            }
            SegmentPaint::TooMany { limit } => {
                self.tutor_message = format!(
                    "🚧 Hold on! The numerator is {limit}, so you can paint at most {limit} squares!"
                );
            }
            SegmentPaint::NotPaintable => {}
        }
    }

    /// Check a representation answer. On resolve the local phrase is shown
    /// immediately and the returned pending request drives the background
    /// fetch.
    pub fn submit_representation(
        &mut self,
        numerator: &str,
        denominator: &str,
    ) -> Option<PendingExplanation> {
        match self.session.submit_representation(numerator, denominator) {
            AnswerCheck::Resolved { correct } => Some(self.resolve(
                correct,
                ExplanationRequest::representation(
                    self.session.problem().clone(),
                    correct,
                    numerator,
                    denominator,
                ),
            )),
            AnswerCheck::MissingInput => {
                self.tutor_message = "Please fill in both numbers!".to_string();
                None
            }
            AnswerCheck::NotSolving => None,
        }
    }

    /// Check a value-finding answer; same contract as `submit_representation`.
    pub fn submit_value(&mut self, raw: &str) -> Option<PendingExplanation> {
        match self.session.submit_value(raw) {
            AnswerCheck::Resolved { correct } => Some(self.resolve(
                correct,
                ExplanationRequest::value(self.session.problem().clone(), correct, raw),
            )),
            AnswerCheck::MissingInput => {
                self.tutor_message = "Please type your answer!".to_string();
                None
            }
            AnswerCheck::NotSolving => None,
        }
    }

    fn resolve(&mut self, correct: bool, request: ExplanationRequest) -> PendingExplanation {
        self.tutor_message = self.feedback.pick_local_feedback(correct);
        PendingExplanation {
            epoch: self.epoch,
            request,
        }
    }

    /// Apply a completed explanation fetch. Results stamped with an older
    /// epoch belong to a replaced problem and are dropped.
    pub fn apply_explanation(&mut self, epoch: u64, text: String) {
        if epoch == self.epoch {
            self.tutor_message = text;
        } else {
            tracing::debug!(stale = epoch, current = self.epoch, "ignoring stale explanation");
        }
    }

    /// Replace the problem wholesale and reset every per-problem field.
    pub fn next_problem<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.epoch += 1;
        let problem = generate(rng, self.lesson);
        self.tutor_message = intro_message(&problem);
        self.session = PracticeSession::new(problem);
    }
}

fn intro_message(problem: &Problem) -> String {
    match (problem.lesson_type(), problem.sub_type()) {
        (LessonType::Representation, _) => {
            "Look closely at the picture and write the fraction!".to_string()
        }
        (LessonType::ValueFinding, SubType::Length) => {
            "📏 To split the whole length into equal parts, which tick mark should you use?"
                .to_string()
        }
        (LessonType::ValueFinding, SubType::Discrete) => format!(
            "🍎 If you split all {total} into {groups} equal groups, how many are in each group?",
            total = problem.total_items(),
            groups = problem.total_groups(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use fraction_core::ItemType;
    use services::FeedbackError;

    use super::*;

    struct ScriptedProvider {
        fail_explanations: bool,
    }

    #[async_trait]
    impl FeedbackProvider for ScriptedProvider {
        fn pick_local_feedback(&self, is_correct: bool) -> String {
            if is_correct { "local-positive" } else { "local-retry" }.to_string()
        }

        async fn request_explanation(
            &self,
            _request: &ExplanationRequest,
        ) -> Result<String, FeedbackError> {
            if self.fail_explanations {
                Err(FeedbackError::EmptyResponse)
            } else {
                Ok("a fuller explanation".to_string())
            }
        }

        async fn greeting(&self) -> Result<String, FeedbackError> {
            Ok("hello".to_string())
        }
    }

    fn provider(fail_explanations: bool) -> Arc<dyn FeedbackProvider> {
        Arc::new(ScriptedProvider { fail_explanations })
    }

    fn representation_vm(fail: bool) -> PracticeVm {
        let problem = Problem::new(
            LessonType::Representation,
            SubType::Discrete,
            4,
            3,
            2,
            ItemType::Apple,
        )
        .unwrap();
        PracticeVm::with_problem(provider(fail), problem)
    }

    #[test]
    fn resolve_shows_local_feedback_synchronously() {
        let mut vm = representation_vm(false);
        let pending = vm.submit_representation("2", "3").unwrap();

        assert_eq!(vm.tutor_message(), "local-positive");
        assert_eq!(pending.epoch, 0);
        assert!(pending.request.is_correct);
    }

    #[test]
    fn missing_input_keeps_the_session_solving() {
        let mut vm = representation_vm(false);
        assert!(vm.submit_representation("2", "").is_none());
        assert_eq!(vm.tutor_message(), "Please fill in both numbers!");
        assert_eq!(vm.is_correct(), None);
    }

    #[tokio::test]
    async fn failed_explanation_leaves_local_feedback_unchanged() {
        let mut vm = representation_vm(true);
        let pending = vm.submit_representation("3", "2").unwrap();
        assert_eq!(vm.tutor_message(), "local-retry");

        // The background glue the view runs: fetch, then apply on success only.
        let feedback = provider(true);
        if let Ok(text) = feedback.request_explanation(&pending.request).await {
            vm.apply_explanation(pending.epoch, text);
        }

        assert_eq!(vm.tutor_message(), "local-retry");
    }

    #[tokio::test]
    async fn successful_explanation_replaces_local_feedback() {
        let mut vm = representation_vm(false);
        let pending = vm.submit_representation("2", "3").unwrap();

        let feedback = provider(false);
        if let Ok(text) = feedback.request_explanation(&pending.request).await {
            vm.apply_explanation(pending.epoch, text);
        }

        assert_eq!(vm.tutor_message(), "a fuller explanation");
    }

    #[test]
    fn stale_explanation_never_touches_a_newer_problem() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut vm = representation_vm(false);
        let pending = vm.submit_representation("2", "3").unwrap();

        let mut rng = StdRng::seed_from_u64(5);
        vm.next_problem(&mut rng);
        let intro = vm.tutor_message().to_string();

        vm.apply_explanation(pending.epoch, "late response".to_string());
        assert_eq!(vm.tutor_message(), intro);

        // A result for the current epoch still lands.
        let numerator = vm.problem().target_groups().to_string();
        let denominator = vm.problem().total_groups().to_string();
        vm.submit_representation(&numerator, &denominator);
        vm.apply_explanation(vm.epoch(), "fresh response".to_string());
        assert_eq!(vm.tutor_message(), "fresh response");
    }

    #[test]
    fn discovery_messages_follow_the_outcome() {
        let problem = Problem::new(
            LessonType::ValueFinding,
            SubType::Discrete,
            5,
            4,
            3,
            ItemType::Orange,
        )
        .unwrap();
        let mut vm = PracticeVm::with_problem(provider(false), problem);

        vm.check_unit_guess("nope");
        assert_eq!(vm.tutor_message(), "Please type a number!");

        vm.check_unit_guess("4");
        assert!(vm.tutor_message().contains("20 ÷ 4"));
        assert!(!vm.is_partitioned());

        vm.check_unit_guess("5");
        assert!(vm.tutor_message().contains("Each group has 5"));
        assert!(vm.is_partitioned());
    }

    #[test]
    fn segment_painting_messages_and_cap() {
        let problem = Problem::new(
            LessonType::ValueFinding,
            SubType::Length,
            2,
            5,
            3,
            ItemType::Ruler,
        )
        .unwrap();
        let mut vm = PracticeVm::with_problem(provider(false), problem);
        vm.click_ruler_tick(2);

        vm.click_segment(0);
        assert_eq!(vm.tutor_message(), "You're doing great, keep going!");

        vm.click_segment(2);
        assert_eq!(vm.tutor_message(), "👍 That's it! Now fill in the blank!");

        vm.click_segment(3);
        assert!(vm.tutor_message().contains("at most 3"));
        assert_eq!(vm.active_segments(), 3);
    }

    #[test]
    fn next_problem_resets_state_and_bumps_epoch() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut vm = representation_vm(false);
        vm.submit_representation("2", "3");
        assert_eq!(vm.is_correct(), Some(true));

        let mut rng = StdRng::seed_from_u64(9);
        vm.next_problem(&mut rng);

        assert_eq!(vm.epoch(), 1);
        assert_eq!(vm.is_correct(), None);
        assert_eq!(vm.active_segments(), 0);
        assert_eq!(vm.lesson(), LessonType::Representation);
    }
}
