//! Prompt construction for the explanation request, one branch per
//! lesson/verdict combination.

use fraction_core::LessonType;

use crate::provider::ExplanationRequest;

pub const GREETING: &str = "Hi! Ready for a fraction adventure with Nom-Nom? 🍊";

/// Build the chat prompt for an explanation request.
#[must_use]
pub fn explanation_prompt(request: &ExplanationRequest) -> String {
    let p = &request.problem;
    match (p.lesson_type(), request.is_correct) {
        (LessonType::Representation, true) => format!(
            "You are a cheerful elementary math tutor. The student correctly \
             identified that {target_items} items out of {total_items} \
             (grouped by {group_size}) represents {target_groups}/{total_groups}. \
             Give one short, very enthusiastic compliment with emojis. \
             Make it different every time.",
            target_items = p.target_items(),
            total_items = p.total_items(),
            group_size = p.group_size(),
            target_groups = p.target_groups(),
            total_groups = p.total_groups(),
        ),
        (LessonType::Representation, false) => format!(
            "You are a kind elementary math tutor. The student answered \
             {numerator}/{denominator} but the answer is \
             {target_groups}/{total_groups}. The picture shows {total_items} \
             items split into {total_groups} groups with {target_groups} \
             selected. Explain simply that the total group count is the \
             denominator and the selected group count is the numerator. \
             Keep it short and encouraging.",
            numerator = request.numerator.as_deref().unwrap_or("?"),
            denominator = request.denominator.as_deref().unwrap_or("?"),
            target_groups = p.target_groups(),
            total_groups = p.total_groups(),
            total_items = p.total_items(),
        ),
        (LessonType::ValueFinding, true) => format!(
            "You are a cheerful elementary math tutor. The student correctly \
             calculated that {target_groups}/{total_groups} of {total_items} \
             is {target_items}. Compliment them on understanding part of a \
             whole, in one short sentence with emojis. Make it different \
             every time.",
            target_groups = p.target_groups(),
            total_groups = p.total_groups(),
            total_items = p.total_items(),
            target_items = p.target_items(),
        ),
        (LessonType::ValueFinding, false) => format!(
            "You are a kind elementary math tutor. The problem asked for \
             {target_groups}/{total_groups} of {total_items}. The correct \
             answer is {target_items} but the student guessed {value}. \
             Explain step by step, very simply: first 1/{total_groups} of \
             {total_items} is {total_items} divided by {total_groups}, which \
             is {group_size}; then {group_size} times {target_groups} is \
             {target_items}.",
            target_groups = p.target_groups(),
            total_groups = p.total_groups(),
            total_items = p.total_items(),
            target_items = p.target_items(),
            group_size = p.group_size(),
            value = request.value.as_deref().unwrap_or("?"),
        ),
    }
}
