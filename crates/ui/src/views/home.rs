use dioxus::prelude::*;
use dioxus_router::Link;

use fraction_core::LessonType;

use crate::context::AppContext;
use crate::routes::Route;

/// Shown whenever the greeting request fails; the failure itself is only
/// logged.
const FALLBACK_GREETING: &str = "Hi! Let's practice fractions together!";

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();

    let greeting = use_resource(move || {
        let feedback = ctx.feedback();
        async move {
            match feedback.greeting().await {
                Ok(text) => text,
                Err(err) => {
                    tracing::warn!(error = %err, "greeting request failed");
                    FALLBACK_GREETING.to_string()
                }
            }
        }
    });
    let greeting_text = greeting().unwrap_or_default();

    rsx! {
        div { class: "page home",
            h1 { "Fraction Genius" }
            p { class: "subtitle", "Pick what you want to practice!" }

            div { class: "lesson-cards",
                LessonCard {
                    lesson: LessonType::Representation,
                    title: "Write the fraction",
                    blurb: "See how the part relates to the whole",
                }
                LessonCard {
                    lesson: LessonType::ValueFinding,
                    title: "Find the amount",
                    blurb: "Work out the value of a fraction of the whole",
                }
            }

            p { class: "tutor-line", "🤖 {greeting_text}" }
        }
    }
}

#[component]
fn LessonCard(lesson: LessonType, title: String, blurb: String) -> Element {
    rsx! {
        Link {
            class: "lesson-card",
            to: Route::Practice { lesson: lesson.slug().to_string() },
            span { class: "lesson-title", "{title}" }
            span { class: "lesson-blurb", "{blurb}" }
        }
    }
}
