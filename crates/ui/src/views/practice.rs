use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use fraction_core::{LessonType, SubType};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::Visualizer;
use crate::vm::PracticeVm;

#[component]
pub fn PracticeView(lesson: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let Some(lesson_type) = LessonType::from_slug(&lesson) else {
        return rsx! {
            div { class: "page",
                p { "That lesson doesn't exist." }
                Link { to: Route::Home {}, "Back to the lessons" }
            }
        };
    };

    let feedback = ctx.feedback();
    let feedback_for_vm = feedback.clone();
    let mut vm = use_signal(move || {
        PracticeVm::start(feedback_for_vm.clone(), &mut rand::rng(), lesson_type)
    });

    let mut numerator = use_signal(String::new);
    let mut denominator = use_signal(String::new);
    let mut unit_guess = use_signal(String::new);
    let mut value_guess = use_signal(String::new);

    let problem = vm.read().problem().clone();
    let is_partitioned = vm.read().is_partitioned();
    let active_segments = vm.read().active_segments();
    let is_correct = vm.read().is_correct();
    let tutor_message = vm.read().tutor_message().to_string();

    let group_size = problem.group_size();
    let total_groups = problem.total_groups();
    let total_items = problem.total_items();
    let target_groups = problem.target_groups();
    let target_items = problem.target_items();

    let is_representation = lesson_type == LessonType::Representation;
    let check_disabled = if is_representation {
        numerator().trim().is_empty() || denominator().trim().is_empty()
    } else {
        value_guess().trim().is_empty()
    };

    let on_check = move |_| {
        let pending = if is_representation {
            vm.write().submit_representation(&numerator(), &denominator())
        } else {
            vm.write().submit_value(&value_guess())
        };
        let Some(pending) = pending else { return };
        let feedback = feedback.clone();
        spawn(async move {
            match feedback.request_explanation(&pending.request).await {
                Ok(text) => vm.write().apply_explanation(pending.epoch, text),
                // The local phrase is already on screen; nothing to repair.
                Err(err) => tracing::warn!(error = %err, "explanation request failed"),
            }
        });
    };

    let on_next = move |_| {
        vm.write().next_problem(&mut rand::rng());
        numerator.set(String::new());
        denominator.set(String::new());
        unit_guess.set(String::new());
        value_guess.set(String::new());
    };

    let on_unit_check = move |_| {
        vm.write().check_unit_guess(&unit_guess());
    };

    rsx! {
        div { class: "page practice",
            header { class: "practice-header",
                button {
                    class: "home-button",
                    aria_label: "Go home",
                    onclick: move |_| { navigator.push(Route::Home {}); },
                    "🏠"
                }
                h1 {
                    if is_representation { "Write the fraction" } else { "Find the amount" }
                }
            }

            Visualizer {
                problem: problem.clone(),
                active_segments,
                is_partitioned,
                resolved: is_correct.is_some(),
                on_ruler_tick: move |value| vm.write().click_ruler_tick(value),
                on_segment_click: move |index| vm.write().click_segment(index),
            }

            if is_representation {
                section { class: "answer fraction-answer",
                    p {
                        strong { "{total_items}" }
                        " grouped by "
                        strong { "{group_size}" }
                        " makes "
                        strong { "{total_groups}" }
                        " groups."
                    }
                    div { class: "fraction-row",
                        p {
                            strong { "{target_items}" }
                            " out of "
                            strong { "{total_items}" }
                            " is"
                        }
                        div { class: "fraction-input",
                            input {
                                class: "numerator",
                                value: "{numerator}",
                                placeholder: "?",
                                disabled: is_correct == Some(true),
                                oninput: move |evt| numerator.set(evt.value()),
                            }
                            div { class: "fraction-bar" }
                            input {
                                class: "denominator",
                                value: "{denominator}",
                                placeholder: "?",
                                disabled: is_correct == Some(true),
                                oninput: move |evt| denominator.set(evt.value()),
                            }
                        }
                    }
                }
            } else if problem.sub_type() == SubType::Discrete {
                section { class: "answer value-answer",
                    p {
                        "1/{total_groups} of "
                        strong { "{total_items}" }
                        " is "
                        if is_partitioned {
                            strong { class: "unit-value", "{group_size}" }
                        } else {
                            span { class: "unit-entry",
                                input {
                                    class: "unit-guess",
                                    value: "{unit_guess}",
                                    placeholder: "?",
                                    oninput: move |evt| unit_guess.set(evt.value()),
                                }
                                button { class: "unit-check", onclick: on_unit_check, "✓" }
                            }
                        }
                    }
                    if is_partitioned {
                        p { class: "target-question",
                            "Then {target_groups}/{total_groups} of "
                            strong { "{total_items}" }
                            " is"
                            input {
                                class: "value-guess",
                                value: "{value_guess}",
                                placeholder: "?",
                                disabled: is_correct == Some(true),
                                oninput: move |evt| value_guess.set(evt.value()),
                            }
                        }
                    }
                }
            } else {
                section { class: "answer value-answer",
                    p {
                        "{target_groups}/{total_groups} of "
                        strong { "{total_items} cm" }
                        " is"
                        input {
                            class: "value-guess",
                            value: "{value_guess}",
                            placeholder: "?",
                            // Locked until the tick discovery step is done.
                            disabled: is_correct == Some(true) || !is_partitioned,
                            oninput: move |evt| value_guess.set(evt.value()),
                        }
                        " cm"
                    }
                }
            }

            div { class: "controls",
                if is_correct.is_none() && is_partitioned {
                    button {
                        class: "check-button",
                        disabled: check_disabled,
                        onclick: on_check,
                        "Check my answer"
                    }
                }

                if let Some(correct) = is_correct {
                    div { class: if correct { "result correct" } else { "result incorrect" },
                        span { class: "verdict",
                            if correct { "✅ Correct!" } else { "❌ Have another think!" }
                        }
                        p { class: "tutor-line", "💡 {tutor_message}" }
                        button { class: "next-button", onclick: on_next, "Next problem" }
                    }
                } else {
                    p { class: "tutor-line", "🤖 {tutor_message}" }
                }
            }
        }
    }
}
