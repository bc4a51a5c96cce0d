use dioxus::prelude::*;

use fraction_core::{ItemType, LessonType, Problem, SubType};

fn item_glyph(item: ItemType) -> &'static str {
    match item {
        ItemType::Orange => "🍊",
        ItemType::Apple => "🍎",
        ItemType::Strawberry => "🍓",
        ItemType::Star => "⭐",
        ItemType::Ruler => "📏",
    }
}

/// Renders the problem's visual aid and forwards interactions upward.
///
/// Discrete problems draw `total_groups` groups of `group_size` items; for
/// representation problems the target groups are highlighted so the learner
/// can read the fraction off the picture. Length problems draw a ruler:
/// tick buttons during discovery, paintable segments afterwards.
#[component]
pub fn Visualizer(
    problem: Problem,
    active_segments: u32,
    is_partitioned: bool,
    resolved: bool,
    on_ruler_tick: EventHandler<u32>,
    on_segment_click: EventHandler<u32>,
) -> Element {
    let group_size = problem.group_size();
    let total_groups = problem.total_groups();
    let total_items = problem.total_items();
    let target_groups = problem.target_groups();

    match problem.sub_type() {
        SubType::Discrete => {
            let highlight_targets = problem.lesson_type() == LessonType::Representation;
            let glyph = item_glyph(problem.item_type());
            rsx! {
                div { class: "visual discrete",
                    for group in 0..total_groups {
                        div {
                            key: "{group}",
                            class: if highlight_targets && group < target_groups {
                                "group target"
                            } else {
                                "group"
                            },
                            for item in 0..group_size {
                                span { key: "{item}", class: "item", "{glyph}" }
                            }
                        }
                    }
                }
            }
        }
        SubType::Length => rsx! {
            div { class: "visual length",
                if is_partitioned {
                    div { class: "ruler segments",
                        for index in 0..total_groups {
                            button {
                                key: "{index}",
                                class: if index < active_segments { "segment active" } else { "segment" },
                                disabled: resolved,
                                onclick: move |_| on_segment_click.call(index),
                                "{group_size}"
                            }
                        }
                    }
                } else {
                    div { class: "ruler ticks",
                        for value in 1..=total_items {
                            button {
                                key: "{value}",
                                class: "tick",
                                disabled: resolved,
                                onclick: move |_| on_ruler_tick.call(value),
                                "{value}"
                            }
                        }
                    }
                }
                p { class: "ruler-caption", "0 to {total_items} cm" }
            }
        },
    }
}
