//! Adaptive learning section: learner form, recommendation, apply control.
//!
//! SYSTEM CONTEXT
//! ==============
//! Posts the learner's current topic, level, score, attempts and time to the
//! recommend endpoint and renders the reply. "Apply" feeds the captured
//! recommendation back into the form and scrolls it into view.

use leptos::prelude::*;

use crate::components::confidence_card::ConfidenceCard;
use crate::config::ApiConfig;
#[cfg(not(feature = "csr"))]
use crate::net::types::Endpoint;
use crate::state::difficulty::Difficulty;
use crate::state::recommend::AdaptiveState;
use crate::state::seq::seq_advanced;
use crate::util::notify;

#[component]
pub fn AdaptivePanel() -> impl IntoView {
    let adaptive = expect_context::<RwSignal<AdaptiveState>>();
    let config = expect_context::<ApiConfig>();
    let form_ref = NodeRef::<leptos::html::Div>::new();
    let scroll_seq = Memo::new(move |_| adaptive.with(|s| s.scroll_to_form_seq));
    let last_scroll_seq = RwSignal::new(0_u64);

    Effect::new(move || {
        let seq = scroll_seq.get();
        if !seq_advanced(seq, last_scroll_seq.get_untracked()) {
            return;
        }
        #[cfg(feature = "csr")]
        {
            if let Some(el) = form_ref.get_untracked() {
                crate::util::scroll::scroll_into_view_smooth(&el);
            }
        }
        last_scroll_seq.set(seq);
    });

    let on_recommend = move |_| {
        let Some(begun) = adaptive.try_update(AdaptiveState::begin_recommendation) else {
            return;
        };
        let (ticket, request) = match begun {
            Ok(pair) => pair,
            Err(err) => {
                notify::alert(&err.to_string());
                return;
            }
        };

        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::recommend(&config, &request).await;
                if let Some(finished) = adaptive.try_update(|s| s.finish_recommendation(ticket, outcome)) {
                    notify::report(finished);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!(
                "recommend {ticket:?} for {} not sent outside the browser ({})",
                request.topic,
                config.url(Endpoint::Recommend)
            );
        }
    };

    let on_apply = move |_| {
        if let Some(applied) = adaptive.try_update(AdaptiveState::apply_current) {
            notify::report(applied);
        }
    };

    let topic_options = adaptive.with_untracked(|s| s.topic_options.clone());

    view! {
        <div class="form-container" node_ref=form_ref>
            <div class="form-row">
                <label class="form-label" for="topicInput">"Current topic"</label>
                <select
                    id="topicInput"
                    class="form-input"
                    on:change=move |ev| adaptive.update(|s| s.topic = event_target_value(&ev))
                >
                    {topic_options
                        .into_iter()
                        .map(|opt| {
                            let label = opt.clone();
                            let selected_opt = opt.clone();
                            view! {
                                <option
                                    value=opt
                                    prop:selected=move || adaptive.with(|s| s.topic == selected_opt)
                                >
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-row">
                <label class="form-label" for="difficultyInput">"Current difficulty"</label>
                <select
                    id="difficultyInput"
                    class="form-input"
                    on:change=move |ev| {
                        if let Some(level) = Difficulty::parse(&event_target_value(&ev)) {
                            adaptive.update(|s| s.difficulty = level);
                        }
                    }
                >
                    {Difficulty::LADDER
                        .into_iter()
                        .map(|level| {
                            view! {
                                <option
                                    value=level.as_str()
                                    prop:selected=move || adaptive.with(|s| s.difficulty == level)
                                >
                                    {level.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-row">
                <label class="form-label" for="scoreInput">"Score (%)"</label>
                <input
                    id="scoreInput"
                    class="form-input"
                    type="number"
                    min="0"
                    max="100"
                    prop:value=move || adaptive.with(|s| s.score.clone())
                    on:input=move |ev| adaptive.update(|s| s.score = event_target_value(&ev))
                />
            </div>

            <div class="form-row">
                <label class="form-label" for="attemptsInput">"Attempts"</label>
                <input
                    id="attemptsInput"
                    class="form-input"
                    type="number"
                    min="0"
                    step="1"
                    prop:value=move || adaptive.with(|s| s.attempts.clone())
                    on:input=move |ev| adaptive.update(|s| s.attempts = event_target_value(&ev))
                />
            </div>

            <div class="form-row">
                <label class="form-label" for="timeInput">"Time spent (minutes)"</label>
                <input
                    id="timeInput"
                    class="form-input"
                    type="number"
                    min="0"
                    prop:value=move || adaptive.with(|s| s.time_spent.clone())
                    on:input=move |ev| adaptive.update(|s| s.time_spent = event_target_value(&ev))
                />
            </div>

            <button class="btn btn--primary" on:click=on_recommend>
                "Get Recommendation"
            </button>
        </div>

        <div class="result-box" class:hidden=move || !adaptive.with(|s| s.result_visible)>
            {move || {
                adaptive
                    .with(|s| s.result.clone())
                    .map(|rec| {
                        view! {
                            <div class="result-grid">
                                <ConfidenceCard title="Next topic" field=rec.next_topic/>
                                <ConfidenceCard title="Action" field=rec.action/>
                                <ConfidenceCard title="Difficulty adjustment" field=rec.difficulty_adjustment/>
                            </div>
                            <div class="result-suggestion">
                                <span class="result-card__title">"Reasoning"</span>
                                <p>{rec.reasoning}</p>
                            </div>
                        }
                    })
            }}
            <button id="applyBtn" class="btn btn--secondary" on:click=on_apply>
                "Apply Recommendation"
            </button>
        </div>
    }
}
