//! Query understanding section: input, example chips, analysis results.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sends the query to the analyze endpoint and renders intent, topic,
//! difficulty, keywords and the suggested response style from shared
//! `QueryState`.

use leptos::prelude::*;

use crate::components::confidence_card::ConfidenceCard;
use crate::config::{ApiConfig, EXAMPLE_QUERIES};
#[cfg(not(feature = "csr"))]
use crate::net::types::Endpoint;
use crate::state::query::QueryState;
use crate::util::notify;

#[component]
pub fn QueryPanel() -> impl IntoView {
    let query = expect_context::<RwSignal<QueryState>>();
    let config = expect_context::<ApiConfig>();

    let on_analyze = move |_| {
        let Some(begun) = query.try_update(QueryState::begin_analysis) else {
            return;
        };
        let (ticket, text) = match begun {
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
                let outcome = crate::net::api::analyze(&config, &text).await;
                if let Some(finished) = query.try_update(|q| q.finish_analysis(ticket, outcome)) {
                    notify::report(finished);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!(
                "analyze {ticket:?} ({} chars) not sent outside the browser ({})",
                text.chars().count(),
                config.url(Endpoint::Analyze)
            );
        }
    };

    view! {
        <div class="query-container">
            <label class="form-label" for="queryInput">"Ask a question about a topic"</label>
            <textarea
                id="queryInput"
                class="form-input query-input"
                rows="3"
                placeholder="e.g. What is Gradient Descent?"
                prop:value=move || query.with(|q| q.input.clone())
                on:input=move |ev| query.update(|q| q.input = event_target_value(&ev))
            ></textarea>

            <div class="examples">
                <span class="examples__label">"Try: "</span>
                {EXAMPLE_QUERIES
                    .into_iter()
                    .map(|example| {
                        view! {
                            <span
                                class="example-chip"
                                on:click=move |_| query.update(|q| q.fill_example(example))
                            >
                                {example}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>

            <button
                id="analyzeBtn"
                class="btn btn--primary"
                disabled=move || query.with(|q| q.loading)
                on:click=on_analyze
            >
                {move || query.with(QueryState::button_label)}
            </button>
        </div>

        <div class="result-box" class:hidden=move || !query.with(|q| q.result_visible)>
            {move || {
                query
                    .with(|q| q.result.clone())
                    .map(|analysis| {
                        view! {
                            <div class="result-grid">
                                <ConfidenceCard title="Intent" field=analysis.intent/>
                                <ConfidenceCard title="Topic" field=analysis.topic/>
                                <ConfidenceCard title="Difficulty" field=analysis.difficulty/>
                            </div>
                            <div class="result-keywords">
                                <span class="result-card__title">"Keywords"</span>
                                <div class="keyword-list">
                                    {analysis
                                        .keywords
                                        .into_iter()
                                        .map(|kw| view! { <span class="keyword-pill">{kw}</span> })
                                        .collect_view()}
                                </div>
                            </div>
                            <div class="result-suggestion">
                                <span class="result-card__title">"Suggested response"</span>
                                <p>{analysis.suggestion}</p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
