//! Result card showing one classified value with its confidence bar.

use leptos::prelude::*;

use crate::util::confidence::ConfidenceField;

/// A titled value, its `"<n>% confidence"` label and a bar sized to `<n>%`.
#[component]
pub fn ConfidenceCard(#[prop(into)] title: String, field: ConfidenceField) -> impl IntoView {
    let bar_style = format!("width: {}", field.bar_width());
    let label = field.label();

    view! {
        <div class="result-card">
            <span class="result-card__title">{title}</span>
            <span class="result-card__value">{field.value}</span>
            <div class="confidence-bar">
                <div class="confidence-bar__fill" style=bar_style></div>
            </div>
            <span class="result-card__conf">{label}</span>
        </div>
    }
}
