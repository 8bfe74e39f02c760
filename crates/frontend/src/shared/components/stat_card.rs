use crate::shared::icons::icon;
use leptos::prelude::*;

/// KPI card: icon, label, one big value, optional hint line.
///
/// Cards are rebuilt whenever their panel's view state changes, so the
/// props are plain values. `tone` tints the card: "success" |
/// "warning" | "error", anything else renders neutral.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Formatted value
    value: String,
    /// Optional line below the value
    #[prop(optional, into)]
    hint: Option<String>,
    #[prop(optional, into)]
    tone: Option<String>,
) -> impl IntoView {
    let card_class = match tone.as_deref() {
        Some("success") => "stat-card stat-card--success",
        Some("warning") => "stat-card stat-card--warning",
        Some("error") => "stat-card stat-card--error",
        _ => "stat-card",
    };

    view! {
        <div class=card_class>
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{value}</div>
                {hint.map(|h| view! {
                    <div class="stat-card__hint">{h}</div>
                })}
            </div>
        </div>
    }
}
