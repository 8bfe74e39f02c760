use contracts::shared::severity::Severity;
use leptos::prelude::*;

/// Severity pill for insights and recommendations. The backend value
/// is parsed leniently; unknown strings render as info.
#[component]
pub fn SeverityBadge(#[prop(into)] severity: String) -> impl IntoView {
    let parsed = Severity::parse(&severity);
    let class = match parsed {
        Severity::Alto => "severity-badge severity-badge--alto",
        Severity::Medio => "severity-badge severity-badge--medio",
        Severity::Baixo => "severity-badge severity-badge--baixo",
        Severity::Info => "severity-badge severity-badge--info",
    };

    view! {
        <span class=class>{parsed.as_str().to_uppercase()}</span>
    }
}
