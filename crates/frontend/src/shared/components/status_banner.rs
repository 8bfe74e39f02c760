use leptos::prelude::*;
use thaw::*;

/// In-flight indicator shown while a panel's fetch is pending.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="panel-status panel-status--loading">
            <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                <Spinner />
                "Carregando dados..."
            </Flex>
        </div>
    }
}

/// Error banner local to one panel; the rest of the page stays
/// interactive.
#[component]
pub fn ErrorBanner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="panel-status panel-status--error">
            <strong>"⚠ Erro: "</strong>
            {message}
        </div>
    }
}

/// Informational empty state, deliberately not an error banner.
#[component]
pub fn EmptyNotice(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="panel-status panel-status--empty">
            {message}
        </div>
    }
}
