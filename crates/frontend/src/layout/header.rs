use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ApiConfig;
use crate::shared::fetch;

/// Title bar with a backend reachability dot. `/health` is probed once
/// at startup; panels report their own failures independently.
#[component]
pub fn AppHeader() -> impl IntoView {
    let (online, set_online) = signal(None::<bool>);

    Effect::new(move |_| {
        spawn_local(async move {
            let url = ApiConfig::get().url("/health");
            let reachable = fetch::probe(&url).await;
            set_online.set(Some(reachable));
        });
    });

    let health_class = move || match online.get() {
        Some(true) => "app-header__health app-header__health--online",
        Some(false) => "app-header__health app-header__health--offline",
        None => "app-header__health",
    };
    let health_label = move || match online.get() {
        Some(true) => "API online",
        Some(false) => "API indisponível",
        None => "Verificando API...",
    };

    view! {
        <header class="app-header">
            <div class="app-header__brand">
                <h1 class="app-header__title">"PCP 360"</h1>
                <span class="app-header__tagline">
                    "SmartPlanning · Planejamento e Controle da Produção"
                </span>
            </div>
            <div class=health_class>
                <span class="app-header__dot"></span>
                {health_label}
            </div>
        </header>
    }
}
