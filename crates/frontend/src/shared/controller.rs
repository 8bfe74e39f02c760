//! Reactive shell around [`PanelMachine`].
//!
//! The machine transitions synchronously inside the signal update; the
//! fetch itself is spawned on the local task queue and funnels its
//! outcome back through `resolve`, where stale tickets are dropped.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::fetch::FetchError;
use crate::shared::panel::{PanelMachine, PanelPolicy, ViewState};

/// One controller per panel instance. `Copy`, like the signals it
/// wraps, so `view!` closures can capture it freely.
pub struct PanelController<T: Send + Sync + 'static> {
    machine: RwSignal<PanelMachine<T>>,
}

impl<T: Send + Sync + 'static> Clone for PanelController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for PanelController<T> {}

impl<T: Clone + Send + Sync + 'static> PanelController<T> {
    pub fn new(policy: PanelPolicy<T>) -> Self {
        PanelController {
            machine: RwSignal::new(PanelMachine::new(policy)),
        }
    }

    /// Current view state snapshot; reads reactively.
    pub fn state(&self) -> ViewState<T> {
        self.machine.with(|machine| machine.state().clone())
    }

    /// Untracked idle probe, used to decide whether a first trigger is
    /// still due when a panel becomes visible.
    pub fn is_idle(&self) -> bool {
        self.machine.with_untracked(|machine| machine.state().is_idle())
    }

    /// Trigger for panels without an identifier (mount, tab
    /// activation, refresh button).
    pub fn load<F, Fut>(&self, fetch: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, FetchError>> + 'static,
    {
        let Some(ticket) = self.machine.try_update(|machine| machine.begin()) else {
            return;
        };
        self.resolve_later(ticket, fetch());
    }

    /// Trigger for identifier-driven panels. Validation failures stop
    /// here — the machine is already in `Error` and nothing is spawned.
    pub fn load_material<F, Fut>(&self, raw_identifier: &str, fetch: F)
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<T, FetchError>> + 'static,
    {
        let issued = self
            .machine
            .try_update(|machine| machine.trigger(raw_identifier))
            .flatten();
        let Some((ticket, material)) = issued else {
            return;
        };
        self.resolve_later(ticket, fetch(material));
    }

    fn resolve_later<Fut>(&self, ticket: u64, fut: Fut)
    where
        Fut: Future<Output = Result<T, FetchError>> + 'static,
    {
        let machine = self.machine;
        spawn_local(async move {
            let outcome = fut.await;
            // try_update: resolving into a disposed panel is a no-op
            machine.try_update(|m| m.resolve(ticket, outcome));
        });
    }
}
