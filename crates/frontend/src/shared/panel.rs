//! Panel data reconciliation.
//!
//! Every panel (overview, insights, materials, orders, capacity,
//! planning board, pegging) is one instantiation of [`PanelMachine`]:
//! a trigger synchronously enters `Loading` (or `Error` when the
//! material code fails validation), the fetch resolves later, and only
//! the most recently issued request may touch visible state — results
//! of superseded requests are dropped on arrival.
//!
//! The machine is deliberately free of reactive types; the Leptos
//! wrapper lives in [`crate::shared::controller`].

use crate::shared::fetch::FetchError;
use crate::shared::validator;

/// What a panel currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    /// No fetch issued yet
    Idle,
    /// A request is in flight
    Loading,
    Success(T),
    /// Successful fetch whose payload has nothing to tabulate;
    /// rendered as an informational notice, not an error banner
    Empty(T),
    Error(String),
}

impl<T> ViewState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, ViewState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            ViewState::Success(payload) | ViewState::Empty(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Per-panel capabilities. One state machine for all panels; the
/// asymmetries of the system (pegging's demo fallback, per-panel empty
/// predicates) are data here, not divergent code paths.
pub struct PanelPolicy<T> {
    /// Classifies a successful payload as `Empty` instead of `Success`
    pub is_empty: Option<fn(&T) -> bool>,
    /// Substitute dataset consulted after a fetch failure, keyed by the
    /// identifier of the failed request. Pegging only.
    pub fallback: Option<fn(&str) -> Option<T>>,
}

impl<T> Default for PanelPolicy<T> {
    fn default() -> Self {
        PanelPolicy {
            is_empty: None,
            fallback: None,
        }
    }
}

impl<T> Clone for PanelPolicy<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PanelPolicy<T> {}

pub struct PanelMachine<T> {
    state: ViewState<T>,
    policy: PanelPolicy<T>,
    /// Sequence number of the most recently issued request; resolutions
    /// carrying an older ticket are stale and get dropped
    seq: u64,
    /// Identifier the current request was issued for (empty for panels
    /// without one)
    identifier: String,
}

impl<T> PanelMachine<T> {
    pub fn new(policy: PanelPolicy<T>) -> Self {
        PanelMachine {
            state: ViewState::Idle,
            policy,
            seq: 0,
            identifier: String::new(),
        }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Trigger for panels without an identifier (mount / tab
    /// activation / refresh). Returns the ticket the eventual
    /// resolution must present.
    pub fn begin(&mut self) -> u64 {
        self.identifier.clear();
        self.advance()
    }

    /// Validated trigger for identifier-driven panels. On a bad code
    /// the panel goes straight to `Error` and no fetch is issued.
    pub fn trigger(&mut self, raw_identifier: &str) -> Option<(u64, String)> {
        let trimmed = raw_identifier.trim();
        if !validator::is_valid_material_code(trimmed) {
            self.state = ViewState::Error("Código de material inválido".to_string());
            return None;
        }
        self.identifier = trimmed.to_string();
        Some((self.advance(), trimmed.to_string()))
    }

    fn advance(&mut self) -> u64 {
        self.seq += 1;
        self.state = ViewState::Loading;
        self.seq
    }

    /// Apply a finished fetch. Returns `false` when the ticket was
    /// superseded and the outcome was dropped.
    pub fn resolve(&mut self, ticket: u64, outcome: Result<T, FetchError>) -> bool {
        if ticket != self.seq {
            return false;
        }
        self.state = match outcome {
            Ok(payload) => self.classify(payload),
            Err(err) => match self.policy.fallback.and_then(|demo| demo(&self.identifier)) {
                Some(substitute) => ViewState::Success(substitute),
                None => ViewState::Error(err.to_string()),
            },
        };
        true
    }

    fn classify(&self, payload: T) -> ViewState<T> {
        match self.policy.is_empty {
            Some(is_empty) if is_empty(&payload) => ViewState::Empty(payload),
            _ => ViewState::Success(payload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Payload {
        material: String,
        rows: Vec<u32>,
    }

    fn payload(material: &str, rows: &[u32]) -> Payload {
        Payload {
            material: material.to_string(),
            rows: rows.to_vec(),
        }
    }

    fn demo(identifier: &str) -> Option<Payload> {
        let trimmed = identifier.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(payload(trimmed, &[7]))
    }

    fn with_fallback() -> PanelMachine<Payload> {
        PanelMachine::new(PanelPolicy {
            is_empty: Some(|p: &Payload| p.rows.is_empty()),
            fallback: Some(demo),
        })
    }

    fn without_fallback() -> PanelMachine<Payload> {
        PanelMachine::new(PanelPolicy {
            is_empty: Some(|p: &Payload| p.rows.is_empty()),
            fallback: None,
        })
    }

    #[test]
    fn trigger_enters_loading_synchronously() {
        let mut machine = without_fallback();
        assert!(machine.state().is_idle());

        let (ticket, material) = machine.trigger("4011835-AA").unwrap();
        assert!(machine.state().is_loading());
        assert_eq!(ticket, 1);
        assert_eq!(material, "4011835-AA");
        assert_eq!(machine.identifier(), "4011835-AA");
    }

    #[test]
    fn invalid_identifier_errors_without_issuing_a_request() {
        let mut machine = without_fallback();
        assert!(machine.trigger("abc_123").is_none());
        assert_eq!(
            machine.state().error(),
            Some("Código de material inválido")
        );

        // the rejected trigger must not have burned a ticket
        let (ticket, _) = machine.trigger("ABC-1").unwrap();
        assert_eq!(ticket, 1);
    }

    #[test]
    fn blank_identifier_is_rejected() {
        let mut machine = without_fallback();
        assert!(machine.trigger("   ").is_none());
        assert!(machine.state().error().is_some());
    }

    #[test]
    fn success_classifies_into_success_or_empty() {
        let mut machine = without_fallback();

        let (ticket, _) = machine.trigger("AA-1").unwrap();
        assert!(machine.resolve(ticket, Ok(payload("AA-1", &[1, 2]))));
        assert_eq!(machine.state().payload().unwrap().rows, vec![1, 2]);
        assert!(matches!(machine.state(), ViewState::Success(_)));

        let (ticket, _) = machine.trigger("AA-1").unwrap();
        assert!(machine.resolve(ticket, Ok(payload("AA-1", &[]))));
        assert!(matches!(machine.state(), ViewState::Empty(_)));
    }

    #[test]
    fn stale_results_are_dropped() {
        let mut machine = without_fallback();

        // R1 for "A", then R2 for "B" before R1 resolves
        let (r1, _) = machine.trigger("A").unwrap();
        let (r2, _) = machine.trigger("B").unwrap();
        assert!(machine.state().is_loading());

        // R2 resolves first, R1 arrives late: final state is R2's
        assert!(machine.resolve(r2, Ok(payload("B", &[2]))));
        assert!(!machine.resolve(r1, Ok(payload("A", &[1]))));
        assert_eq!(machine.state().payload().unwrap().material, "B");
    }

    #[test]
    fn stale_failure_cannot_overwrite_fresh_success() {
        let mut machine = without_fallback();

        let (r1, _) = machine.trigger("A").unwrap();
        let (r2, _) = machine.trigger("B").unwrap();

        assert!(machine.resolve(r2, Ok(payload("B", &[2]))));
        assert!(!machine.resolve(r1, Err(FetchError::HttpStatus { status: 500 })));
        assert!(matches!(machine.state(), ViewState::Success(_)));
    }

    #[test]
    fn fallback_substitutes_demo_data_on_failure() {
        let mut machine = with_fallback();

        let (ticket, _) = machine.trigger("9900001-ZZ").unwrap();
        assert!(machine.resolve(ticket, Err(FetchError::HttpStatus { status: 503 })));

        // failure is cleared, not surfaced
        match machine.state() {
            ViewState::Success(p) => assert_eq!(p.material, "9900001-ZZ"),
            other => panic!("expected demo success, got {:?}", other),
        }
    }

    #[test]
    fn panels_without_fallback_surface_the_failure() {
        let mut machine = without_fallback();

        let (ticket, _) = machine.trigger("9900001-ZZ").unwrap();
        assert!(machine.resolve(ticket, Err(FetchError::HttpStatus { status: 503 })));
        assert_eq!(machine.state().error(), Some("HTTP 503"));
    }

    #[test]
    fn unkeyed_panels_never_fall_back() {
        // same policy shape as pegging, but triggered without an
        // identifier: the provider declines and the error surfaces
        let mut machine = with_fallback();

        let ticket = machine.begin();
        assert!(machine.resolve(ticket, Err(FetchError::Transport {
            detail: "Request failed: connection refused".into(),
        })));
        assert_eq!(
            machine.state().error(),
            Some("Request failed: connection refused")
        );
    }

    #[test]
    fn board_panel_surfaces_server_error_readably() {
        // planning board has no fallback: a 500 for the default
        // material must end in a readable error, never demo data
        let mut machine: PanelMachine<Payload> = PanelMachine::new(PanelPolicy::default());

        let (ticket, material) = machine.trigger("4011835-AA").unwrap();
        assert_eq!(material, "4011835-AA");
        assert!(machine.resolve(ticket, Err(FetchError::HttpStatus { status: 500 })));
        assert_eq!(machine.state().error(), Some("HTTP 500"));
    }

    #[test]
    fn retrigger_after_error_recovers() {
        let mut machine = without_fallback();

        let (ticket, _) = machine.trigger("AA-1").unwrap();
        machine.resolve(ticket, Err(FetchError::HttpStatus { status: 500 }));
        assert!(machine.state().error().is_some());

        let (ticket, _) = machine.trigger("AA-1").unwrap();
        assert!(machine.state().is_loading());
        machine.resolve(ticket, Ok(payload("AA-1", &[3])));
        assert!(matches!(machine.state(), ViewState::Success(_)));
    }
}
