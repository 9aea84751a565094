//! Scripted collaborators for engine tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::api::SignupApi;
use crate::message::TransientMessage;
use crate::models::{Activity, ActivityMap, ApiError, LoginResponse, MeResponse, MessageResponse};
use crate::roster::{ActivityView, RenderTarget};

/// One scripted answer for `GET /activities`.
pub enum ScriptedFetch {
    /// Resolves as soon as it is awaited.
    Ready(Result<ActivityMap, ApiError>),
    /// Resolves when the test fires the paired sender, which lets a test
    /// construct an explicit response interleaving.
    Gated(oneshot::Receiver<Result<ActivityMap, ApiError>>),
}

/// [`SignupApi`] implementation answering from per-endpoint queues and
/// logging every call it receives.
#[derive(Default)]
pub struct ScriptedApi {
    activities: RefCell<VecDeque<ScriptedFetch>>,
    logins: RefCell<VecDeque<Result<LoginResponse, ApiError>>>,
    identities: RefCell<VecDeque<Result<MeResponse, ApiError>>>,
    signups: RefCell<VecDeque<Result<MessageResponse, ApiError>>>,
    unregisters: RefCell<VecDeque<Result<MessageResponse, ApiError>>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedApi {
    pub fn script_activities(&self, response: Result<ActivityMap, ApiError>) {
        self.activities
            .borrow_mut()
            .push_back(ScriptedFetch::Ready(response));
    }

    /// Queue a gated activities answer; the returned sender releases it.
    pub fn gate_activities(&self) -> oneshot::Sender<Result<ActivityMap, ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.activities
            .borrow_mut()
            .push_back(ScriptedFetch::Gated(rx));
        tx
    }

    pub fn script_login(&self, response: Result<LoginResponse, ApiError>) {
        self.logins.borrow_mut().push_back(response);
    }

    pub fn script_me(&self, response: Result<MeResponse, ApiError>) {
        self.identities.borrow_mut().push_back(response);
    }

    pub fn script_signup(&self, response: Result<MessageResponse, ApiError>) {
        self.signups.borrow_mut().push_back(response);
    }

    pub fn script_unregister(&self, response: Result<MessageResponse, ApiError>) {
        self.unregisters.borrow_mut().push_back(response);
    }

    /// Snapshot of the call log.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Drain and return the call log.
    pub fn take_calls(&self) -> Vec<String> {
        self.calls.borrow_mut().drain(..).collect()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl SignupApi for ScriptedApi {
    async fn activities(&self) -> Result<ActivityMap, ApiError> {
        self.record("activities".to_string());
        let scripted = self
            .activities
            .borrow_mut()
            .pop_front()
            .expect("unscripted activities call");
        match scripted {
            ScriptedFetch::Ready(response) => response,
            ScriptedFetch::Gated(rx) => rx.await.expect("gated activities sender dropped"),
        }
    }

    async fn login(&self, username: &str, _password: &str) -> Result<LoginResponse, ApiError> {
        self.record(format!("login {username}"));
        self.logins
            .borrow_mut()
            .pop_front()
            .expect("unscripted login call")
    }

    async fn me(&self, token: &str) -> Result<MeResponse, ApiError> {
        self.record(format!("me {token}"));
        self.identities
            .borrow_mut()
            .pop_front()
            .expect("unscripted me call")
    }

    async fn signup(
        &self,
        activity: &str,
        email: &str,
        token: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.record(format!("signup {activity} {email} {token}"));
        self.signups
            .borrow_mut()
            .pop_front()
            .expect("unscripted signup call")
    }

    async fn unregister(
        &self,
        activity: &str,
        email: &str,
        token: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.record(format!("unregister {activity} {email} {token}"));
        self.unregisters
            .borrow_mut()
            .pop_front()
            .expect("unscripted unregister call")
    }
}

/// Everything a [`RenderTarget`] was asked to display, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Roster(Vec<ActivityView>),
    Unavailable,
    Message(TransientMessage),
}

/// [`RenderTarget`] that records instead of rendering.
#[derive(Default)]
pub struct RecordingTarget {
    events: RefCell<Vec<Rendered>>,
}

impl RecordingTarget {
    pub fn events(&self) -> Vec<Rendered> {
        self.events.borrow().clone()
    }

    /// The most recently rendered roster, if any roster was rendered.
    pub fn last_roster(&self) -> Option<Vec<ActivityView>> {
        self.events
            .borrow()
            .iter()
            .rev()
            .find_map(|event| match event {
                Rendered::Roster(view) => Some(view.clone()),
                _ => None,
            })
    }
}

impl RenderTarget for RecordingTarget {
    fn roster(&self, view: &[ActivityView]) {
        self.events
            .borrow_mut()
            .push(Rendered::Roster(view.to_vec()));
    }

    fn roster_unavailable(&self) {
        self.events.borrow_mut().push(Rendered::Unavailable);
    }

    fn message(&self, message: &TransientMessage) {
        self.events
            .borrow_mut()
            .push(Rendered::Message(message.clone()));
    }
}

/// A bare activity with the given capacity and participants.
pub fn activity(max_participants: u32, participants: &[&str]) -> Activity {
    Activity {
        description: "A school activity".to_string(),
        schedule: "Mondays, 3:30 PM".to_string(),
        max_participants,
        participants: participants.iter().map(ToString::to_string).collect(),
    }
}

/// An [`ActivityMap`] from `(name, capacity, participants)` entries.
pub fn roster_of(entries: &[(&str, u32, &[&str])]) -> ActivityMap {
    entries
        .iter()
        .map(|(name, max, participants)| ((*name).to_string(), activity(*max, participants)))
        .collect()
}
