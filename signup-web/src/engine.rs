//! Wires the shared engine to the browser: reqwest transport,
//! localStorage token persistence, and a yewdux-backed render target.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shared::api::SignupApi;
use shared::message::{MESSAGE_HIDE_MS, MessageBoard, TransientMessage};
use shared::roster::{ActivityView, RenderTarget, RosterSync};
use shared::session::{SessionManager, TokenStore};
use yewdux::Dispatch;

use crate::api::SignupClient;
use crate::models::app_state::{AppState, RosterPhase};
use crate::storage::BrowserTokenStore;

/// The client-side engine: session manager and roster sync sharing one
/// API client, rendering through the yewdux store.
#[derive(Debug)]
pub struct Engine {
    /// Authentication token lifecycle and the authorization signal.
    pub session: Rc<SessionManager>,
    /// Activity snapshot and the fetch-and-render cycle.
    pub roster: Rc<RosterSync>,
}

impl Engine {
    /// Build the engine against the shared API client.
    pub fn new(dispatch: Dispatch<AppState>) -> Self {
        let api: Rc<dyn SignupApi> = Rc::new(SignupClient::shared());
        let store: Rc<dyn TokenStore> = Rc::new(BrowserTokenStore);
        let board = Rc::new(MessageBoard::default());
        let target: Rc<dyn RenderTarget> = Rc::new(DispatchTarget {
            dispatch,
            board: board.clone(),
        });
        let session = Rc::new(SessionManager::new(api.clone(), store));
        let roster = Rc::new(RosterSync::new(api, session.clone(), board, target));
        Self { session, roster }
    }
}

/// Cheap, prop-friendly engine handle compared by identity.
#[derive(Debug, Clone)]
pub struct EngineHandle(Rc<Engine>);

impl EngineHandle {
    pub fn new(engine: Engine) -> Self {
        Self(Rc::new(engine))
    }
}

impl PartialEq for EngineHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for EngineHandle {
    type Target = Engine;

    fn deref(&self) -> &Engine {
        &self.0
    }
}

/// [`RenderTarget`] that lands engine output in the yewdux store and
/// schedules each message's auto-hide, scoped to that message's token.
pub(crate) struct DispatchTarget {
    dispatch: Dispatch<AppState>,
    board: Rc<MessageBoard>,
}

impl RenderTarget for DispatchTarget {
    fn roster(&self, view: &[ActivityView]) {
        let view = view.to_vec();
        self.dispatch
            .reduce_mut(move |state| state.roster = RosterPhase::Ready(view));
    }

    fn roster_unavailable(&self) {
        self.dispatch
            .reduce_mut(|state| state.roster = RosterPhase::Unavailable);
    }

    fn message(&self, message: &TransientMessage) {
        let shown = message.clone();
        self.dispatch
            .reduce_mut(move |state| state.message = Some(shown));

        let token = message.token();
        let board = self.board.clone();
        let dispatch = self.dispatch.clone();
        Timeout::new(MESSAGE_HIDE_MS, move || {
            // A message replaced before its timer fires keeps showing;
            // only the message this timer was scheduled for is cleared.
            if board.expire(token) {
                dispatch.reduce_mut(|state| state.message = None);
            }
        })
        .forget();
    }
}
