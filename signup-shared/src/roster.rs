//! Activity snapshot ownership and the fetch-and-render cycle.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::api::SignupApi;
use crate::message::{MessageBoard, MessageKind};
use crate::models::{Activity, ActivityMap};
use crate::session::SessionManager;

/// Blocked-enrollment text shown when no teacher is signed in.
pub const REGISTER_REQUIRES_TEACHER: &str =
    "You must be logged in as a teacher to register students.";

/// Blocked-withdrawal text shown when no teacher is signed in.
pub const UNREGISTER_REQUIRES_TEACHER: &str =
    "You must be logged in as a teacher to unregister students.";

/// Transport-failure text for an enrollment that never reached the server.
pub const REGISTER_UNREACHABLE: &str = "Failed to sign up. Please try again.";

/// Transport-failure text for a withdrawal that never reached the server.
pub const UNREGISTER_UNREACHABLE: &str = "Failed to unregister. Please try again.";

/// Static notice rendered in place of the roster when the fetch fails.
pub const ACTIVITIES_UNAVAILABLE: &str = "Failed to load activities. Please try again later.";

/// One activity projected for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityView {
    /// Unique activity name.
    pub name: String,
    /// Description text.
    pub description: String,
    /// Meeting schedule text.
    pub schedule: String,
    /// `max_participants - participants.len()`, signed so an over-capacity
    /// server answer still renders.
    pub spots_left: i64,
    /// Enrolled emails, in snapshot order.
    pub participants: Vec<String>,
    /// Whether each participant gets a removal affordance. This tracks the
    /// authorization signal at projection time and is a UX convenience
    /// only; the server independently rejects unauthorized mutations.
    pub removable: bool,
}

impl ActivityView {
    fn project(name: &str, activity: &Activity, removable: bool) -> Self {
        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: i64::from(activity.max_participants) - activity.participants.len() as i64,
            participants: activity.participants.clone(),
            removable,
        }
    }
}

/// Where projected snapshots and transient messages land.
///
/// The browser frontend dispatches these into the component tree; tests
/// record them. The engine never touches the DOM.
pub trait RenderTarget {
    /// Replace the whole roster view with a fresh projection.
    fn roster(&self, view: &[ActivityView]);
    /// Replace the roster view with the static failure notice.
    fn roster_unavailable(&self);
    /// Show a transient message and schedule its auto-hide.
    fn message(&self, message: &crate::message::TransientMessage);
}

/// Owns the activity snapshot and reconciles it with server state.
///
/// The snapshot is replaced wholesale on every successful fetch, never
/// patched, so correctness comes from trusting the latest full answer.
/// Overlapping fetches are allowed and resolve last-applied-wins; nothing
/// is cancelled or retried.
pub struct RosterSync {
    api: Rc<dyn SignupApi>,
    session: Rc<SessionManager>,
    board: Rc<MessageBoard>,
    target: Rc<dyn RenderTarget>,
    snapshot: RefCell<ActivityMap>,
}

impl fmt::Debug for RosterSync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RosterSync")
            .field("activities", &self.snapshot.borrow().len())
            .finish_non_exhaustive()
    }
}

impl RosterSync {
    /// A sync engine with an empty snapshot.
    pub fn new(
        api: Rc<dyn SignupApi>,
        session: Rc<SessionManager>,
        board: Rc<MessageBoard>,
        target: Rc<dyn RenderTarget>,
    ) -> Self {
        Self {
            api,
            session,
            board,
            target,
            snapshot: RefCell::new(ActivityMap::new()),
        }
    }

    /// Fetch the full collection, replace the snapshot, and re-render.
    ///
    /// Safe to call repeatedly; each completed call supersedes whatever a
    /// prior call rendered. On failure the roster view becomes the static
    /// failure notice and the snapshot keeps its previous contents.
    pub async fn fetch_and_render(&self) {
        match self.api.activities().await {
            Ok(map) => {
                *self.snapshot.borrow_mut() = map;
                self.render_current();
            }
            Err(err) => {
                tracing::warn!(error = %err, "activities fetch failed");
                self.target.roster_unavailable();
            }
        }
    }

    /// Re-project the existing snapshot without a fetch.
    ///
    /// Needed after login and logout so removal affordances track the
    /// authorization signal instead of waiting for the next mutation.
    pub fn render_current(&self) {
        let removable = self.session.is_authorized();
        let view: Vec<ActivityView> = self
            .snapshot
            .borrow()
            .iter()
            .map(|(name, activity)| ActivityView::project(name, activity, removable))
            .collect();
        self.target.roster(&view);
    }

    /// Enroll `email` in `activity`.
    ///
    /// Unauthorized calls surface an error and never reach the network.
    /// A server-accepted enrollment posts the confirmation text and then
    /// runs exactly one fetch-and-render; a rejected one posts the server's
    /// reason and leaves the displayed roster alone.
    ///
    /// Returns whether the server accepted, so the form layer can decide
    /// to reset its fields.
    pub async fn enroll(&self, activity: &str, email: &str) -> bool {
        let Some(token) = self.session.token() else {
            let message = self.board.post(MessageKind::Error, REGISTER_REQUIRES_TEACHER);
            self.target.message(&message);
            return false;
        };

        match self.api.signup(activity, email, &token).await {
            Ok(response) => {
                let message = self.board.post(MessageKind::Success, response.message);
                self.target.message(&message);
                self.fetch_and_render().await;
                true
            }
            Err(err) => {
                let message = self
                    .board
                    .post(MessageKind::Error, err.surface_text(REGISTER_UNREACHABLE));
                self.target.message(&message);
                false
            }
        }
    }

    /// Remove `email` from `activity`. Same contract as
    /// [`enroll`](Self::enroll) on the unregister endpoint.
    pub async fn withdraw(&self, activity: &str, email: &str) -> bool {
        let Some(token) = self.session.token() else {
            let message = self
                .board
                .post(MessageKind::Error, UNREGISTER_REQUIRES_TEACHER);
            self.target.message(&message);
            return false;
        };

        match self.api.unregister(activity, email, &token).await {
            Ok(response) => {
                let message = self.board.post(MessageKind::Success, response.message);
                self.target.message(&message);
                self.fetch_and_render().await;
                true
            }
            Err(err) => {
                let message = self
                    .board
                    .post(MessageKind::Error, err.surface_text(UNREGISTER_UNREACHABLE));
                self.target.message(&message);
                false
            }
        }
    }
}
