use shared::message::TransientMessage;
use shared::roster::ActivityView;
use yewdux::Store;

/// View state the component tree renders from. The engine replaces these
/// fields wholesale through [`crate::engine::DispatchTarget`]; components
/// never mutate them directly.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    /// Display name of the signed-in teacher, if any.
    pub teacher: Option<String>,
    /// What the roster area currently shows.
    pub roster: RosterPhase,
    /// The at-most-one visible transient message.
    pub message: Option<TransientMessage>,
}

/// Lifecycle of the roster area.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum RosterPhase {
    /// Initial fetch has not completed yet.
    #[default]
    Loading,
    /// Latest applied snapshot, fully projected.
    Ready(Vec<ActivityView>),
    /// The last fetch failed; a static notice is shown instead.
    Unavailable,
}
