use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One extracurricular activity as served by `GET /activities`.
///
/// The activity name is not part of the payload; it is the key of the
/// enclosing JSON object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    /// Human-readable description of the activity.
    pub description: String,

    /// Free-form meeting schedule, e.g. "Mondays, 3:30 PM".
    pub schedule: String,

    /// Capacity enforced by the server. The client renders it but never
    /// assumes it locally; an enrollment can still be rejected by the
    /// server in a race.
    pub max_participants: u32,

    /// Enrolled student emails, in server order.
    pub participants: Vec<String>,
}

/// The full activity collection keyed by unique activity name.
///
/// The server sends a JSON object; a `BTreeMap` keeps the render order
/// stable across fetches.
pub type ActivityMap = BTreeMap<String, Activity>;
