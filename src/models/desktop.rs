use serde::{Deserialize, Serialize};

/// One live virtual desktop.
///
/// `id` is durable within the session but not across restarts; `number` is
/// the 1-based position in the current enumeration order and is volatile
/// whenever desktops are added or removed. Both are kept on purpose so a
/// restore can fall back from the stable id to the ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopInfo {
    pub id: String,
    pub number: u32,
    pub name: String,
}
