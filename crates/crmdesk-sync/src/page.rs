//! Page identifiers.

use serde::{Deserialize, Serialize};

/// The pages of the console. One refresh action exists per page kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Landing page with statistics and the activity feed.
    Dashboard,
    /// Orders table.
    Orders,
    /// Incoming messages list.
    Messages,
    /// Chat conversations.
    Chat,
    /// Support tickets.
    Support,
    /// Reviews list.
    Reviews,
}

impl Page {
    /// Wire/route name of the page.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Orders => "orders",
            Self::Messages => "messages",
            Self::Chat => "chat",
            Self::Support => "support",
            Self::Reviews => "reviews",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
