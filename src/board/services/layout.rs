//! Board rendering hints derived from an effective policy.

use crate::board::domain::{EffectivePolicy, Status};
use serde::{Deserialize, Serialize};

/// One visible board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardColumn {
    /// Status the column displays.
    pub status: Status,
    /// Whether cards in this column get a drag handle.
    pub draggable: bool,
    /// Columns a card from this one may be dropped into, in board order.
    pub drop_targets: Vec<Status>,
}

/// Columns visible to a user, in board order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    columns: Vec<BoardColumn>,
}

impl BoardLayout {
    /// Builds the layout for a resolved policy.
    #[must_use]
    pub fn from_policy(policy: &EffectivePolicy) -> Self {
        let columns = Status::ALL
            .into_iter()
            .filter(|status| policy.allows_status(*status))
            .map(|status| BoardColumn {
                status,
                draggable: policy.can_drag_from(status),
                drop_targets: policy.targets_from(status).collect(),
            })
            .collect();
        Self { columns }
    }

    /// Returns the visible columns.
    #[must_use]
    pub fn columns(&self) -> &[BoardColumn] {
        &self.columns
    }

    /// Returns the column for `status` when it is visible.
    #[must_use]
    pub fn column(&self, status: Status) -> Option<&BoardColumn> {
        self.columns.iter().find(|column| column.status == status)
    }

    /// Returns `true` when no column is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
