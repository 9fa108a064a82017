use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    error::{NavigationError, RestoreError},
    routable::{Catalog, Screen},
    route_definition::ArgumentBinding,
};

use super::{BackStack, Entry};

/// One entry of a [`SavedBackStack`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedEntry {
    /// The route template, e.g. `Accounts/{name}`.
    pub template: String,
    /// The bound arguments, decoded.
    #[serde(default)]
    pub args: ArgumentBinding,
}

/// A back stack stored as plain data, for process restore.
///
/// ```rust
/// # use rally_router::prelude::*;
/// let mut navigator = Navigator::new();
/// navigator.navigate("Accounts/Checking").unwrap();
///
/// let blob = navigator.save().to_json().unwrap();
/// let restored = Navigator::restored(
///     SavedBackStack::from_json(&blob).unwrap(),
///     NavigatorConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(restored.back_stack(), navigator.back_stack());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedBackStack {
    /// Saved entries, root first.
    pub entries: Vec<SavedEntry>,
}

impl SavedBackStack {
    /// Snapshot a back stack.
    pub fn capture(stack: &BackStack) -> Self {
        Self {
            entries: stack
                .entries()
                .map(|entry| SavedEntry {
                    template: entry.template().as_str().to_string(),
                    args: entry.args().clone(),
                })
                .collect(),
        }
    }

    /// Encode as the opaque restore blob.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decode an opaque restore blob.
    pub fn from_json(blob: &str) -> Result<Self, RestoreError> {
        Ok(serde_json::from_str(blob)?)
    }

    /// Validate every entry and split off the root.
    ///
    /// Returns the entries above the root.
    pub(crate) fn into_entries(self) -> Result<Vec<Entry>, RestoreError> {
        let mut entries = self
            .entries
            .into_iter()
            .enumerate()
            .map(|(index, saved)| {
                let entry = Catalog::by_template(&saved.template)
                    .ok_or_else(|| NavigationError::unknown_route(saved.template.as_str()))
                    .and_then(|screen| Entry::new(screen, saved.args))
                    .map_err(|source| RestoreError::InvalidEntry { index, source });
                if let Err(err) = &entry {
                    warn!("rejecting saved back stack: {err}");
                }
                entry
            })
            .collect::<Result<Vec<_>, _>>()?;

        if entries.is_empty() {
            return Err(RestoreError::Empty);
        }

        let root = entries.remove(0);
        if root.screen() != Screen::Overview {
            warn!("rejecting saved back stack rooted at {root}");
            return Err(RestoreError::InvalidRoot {
                template: root.template().as_str().to_string(),
            });
        }

        Ok(entries)
    }
}
