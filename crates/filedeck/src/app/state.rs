//! Panel state container and its transitions.
//!
//! [`PanelState`] is only mutated through the methods in this module; the
//! [`App`](crate::app::App) decides when to call them and owns the tasks that
//! talk to the store.

use std::collections::VecDeque;

use tracing::debug;

use crate::domain::file::{FileEntry, Location};
use crate::domain::notification::Notification;
use crate::infra::file_store::StoreError;

/// Identifies one issued inventory fetch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FetchTicket {
    /// Location the fetch was issued for.
    pub location: Location,
    /// Monotonic fetch counter at issue time.
    pub generation: u64,
}

/// Result of reducing one fetch outcome into the panel state.
#[derive(Debug, Eq, PartialEq)]
pub enum FetchOutcome {
    /// The entries replaced the displayed inventory.
    Applied,
    /// The result belonged to a superseded location or an older fetch.
    Discarded,
    /// The fetch failed; the previous inventory was kept.
    Failed(String),
}

/// Entries displayed for one location together with the fetch that produced
/// them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Inventory {
    location: Location,
    entries: Vec<FileEntry>,
    generation: Option<u64>,
}

impl Inventory {
    fn empty(location: Location) -> Self {
        Self {
            location,
            entries: Vec::new(),
            generation: None,
        }
    }

    /// Location these entries were fetched for.
    pub fn location(&self) -> Location {
        self.location
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Returns whether an entry named `name` is displayed.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }
}

/// What submitting the rename draft resolved to.
#[derive(Debug, Eq, PartialEq)]
pub enum RenameSubmission {
    /// No file is being edited.
    NotEditing,
    /// Draft equals the current name; editing ended without a store call.
    Unchanged,
    /// Draft is empty; editing continues.
    EmptyDraft,
    /// A rename from `from` to `to` must be sent to the store.
    Rename { from: String, to: String },
}

/// Single-slot in-place rename state.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum EditState {
    #[default]
    Idle,
    Editing { file_name: String, draft: String },
}

impl EditState {
    /// Starts editing `file_name` with the draft pre-filled. Any other
    /// in-progress draft is discarded.
    pub fn begin(&mut self, file_name: &str) {
        *self = Self::Editing {
            file_name: file_name.to_string(),
            draft: file_name.to_string(),
        };
    }

    /// Replaces the draft text. Ignored while idle.
    pub fn set_draft(&mut self, text: String) {
        if let Self::Editing { draft, .. } = self {
            *draft = text;
        }
    }

    pub fn push_char(&mut self, character: char) {
        if let Self::Editing { draft, .. } = self {
            draft.push(character);
        }
    }

    pub fn pop_char(&mut self) {
        if let Self::Editing { draft, .. } = self {
            draft.pop();
        }
    }

    /// Resolves a submit of the current draft.
    ///
    /// An unchanged draft returns to [`EditState::Idle`]; an empty draft and a
    /// real rename both leave the state editing.
    pub fn submit(&mut self) -> RenameSubmission {
        let Self::Editing { file_name, draft } = self else {
            return RenameSubmission::NotEditing;
        };

        if draft == file_name {
            *self = Self::Idle;

            return RenameSubmission::Unchanged;
        }
        if draft.is_empty() {
            return RenameSubmission::EmptyDraft;
        }

        RenameSubmission::Rename {
            from: file_name.clone(),
            to: draft.clone(),
        }
    }

    /// Ends editing after `from` was renamed, unless the user has moved on
    /// to another file meanwhile.
    pub fn complete(&mut self, from: &str) {
        if self.editing_file() == Some(from) {
            *self = Self::Idle;
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Name of the file being edited, if any.
    pub fn editing_file(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Editing { file_name, .. } => Some(file_name),
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Editing { draft, .. } => Some(draft),
        }
    }
}

/// Bounded toast queue; the oldest toast is dropped when full.
#[derive(Debug)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    limit: usize,
}

impl NotificationQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            items: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    pub fn push(&mut self, notification: Notification) {
        if self.items.len() == self.limit {
            self.items.pop_front();
        }

        self.items.push_back(notification);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// All mutable panel state.
#[derive(Debug)]
pub struct PanelState {
    location: Location,
    inventory: Inventory,
    loading: bool,
    issued_generation: u64,
    edit: EditState,
    notifications: NotificationQueue,
}

impl PanelState {
    pub fn new(location: Location, notification_limit: usize) -> Self {
        Self {
            location,
            inventory: Inventory::empty(location),
            loading: false,
            issued_generation: 0,
            edit: EditState::Idle,
            notifications: NotificationQueue::new(notification_limit),
        }
    }

    /// Currently selected location.
    pub fn location(&self) -> Location {
        self.location
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Whether the most recently issued fetch is still pending.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn edit(&self) -> &EditState {
        &self.edit
    }

    pub fn edit_mut(&mut self) -> &mut EditState {
        &mut self.edit
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn dismiss_notifications(&mut self) {
        self.notifications.clear();
    }

    /// Selects `location`, invalidating the inventory and any rename draft.
    ///
    /// Returns `false` when `location` is already selected.
    pub fn switch_location(&mut self, location: Location) -> bool {
        if self.location == location {
            return false;
        }

        self.location = location;
        self.inventory = Inventory::empty(location);
        self.edit.cancel();

        true
    }

    /// Registers a new fetch for the current location and marks the panel
    /// as loading.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued_generation += 1;
        self.loading = true;

        FetchTicket {
            location: self.location,
            generation: self.issued_generation,
        }
    }

    /// Reduces a finished fetch into the state.
    ///
    /// Results for a location other than the selected one, or older than the
    /// displayed inventory, are discarded. A failure keeps the last-good
    /// inventory.
    pub fn apply_fetch_result(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<FileEntry>, StoreError>,
    ) -> FetchOutcome {
        if ticket.location != self.location {
            debug!(
                issued_for = %ticket.location,
                selected = %self.location,
                generation = ticket.generation,
                "Discarding inventory for superseded location"
            );

            return FetchOutcome::Discarded;
        }

        if ticket.generation == self.issued_generation {
            self.loading = false;
        }

        if self
            .inventory
            .generation
            .is_some_and(|displayed| displayed > ticket.generation)
        {
            debug!(
                generation = ticket.generation,
                "Discarding inventory older than the displayed one"
            );

            return FetchOutcome::Discarded;
        }

        match result {
            Ok(entries) => {
                self.inventory = Inventory {
                    location: ticket.location,
                    entries,
                    generation: Some(ticket.generation),
                };

                FetchOutcome::Applied
            }
            Err(error) => FetchOutcome::Failed(error.to_string()),
        }
    }
}
