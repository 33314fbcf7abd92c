/// Severity of a toast notification.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NotificationStatus {
    Success,
    Info,
    Error,
}

/// One toast-style message surfaced after a user action resolves.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    pub status: NotificationStatus,
    pub title: String,
    pub description: Option<String>,
}

impl Notification {
    /// Creates a success toast without a description.
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            status: NotificationStatus::Success,
            title: title.into(),
            description: None,
        }
    }

    /// Creates an informational toast.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status: NotificationStatus::Info,
            title: title.into(),
            description: non_empty(description.into()),
        }
    }

    /// Creates an error toast; an empty description is dropped.
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status: NotificationStatus::Error,
            title: title.into(),
            description: non_empty(description.into()),
        }
    }

    /// Attaches a description to the toast.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = non_empty(description.into());

        self
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}
