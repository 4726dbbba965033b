//! Fetch state for a single dashboard slice.

use std::fmt::Display;

/// State of data that comes from the backend.
///
/// Failed and pending states keep the last data that loaded successfully so
/// a table never goes blank just because a reload is in flight or broke.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    /// Request issued, no answer yet.
    Pending { last: Option<T> },
    /// Last request succeeded.
    Loaded(T),
    /// Last request failed.
    Failed { error: String, last: Option<T> },
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Remote::Pending { last: None }
    }
}

impl<T> Remote<T> {
    /// Data to display, if any has ever loaded.
    pub fn data(&self) -> Option<&T> {
        match self {
            Remote::Loaded(data) => Some(data),
            Remote::Pending { last } | Remote::Failed { last, .. } => last.as_ref(),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Remote::Pending { .. })
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Remote::Loaded(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Remote::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Move into `Pending`, keeping whatever data is shown.
    pub fn mark_pending(&mut self) {
        let last = self.take_data();
        *self = Remote::Pending { last };
    }

    /// Record the outcome of a request.
    pub fn resolve<E: Display>(&mut self, result: Result<T, E>) {
        *self = match result {
            Ok(data) => Remote::Loaded(data),
            Err(e) => Remote::Failed {
                error: e.to_string(),
                last: self.take_data(),
            },
        };
    }

    fn take_data(&mut self) -> Option<T> {
        match std::mem::take(self) {
            Remote::Loaded(data) => Some(data),
            Remote::Pending { last } | Remote::Failed { last, .. } => last,
        }
    }
}
