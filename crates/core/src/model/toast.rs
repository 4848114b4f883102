use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};

/// Identifier for a transient notification, unique within one `ToastQueue`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    id: ToastId,
    title: String,
    description: Option<String>,
    variant: ToastVariant,
    created_at: DateTime<Utc>,
}

impl Toast {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn variant(&self) -> ToastVariant {
        self.variant
    }
}

/// Bounded, newest-first list of transient notifications.
///
/// Pushing past `limit` drops the oldest entry. Entries older than `lifetime`
/// are removed by `prune_expired`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    limit: usize,
    lifetime: Duration,
    items: VecDeque<Toast>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT, Duration::seconds(Self::DEFAULT_LIFETIME_SECS))
    }
}

impl ToastQueue {
    pub const DEFAULT_LIMIT: usize = 3;
    pub const DEFAULT_LIFETIME_SECS: i64 = 5;

    #[must_use]
    pub fn new(limit: usize, lifetime: Duration) -> Self {
        Self {
            next_id: 1,
            limit: limit.max(1),
            lifetime,
            items: VecDeque::new(),
        }
    }

    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
        variant: ToastVariant,
        now: DateTime<Utc>,
    ) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.items.push_front(Toast {
            id,
            title: title.into(),
            description,
            variant,
            created_at: now,
        });
        self.items.truncate(self.limit);
        id
    }

    /// Returns `true` if a toast with that id was present.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }

    /// Drop toasts that have outlived the queue lifetime; returns how many were removed.
    pub fn prune_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.items.len();
        let lifetime = self.lifetime;
        self.items
            .retain(|toast| now.signed_duration_since(toast.created_at) < lifetime);
        before - self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Toast> {
        self.items.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
