/// How the initial restore from durable storage ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Nothing was persisted; signed out.
    NoRecord,
    /// A fresh record was found; signed in.
    Restored,
    /// The record's credential had expired; record purged, signed out.
    Expired,
    /// The record or its credential could not be decoded; record purged, signed out.
    Corrupted,
    /// The storage backend could not be read; signed out, record left in place.
    Unreadable,
}

impl RestoreOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Restored)
    }
}
