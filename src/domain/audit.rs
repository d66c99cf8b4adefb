// src/domain/audit.rs
use chrono::{DateTime, Utc};

/// Creation and modification metadata carried by every persisted entity.
///
/// Stamps are applied explicitly by the command services from the clock and
/// auditor ports; there is no framework-level interception.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditStamp {
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

impl AuditStamp {
    pub fn new(auditor: impl Into<String>, at: DateTime<Utc>) -> Self {
        let auditor = auditor.into();
        Self {
            created_at: at,
            created_by: auditor.clone(),
            modified_at: at,
            modified_by: auditor,
        }
    }

    /// Restamp the modification half. The creation half never changes.
    pub fn touch(&mut self, auditor: impl Into<String>, at: DateTime<Utc>) {
        self.modified_at = at;
        self.modified_by = auditor.into();
    }
}
