// src/application/ports/audit.rs

/// Supplies the actor name recorded in audit stamps on every write.
pub trait AuditorProvider: Send + Sync {
    fn current_auditor(&self) -> String;
}
