use crate::application::ports::audit::AuditorProvider;

/// Fixed actor name from configuration.
// TODO: resolve the auditor from the authenticated subject once a login
// surface exists.
#[derive(Clone)]
pub struct FixedAuditorProvider {
    auditor: String,
}

impl FixedAuditorProvider {
    pub fn new(auditor: impl Into<String>) -> Self {
        Self {
            auditor: auditor.into(),
        }
    }
}

impl AuditorProvider for FixedAuditorProvider {
    fn current_auditor(&self) -> String {
        self.auditor.clone()
    }
}
