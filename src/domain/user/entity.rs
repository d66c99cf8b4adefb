// src/domain/user/entity.rs
use crate::domain::audit::AuditStamp;
use crate::domain::user::value_objects::{UserId, Username};

/// Board member able to author articles and comments.
///
/// Account management (registration, login) is out of scope; rows exist so
/// that every article and comment holds a valid author reference.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub id: UserId,
    pub username: Username,
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub memo: Option<String>,
    pub audit: AuditStamp,
}
