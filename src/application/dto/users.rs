use crate::domain::user::UserAccount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserAccountDto {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub memo: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    #[serde(with = "serde_time")]
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

impl From<UserAccount> for UserAccountDto {
    fn from(account: UserAccount) -> Self {
        Self {
            id: account.id.into(),
            username: account.username.into(),
            email: account.email,
            nickname: account.nickname,
            memo: account.memo,
            created_at: account.audit.created_at,
            created_by: account.audit.created_by,
            modified_at: account.audit.modified_at,
            modified_by: account.audit.modified_by,
        }
    }
}
