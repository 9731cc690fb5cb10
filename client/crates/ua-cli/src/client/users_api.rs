use crate::CliClientResult;

use async_trait::async_trait;
use ua_core::{ListQuery, NewUser, User, UserDraft};

/// The remote users resource.
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// `GET /api/users/{search}` or `GET /api/users/date/{range}/{search}`
    async fn list_users(&self, query: &ListQuery) -> CliClientResult<Vec<User>>;

    /// `POST /api/users/`
    async fn create_user(&self, user: &NewUser) -> CliClientResult<User>;

    /// `PUT /api/users/{id}` with the partial user
    async fn update_user(&self, id: i64, draft: &UserDraft) -> CliClientResult<User>;

    /// `DELETE /api/users/{id}`
    async fn delete_user(&self, id: i64) -> CliClientResult<()>;
}
