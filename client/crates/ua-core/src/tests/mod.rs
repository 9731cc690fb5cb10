mod app_state;
mod modal;

use crate::User;

pub(crate) fn user(id: i64, name: &str, created_at: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "11912345678".to_string(),
        created_at: created_at.to_string(),
        updated_at: created_at.to_string(),
        deleted_at: None,
    }
}
