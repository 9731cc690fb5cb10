
use crate::{CliClientResult, ClientError, UsersApi};

use std::panic::Location;
use std::sync::Mutex;

use async_trait::async_trait;
use error_location::ErrorLocation;
use ua_core::{ListQuery, NewUser, User, UserDraft};

pub(crate) fn user(id: i64, name: &str, created_at: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: "11912345678".to_string(),
        created_at: created_at.to_string(),
        updated_at: created_at.to_string(),
        deleted_at: None,
    }
}

pub(crate) fn api_error(status: u16, error_id: &str, message: &str) -> ClientError {
    ClientError::Api {
        status,
        error_id: error_id.to_string(),
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// In-memory users API. Mutations fail with `mutation_error` when set.
#[derive(Default)]
pub(crate) struct FakeApi {
    pub users: Mutex<Vec<User>>,
    pub mutation_error: Option<(u16, &'static str, &'static str)>,
    pub requests: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            ..Self::default()
        }
    }

    pub fn failing(mut self, status: u16, error_id: &'static str, message: &'static str) -> Self {
        self.mutation_error = Some((status, error_id, message));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, request: String) -> CliClientResult<()> {
        self.requests.lock().unwrap().push(request);
        Ok(())
    }

    fn mutation_result(&self) -> CliClientResult<()> {
        match self.mutation_error {
            Some((status, error_id, message)) => Err(api_error(status, error_id, message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UsersApi for FakeApi {
    async fn list_users(&self, query: &ListQuery) -> CliClientResult<Vec<User>> {
        self.record(format!("GET {query}"))?;
        let search = query.search.to_lowercase();
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.name.to_lowercase().contains(&search))
            .cloned()
            .collect())
    }

    async fn create_user(&self, new_user: &NewUser) -> CliClientResult<User> {
        self.record(format!("POST {}", new_user.email))?;
        self.mutation_result()?;
        let mut users = self.users.lock().unwrap();
        let created = User {
            id: users.len() as i64 + 1,
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            phone: new_user.phone.clone(),
            ..user(0, "x", "2024-03-01T00:00:00Z")
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn update_user(&self, id: i64, draft: &UserDraft) -> CliClientResult<User> {
        self.record(format!("PUT {id}"))?;
        self.mutation_result()?;
        let mut users = self.users.lock().unwrap();
        let Some(existing) = users.iter_mut().find(|u| u.id == id) else {
            return Err(api_error(404, "id_not_registered", "Id not registered."));
        };
        if let Some(name) = &draft.name {
            existing.name = name.clone();
        }
        if let Some(email) = &draft.email {
            existing.email = email.clone();
        }
        if let Some(phone) = &draft.phone {
            existing.phone = phone.clone();
        }
        Ok(existing.clone())
    }

    async fn delete_user(&self, id: i64) -> CliClientResult<()> {
        self.record(format!("DELETE {id}"))?;
        self.mutation_result()?;
        self.users.lock().unwrap().retain(|u| u.id != id);
        Ok(())
    }
}
