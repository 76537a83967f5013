//! In-memory [`UserRepository`] used by the test suite.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::errors::ApiError;
use crate::models::{User, UserChanges};
use crate::repositories::user_repository::parse_user_id;
use crate::repositories::UserRepository;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<ObjectId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn get(&self, id: &ObjectId) -> Option<User> {
        self.users.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, ApiError> {
        let object_id = parse_user_id(id)?;
        Ok(self.get(&object_id))
    }

    async fn insert(&self, user: User) -> Result<ObjectId, ApiError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(ApiError::DuplicateEmail);
        }
        let id = ObjectId::new();
        users.insert(
            id,
            User {
                id: Some(id),
                added_on: Some(DateTime::now()),
                updated_on: None,
                ..user
            },
        );
        Ok(id)
    }

    async fn partial_update(&self, id: &str, changes: &UserChanges) -> Result<(), ApiError> {
        let object_id = parse_user_id(id)?;
        let mut users = self.users.lock().unwrap();
        let user = users.get_mut(&object_id).ok_or(ApiError::NotFound)?;
        apply_changes(user, changes, DateTime::now());
        Ok(())
    }

    async fn delete_and_return(&self, id: &str) -> Result<Option<User>, ApiError> {
        let object_id = parse_user_id(id)?;
        Ok(self.users.lock().unwrap().remove(&object_id))
    }
}

/// Repository whose every call fails the way an unreachable server does.
pub struct UnavailableUserRepository;

#[async_trait]
impl UserRepository for UnavailableUserRepository {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, ApiError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, ApiError> {
        parse_user_id(id)?;
        Err(unavailable())
    }

    async fn insert(&self, _user: User) -> Result<ObjectId, ApiError> {
        Err(unavailable())
    }

    async fn partial_update(&self, id: &str, _changes: &UserChanges) -> Result<(), ApiError> {
        parse_user_id(id)?;
        Err(unavailable())
    }

    async fn delete_and_return(&self, id: &str) -> Result<Option<User>, ApiError> {
        parse_user_id(id)?;
        Err(unavailable())
    }
}

/// Mirror of a `$set`: copy the supplied fields and stamp `updated_on`.
fn apply_changes(user: &mut User, changes: &UserChanges, now: DateTime) {
    if let Some(ref firstname) = changes.firstname {
        user.firstname = firstname.clone();
    }
    if let Some(ref lastname) = changes.lastname {
        user.lastname = lastname.clone();
    }
    if let Some(dob) = changes.dob {
        user.dob = dob;
    }
    if let Some(ref address) = changes.address {
        user.address = address.clone();
    }
    if let Some(ref gender) = changes.gender {
        user.gender = gender.clone();
    }
    if let Some(ref email) = changes.email {
        user.email = email.clone();
    }
    if let Some(ref phone_number) = changes.phone_number {
        user.phone_number = phone_number.clone();
    }
    user.updated_on = Some(now);
}

fn unavailable() -> ApiError {
    ApiError::Store("Server selection timeout: No available servers".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_apply_touches_only_supplied_fields() {
        let mut user = User {
            id: Some(ObjectId::new()),
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            dob: NaiveDate::from_ymd_opt(1815, 12, 10).unwrap(),
            address: "12 St James's Square, London".to_string(),
            gender: "female".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: "0123456789".to_string(),
            added_on: Some(DateTime::from_millis(1_000)),
            updated_on: None,
        };
        let before = user.clone();
        let changes = UserChanges {
            address: Some("Marylebone".to_string()),
            ..Default::default()
        };

        apply_changes(&mut user, &changes, DateTime::from_millis(2_000));

        assert_eq!(user.address, "Marylebone");
        assert_eq!(user.firstname, before.firstname);
        assert_eq!(user.email, before.email);
        assert_eq!(user.added_on, before.added_on);
        assert_eq!(user.updated_on, Some(DateTime::from_millis(2_000)));
    }
}
