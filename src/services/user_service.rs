//! User service for the create/read/update/delete operations.

use mongodb::bson::oid::ObjectId;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::errors::ApiError;
use crate::models::{CreateUserRequest, UpdateUserRequest, User, UserChanges};
use crate::repositories::UserRepository;
use crate::utils::log_sanitizer::{mask_email, mask_phone_number};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Register a new user after checking the email is not taken.
    pub async fn create_user(&self, req: CreateUserRequest) -> Result<ObjectId, ApiError> {
        let user = User::from(req);
        if self.repository.find_by_email(&user.email).await?.is_some() {
            warn!(
                "Create failed: email {} already registered",
                mask_email(&user.email)
            );
            return Err(ApiError::DuplicateEmail);
        }

        debug!(
            "Creating user {} / {}",
            mask_email(&user.email),
            mask_phone_number(&user.phone_number)
        );
        let id = self.repository.insert(user).await?;
        info!("Created user {}", id);
        Ok(id)
    }

    pub async fn get_user(&self, user_id: &str) -> Result<User, ApiError> {
        debug!("Fetching user by ID: {}", user_id);
        self.repository.find_by_id(user_id).await?.ok_or_else(|| {
            warn!("User not found with id: {}", user_id);
            ApiError::NotFound
        })
    }

    /// Apply a partial update.
    ///
    /// Order of checks: id syntax, existence, non-empty payload, email
    /// uniqueness against other users.
    pub async fn update_user(&self, user_id: &str, req: UpdateUserRequest) -> Result<(), ApiError> {
        let existing = self.repository.find_by_id(user_id).await?.ok_or_else(|| {
            warn!("Update failed: User not found with id: {}", user_id);
            ApiError::NotFound
        })?;

        let changes = UserChanges::from(req);
        if changes.is_empty() {
            warn!("Update rejected: no fields supplied for user {}", user_id);
            return Err(ApiError::EmptyUpdate);
        }

        if let Some(ref new_email) = changes.email {
            if *new_email != existing.email {
                if let Some(other) = self.repository.find_by_email(new_email).await? {
                    if other.id != existing.id {
                        warn!(
                            "Update failed: Email {} already taken by another user",
                            mask_email(new_email)
                        );
                        return Err(ApiError::DuplicateEmail);
                    }
                }
            }
        }

        self.repository.partial_update(user_id, &changes).await?;
        info!("Updated user {}", user_id);
        Ok(())
    }

    /// Permanently delete a user, returning the removed record.
    pub async fn delete_user(&self, user_id: &str) -> Result<User, ApiError> {
        let deleted = self
            .repository
            .delete_and_return(user_id)
            .await?
            .ok_or_else(|| {
                warn!("Delete failed: User not found with id: {}", user_id);
                ApiError::NotFound
            })?;
        info!("Deleted user {}", user_id);
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::{InMemoryUserRepository, UnavailableUserRepository};
    use chrono::NaiveDate;
    use serde_json::json;

    fn create_request(email: &str) -> CreateUserRequest {
        serde_json::from_value(json!({
            "firstname": "Linus",
            "lastname": "Torvalds",
            "dob": "1969-12-28",
            "address": "Portland, Oregon",
            "gender": "male",
            "email": email,
            "phone_number": "5035550100"
        }))
        .unwrap()
    }

    fn update_request(value: serde_json::Value) -> UpdateUserRequest {
        serde_json::from_value(value).unwrap()
    }

    fn service() -> (Arc<InMemoryUserRepository>, UserService) {
        let repository = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(repository.clone());
        (repository, service)
    }

    #[actix_web::test]
    async fn test_create_assigns_id_and_added_on() {
        let (repository, service) = service();
        let id = service.create_user(create_request("linus@example.com")).await.unwrap();

        let stored = repository.get(&id).unwrap();
        assert_eq!(stored.id, Some(id));
        assert!(stored.added_on.is_some());
        assert!(stored.updated_on.is_none());
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_not_inserted() {
        let (repository, service) = service();
        service.create_user(create_request("linus@example.com")).await.unwrap();

        let err = service
            .create_user(create_request("linus@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::DuplicateEmail);
        assert_eq!(repository.len(), 1);
    }

    #[actix_web::test]
    async fn test_get_checks_syntax_then_existence() {
        let (_, service) = service();
        assert_eq!(service.get_user("xyz").await.unwrap_err(), ApiError::InvalidId);
        assert_eq!(
            service.get_user(&ObjectId::new().to_hex()).await.unwrap_err(),
            ApiError::NotFound
        );
    }

    #[actix_web::test]
    async fn test_update_is_partial_and_stamps_updated_on() {
        let (repository, service) = service();
        let id = service.create_user(create_request("linus@example.com")).await.unwrap();

        service
            .update_user(&id.to_hex(), update_request(json!({ "dob": "1970-01-01" })))
            .await
            .unwrap();

        let stored = repository.get(&id).unwrap();
        assert_eq!(stored.dob, NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert_eq!(stored.firstname, "Linus");
        assert_eq!(stored.email, "linus@example.com");
        let added_on = stored.added_on.unwrap();
        let updated_on = stored.updated_on.unwrap();
        assert!(added_on <= updated_on);
    }

    #[actix_web::test]
    async fn test_empty_update_leaves_record_unchanged() {
        let (repository, service) = service();
        let id = service.create_user(create_request("linus@example.com")).await.unwrap();
        let before = repository.get(&id).unwrap();

        let err = service
            .update_user(&id.to_hex(), update_request(json!({})))
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::EmptyUpdate);
        assert_eq!(repository.get(&id).unwrap(), before);
    }

    #[actix_web::test]
    async fn test_update_missing_user() {
        let (_, service) = service();
        let err = service
            .update_user(&ObjectId::new().to_hex(), update_request(json!({ "gender": "x" })))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::NotFound);
    }

    #[actix_web::test]
    async fn test_update_email_must_stay_unique() {
        let (repository, service) = service();
        let first = service.create_user(create_request("a@example.com")).await.unwrap();
        service.create_user(create_request("b@example.com")).await.unwrap();

        let err = service
            .update_user(&first.to_hex(), update_request(json!({ "email": "b@example.com" })))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::DuplicateEmail);
        assert_eq!(repository.get(&first).unwrap().email, "a@example.com");

        // Re-submitting one's own email is fine.
        service
            .update_user(&first.to_hex(), update_request(json!({ "email": "a@example.com" })))
            .await
            .unwrap();
    }

    #[actix_web::test]
    async fn test_delete_returns_record_then_not_found() {
        let (repository, service) = service();
        let id = service.create_user(create_request("linus@example.com")).await.unwrap();

        let deleted = service.delete_user(&id.to_hex()).await.unwrap();
        assert_eq!(deleted.email, "linus@example.com");
        assert_eq!(repository.len(), 0);

        assert_eq!(
            service.delete_user(&id.to_hex()).await.unwrap_err(),
            ApiError::NotFound
        );
    }

    #[actix_web::test]
    async fn test_store_failures_surface_as_store_errors() {
        let service = UserService::new(Arc::new(UnavailableUserRepository));

        assert!(matches!(
            service.create_user(create_request("linus@example.com")).await,
            Err(ApiError::Store(_))
        ));
        assert!(matches!(
            service.get_user(&ObjectId::new().to_hex()).await,
            Err(ApiError::Store(_))
        ));
        assert!(matches!(
            service
                .update_user(&ObjectId::new().to_hex(), update_request(json!({ "gender": "x" })))
                .await,
            Err(ApiError::Store(_))
        ));
        assert!(matches!(
            service.delete_user(&ObjectId::new().to_hex()).await,
            Err(ApiError::Store(_))
        ));
        assert_eq!(service.get_user("bad").await.unwrap_err(), ApiError::InvalidId);
    }

    #[actix_web::test]
    async fn test_duplicate_check_ignores_domain_case() {
        let (repository, service) = service();
        service.create_user(create_request("ada@example.com")).await.unwrap();

        let err = service
            .create_user(create_request("ada@EXAMPLE.COM"))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::DuplicateEmail);
        assert_eq!(repository.len(), 1);
    }
}
