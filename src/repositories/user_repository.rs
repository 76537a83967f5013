//! User repository for all MongoDB operations related to users.

use async_trait::async_trait;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId, to_document, DateTime};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

use crate::constants::{COLLECTION_USERS, ERR_MISSING_INSERTED_ID};
use crate::errors::ApiError;
use crate::models::{User, UserChanges};

/// Single-document operations on the users collection.
///
/// Ids arrive as strings and are syntax-checked before any query runs.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, ApiError>;

    /// Store a new user, stamping `added_on`, and return the generated id.
    async fn insert(&self, user: User) -> Result<ObjectId, ApiError>;

    /// `$set` the supplied fields and `updated_on`. `NotFound` if nothing matched.
    async fn partial_update(&self, id: &str, changes: &UserChanges) -> Result<(), ApiError>;

    /// Atomically remove a user and hand back what was stored.
    async fn delete_and_return(&self, id: &str) -> Result<Option<User>, ApiError>;
}

/// Parse a path id into an `ObjectId`, rejecting malformed input.
pub fn parse_user_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::InvalidId)
}

/// MongoDB-backed [`UserRepository`].
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// Create a new MongoUserRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_USERS),
        }
    }

    /// Create the unique index on `email`.
    ///
    /// Called once during startup. The index backs the pre-insert email check
    /// when two creates race.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for users collection...");

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection.create_index(email_index).await?;
        info!("Database indexes created successfully");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by email");
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, ApiError> {
        let object_id = parse_user_id(id)?;
        debug!("Repository: Finding user by ID: {}", object_id);
        Ok(self.collection.find_one(doc! { "_id": object_id }).await?)
    }

    async fn insert(&self, user: User) -> Result<ObjectId, ApiError> {
        let user = User {
            id: None,
            added_on: Some(DateTime::now()),
            updated_on: None,
            ..user
        };
        let result = self.collection.insert_one(&user).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::Store(ERR_MISSING_INSERTED_ID.to_string()))
    }

    async fn partial_update(&self, id: &str, changes: &UserChanges) -> Result<(), ApiError> {
        let object_id = parse_user_id(id)?;
        let mut set = to_document(changes)?;
        set.insert("updated_on", DateTime::now());

        debug!(
            "Repository: Updating fields {:?} of user {}",
            set.keys().collect::<Vec<_>>(),
            object_id
        );
        let result = self
            .collection
            .update_one(doc! { "_id": object_id }, doc! { "$set": set })
            .await?;

        if result.matched_count == 0 {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }

    async fn delete_and_return(&self, id: &str) -> Result<Option<User>, ApiError> {
        let object_id = parse_user_id(id)?;
        debug!("Repository: Deleting user by ID: {}", object_id);
        Ok(self
            .collection
            .find_one_and_delete(doc! { "_id": object_id })
            .await?)
    }
}
