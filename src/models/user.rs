use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// User document stored in MongoDB.
///
/// `dob` is persisted as an ISO-8601 date string. The timestamps are optional
/// on read so records written by other tools still deserialize.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub firstname: String,
    pub lastname: String,
    pub dob: NaiveDate,
    pub address: String,
    pub gender: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_on: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime>,
}

/// Fields of a partial update. `None` means "leave untouched".
///
/// Serializes to the body of a `$set` stage; absent fields are skipped.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct UserChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.firstname.is_none()
            && self.lastname.is_none()
            && self.dob.is_none()
            && self.address.is_none()
            && self.gender.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
    }
}
