//! Defines the profile model, its input shapes and its database table.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    Error,
    db::parse_timestamp,
    validation::{
        check_bio_length, deserialize_nullable, require_non_empty, require_valid_email,
    },
};

/// The identity of a profile, equal to the identity of the user who owns it.
pub type ProfileId = String;

/// A user's personal details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// The owning user's identity. Never changes once the profile is created.
    pub id: ProfileId,
    /// The name to display for the user.
    pub name: String,
    /// The user's email address.
    pub email: String,
    /// A short description of the user, at most 150 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Where the user's avatar image is hosted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// When the profile was (last) created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// The data needed to create a profile.
///
/// Creating a profile with an `id` that already exists replaces the old one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    /// The owning user's identity.
    pub id: ProfileId,
    /// The name to display for the user.
    pub name: String,
    /// The user's email address.
    pub email: String,
    /// A short description of the user.
    #[serde(default)]
    pub bio: Option<String>,
    /// Where the user's avatar image is hosted.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl NewProfile {
    /// Check the fields a user fills in on the profile form.
    ///
    /// # Errors
    ///
    /// Returns an [Error::EmptyField] if the id or name are blank,
    /// [Error::InvalidEmail] for a malformed email, or [Error::BioTooLong].
    pub fn validate(&self) -> Result<(), Error> {
        require_non_empty("id", &self.id)?;
        require_non_empty("name", &self.name)?;
        require_valid_email(&self.email)?;
        check_bio_length(self.bio.as_deref())
    }

    /// Stamp the new profile with its creation time.
    pub fn into_profile(self, created_at: OffsetDateTime) -> Profile {
        Profile {
            id: self.id,
            name: self.name,
            email: self.email,
            bio: self.bio,
            avatar_url: self.avatar_url,
            created_at,
        }
    }
}

/// A partial update to a profile.
///
/// Fields that are `None` keep their current value. Optional fields can be
/// cleared by sending `null`, which deserializes to `Some(None)`. There is no
/// `id` or `created_at` field, so neither can be changed by an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    /// The new display name.
    #[serde(default)]
    pub name: Option<String>,
    /// The new email address.
    #[serde(default)]
    pub email: Option<String>,
    /// The new bio.
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub bio: Option<Option<String>>,
    /// The new avatar URL.
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar_url: Option<Option<String>>,
}

impl ProfilePatch {
    /// Check the fields that are present in the patch.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [NewProfile::validate] for the fields that are set.
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(name) = &self.name {
            require_non_empty("name", name)?;
        }

        if let Some(email) = &self.email {
            require_valid_email(email)?;
        }

        check_bio_length(self.bio.as_ref().and_then(Option::as_deref))
    }

    /// Shallow-merge the patch into `profile`.
    pub fn apply(self, profile: &mut Profile) {
        if let Some(name) = self.name {
            profile.name = name;
        }

        if let Some(email) = self.email {
            profile.email = email;
        }

        if let Some(bio) = self.bio {
            profile.bio = bio;
        }

        if let Some(avatar_url) = self.avatar_url {
            profile.avatar_url = avatar_url;
        }
    }
}

pub fn create_profile_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS profile (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            bio TEXT,
            avatar_url TEXT,
            created_at TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

pub fn map_row_to_profile(row: &Row) -> Result<Profile, rusqlite::Error> {
    Ok(Profile {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        bio: row.get(3)?,
        avatar_url: row.get(4)?,
        created_at: parse_timestamp(row, 5)?,
    })
}
