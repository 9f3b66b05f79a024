//! Defines the business card model, its input shapes and its database table.

use std::{fmt::Display, str::FromStr};

use rusqlite::{
    Connection, Row,
    types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::{
    Error,
    db::parse_timestamp,
    profile::ProfileId,
    validation::{
        check_bio_length, deserialize_nullable, require_non_empty, require_valid_email,
    },
};

/// The identity of a card. Each user has at most one card, so this is equal
/// to the owner's [ProfileId].
pub type CardId = String;

/// The colour theme used to display a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Design {
    /// A blue to indigo gradient.
    #[default]
    Blue,
    /// A green to cyan gradient.
    Green,
    /// A purple to pink gradient.
    Purple,
}

impl Design {
    /// The token used for the design in JSON and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Design::Blue => "blue",
            Design::Green => "green",
            Design::Purple => "purple",
        }
    }
}

impl Display for Design {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The error returned when parsing an unknown design token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown card design \"{0}\"")]
pub struct UnknownDesign(String);

impl FromStr for Design {
    type Err = UnknownDesign;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blue" => Ok(Design::Blue),
            "green" => Ok(Design::Green),
            "purple" => Ok(Design::Purple),
            other => Err(UnknownDesign(other.to_owned())),
        }
    }
}

impl ToSql for Design {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Design {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

/// A shareable digital business card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// The card's identity. Never changes once the card is created.
    pub id: CardId,
    /// The profile that owns the card.
    pub user_id: ProfileId,
    /// The name printed on the card.
    pub name: String,
    /// The owner's professional title, e.g. "Software Engineer".
    pub title: String,
    /// A short description, at most 150 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// A contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// A contact email address.
    pub email: String,
    /// The owner's website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// LinkedIn handle or profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    /// Instagram handle or profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    /// Facebook handle or profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    /// Twitter handle or profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    /// Where the card's avatar image is hosted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// The colour theme for the card.
    pub design: Design,
    /// When the card was (last) created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the card was last created or updated.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// The data needed to create a card.
///
/// Creating a card with an `id` that already exists replaces the old one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    /// The card's identity.
    pub id: CardId,
    /// The profile that owns the card. Defaults to `id`.
    #[serde(default)]
    pub user_id: Option<ProfileId>,
    /// The name printed on the card.
    pub name: String,
    /// The owner's professional title.
    pub title: String,
    /// A short description.
    #[serde(default)]
    pub bio: Option<String>,
    /// A contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// A contact email address.
    pub email: String,
    /// The owner's website.
    #[serde(default)]
    pub website: Option<String>,
    /// LinkedIn handle or profile URL.
    #[serde(default)]
    pub linkedin: Option<String>,
    /// Instagram handle or profile URL.
    #[serde(default)]
    pub instagram: Option<String>,
    /// Facebook handle or profile URL.
    #[serde(default)]
    pub facebook: Option<String>,
    /// Twitter handle or profile URL.
    #[serde(default)]
    pub twitter: Option<String>,
    /// Where the card's avatar image is hosted.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// The colour theme for the card.
    #[serde(default)]
    pub design: Design,
}

impl NewCard {
    /// Check the fields a user fills in on the card form.
    ///
    /// # Errors
    ///
    /// Returns an [Error::EmptyField] if the id, name or title are blank,
    /// [Error::InvalidEmail] for a malformed email, or [Error::BioTooLong].
    pub fn validate(&self) -> Result<(), Error> {
        require_non_empty("id", &self.id)?;
        require_non_empty("name", &self.name)?;
        require_non_empty("title", &self.title)?;
        require_valid_email(&self.email)?;
        check_bio_length(self.bio.as_deref())
    }

    /// Stamp the new card with its creation time.
    ///
    /// Both `created_at` and `updated_at` are set to `now`.
    pub fn into_card(self, now: OffsetDateTime) -> Card {
        let user_id = self.user_id.unwrap_or_else(|| self.id.clone());

        Card {
            id: self.id,
            user_id,
            name: self.name,
            title: self.title,
            bio: self.bio,
            phone: self.phone,
            email: self.email,
            website: self.website,
            linkedin: self.linkedin,
            instagram: self.instagram,
            facebook: self.facebook,
            twitter: self.twitter,
            avatar_url: self.avatar_url,
            design: self.design,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A partial update to a card.
///
/// Fields that are `None` keep their current value. Optional fields can be
/// cleared by sending `null`. The id, owner and timestamps cannot be set by a
/// client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPatch {
    /// The new name.
    #[serde(default)]
    pub name: Option<String>,
    /// The new professional title.
    #[serde(default)]
    pub title: Option<String>,
    /// The new bio.
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub bio: Option<Option<String>>,
    /// The new phone number.
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<Option<String>>,
    /// The new email address.
    #[serde(default)]
    pub email: Option<String>,
    /// The new website.
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub website: Option<Option<String>>,
    /// The new LinkedIn handle.
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub linkedin: Option<Option<String>>,
    /// The new Instagram handle.
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub instagram: Option<Option<String>>,
    /// The new Facebook handle.
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub facebook: Option<Option<String>>,
    /// The new Twitter handle.
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub twitter: Option<Option<String>>,
    /// The new avatar URL.
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar_url: Option<Option<String>>,
    /// The new colour theme.
    #[serde(default)]
    pub design: Option<Design>,
}

impl CardPatch {
    /// Check the fields that are present in the patch.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [NewCard::validate] for the fields that are set.
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(name) = &self.name {
            require_non_empty("name", name)?;
        }

        if let Some(title) = &self.title {
            require_non_empty("title", title)?;
        }

        if let Some(email) = &self.email {
            require_valid_email(email)?;
        }

        check_bio_length(self.bio.as_ref().and_then(Option::as_deref))
    }

    /// Shallow-merge the patch into `card` and bump `updated_at`.
    ///
    /// `updated_at` becomes `now`, or one nanosecond after the previous value
    /// if the clock has not moved past it, so it always advances.
    pub fn apply(self, card: &mut Card, now: OffsetDateTime) {
        fn merge<T>(field: &mut Option<T>, value: Option<Option<T>>) {
            if let Some(value) = value {
                *field = value;
            }
        }

        if let Some(name) = self.name {
            card.name = name;
        }
        if let Some(title) = self.title {
            card.title = title;
        }
        if let Some(email) = self.email {
            card.email = email;
        }
        if let Some(design) = self.design {
            card.design = design;
        }

        merge(&mut card.bio, self.bio);
        merge(&mut card.phone, self.phone);
        merge(&mut card.website, self.website);
        merge(&mut card.linkedin, self.linkedin);
        merge(&mut card.instagram, self.instagram);
        merge(&mut card.facebook, self.facebook);
        merge(&mut card.twitter, self.twitter);
        merge(&mut card.avatar_url, self.avatar_url);

        card.updated_at = if now > card.updated_at {
            now
        } else {
            card.updated_at + Duration::nanoseconds(1)
        };
    }
}

/// The columns of the card table in the order [map_row_to_card] expects them.
pub const CARD_COLUMNS: &str = "id, user_id, name, title, bio, phone, email, website, \
    linkedin, instagram, facebook, twitter, avatar_url, design, created_at, updated_at";

pub fn create_card_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS card (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL REFERENCES profile(id),
            name TEXT NOT NULL,
            title TEXT NOT NULL,
            bio TEXT,
            phone TEXT,
            email TEXT NOT NULL,
            website TEXT,
            linkedin TEXT,
            instagram TEXT,
            facebook TEXT,
            twitter TEXT,
            avatar_url TEXT,
            design TEXT NOT NULL DEFAULT 'blue',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

pub fn map_row_to_card(row: &Row) -> Result<Card, rusqlite::Error> {
    Ok(Card {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        title: row.get(3)?,
        bio: row.get(4)?,
        phone: row.get(5)?,
        email: row.get(6)?,
        website: row.get(7)?,
        linkedin: row.get(8)?,
        instagram: row.get(9)?,
        facebook: row.get(10)?,
        twitter: row.get(11)?,
        avatar_url: row.get(12)?,
        design: row.get(13)?,
        created_at: parse_timestamp(row, 14)?,
        updated_at: parse_timestamp(row, 15)?,
    })
}
