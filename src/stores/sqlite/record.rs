//! Implements a SQLite backed record store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension, params};
use time::OffsetDateTime;

use crate::{
    Error,
    card::{CARD_COLUMNS, Card, CardPatch, NewCard, map_row_to_card},
    db::format_timestamp,
    profile::{NewProfile, Profile, ProfilePatch, map_row_to_profile},
    stores::{RecordStore, acquire, record::card_matches},
};

const PROFILE_COLUMNS: &str = "id, name, email, bio, avatar_url, created_at";

/// Stores profiles and cards in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteRecordStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteRecordStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

fn select_profile(connection: &Connection, id: &str) -> Result<Option<Profile>, Error> {
    connection
        .query_row(
            &format!("SELECT {PROFILE_COLUMNS} FROM profile WHERE id = ?1"),
            params![id],
            map_row_to_profile,
        )
        .optional()
        .map_err(Error::from)
}

fn select_card(connection: &Connection, id: &str) -> Result<Option<Card>, Error> {
    connection
        .query_row(
            &format!("SELECT {CARD_COLUMNS} FROM card WHERE id = ?1"),
            params![id],
            map_row_to_card,
        )
        .optional()
        .map_err(Error::from)
}

/// Insert `card`, replacing any card with the same id.
///
/// A replaced card gets a new rowid, so it moves to the end of the creation order.
fn upsert_card(connection: &Connection, card: &Card) -> Result<(), Error> {
    connection.execute(
        &format!(
            "INSERT OR REPLACE INTO card ({CARD_COLUMNS})
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)"
        ),
        params![
            card.id,
            card.user_id,
            card.name,
            card.title,
            card.bio,
            card.phone,
            card.email,
            card.website,
            card.linkedin,
            card.instagram,
            card.facebook,
            card.twitter,
            card.avatar_url,
            card.design,
            format_timestamp(card.created_at)?,
            format_timestamp(card.updated_at)?,
        ],
    )?;

    Ok(())
}

impl RecordStore for SQLiteRecordStore {
    fn get_profile_by_id(&self, id: &str) -> Result<Option<Profile>, Error> {
        let connection = acquire(&self.connection)?;

        select_profile(&connection, id)
    }

    fn get_profile_by_email(&self, email: &str) -> Result<Option<Profile>, Error> {
        acquire(&self.connection)?
            .query_row(
                &format!(
                    "SELECT {PROFILE_COLUMNS} FROM profile WHERE email = ?1 ORDER BY rowid LIMIT 1"
                ),
                params![email],
                map_row_to_profile,
            )
            .optional()
            .map_err(Error::from)
    }

    /// Insert the profile, overwriting every column of any profile with the same id.
    ///
    /// The existing row is updated in place rather than replaced so that the
    /// owner's cards keep a valid `user_id`.
    ///
    /// # Errors
    ///
    /// Returns a [Error::SqlError] if an SQL related error occurred.
    fn create_profile(&self, profile: NewProfile) -> Result<Profile, Error> {
        let profile = profile.into_profile(OffsetDateTime::now_utc());

        acquire(&self.connection)?.execute(
            &format!(
                "INSERT INTO profile ({PROFILE_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                ON CONFLICT(id) DO UPDATE SET \
                    name = excluded.name, \
                    email = excluded.email, \
                    bio = excluded.bio, \
                    avatar_url = excluded.avatar_url, \
                    created_at = excluded.created_at"
            ),
            params![
                profile.id,
                profile.name,
                profile.email,
                profile.bio,
                profile.avatar_url,
                format_timestamp(profile.created_at)?,
            ],
        )?;

        Ok(profile)
    }

    fn update_profile(&self, id: &str, patch: ProfilePatch) -> Result<Option<Profile>, Error> {
        let connection = acquire(&self.connection)?;

        let Some(mut profile) = select_profile(&connection, id)? else {
            return Ok(None);
        };

        patch.apply(&mut profile);

        connection.execute(
            "UPDATE profile
            SET \
                name = ?1, \
                email = ?2, \
                bio = ?3, \
                avatar_url = ?4 \
            WHERE id = ?5",
            params![
                profile.name,
                profile.email,
                profile.bio,
                profile.avatar_url,
                profile.id
            ],
        )?;

        Ok(Some(profile))
    }

    fn get_card_by_id(&self, id: &str) -> Result<Option<Card>, Error> {
        let connection = acquire(&self.connection)?;

        select_card(&connection, id)
    }

    /// Insert the card, replacing any card with the same id.
    ///
    /// # Errors
    ///
    /// Returns [Error::UnknownOwner] if the owner has no profile, or a
    /// [Error::SqlError] if an SQL related error occurred.
    fn create_card(&self, card: NewCard) -> Result<Card, Error> {
        let card = card.into_card(OffsetDateTime::now_utc());
        let connection = acquire(&self.connection)?;

        if select_profile(&connection, &card.user_id)?.is_none() {
            return Err(Error::UnknownOwner(card.user_id));
        }

        upsert_card(&connection, &card)?;

        Ok(card)
    }

    fn update_card(&self, id: &str, patch: CardPatch) -> Result<Option<Card>, Error> {
        let connection = acquire(&self.connection)?;

        let Some(mut card) = select_card(&connection, id)? else {
            return Ok(None);
        };

        patch.apply(&mut card, OffsetDateTime::now_utc());

        connection.execute(
            "UPDATE card
            SET \
                name = ?1, \
                title = ?2, \
                bio = ?3, \
                phone = ?4, \
                email = ?5, \
                website = ?6, \
                linkedin = ?7, \
                instagram = ?8, \
                facebook = ?9, \
                twitter = ?10, \
                avatar_url = ?11, \
                design = ?12, \
                updated_at = ?13 \
            WHERE id = ?14",
            params![
                card.name,
                card.title,
                card.bio,
                card.phone,
                card.email,
                card.website,
                card.linkedin,
                card.instagram,
                card.facebook,
                card.twitter,
                card.avatar_url,
                card.design,
                format_timestamp(card.updated_at)?,
                card.id,
            ],
        )?;

        Ok(Some(card))
    }

    fn delete_card(&self, id: &str) -> Result<(), Error> {
        acquire(&self.connection)?.execute("DELETE FROM card WHERE id = ?1", params![id])?;

        Ok(())
    }

    fn get_all_cards(&self) -> Result<Vec<Card>, Error> {
        let connection = acquire(&self.connection)?;
        let mut statement =
            connection.prepare(&format!("SELECT {CARD_COLUMNS} FROM card ORDER BY rowid"))?;

        let cards = statement
            .query_map([], map_row_to_card)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(cards)
    }

    /// Matching is done in Rust rather than with `LIKE` because SQLite only
    /// folds the case of ASCII letters.
    fn search_cards(&self, term: &str) -> Result<Vec<Card>, Error> {
        Ok(self
            .get_all_cards()?
            .into_iter()
            .filter(|card| card_matches(card, term))
            .collect())
    }
}
