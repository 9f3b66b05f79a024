//! Defines the record store trait for profiles and cards.

use crate::{
    Error,
    card::{Card, CardPatch, NewCard},
    profile::{NewProfile, Profile, ProfilePatch},
};

/// Handles the persistence of profiles and cards.
///
/// Reads return `Ok(None)` (or an empty list) when nothing matches. An `Err`
/// always means the backend failed, for reads and writes alike. Every write is
/// persisted before the method returns. Implementations do not check who is
/// allowed to read or change a record.
pub trait RecordStore: Send + Sync {
    /// Get the profile with the given `id`.
    fn get_profile_by_id(&self, id: &str) -> Result<Option<Profile>, Error>;

    /// Get the first profile whose email is exactly `email`.
    fn get_profile_by_email(&self, email: &str) -> Result<Option<Profile>, Error>;

    /// Create a profile, stamping its creation time.
    ///
    /// If a profile with the same id exists it is replaced.
    fn create_profile(&self, profile: NewProfile) -> Result<Profile, Error>;

    /// Merge `patch` into the profile with the given `id`.
    ///
    /// Returns `Ok(None)` if there is no such profile.
    fn update_profile(&self, id: &str, patch: ProfilePatch) -> Result<Option<Profile>, Error>;

    /// Get the card with the given `id`.
    fn get_card_by_id(&self, id: &str) -> Result<Option<Card>, Error>;

    /// Create a card, stamping its creation and update times.
    ///
    /// If a card with the same id exists it is replaced.
    fn create_card(&self, card: NewCard) -> Result<Card, Error>;

    /// Merge `patch` into the card with the given `id` and advance its update time.
    ///
    /// Returns `Ok(None)` if there is no such card.
    fn update_card(&self, id: &str, patch: CardPatch) -> Result<Option<Card>, Error>;

    /// Delete the card with the given `id`.
    ///
    /// Deleting a card that does not exist is not an error.
    fn delete_card(&self, id: &str) -> Result<(), Error>;

    /// Get every card in the order they were created.
    fn get_all_cards(&self) -> Result<Vec<Card>, Error>;

    /// Get the cards whose name or email contains `term`, ignoring case.
    fn search_cards(&self, term: &str) -> Result<Vec<Card>, Error>;
}

/// Whether `card` should be included in the results for the search `term`.
///
/// Shared by the backends so that searches behave the same for both.
pub(super) fn card_matches(card: &Card, term: &str) -> bool {
    let term = term.to_lowercase();

    card.name.to_lowercase().contains(&term) || card.email.to_lowercase().contains(&term)
}
