//! Implements an in-memory record store.

use std::{collections::HashMap, sync::Mutex};

use time::OffsetDateTime;

use crate::{
    Error,
    card::{Card, CardId, CardPatch, NewCard},
    profile::{NewProfile, Profile, ProfileId, ProfilePatch},
    stores::{RecordStore, acquire, record::card_matches},
};

/// Keeps profiles and cards in hash maps keyed by id.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    profiles: Mutex<HashMap<ProfileId, Profile>>,
    cards: Mutex<HashMap<CardId, Card>>,
}

impl MemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted_cards<'a>(cards: impl Iterator<Item = &'a Card>) -> Vec<Card> {
        let mut cards: Vec<Card> = cards.cloned().collect();
        cards.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        cards
    }
}

impl RecordStore for MemoryRecordStore {
    fn get_profile_by_id(&self, id: &str) -> Result<Option<Profile>, Error> {
        Ok(acquire(&self.profiles)?.get(id).cloned())
    }

    /// Scans every profile, so this is linear in the number of profiles.
    fn get_profile_by_email(&self, email: &str) -> Result<Option<Profile>, Error> {
        Ok(acquire(&self.profiles)?
            .values()
            .find(|profile| profile.email == email)
            .cloned())
    }

    fn create_profile(&self, profile: NewProfile) -> Result<Profile, Error> {
        let profile = profile.into_profile(OffsetDateTime::now_utc());

        acquire(&self.profiles)?.insert(profile.id.clone(), profile.clone());

        Ok(profile)
    }

    fn update_profile(&self, id: &str, patch: ProfilePatch) -> Result<Option<Profile>, Error> {
        let mut profiles = acquire(&self.profiles)?;

        let Some(profile) = profiles.get_mut(id) else {
            return Ok(None);
        };

        patch.apply(profile);

        Ok(Some(profile.clone()))
    }

    fn get_card_by_id(&self, id: &str) -> Result<Option<Card>, Error> {
        Ok(acquire(&self.cards)?.get(id).cloned())
    }

    fn create_card(&self, card: NewCard) -> Result<Card, Error> {
        let card = card.into_card(OffsetDateTime::now_utc());

        if !acquire(&self.profiles)?.contains_key(&card.user_id) {
            return Err(Error::UnknownOwner(card.user_id));
        }

        acquire(&self.cards)?.insert(card.id.clone(), card.clone());

        Ok(card)
    }

    fn update_card(&self, id: &str, patch: CardPatch) -> Result<Option<Card>, Error> {
        let mut cards = acquire(&self.cards)?;

        let Some(card) = cards.get_mut(id) else {
            return Ok(None);
        };

        patch.apply(card, OffsetDateTime::now_utc());

        Ok(Some(card.clone()))
    }

    fn delete_card(&self, id: &str) -> Result<(), Error> {
        acquire(&self.cards)?.remove(id);

        Ok(())
    }

    fn get_all_cards(&self) -> Result<Vec<Card>, Error> {
        Ok(Self::sorted_cards(acquire(&self.cards)?.values()))
    }

    fn search_cards(&self, term: &str) -> Result<Vec<Card>, Error> {
        Ok(Self::sorted_cards(
            acquire(&self.cards)?
                .values()
                .filter(|card| card_matches(card, term)),
        ))
    }
}
