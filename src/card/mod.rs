//! Cards are shareable digital business cards owned by a profile.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod list_endpoint;

pub use core::{
    CARD_COLUMNS, Card, CardId, CardPatch, Design, NewCard, create_card_table, map_row_to_card,
};
pub use create_endpoint::create_card_endpoint;
pub use delete_endpoint::delete_card_endpoint;
pub use edit_endpoint::edit_card_endpoint;
pub use get_endpoint::get_card_endpoint;
pub use list_endpoint::list_cards_endpoint;

/// A record state holding a profile for each of `owner_ids`.
#[cfg(test)]
pub(crate) fn state_with_owners(owner_ids: &[&str]) -> crate::RecordState {
    let state = crate::RecordState::in_memory();

    for id in owner_ids {
        state
            .record_store
            .create_profile(crate::NewProfile {
                id: (*id).to_owned(),
                name: "Maria Silva".to_owned(),
                email: "maria@example.com".to_owned(),
                bio: None,
                avatar_url: None,
            })
            .expect("Could not create test profile");
    }

    state
}

#[cfg(test)]
pub(crate) fn test_card(id: &str) -> NewCard {
    NewCard {
        id: id.to_owned(),
        user_id: None,
        name: "Maria Silva".to_owned(),
        title: "Designer".to_owned(),
        bio: None,
        phone: Some("+258 84 000 0000".to_owned()),
        email: "maria@example.com".to_owned(),
        website: None,
        linkedin: None,
        instagram: None,
        facebook: None,
        twitter: None,
        avatar_url: None,
        design: Design::default(),
    }
}
