//! Profiles hold a user's personal details and are keyed by the user's identity.

mod core;
mod create_endpoint;
mod edit_endpoint;
mod get_endpoint;

pub use core::{
    NewProfile, Profile, ProfileId, ProfilePatch, create_profile_table, map_row_to_profile,
};
pub use create_endpoint::create_profile_endpoint;
pub use edit_endpoint::edit_profile_endpoint;
pub use get_endpoint::get_profile_endpoint;
