//! Category domain — the segments contacts are assigned to.
//!
//! Assignment itself lives on the contacts sub-client
//! ([`Contacts::add_to_categories`](crate::domain::contact::client::Contacts::add_to_categories)).

pub mod client;
