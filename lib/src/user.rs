//! Provides the user record shape shared by the store, the seed source and
//! every dashboard view

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Geographic coordinates of an address, kept as text exactly as the seed
/// source reports them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geo {
    /// Latitude
    pub lat: String,
    /// Longitude
    pub lng: String,
}

/// Postal address of a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    /// Street name and number
    pub street: String,
    /// Suite or apartment
    pub suite: String,
    /// City
    pub city: String,
    /// Postal code
    pub zipcode: String,
    /// Coordinates
    pub geo: Geo,
}

impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts = [&self.street, &self.suite, &self.city, &self.zipcode];
        let joined = itertools::join(parts.iter().filter(|p| !p.is_empty()), ", ");
        write!(f, "{joined}")
    }
}

/// Company a user works for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    /// Company name
    pub name: String,
    /// Company slogan
    pub catch_phrase: String,
    /// Business summary
    pub bs: String,
}

/// A single user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier, unique within a store and never changed once assigned
    pub id: u64,
    /// Full name
    #[serde(default)]
    pub name: String,
    /// Login handle
    #[serde(default)]
    pub username: String,
    /// Email address
    #[serde(default)]
    pub email: String,
    /// Postal address
    #[serde(default)]
    pub address: Address,
    /// Phone number, free form
    #[serde(default)]
    pub phone: String,
    /// Personal website
    #[serde(default)]
    pub website: String,
    /// Employer
    #[serde(default)]
    pub company: Company,
}

/// Payload of the create form: every [`User`] field except the identifier,
/// which the store assigns when the draft is appended
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct UserDraft {
    /// Full name
    pub name: String,
    /// Login handle
    pub username: String,
    /// Email address
    pub email: String,
    /// Postal address
    pub address: Address,
    /// Phone number, free form
    pub phone: String,
    /// Personal website
    pub website: String,
    /// Employer
    pub company: Company,
}

impl UserDraft {
    /// Returns builder for UserDraft
    pub fn builder() -> UserDraftBuilder {
        UserDraftBuilder::default()
    }

    /// Turns the draft into a record carrying the given identifier
    pub fn into_user(self, id: u64) -> User {
        User {
            id,
            name: self.name,
            username: self.username,
            email: self.email,
            address: self.address,
            phone: self.phone,
            website: self.website,
            company: self.company,
        }
    }
}

#[cfg(test)]
#[path = "./user_tests.rs"]
mod tests;
