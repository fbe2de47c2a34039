//! [`Order`] definitions.

use common::{define_kind, unit, DateTimeOf, Money};
#[cfg(doc)]
use common::DateTime;
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{user, venue, Package, Venue};

/// Order for renting the [`Venue`]s of a [`Package`].
#[derive(Clone, Debug)]
pub struct Order {
    /// ID of this [`Order`].
    pub id: Id,

    /// ID of the [`User`] placed this [`Order`], if known.
    ///
    /// [`User`]: crate::domain::User
    pub user_id: Option<user::Id>,

    /// [`Item`]s of this [`Order`].
    pub items: Vec<Item>,

    /// [`Status`] of this [`Order`].
    pub status: Status,

    /// [`DateTime`] when this [`Order`] was created.
    pub created_at: CreationDateTime,
}

impl Order {
    /// Creates a new [`Status::Pending`] [`Order`] out of the [`Venue`]s of
    /// the provided [`Package`].
    #[must_use]
    pub fn new(package: &Package, user_id: Option<user::Id>) -> Self {
        Self {
            id: Id::new(),
            user_id,
            items: package.venues().iter().map(Item::from).collect(),
            status: Status::Pending,
            created_at: CreationDateTime::now(),
        }
    }

    /// Returns total monthly price of all the [`Item`]s of this [`Order`].
    #[must_use]
    pub fn total_price(&self) -> Money {
        self.items.iter().map(|i| i.price).sum()
    }
}

/// ID of an [`Order`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Snapshot of a [`Venue`] at the moment of placing an [`Order`].
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    /// ID of the ordered [`Venue`].
    pub venue_id: venue::Id,

    /// [`venue::Title`] of the ordered [`Venue`].
    pub title: venue::Title,

    /// Monthly price of the ordered [`Venue`].
    pub price: Money,

    /// [`venue::Availability`] of the ordered [`Venue`], if limited.
    pub availability: Option<venue::Availability>,
}

impl From<&Venue> for Item {
    fn from(venue: &Venue) -> Self {
        Self {
            venue_id: venue.id,
            title: venue.title.clone(),
            price: venue.price,
            availability: venue.availability,
        }
    }
}

define_kind! {
    #[doc = "Status of an [`Order`]."]
    enum Status {
        #[doc = "[`Order`] awaits approval of the [`Venue`] owners."]
        Pending = 1,

        #[doc = "[`Order`] is approved."]
        Approved = 2,

        #[doc = "[`Order`] is rejected."]
        Rejected = 3,
    }
}

impl Status {
    /// Checks whether this [`Status`] is final.
    #[must_use]
    pub fn is_resolved(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// [`DateTime`] when an [`Order`] was created.
pub type CreationDateTime = DateTimeOf<(Order, unit::Creation)>;

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::domain::{venue::spec::venue, Package};

    use super::{Order, Status};

    #[test]
    fn snapshots_package() {
        let mut package = Package::new();
        _ = package.add(venue(1, "Билборд", "Невский", "Билборды", 45000, None));
        _ = package.add(venue(2, "Лифты", "ЖК", "Лифты", 28000, None));

        let order = Order::new(&package, None);

        assert_eq!(order.status, Status::Pending);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].title.to_string(), "Билборд");
        assert_eq!(order.total_price(), Money::rubles(73000));
        assert_eq!(order.total_price(), package.total_price());
    }

    #[test]
    fn only_pending_is_unresolved() {
        assert!(!Status::Pending.is_resolved());
        assert!(Status::Approved.is_resolved());
        assert!(Status::Rejected.is_resolved());
    }
}
