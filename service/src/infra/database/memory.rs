//! [`Memory`] [`Database`] implementation.

use common::operations::{By, Delete, Insert, Select, Update};
use derive_more::{Display, Error as StdError};
use tracerr::Traced;

use crate::{
    domain::{order, user, venue, Notification, Order, User, Venue},
    infra::{database, Database, DatabaseMut},
    read::{self, venue::list::Criteria},
};

/// [`Database`] keeping everything in the process memory.
///
/// Nothing survives a restart.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// Stored [`Venue`]s in the order they were inserted.
    venues: Vec<Venue>,

    /// Highest [`venue::Id`] ever stored.
    last_venue_id: Option<venue::Id>,

    /// Stored [`Order`]s in the order they were placed.
    orders: Vec<Order>,

    /// Stored [`User`]s.
    users: Vec<User>,

    /// Stored [`Notification`]s in the order they were created.
    notifications: Vec<Notification>,
}

impl Memory {
    /// Creates a new [`Memory`] seeded with the provided catalog of
    /// [`Venue`]s.
    ///
    /// # Errors
    ///
    /// Errors if the catalog contains several [`Venue`]s with the same
    /// [`venue::Id`].
    pub fn new(
        catalog: impl IntoIterator<Item = Venue>,
    ) -> Result<Self, Traced<database::Error>> {
        let mut db = Self::default();
        for venue in catalog {
            db.execute_mut(Insert(venue)).map_err(tracerr::wrap!())?;
        }
        Ok(db)
    }

    /// Returns the index of a stored [`Order`] by its [`order::Id`].
    fn order_pos(&self, id: order::Id) -> Option<usize> {
        self.orders.iter().position(|o| o.id == id)
    }

    /// Returns the index of a stored [`User`] by its [`user::Id`].
    fn user_pos(&self, id: user::Id) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }
}

/// [`Memory`] error.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// [`Venue`] with the same [`venue::Id`] is stored already.
    #[display("`Venue(id: {_0})` already exists")]
    DuplicateVenue(#[error(not(source))] venue::Id),

    /// No more [`venue::Id`]s can be assigned.
    #[display("`Venue` IDs are exhausted")]
    VenueIdsExhausted,

    /// [`Order`] to update is not stored.
    #[display("`Order(id: {_0})` does not exist")]
    OrderNotExists(#[error(not(source))] order::Id),

    /// [`User`] to update is not stored.
    #[display("`User(id: {_0})` does not exist")]
    UserNotExists(#[error(not(source))] user::Id),
}

impl Database<Select<By<Option<Venue>, venue::Id>>> for Memory {
    type Ok = Option<Venue>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Select(by): Select<By<Option<Venue>, venue::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.venues.iter().find(|v| v.id == id).cloned())
    }
}

impl Database<Select<By<Option<Venue>, venue::Hash>>> for Memory {
    type Ok = Option<Venue>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Select(by): Select<By<Option<Venue>, venue::Hash>>,
    ) -> Result<Self::Ok, Self::Err> {
        let hash = by.into_inner();
        Ok(self.venues.iter().find(|v| v.hash == hash).cloned())
    }
}

impl<'c> Database<Select<By<Vec<Venue>, &'c Criteria>>> for Memory {
    type Ok = Vec<Venue>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Select(by): Select<By<Vec<Venue>, &'c Criteria>>,
    ) -> Result<Self::Ok, Self::Err> {
        let criteria = by.into_inner();
        let listed = self
            .venues
            .iter()
            .filter(|v| v.status == venue::Status::Active);
        Ok(read::venue::list::filter(listed, criteria)
            .into_iter()
            .cloned()
            .collect())
    }
}

impl Database<Select<By<Vec<Venue>, user::Id>>> for Memory {
    type Ok = Vec<Venue>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Select(by): Select<By<Vec<Venue>, user::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let owner_id = by.into_inner();
        Ok(self
            .venues
            .iter()
            .filter(|v| v.owner_id == Some(owner_id))
            .cloned()
            .collect())
    }
}

impl Database<Select<By<venue::Id, read::venue::NextId>>> for Memory {
    type Ok = venue::Id;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        _: Select<By<venue::Id, read::venue::NextId>>,
    ) -> Result<Self::Ok, Self::Err> {
        match self.last_venue_id {
            None => Ok(venue::Id::from(1)),
            Some(id) => id.next().ok_or_else(|| {
                tracerr::new!(database::Error::from(Error::VenueIdsExhausted))
            }),
        }
    }
}

impl DatabaseMut<Insert<Venue>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    fn execute_mut(
        &mut self,
        Insert(venue): Insert<Venue>,
    ) -> Result<Self::Ok, Self::Err> {
        if self.venues.iter().any(|v| v.id == venue.id) {
            return Err(tracerr::new!(database::Error::from(
                Error::DuplicateVenue(venue.id),
            )));
        }
        self.last_venue_id = self.last_venue_id.max(Some(venue.id));
        self.venues.push(venue);
        Ok(())
    }
}

impl Database<Select<By<Option<Order>, order::Id>>> for Memory {
    type Ok = Option<Order>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Select(by): Select<By<Option<Order>, order::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self
            .order_pos(by.into_inner())
            .map(|pos| self.orders[pos].clone()))
    }
}

impl Database<Select<By<Vec<Order>, ()>>> for Memory {
    type Ok = Vec<Order>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        _: Select<By<Vec<Order>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.orders.clone())
    }
}

impl DatabaseMut<Insert<Order>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    fn execute_mut(
        &mut self,
        Insert(order): Insert<Order>,
    ) -> Result<Self::Ok, Self::Err> {
        self.orders.push(order);
        Ok(())
    }
}

impl DatabaseMut<Update<Order>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    fn execute_mut(
        &mut self,
        Update(order): Update<Order>,
    ) -> Result<Self::Ok, Self::Err> {
        let pos = self
            .order_pos(order.id)
            .ok_or_else(|| {
                tracerr::new!(database::Error::from(Error::OrderNotExists(
                    order.id,
                )))
            })?;
        self.orders[pos] = order;
        Ok(())
    }
}

impl DatabaseMut<Delete<By<Vec<Order>, ()>>> for Memory {
    type Ok = usize;
    type Err = Traced<database::Error>;

    fn execute_mut(
        &mut self,
        _: Delete<By<Vec<Order>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.orders.drain(..).count())
    }
}

impl Database<Select<By<Option<User>, user::Id>>> for Memory {
    type Ok = Option<User>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Select(by): Select<By<Option<User>, user::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self
            .user_pos(by.into_inner())
            .map(|pos| self.users[pos].clone()))
    }
}

impl<'e> Database<Select<By<Option<User>, &'e user::Email>>> for Memory {
    type Ok = Option<User>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Select(by): Select<By<Option<User>, &'e user::Email>>,
    ) -> Result<Self::Ok, Self::Err> {
        let email = by.into_inner();
        Ok(self.users.iter().find(|u| u.email == *email).cloned())
    }
}

impl DatabaseMut<Insert<User>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    fn execute_mut(
        &mut self,
        Insert(user): Insert<User>,
    ) -> Result<Self::Ok, Self::Err> {
        self.users.push(user);
        Ok(())
    }
}

impl DatabaseMut<Update<User>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    fn execute_mut(
        &mut self,
        Update(user): Update<User>,
    ) -> Result<Self::Ok, Self::Err> {
        let pos = self
            .user_pos(user.id)
            .ok_or_else(|| {
                tracerr::new!(database::Error::from(Error::UserNotExists(
                    user.id,
                )))
            })?;
        self.users[pos] = user;
        Ok(())
    }
}

impl Database<Select<By<Vec<Notification>, ()>>> for Memory {
    type Ok = Vec<Notification>;
    type Err = Traced<database::Error>;

    /// Returns the newest [`Notification`]s first.
    fn execute(
        &self,
        _: Select<By<Vec<Notification>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.notifications.iter().rev().cloned().collect())
    }
}

impl DatabaseMut<Insert<Notification>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    fn execute_mut(
        &mut self,
        Insert(notification): Insert<Notification>,
    ) -> Result<Self::Ok, Self::Err> {
        self.notifications.push(notification);
        Ok(())
    }
}

impl DatabaseMut<Delete<By<Vec<Notification>, ()>>> for Memory {
    type Ok = usize;
    type Err = Traced<database::Error>;

    fn execute_mut(
        &mut self,
        _: Delete<By<Vec<Notification>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.notifications.drain(..).count())
    }
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Insert, Select};

    use crate::{
        domain::{
            venue::{self, spec::venue},
            Venue,
        },
        infra::{database, Database as _, DatabaseMut as _},
        read::{self, venue::list::Criteria},
    };

    use super::{Error, Memory};

    #[test]
    fn refuses_duplicate_ids() {
        let err = Memory::new([
            venue(1, "A", "A", "Билборды", 1, None),
            venue(1, "B", "B", "Лифты", 2, None),
        ])
        .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            database::Error::Memory(Error::DuplicateVenue(id))
                if *id == venue::Id::from(1),
        ));

        let copied: database::Error = *err.as_ref();
        assert_eq!(copied.to_string(), err.as_ref().to_string());
    }

    #[test]
    fn never_reuses_ids() {
        let mut db =
            Memory::new([venue(5, "A", "A", "Билборды", 1, None)]).unwrap();
        let next = |db: &Memory| {
            db.execute(Select(By::<venue::Id, _>::new(read::venue::NextId)))
                .unwrap()
        };

        assert_eq!(next(&db), venue::Id::from(6));

        db.execute_mut(Insert(venue(3, "B", "B", "Лифты", 1, None)))
            .unwrap();
        assert_eq!(next(&db), venue::Id::from(6));

        assert_eq!(next(&Memory::default()), venue::Id::from(1));
    }

    #[test]
    fn lists_only_active_venues() {
        let mut hidden = venue(2, "B", "B", "Лифты", 1, None);
        hidden.status = venue::Status::Moderation;
        let db = Memory::new([venue(1, "A", "A", "Билборды", 1, None), hidden])
            .unwrap();

        let listed: Vec<Venue> = db
            .execute(Select(By::<Vec<Venue>, _>::new(&Criteria::default())))
            .unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, venue::Id::from(1));
    }
}
