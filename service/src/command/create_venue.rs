//! [`Command`] for publishing a new [`Venue`].

use common::{
    operations::{By, Insert, Select},
    Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::venue::{
    Availability, Category, Coordinates, Coverage, Description, Duration,
    ImageUrl, Location, Title,
};
use crate::{
    domain::{user, venue, User, Venue},
    infra::{database, Database, DatabaseMut},
    read, Service,
};

use super::Command;

/// [`Command`] for publishing a new [`Venue`].
///
/// A new [`Venue`] awaits moderation before being listed in the catalog.
#[derive(Clone, Debug)]
pub struct CreateVenue {
    /// ID of the [`user::Role::Owner`] publishing the [`Venue`].
    pub owner_id: user::Id,

    /// [`Title`] of a new [`Venue`].
    pub title: venue::Title,

    /// [`Location`] of a new [`Venue`].
    pub location: venue::Location,

    /// [`Description`] of a new [`Venue`].
    pub description: Option<venue::Description>,

    /// [`Category`] of a new [`Venue`].
    pub category: venue::Category,

    /// [`ImageUrl`] of a new [`Venue`].
    pub image: venue::ImageUrl,

    /// Monthly rent price of a new [`Venue`].
    pub price: Money,

    /// [`Availability`] of a new [`Venue`].
    pub availability: Option<venue::Availability>,

    /// [`Coordinates`] of a new [`Venue`].
    pub coordinates: Option<venue::Coordinates>,

    /// [`Duration`] of a single placement in a new [`Venue`].
    pub duration: Option<venue::Duration>,

    /// [`Coverage`] of a new [`Venue`].
    pub coverage: Option<venue::Coverage>,
}

impl<Db> Command<CreateVenue> for Service<Db>
where
    Db: Database<
            Select<By<Option<User>, user::Id>>,
            Ok = Option<User>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Venue>, venue::Hash>>,
            Ok = Option<Venue>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<venue::Id, read::venue::NextId>>,
            Ok = venue::Id,
            Err = Traced<database::Error>,
        > + DatabaseMut<Insert<Venue>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Venue;
    type Err = Traced<ExecutionError>;

    fn execute_mut(&mut self, cmd: CreateVenue) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateVenue {
            owner_id,
            title,
            location,
            description,
            category,
            image,
            price,
            availability,
            coordinates,
            duration,
            coverage,
        } = cmd;

        let owner = self
            .database()
            .execute(Select(By::<Option<User>, _>::new(owner_id)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::UserNotExists(owner_id))
            .map_err(tracerr::wrap!())?;
        if owner.role != user::Role::Owner {
            return Err(tracerr::new!(E::NotAnOwner(owner_id)));
        }

        let hash = venue::Hash::new(
            Some(owner_id),
            &title,
            &location,
            &category,
            price,
            availability.as_ref(),
        );
        let existing = self
            .database()
            .execute(Select(By::<Option<Venue>, _>::new(hash)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if let Some(venue) = existing {
            // Same owner published a `Venue` with the same properties already.
            log::debug!("`Venue(id: {})` is published already", venue.id);
            return Ok(venue);
        }

        let id = self
            .database()
            .execute(Select(By::<venue::Id, _>::new(read::venue::NextId)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        let venue = Venue {
            id,
            hash,
            title,
            location,
            description,
            category,
            image,
            price,
            availability,
            coordinates,
            duration,
            coverage,
            owner_id: Some(owner_id),
            status: venue::Status::Moderation,
        };
        self.database_mut()
            .execute_mut(Insert(venue.clone()))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        log::info!("`Venue(id: {id})` published by `User(id: {owner_id})`");
        Ok(venue)
    }
}

/// Error of [`CreateVenue`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`User`] doesn't exist.
    #[display("`User(id: {_0})` does not exist")]
    #[from(ignore)]
    UserNotExists(#[error(not(source))] user::Id),

    /// [`User`] is not a [`user::Role::Owner`].
    #[display("`User(id: {_0})` is not an owner")]
    #[from(ignore)]
    NotAnOwner(#[error(not(source))] user::Id),
}
