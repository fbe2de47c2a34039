//! [`Command`] for adding a [`Venue`] to the [`Package`].

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::Package;
use crate::{
    domain::{venue, Venue},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for adding a [`Venue`] to the [`Package`].
///
/// Adding a [`Venue`] already present in the [`Package`] changes nothing.
#[derive(Clone, Copy, Debug, From)]
pub struct AddToPackage {
    /// ID of the [`Venue`] to add.
    pub venue_id: venue::Id,
}

impl<Db> Command<AddToPackage> for Service<Db>
where
    Db: Database<
        Select<By<Option<Venue>, venue::Id>>,
        Ok = Option<Venue>,
        Err = Traced<database::Error>,
    >,
{
    /// Whether the [`Venue`] was actually added.
    type Ok = bool;
    type Err = Traced<ExecutionError>;

    fn execute_mut(
        &mut self,
        AddToPackage { venue_id }: AddToPackage,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let venue = self
            .database()
            .execute(Select(By::new(venue_id)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::VenueNotExists(venue_id))
            .map_err(tracerr::wrap!())?;

        let added = self.package_mut().add(venue);
        if added {
            log::debug!("`Venue(id: {venue_id})` added to `Package`");
        }
        Ok(added)
    }
}

/// Error of [`AddToPackage`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Venue`] doesn't exist.
    #[display("`Venue(id: {_0})` does not exist")]
    #[from(ignore)]
    VenueNotExists(#[error(not(source))] venue::Id),
}
