//! [`Command`] for toggling presence of a [`Venue`] in the [`Package`].

use common::operations::{By, Select};
use derive_more::From;
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

/// [`Command`] for toggling presence of a [`Venue`] in the [`Package`].
#[derive(Clone, Copy, Debug, From)]
pub struct TogglePackage {
    /// ID of the [`Venue`] to toggle.
    pub venue_id: venue::Id,
}

impl<Db> Command<TogglePackage> for Service<Db>
where
    Db: Database<
        Select<By<Option<Venue>, venue::Id>>,
        Ok = Option<Venue>,
        Err = Traced<database::Error>,
    >,
{
    /// Whether the [`Venue`] is in the [`Package`] afterwards.
    type Ok = bool;
    type Err = Traced<ExecutionError>;

    fn execute_mut(
        &mut self,
        TogglePackage { venue_id }: TogglePackage,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        if self.package_mut().remove(venue_id).is_some() {
            log::debug!("`Venue(id: {venue_id})` toggled out of `Package`");
            return Ok(false);
        }

        let venue = self
            .database()
            .execute(Select(By::new(venue_id)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::VenueNotExists(venue_id))
            .map_err(tracerr::wrap!())?;
        let added = self.package_mut().toggle(venue);
        log::debug!("`Venue(id: {venue_id})` toggled into `Package`");

        Ok(added)
    }
}

/// Error of [`TogglePackage`] [`Command`] execution.
pub type ExecutionError = super::add_to_package::ExecutionError;
