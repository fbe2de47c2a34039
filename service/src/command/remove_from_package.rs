//! [`Command`] for removing a [`Venue`] from the [`Package`].

use std::convert::Infallible;

use derive_more::From;
use tracing as log;

#[cfg(doc)]
use crate::domain::Package;
use crate::{
    domain::{venue, Venue},
    Service,
};

use super::Command;

/// [`Command`] for removing a [`Venue`] from the [`Package`].
///
/// Removing a [`Venue`] absent from the [`Package`] changes nothing.
#[derive(Clone, Copy, Debug, From)]
pub struct RemoveFromPackage {
    /// ID of the [`Venue`] to remove.
    pub venue_id: venue::Id,
}

impl<Db> Command<RemoveFromPackage> for Service<Db> {
    type Ok = Option<Venue>;
    type Err = Infallible;

    fn execute_mut(
        &mut self,
        RemoveFromPackage { venue_id }: RemoveFromPackage,
    ) -> Result<Self::Ok, Self::Err> {
        let removed = self.package_mut().remove(venue_id);
        if removed.is_some() {
            log::debug!("`Venue(id: {venue_id})` removed from `Package`");
        }
        Ok(removed)
    }
}
