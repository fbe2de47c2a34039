//! [`Command`] for dismissing all the [`Notification`]s.

use common::operations::{By, Delete};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::Notification,
    infra::{database, DatabaseMut},
    Service,
};

use super::Command;

/// [`Command`] for dismissing all the [`Notification`]s.
#[derive(Clone, Copy, Debug)]
pub struct ClearNotifications;

impl<Db> Command<ClearNotifications> for Service<Db>
where
    Db: DatabaseMut<
        Delete<By<Vec<Notification>, ()>>,
        Ok = usize,
        Err = Traced<database::Error>,
    >,
{
    /// Number of dismissed [`Notification`]s.
    type Ok = usize;
    type Err = Traced<ExecutionError>;

    fn execute_mut(
        &mut self,
        _: ClearNotifications,
    ) -> Result<Self::Ok, Self::Err> {
        let removed = self
            .database_mut()
            .execute_mut(Delete(By::new(())))
            .map_err(tracerr::wrap!())?;
        log::debug!("{removed} `Notification`s dismissed");
        Ok(removed)
    }
}

/// Error of [`ClearNotifications`] [`Command`] execution.
pub type ExecutionError = database::Error;
