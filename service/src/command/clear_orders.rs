//! [`Command`] for wiping the [`Order`] history.

use common::operations::{By, Delete};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::Order,
    infra::{database, DatabaseMut},
    Service,
};

use super::Command;

/// [`Command`] for wiping the [`Order`] history.
#[derive(Clone, Copy, Debug)]
pub struct ClearOrders;

impl<Db> Command<ClearOrders> for Service<Db>
where
    Db: DatabaseMut<
        Delete<By<Vec<Order>, ()>>,
        Ok = usize,
        Err = Traced<database::Error>,
    >,
{
    /// Number of removed [`Order`]s.
    type Ok = usize;
    type Err = Traced<ExecutionError>;

    fn execute_mut(&mut self, _: ClearOrders) -> Result<Self::Ok, Self::Err> {
        let removed = self
            .database_mut()
            .execute_mut(Delete(By::new(())))
            .map_err(tracerr::wrap!())?;
        log::info!("{removed} `Order`s cleared");
        Ok(removed)
    }
}

/// Error of [`ClearOrders`] [`Command`] execution.
pub type ExecutionError = database::Error;
