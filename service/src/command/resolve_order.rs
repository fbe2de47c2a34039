//! [`Command`] for resolving a pending [`Order`].

use common::operations::{By, Insert, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{order, Notification, Order},
    infra::{database, Database, DatabaseMut},
    Service,
};

use super::Command;

/// [`Command`] for resolving a [`order::Status::Pending`] [`Order`].
///
/// Issues a [`Notification`] about the resolution.
#[derive(Clone, Copy, Debug)]
pub struct ResolveOrder {
    /// ID of the [`Order`] to resolve.
    pub order_id: order::Id,

    /// Final [`order::Status`] of the [`Order`].
    pub status: order::Status,
}

impl<Db> Command<ResolveOrder> for Service<Db>
where
    Db: Database<
            Select<By<Option<Order>, order::Id>>,
            Ok = Option<Order>,
            Err = Traced<database::Error>,
        > + DatabaseMut<Update<Order>, Ok = (), Err = Traced<database::Error>>
        + DatabaseMut<
            Insert<Notification>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = Order;
    type Err = Traced<ExecutionError>;

    fn execute_mut(
        &mut self,
        ResolveOrder { order_id, status }: ResolveOrder,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        if !status.is_resolved() {
            return Err(tracerr::new!(E::InvalidResolution(status)));
        }

        let mut order = self
            .database()
            .execute(Select(By::new(order_id)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::OrderNotExists(order_id))
            .map_err(tracerr::wrap!())?;
        if order.status.is_resolved() {
            return Err(tracerr::new!(E::AlreadyResolved(order.status)));
        }

        order.status = status;
        self.database_mut()
            .execute_mut(Update(order.clone()))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        self.database_mut()
            .execute_mut(Insert(Notification::about(&order)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        log::info!("`Order(id: {order_id})` resolved as `{status}`");
        Ok(order)
    }
}

/// Error of [`ResolveOrder`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Order`] doesn't exist.
    #[display("`Order(id: {_0})` does not exist")]
    #[from(ignore)]
    OrderNotExists(#[error(not(source))] order::Id),

    /// [`Order`] is resolved already.
    #[display("`Order` is already `{_0}`")]
    #[from(ignore)]
    AlreadyResolved(#[error(not(source))] order::Status),

    /// [`order::Status`] doesn't resolve an [`Order`].
    #[display("`{_0}` is not a resolution")]
    #[from(ignore)]
    InvalidResolution(#[error(not(source))] order::Status),
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{AddToPackage, PlaceOrder},
        domain::{
            notification, order,
            venue::{self, spec::venue},
        },
        infra::Memory,
        query, Command as _, Query as _, Service,
    };

    use super::{ExecutionError, ResolveOrder};

    fn service_with_order() -> (Service<Memory>, order::Id) {
        let mut svc = Service::new(
            Memory::new([venue(1, "Билборд", "Невский", "Билборды", 1, None)])
                .unwrap(),
        );
        _ = svc.execute_mut(AddToPackage::from(venue::Id::from(1))).unwrap();
        let order = svc.execute_mut(PlaceOrder::default()).unwrap();
        (svc, order.id)
    }

    #[test]
    fn resolves_pending_once() {
        let (mut svc, order_id) = service_with_order();

        let order = svc
            .execute_mut(ResolveOrder {
                order_id,
                status: order::Status::Approved,
            })
            .unwrap();
        assert_eq!(order.status, order::Status::Approved);
        let latest = svc.execute(query::notifications::List::by(())).unwrap();
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].kind, notification::Kind::Success);
        assert_eq!(latest[0].title, "Заявка подтверждена");

        let err = svc
            .execute_mut(ResolveOrder {
                order_id,
                status: order::Status::Rejected,
            })
            .unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::AlreadyResolved(order::Status::Approved),
        ));
        assert_eq!(
            svc.execute(query::notifications::List::by(()))
                .unwrap()
                .len(),
            2,
        );
    }

    #[test]
    fn refuses_pending_resolution() {
        let (mut svc, order_id) = service_with_order();

        let err = svc
            .execute_mut(ResolveOrder {
                order_id,
                status: order::Status::Pending,
            })
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::InvalidResolution(order::Status::Pending),
        ));
    }

    #[test]
    fn fails_on_unknown_order() {
        let (mut svc, _) = service_with_order();

        let err = svc
            .execute_mut(ResolveOrder {
                order_id: order::Id::new(),
                status: order::Status::Rejected,
            })
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::OrderNotExists(_)));
    }
}
