//! [`Command`] for placing an [`Order`] out of the [`Package`].

use common::operations::{By, Insert, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::Package;
use crate::{
    domain::{user, Notification, Order, User},
    infra::{database, Database, DatabaseMut},
    Service,
};

use super::Command;

/// [`Command`] for placing an [`Order`] out of the [`Package`].
///
/// The [`Package`] is emptied once the [`Order`] is stored, and a
/// [`Notification`] about it is issued.
#[derive(Clone, Copy, Debug, Default, From)]
pub struct PlaceOrder {
    /// ID of the [`User`] placing the [`Order`], if known.
    pub user_id: Option<user::Id>,
}

impl<Db> Command<PlaceOrder> for Service<Db>
where
    Db: Database<
            Select<By<Option<User>, user::Id>>,
            Ok = Option<User>,
            Err = Traced<database::Error>,
        > + DatabaseMut<Insert<Order>, Ok = (), Err = Traced<database::Error>>
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
        PlaceOrder { user_id }: PlaceOrder,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        if self.package().is_empty() {
            return Err(tracerr::new!(E::EmptyPackage));
        }

        if let Some(id) = user_id {
            _ = self
                .database()
                .execute(Select(By::new(id)))
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::UserNotExists(id))
                .map_err(tracerr::wrap!())?;
        }

        let order = Order::new(self.package(), user_id);
        self.database_mut()
            .execute_mut(Insert(order.clone()))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        self.database_mut()
            .execute_mut(Insert(Notification::about(&order)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        _ = self.package_mut().clear();

        log::info!(
            "`Order(id: {})` placed for {} `Venue`s totalling {}",
            order.id,
            order.items.len(),
            order.total_price(),
        );
        Ok(order)
    }
}

/// Error of [`PlaceOrder`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Package`] has no [`Venue`]s to order.
    ///
    /// [`Venue`]: crate::domain::Venue
    #[display("`Package` is empty")]
    EmptyPackage,

    /// [`User`] doesn't exist.
    #[display("`User(id: {_0})` does not exist")]
    #[from(ignore)]
    UserNotExists(#[error(not(source))] user::Id),
}

#[cfg(test)]
mod spec {
    use common::{
        operations::{By, Select},
        Money,
    };

    use crate::{
        command::AddToPackage,
        domain::{
            notification, order, user,
            venue::{self, spec::venue},
            Notification, Order,
        },
        infra::{Database as _, Memory},
        Command as _, Service,
    };

    use super::{ExecutionError, PlaceOrder};

    fn service() -> Service<Memory> {
        Service::new(
            Memory::new([
                venue(1, "Билборд", "Невский", "Билборды", 45000, None),
                venue(2, "Лифты", "ЖК", "Лифты", 28000, None),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn snapshots_and_clears_package() {
        let mut svc = service();
        for id in [1, 2] {
            _ = svc.execute_mut(AddToPackage::from(venue::Id::from(id))).unwrap();
        }

        let order = svc.execute_mut(PlaceOrder::default()).unwrap();

        assert_eq!(order.status, order::Status::Pending);
        assert_eq!(order.total_price(), Money::rubles(73000));
        assert!(svc.package().is_empty());

        let stored = svc
            .database()
            .execute(Select(By::<Vec<Order>, _>::new(())))
            .unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, order.id);

        let notifications = svc
            .database()
            .execute(Select(By::<Vec<Notification>, _>::new(())))
            .unwrap();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, notification::Kind::Info);
    }

    #[test]
    fn refuses_empty_package() {
        let mut svc = service();

        let err = svc.execute_mut(PlaceOrder::default()).unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::EmptyPackage));
    }

    #[test]
    fn refuses_unknown_user() {
        let mut svc = service();
        _ = svc.execute_mut(AddToPackage::from(venue::Id::from(1))).unwrap();

        let err = svc
            .execute_mut(PlaceOrder {
                user_id: Some(user::Id::new()),
            })
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::UserNotExists(_)));
        assert_eq!(svc.package().len(), 1);
    }
}
