//! [`Command`] for emptying the [`Package`].

use std::convert::Infallible;

use tracing as log;

#[cfg(doc)]
use crate::domain::Package;
use crate::{domain::Venue, Service};

use super::Command;

/// [`Command`] for emptying the [`Package`].
#[derive(Clone, Copy, Debug)]
pub struct ClearPackage;

impl<Db> Command<ClearPackage> for Service<Db> {
    /// [`Venue`]s removed from the [`Package`].
    type Ok = Vec<Venue>;
    type Err = Infallible;

    fn execute_mut(&mut self, _: ClearPackage) -> Result<Self::Ok, Self::Err> {
        let removed = self.package_mut().clear();
        log::debug!("`Package` cleared of {} `Venue`s", removed.len());
        Ok(removed)
    }
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::{
        command::AddToPackage,
        domain::venue::{self, spec::venue},
        infra::Memory,
        Command as _, Service,
    };

    use super::ClearPackage;

    #[test]
    fn empties_package() {
        let mut svc = Service::new(
            Memory::new([
                venue(1, "Билборд", "Невский", "Билборды", 45000, None),
                venue(2, "Лифты", "ЖК", "Лифты", 28000, None),
            ])
            .unwrap(),
        );
        for id in [1, 2] {
            _ = svc.execute_mut(AddToPackage::from(venue::Id::from(id))).unwrap();
        }

        let removed = svc.execute_mut(ClearPackage).unwrap();

        assert_eq!(removed.len(), 2);
        assert!(svc.package().is_empty());
        assert_eq!(svc.package().total_price(), Money::ZERO);
    }
}
