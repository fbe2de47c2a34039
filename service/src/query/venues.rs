//! [`Query`] collection related to the multiple [`Venue`]s.

use common::operations::By;

use crate::{
    domain::{user, Venue},
    read::venue::list::Criteria,
};
#[cfg(doc)]
use crate::{domain::venue, Query};

use super::DatabaseQuery;

/// Queries the catalog of [`venue::Status::Active`] [`Venue`]s matching the
/// provided [`Criteria`].
pub type List<'c> = DatabaseQuery<By<Vec<Venue>, &'c Criteria>>;

/// Queries all the [`Venue`]s published by a [`User`].
///
/// [`User`]: crate::domain::User
pub type OwnedBy = DatabaseQuery<By<Vec<Venue>, user::Id>>;
