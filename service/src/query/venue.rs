//! [`Query`] collection related to a single [`Venue`].

use common::operations::By;

use crate::domain::{venue, Venue};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Venue`] by its [`venue::Id`].
pub type ById = DatabaseQuery<By<Option<Venue>, venue::Id>>;
