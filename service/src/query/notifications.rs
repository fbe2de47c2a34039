//! [`Query`] collection related to the multiple [`Notification`]s.

use common::operations::By;

use crate::domain::Notification;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries all the [`Notification`]s, the newest first.
pub type List = DatabaseQuery<By<Vec<Notification>, ()>>;
