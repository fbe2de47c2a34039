//! [`Query`] collection related to the multiple [`Order`]s.

use common::operations::By;

use crate::domain::Order;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries all the placed [`Order`]s in the order they were placed.
pub type List = DatabaseQuery<By<Vec<Order>, ()>>;
