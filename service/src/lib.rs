//! Service contains the business logic of the advertising-space marketplace.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

#[cfg(doc)]
use infra::Database;

use self::domain::Package;

pub use self::{command::Command, query::Query};

/// Domain service.
///
/// Owns the [`Database`] and the [`Package`] being assembled by the user.
#[derive(Clone, Debug)]
pub struct Service<Db> {
    /// [`Database`] of this [`Service`].
    database: Db,

    /// [`Package`] of this [`Service`].
    package: Package,
}

impl<Db> Service<Db> {
    /// Creates a new [`Service`] on top of the provided [`Database`] with an
    /// empty [`Package`].
    #[must_use]
    pub fn new(database: Db) -> Self {
        Self {
            database,
            package: Package::new(),
        }
    }

    /// Returns [`Database`] of this [`Service`].
    #[must_use]
    pub fn database(&self) -> &Db {
        &self.database
    }

    /// Returns mutable [`Database`] of this [`Service`].
    #[must_use]
    pub fn database_mut(&mut self) -> &mut Db {
        &mut self.database
    }

    /// Returns the current [`Package`] of this [`Service`].
    #[must_use]
    pub fn package(&self) -> &Package {
        &self.package
    }

    /// Returns the mutable [`Package`] of this [`Service`].
    fn package_mut(&mut self) -> &mut Package {
        &mut self.package
    }
}
