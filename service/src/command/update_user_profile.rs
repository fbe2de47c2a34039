//! [`Command`] for updating a [`User`] profile.

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::user::{Email, Name, Phone};
use crate::{
    domain::{user, User},
    infra::{database, Database, DatabaseMut},
    Service,
};

use super::Command;

/// [`Command`] for updating a [`User`] profile.
#[derive(Clone, Debug)]
pub struct UpdateUserProfile {
    /// ID of the [`User`] which profile should be updated.
    pub user_id: user::Id,

    /// New [`Name`] of the [`User`].
    pub name: user::Name,

    /// New [`Email`] of the [`User`].
    pub email: user::Email,

    /// New [`Phone`] of the [`User`].
    ///
    /// [`None`] indicating [`Phone`] deletion.
    pub phone: Option<user::Phone>,
}

impl<Db> Command<UpdateUserProfile> for Service<Db>
where
    Db: Database<
            Select<By<Option<User>, user::Id>>,
            Ok = Option<User>,
            Err = Traced<database::Error>,
        > + for<'e> Database<
            Select<By<Option<User>, &'e user::Email>>,
            Ok = Option<User>,
            Err = Traced<database::Error>,
        > + DatabaseMut<Update<User>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = User;
    type Err = Traced<ExecutionError>;

    fn execute_mut(
        &mut self,
        cmd: UpdateUserProfile,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateUserProfile {
            user_id,
            name,
            email,
            phone,
        } = cmd;

        let mut user = self
            .database()
            .execute(Select(By::<Option<User>, user::Id>::new(user_id)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::UserNotExists(user_id))
            .map_err(tracerr::wrap!())?;

        if user.email != email {
            let holder = self
                .database()
                .execute(Select(By::<Option<User>, &user::Email>::new(&email)))
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
            if holder.is_some_and(|u| u.id != user_id) {
                return Err(tracerr::new!(E::EmailOccupied(email)));
            }
        }

        if user.name == name && user.email == email && user.phone == phone {
            return Ok(user);
        }

        user.name = name;
        user.email = email;
        user.phone = phone;
        self.database_mut()
            .execute_mut(Update(user.clone()))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        log::debug!("`User(id: {user_id})` profile updated");
        Ok(user)
    }
}

/// Error of [`UpdateUserProfile`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`User`] doesn't exist.
    #[display("`User(id: {_0})` does not exist")]
    #[from(ignore)]
    UserNotExists(#[error(not(source))] user::Id),

    /// [`Email`] belongs to another [`User`].
    #[display("`{_0}` email is occupied")]
    #[from(ignore)]
    EmailOccupied(#[error(not(source))] user::Email),
}
