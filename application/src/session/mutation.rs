//! [`Action`]s mutating the [`Service`] state.
//!
//! [`Action`]: super::Action
//! [`Service`]: crate::Service

use secrecy::SecretBox;
use service::{
    command::{
        self, AddToPackage, ClearNotifications, ClearOrders, ClearPackage,
        CreateUser, CreateVenue, PlaceOrder, RemoveFromPackage, ResolveOrder,
        TogglePackage, UpdateUserProfile,
    },
    domain::{order, venue},
    query, Command as _, Query as _,
};
use tracing as log;

use crate::{define_error, AsError, Error};

use super::{action, view, Session, VenueError};

impl Session<'_> {
    /// Adds the [`Venue`] to the [`Package`].
    ///
    /// [`Package`]: service::domain::Package
    /// [`Venue`]: service::domain::Venue
    pub(super) fn add(&mut self, venue_id: venue::Id) -> Result<String, Error> {
        let added = self
            .service
            .execute_mut(AddToPackage { venue_id })
            .map_err(AsError::into_error)?;
        let status = if added {
            "Площадка добавлена в пакет"
        } else {
            "Площадка уже в пакете"
        };
        Ok(format!("{status}\n{}", view::package(self.service.package())))
    }

    /// Removes the [`Venue`] from the [`Package`].
    ///
    /// [`Package`]: service::domain::Package
    /// [`Venue`]: service::domain::Venue
    pub(super) fn remove(
        &mut self,
        venue_id: venue::Id,
    ) -> Result<String, Error> {
        let removed = self
            .service
            .execute_mut(RemoveFromPackage { venue_id })
            .map_err(AsError::into_error)?;
        let status = if removed.is_some() {
            "Площадка удалена из пакета"
        } else {
            "Площадки нет в пакете"
        };
        Ok(format!("{status}\n{}", view::package(self.service.package())))
    }

    /// Toggles presence of the [`Venue`] in the [`Package`].
    ///
    /// [`Package`]: service::domain::Package
    /// [`Venue`]: service::domain::Venue
    pub(super) fn toggle(
        &mut self,
        venue_id: venue::Id,
    ) -> Result<String, Error> {
        let added = self
            .service
            .execute_mut(TogglePackage { venue_id })
            .map_err(AsError::into_error)?;
        Ok(if added {
            "Площадка добавлена в пакет".to_owned()
        } else {
            "Площадка удалена из пакета".to_owned()
        })
    }

    /// Empties the [`Package`].
    ///
    /// [`Package`]: service::domain::Package
    pub(super) fn clear(&mut self) -> Result<String, Error> {
        let removed = self
            .service
            .execute_mut(ClearPackage)
            .map_err(AsError::into_error)?;
        Ok(format!(
            "Из пакета удалено: {}",
            view::venues_count(removed.len()),
        ))
    }

    /// Registers a new [`User`] and signs in as them.
    ///
    /// [`User`]: service::domain::User
    pub(super) fn register(
        &mut self,
        args: action::Register,
    ) -> Result<String, Error> {
        let action::Register {
            name,
            email,
            password,
            confirm,
            role,
        } = args;

        let user = self
            .service
            .execute_mut(CreateUser {
                name,
                email,
                password: SecretBox::new(Box::new(password)),
                password_confirmation: SecretBox::new(Box::new(confirm)),
                role,
            })
            .map_err(AsError::into_error)?;
        self.user_id = Some(user.id);

        log::info!("signed in as `User(id: {})`", user.id);
        Ok(format!("Добро пожаловать!\n{}", view::user(&user)))
    }

    /// Shows or updates the profile of the signed in [`User`].
    ///
    /// [`User`]: service::domain::User
    pub(super) fn profile(
        &mut self,
        args: action::Profile,
    ) -> Result<String, Error> {
        let user_id = self.current_user_id()?;
        let user = self
            .service
            .execute(query::user::ById::by(user_id))
            .map_err(AsError::into_error)?
            .ok_or_else(|| Error::from(super::AuthError::NotRegistered))?;
        if args.is_empty() {
            return Ok(view::user(&user));
        }

        let action::Profile {
            name,
            email,
            phone,
            no_phone,
        } = args;
        let user = self
            .service
            .execute_mut(UpdateUserProfile {
                user_id,
                name: name.unwrap_or(user.name),
                email: email.unwrap_or(user.email),
                phone: if no_phone { None } else { phone.or(user.phone) },
            })
            .map_err(AsError::into_error)?;

        Ok(format!("Профиль сохранён\n{}", view::user(&user)))
    }

    /// Publishes a new [`Venue`] of the signed in owner.
    ///
    /// [`Venue`]: service::domain::Venue
    pub(super) fn publish(
        &mut self,
        args: action::Publish,
    ) -> Result<String, Error> {
        define_error! {
            enum PublishError {
                #[code = "INVALID_PERIOD"]
                #[message = "Availability must not end before it starts"]
                Period,

                #[code = "INVALID_COORDINATES"]
                #[message = "Latitude must be within ±90 and longitude \
                             within ±180"]
                Coordinates,
            }
        }

        let owner_id = self.current_user_id()?;
        let action::Publish {
            title,
            location,
            category,
            image,
            price,
            description,
            from,
            to,
            latitude,
            longitude,
            duration,
            coverage,
        } = args;

        let availability = from
            .zip(to)
            .map(|(start, end)| {
                venue::Availability::new(start, end)
                    .ok_or(PublishError::Period)
            })
            .transpose()?;
        let coordinates = latitude
            .zip(longitude)
            .map(|(lat, lon)| {
                venue::Coordinates::new(lat, lon)
                    .ok_or(PublishError::Coordinates)
            })
            .transpose()?;

        let venue = self
            .service
            .execute_mut(CreateVenue {
                owner_id,
                title,
                location,
                description,
                category,
                image,
                price,
                availability,
                coordinates,
                duration,
                coverage,
            })
            .map_err(AsError::into_error)?;

        Ok(format!(
            "Площадка #{} отправлена на модерацию\n{}",
            venue.id,
            view::venue_row(&venue),
        ))
    }

    /// Places an [`Order`] for the [`Package`].
    ///
    /// [`Order`]: service::domain::Order
    /// [`Package`]: service::domain::Package
    pub(super) fn order(&mut self) -> Result<String, Error> {
        let order = self
            .service
            .execute_mut(PlaceOrder {
                user_id: self.user_id,
            })
            .map_err(AsError::into_error)?;
        Ok(format!("Заказ оформлен\n{}", view::order(&order)))
    }

    /// Resolves a pending [`Order`].
    ///
    /// [`Order`]: service::domain::Order
    pub(super) fn resolve(
        &mut self,
        order_id: order::Id,
        status: order::Status,
    ) -> Result<String, Error> {
        let order = self
            .service
            .execute_mut(ResolveOrder { order_id, status })
            .map_err(AsError::into_error)?;
        Ok(view::order(&order))
    }

    /// Wipes the [`Order`] history.
    ///
    /// [`Order`]: service::domain::Order
    pub(super) fn clear_orders(&mut self) -> Result<String, Error> {
        let removed = self
            .service
            .execute_mut(ClearOrders)
            .map_err(AsError::into_error)?;
        Ok(format!("История заказов очищена: {removed}"))
    }

    /// Dismisses all the [`Notification`]s.
    ///
    /// [`Notification`]: service::domain::Notification
    pub(super) fn clear_notifications(&mut self) -> Result<String, Error> {
        let removed = self
            .service
            .execute_mut(ClearNotifications)
            .map_err(AsError::into_error)?;
        Ok(format!("Уведомления очищены: {removed}"))
    }
}

impl AsError for command::add_to_package::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::VenueNotExists(_) => Some(VenueError::NotExists.into()),
        }
    }
}

impl AsError for command::place_order::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "EMPTY_PACKAGE"]
                #[message = "`Package` has no venues to order"]
                EmptyPackage,

                #[code = "USER_NOT_EXISTS"]
                #[message = "`User` does not exist"]
                UserNotExists,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::EmptyPackage => Some(Error::EmptyPackage.into()),
            Self::UserNotExists(_) => Some(Error::UserNotExists.into()),
        }
    }
}

impl AsError for command::resolve_order::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "ORDER_NOT_EXISTS"]
                #[message = "`Order` does not exist"]
                OrderNotExists,

                #[code = "ORDER_ALREADY_RESOLVED"]
                #[message = "`Order` is resolved already"]
                AlreadyResolved,

                #[code = "INVALID_RESOLUTION"]
                #[message = "`Order` may only be approved or rejected"]
                InvalidResolution,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::OrderNotExists(_) => Some(Error::OrderNotExists.into()),
            Self::AlreadyResolved(_) => Some(Error::AlreadyResolved.into()),
            Self::InvalidResolution(_) => {
                Some(Error::InvalidResolution.into())
            }
        }
    }
}

impl AsError for command::create_venue::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "NOT_AN_OWNER"]
                #[message = "Only venue owners may publish venues"]
                NotAnOwner,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::UserNotExists(_) => None,
            Self::NotAnOwner(_) => Some(Error::NotAnOwner.into()),
        }
    }
}

impl AsError for command::create_user::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "PASSWORD_MISMATCH"]
                #[message = "Passwords do not match"]
                PasswordMismatch,

                #[code = "EMAIL_OCCUPIED"]
                #[message = "`Email` is occupied by another `User`"]
                EmailOccupied,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::PasswordMismatch => Some(Error::PasswordMismatch.into()),
            Self::EmailOccupied(_) => Some(Error::EmailOccupied.into()),
        }
    }
}

impl AsError for command::update_user_profile::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "EMAIL_OCCUPIED"]
                #[message = "`Email` is occupied by another `User`"]
                EmailOccupied,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::UserNotExists(_) => None,
            Self::EmailOccupied(_) => Some(Error::EmailOccupied.into()),
        }
    }
}
