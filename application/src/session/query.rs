//! [`Action`]s observing the [`Service`] state.
//!
//! [`Action`]: super::Action
//! [`Service`]: crate::Service

use common::DateTime;
use itertools::Itertools as _;
use service::{domain::venue, query, read::venue::list::Criteria, Query as _};

use crate::{AsError, Error};

use super::{view, Session, VenueError};

impl Session<'_> {
    /// Lists the catalog [`Venue`]s matching the provided [`Criteria`].
    ///
    /// [`Venue`]: service::domain::Venue
    pub(super) fn catalog(&self, criteria: &Criteria) -> Result<String, Error> {
        let venues = self
            .service
            .execute(query::venues::List::by(criteria))
            .map_err(AsError::into_error)?;
        Ok(view::venue_list(&venues))
    }

    /// Shows details of a [`Venue`].
    ///
    /// [`Venue`]: service::domain::Venue
    pub(super) fn show(&self, id: venue::Id) -> Result<String, Error> {
        let venue = self
            .service
            .execute(query::venue::ById::by(id))
            .map_err(AsError::into_error)?
            .ok_or(VenueError::NotExists)?;
        Ok(view::venue_details(
            &venue,
            self.service.package().contains(venue.id),
        ))
    }

    /// Lists [`Venue`]s published by the signed in owner.
    ///
    /// [`Venue`]: service::domain::Venue
    pub(super) fn my_venues(&self) -> Result<String, Error> {
        let owner_id = self.current_user_id()?;
        let venues = self
            .service
            .execute(query::venues::OwnedBy::by(owner_id))
            .map_err(AsError::into_error)?;
        if venues.is_empty() {
            return Ok("Вы ещё не опубликовали ни одной площадки".to_owned());
        }
        Ok(venues
            .iter()
            .map(|v| {
                let status = view::venue_status(v.status);
                format!("{} [{status}]", view::venue_row(v))
            })
            .join("\n"))
    }

    /// Lists placed [`Order`]s.
    ///
    /// [`Order`]: service::domain::Order
    pub(super) fn orders(&self) -> Result<String, Error> {
        let orders = self
            .service
            .execute(query::orders::List::by(()))
            .map_err(AsError::into_error)?;
        Ok(view::order_list(&orders))
    }

    /// Lists [`Notification`]s, the newest first.
    ///
    /// [`Notification`]: service::domain::Notification
    pub(super) fn notifications(&self) -> Result<String, Error> {
        let notifications = self
            .service
            .execute(query::notifications::List::by(()))
            .map_err(AsError::into_error)?;
        Ok(view::notification_list(&notifications, DateTime::now()))
    }
}
