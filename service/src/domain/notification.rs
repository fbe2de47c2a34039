//! [`Notification`] definitions.

use common::{define_kind, unit, DateTimeOf};
#[cfg(doc)]
use common::DateTime;
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{order, user, Order};

/// Notice about something that happened to the [`Order`]s of a [`User`].
///
/// [`User`]: crate::domain::User
#[derive(Clone, Debug)]
pub struct Notification {
    /// ID of this [`Notification`].
    pub id: Id,

    /// ID of the [`User`] this [`Notification`] is addressed to, if known.
    ///
    /// [`User`]: crate::domain::User
    pub user_id: Option<user::Id>,

    /// [`Kind`] of this [`Notification`].
    pub kind: Kind,

    /// Short headline of this [`Notification`].
    pub title: String,

    /// Full text of this [`Notification`].
    pub message: String,

    /// [`DateTime`] when this [`Notification`] was created.
    pub created_at: CreationDateTime,
}

impl Notification {
    /// Creates a new [`Notification`] about the current [`order::Status`] of
    /// the provided [`Order`].
    #[must_use]
    pub fn about(order: &Order) -> Self {
        let titles = order
            .items
            .iter()
            .map(|i| i.title.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let (kind, title, outcome) = match order.status {
            order::Status::Pending => {
                (Kind::Info, "Заявка отправлена", "ожидает подтверждения")
            }
            order::Status::Approved => {
                (Kind::Success, "Заявка подтверждена", "одобрена")
            }
            order::Status::Rejected => {
                (Kind::Warning, "Заявка отклонена", "отклонена")
            }
        };
        Self {
            id: Id::new(),
            user_id: order.user_id,
            kind,
            title: title.to_owned(),
            message: format!(
                "Ваша заявка на размещение рекламы ({titles}) {outcome}",
            ),
            created_at: CreationDateTime::now(),
        }
    }
}

/// ID of a [`Notification`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

define_kind! {
    #[doc = "Kind of a [`Notification`]."]
    enum Kind {
        #[doc = "Something went well."]
        Success = 1,

        #[doc = "Something needs attention."]
        Warning = 2,

        #[doc = "Something worth knowing."]
        Info = 3,
    }
}

/// [`DateTime`] when a [`Notification`] was created.
pub type CreationDateTime = DateTimeOf<(Notification, unit::Creation)>;
