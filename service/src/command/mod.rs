//! [`Command`] definition.

pub mod add_to_package;
pub mod clear_notifications;
pub mod clear_orders;
pub mod clear_package;
pub mod create_user;
pub mod create_venue;
pub mod place_order;
pub mod remove_from_package;
pub mod resolve_order;
pub mod toggle_package;
pub mod update_user_profile;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::HandlerMut as Command;

pub use self::{
    add_to_package::AddToPackage, clear_notifications::ClearNotifications,
    clear_orders::ClearOrders, clear_package::ClearPackage,
    create_user::CreateUser, create_venue::CreateVenue,
    place_order::PlaceOrder,
    remove_from_package::RemoveFromPackage, resolve_order::ResolveOrder,
    toggle_package::TogglePackage, update_user_profile::UpdateUserProfile,
};
