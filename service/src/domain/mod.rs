//! Domain definitions.

pub mod notification;
pub mod order;
pub mod package;
pub mod user;
pub mod venue;

pub use self::{
    notification::Notification, order::Order, package::Package, user::User,
    venue::Venue,
};
