//! [`Database`]-related implementations.

pub mod memory;

use derive_more::{Display, Error as StdError, From};

pub use self::memory::Memory;

/// Database operation observing the stored state.
pub use common::Handler as Database;

/// Database operation mutating the stored state.
pub use common::HandlerMut as DatabaseMut;

/// [`Database`] error.
#[derive(Clone, Copy, Debug, Display, From, StdError)]
pub enum Error {
    /// [`Memory`] error.
    Memory(memory::Error),
}
