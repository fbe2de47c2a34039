//! Read entities definitions.

pub mod venue;
