//! Operator broadcast console for the Arogya admin surface.

pub mod console;

pub use console::BroadcastConsole;
