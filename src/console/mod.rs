//! Console front end.
//!
//! - `menu`: the numbered menus and their choices
//! - `input`: reading one integer selection per line
//! - `render`: banners, the stat dump and action messages
//! - `session`: the interactive loop tying them to the engine

pub mod input;
pub mod menu;
pub mod render;
pub mod session;

pub use session::Session;
