//! Top-level globe page.

mod home;

pub use home::Home;
