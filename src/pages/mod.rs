//! Page components for the Eminent Global Logistics site.

mod home;

pub use home::Home;
