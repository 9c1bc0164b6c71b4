//! UI components for the Eminent Global Logistics site.

mod about;
mod contact;
mod cookie_banner;
mod footer;
mod hero;
mod quote_form;
mod section_boundary;
mod services;
mod site_header;
mod toast_host;

pub use about::About;
pub use contact::Contact;
pub use cookie_banner::CookieBanner;
pub use footer::SiteFooter;
pub use hero::Hero;
pub use quote_form::QuoteForm;
pub use section_boundary::SectionBoundary;
pub use services::ServicesGrid;
pub use site_header::{SiteHeader, ThemeToggle};
pub use toast_host::ToastHost;
