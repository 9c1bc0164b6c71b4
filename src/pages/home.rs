//! The single marketing page.
//!
//! Header, hero, about, services, contact (with the quote form), footer.
//! Each content section sits behind a fault boundary so a rendering
//! failure in one section never takes down the page.

use dioxus::prelude::*;

use crate::components::{
    About, Contact, Hero, SectionBoundary, ServicesGrid, SiteFooter, SiteHeader,
};

#[component]
pub fn Home() -> Element {
    rsx! {
        SiteHeader {}

        main {
            SectionBoundary { Hero {} }
            SectionBoundary { About {} }
            SectionBoundary { ServicesGrid {} }
            SectionBoundary { Contact {} }
        }

        SiteFooter {}
    }
}
