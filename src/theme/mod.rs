//! Theme for the Eminent Global Logistics site.
//!
//! Light and dark palettes plus the global stylesheet injected at the
//! app root. The effective palette is selected by the `light`/`dark`
//! class on the page root.

mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
