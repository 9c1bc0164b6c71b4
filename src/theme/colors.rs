//! Color constants for the site palettes.
//!
//! Mirrored by the CSS variables in `styles.rs`; kept here as the single
//! reference for both palettes.

#![allow(dead_code)]

// === BRAND ===
pub const BRAND_BLUE: &str = "#1d4ed8";
pub const BRAND_BLUE_HOVER: &str = "#1e40af";
pub const BRAND_AMBER: &str = "#d97706";

// === LIGHT PALETTE ===
pub const LIGHT_BG: &str = "#ffffff";
pub const LIGHT_BG_MUTED: &str = "#f4f6f8";
pub const LIGHT_BORDER: &str = "#e2e8f0";
pub const LIGHT_TEXT: &str = "#0f172a";
pub const LIGHT_TEXT_MUTED: &str = "#5b6676";

// === DARK PALETTE ===
pub const DARK_BG: &str = "#0b1120";
pub const DARK_BG_MUTED: &str = "#101828";
pub const DARK_BORDER: &str = "#1f2a3d";
pub const DARK_TEXT: &str = "#e8edf4";
pub const DARK_TEXT_MUTED: &str = "#93a0b4";

// === SEMANTIC ===
pub const DESTRUCTIVE: &str = "#dc2626";
pub const SUCCESS: &str = "#16a34a";
