//! Advertising markup: fragment construction and body injection.
//!
//! Everything in this module is pure string work. Fragments are derived
//! from the resolved tenant configuration per request ([`fragments`]) and
//! merged into article HTML at paragraph boundaries ([`inject`]).

pub mod fragments;
pub mod inject;

pub use fragments::{AdFragmentSet, display_ad_unit, fragment_set, header_scripts, native_widget};
pub use inject::inject_content_ads;
