//! Form rendering module
//!
//! - `field_renderer`: single field with validity indicator
//! - `registration_form`: the registration form and its layout

mod field_renderer;
mod registration_form;

pub use registration_form::{draw_registration, hit_test};
