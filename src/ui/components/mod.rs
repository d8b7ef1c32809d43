//! Reusable UI components

mod alert;
mod button;

pub use alert::{render_error_alert, ALERT_HEIGHT};
pub use button::{render_button, BUTTON_HEIGHT};
