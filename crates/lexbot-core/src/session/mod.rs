mod controller;
mod options;

pub use controller::SessionController;
pub use options::{clamp_temperature, RequestOptions};
