pub mod error;
pub mod installer;
pub mod model;
pub mod msg;
pub mod patch;

pub use error::{InstallError, Result};
pub use installer::{InstallOptions, Report, install_into};
