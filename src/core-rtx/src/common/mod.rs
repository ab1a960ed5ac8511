pub mod env;
pub mod health;
pub mod hostname;
pub mod logging;
