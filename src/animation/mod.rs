pub mod driver;
pub mod state;
