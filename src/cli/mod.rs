pub mod compare;
pub mod currency;
pub mod listings;
pub mod setup;
pub mod ui;
