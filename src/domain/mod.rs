pub mod builder;
pub mod catalog;
pub mod csv;
pub mod delivery;
pub mod error;
pub mod executor;
pub mod history;
pub mod models;
pub mod store;
