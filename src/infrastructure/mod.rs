pub mod delivery;
pub mod file_store;
pub mod simulated;
