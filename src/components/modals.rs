pub mod command_palette;
pub mod help;
pub mod helpers;
pub mod manager;

pub use manager::ModalManager;
