pub mod inventory;
pub mod process;
