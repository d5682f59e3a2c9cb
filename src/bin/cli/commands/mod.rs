pub mod contract;
pub mod list;
pub mod show;
