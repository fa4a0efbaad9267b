pub mod config;
pub mod discovery;
pub mod scripts;
pub mod session;
