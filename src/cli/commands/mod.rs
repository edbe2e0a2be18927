pub mod add;
pub mod clear;
pub mod config;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod note;
pub mod totals;
