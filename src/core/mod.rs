pub mod dashboard;
pub mod pay;
