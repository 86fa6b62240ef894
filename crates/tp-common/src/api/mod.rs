pub mod match_report;
pub mod requests;
pub mod responses;
