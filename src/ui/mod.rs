pub mod panels;
pub mod report;
