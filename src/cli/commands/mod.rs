pub mod batch;
pub mod fetch;
pub mod proof;
pub mod report;
