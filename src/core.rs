pub mod catalog;
pub mod features;
pub mod history;
pub mod storage;
