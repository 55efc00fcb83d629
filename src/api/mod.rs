#![forbid(unsafe_code)]

pub mod pages;
pub mod students_get;
pub mod version;
pub mod year_get;
