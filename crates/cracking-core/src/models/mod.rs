pub mod audience;
pub mod page;
pub mod profile;
