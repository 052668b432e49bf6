pub mod basics;
pub mod daily;
pub mod history;
pub mod needs;
