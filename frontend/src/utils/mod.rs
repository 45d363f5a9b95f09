pub mod dom;
pub mod time;
