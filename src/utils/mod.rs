pub mod dom;
pub mod theme;
