mod footer;
mod projects;
pub mod terminal;

pub use footer::Footer;
pub use projects::ProjectsSection;
pub use terminal::Terminal;
