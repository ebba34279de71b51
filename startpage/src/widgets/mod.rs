// Widget modules
pub mod bookmarks;
pub mod clock;
pub mod search;
pub mod weather;

// Re-exports
pub use bookmarks::Bookmarks;
pub use clock::Clock;
pub use search::Search;
pub use weather::Weather;
