//! In-Memory Implementations

mod user_directory;

pub use user_directory::SeedUserDirectory;
