//! Ports - 六边形架构端口定义

mod user_directory;

pub use user_directory::UserDirectoryPort;
