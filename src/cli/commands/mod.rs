pub mod backup;
pub mod config;
pub mod db;
pub mod export;
pub mod handle;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod serve;
