pub mod init;
pub mod maintenance;
pub mod misc;
pub mod records;
pub mod stats;
pub mod transfer;
