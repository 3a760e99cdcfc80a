pub mod config;
pub mod logging;

pub mod checksum;
pub mod error;
pub mod identity;
pub mod installer;
pub mod remote;
pub mod staleness;
pub mod storage;
pub mod sync;
pub mod url_model;
