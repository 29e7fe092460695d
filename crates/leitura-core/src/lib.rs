pub mod config;
pub mod logging;

pub mod corpus;
pub mod daily;
pub mod delivery;
pub mod position;
pub mod scheduler;
pub mod sent_log;
pub mod trigger;
