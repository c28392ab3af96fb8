pub mod config;
pub mod logging;

pub mod lookup;
pub mod operator;
pub mod sink;
pub mod source;
pub mod triage;
pub mod window;
