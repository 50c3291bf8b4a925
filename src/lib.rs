pub mod bank;
pub mod cli;
pub mod console;
pub mod error;
pub mod export;
pub mod model;
pub mod report;
pub mod selector;
pub mod state;
pub mod timer;
pub mod validate;
