pub mod config;
pub mod logging;

pub mod batch;
pub mod confscan;
pub mod fetch;
pub mod pool;
pub mod url_model;
