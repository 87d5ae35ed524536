pub mod error;
pub mod logging;
pub mod model;
pub mod db;
pub mod queries;
pub mod seed;
pub mod cli;
