//! Catering management service: client orders, menu catalog and the
//! requirement calculations derived from them.

pub mod db;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod routes;
pub mod settings;
