pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod model;
pub mod query;
pub mod repo;
pub mod routes;
pub mod validate;
