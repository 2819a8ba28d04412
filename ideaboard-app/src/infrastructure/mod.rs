pub mod auth;
pub mod db;
pub mod demo;
pub mod feed;
pub mod security;
pub mod store;
