pub mod auth;
pub mod db;
pub mod email;
pub mod storage;
pub mod utils;
pub mod web;
