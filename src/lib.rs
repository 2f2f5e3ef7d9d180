pub mod application;
pub mod asset;
pub mod catalog;
pub mod commands;
pub mod http;
pub mod provider;
pub mod runtime;
