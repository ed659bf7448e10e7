//! inkpost
//!
//! A REST backend for a personal blog: accounts with bearer-token login,
//! posts that only their author may change, and comments on posts.
//!
//! - [`shared`] holds the JSON wire types and their validation rules
//! - [`backend`] holds the Axum server, its services, and the storage layer

pub mod shared;

pub mod backend;
