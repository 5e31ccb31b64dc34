//! HTTP backend: login against the directory, session tokens, and content CRUD.
//!
//! Requests go router → `controller/` → `service/` → `data/`. Controllers turn
//! form and query fields into the params in `model/`, services apply the rules
//! (not-found mapping, session upsert-or-refresh), and repositories own every
//! SeaORM query. `middleware/` guards routes that need a bearer token.
//!
//! `config`, `startup` and `state` wire the process together; `directory/` and
//! `token` hold the two external trust anchors.

pub mod config;
pub mod controller;
pub mod data;
pub mod directory;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod token;
pub mod util;
