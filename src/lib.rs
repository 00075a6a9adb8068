pub mod api;
pub mod config;
pub mod engine;
pub mod entities;
pub mod error;
pub mod external;
pub mod guide;
pub mod server;
pub mod session;
pub mod state;
pub mod view;
