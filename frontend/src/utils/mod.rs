pub mod config;
pub mod inquiry;
pub mod particles;
pub mod pipeline;
pub mod server;
pub mod store;
