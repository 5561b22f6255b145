mod config;
mod content_bridge;
