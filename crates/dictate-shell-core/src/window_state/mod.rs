mod state;
mod store;

pub use {
    state::{WindowBounds, WindowState},
    store::{StatePersistence, WindowStateStore},
};
