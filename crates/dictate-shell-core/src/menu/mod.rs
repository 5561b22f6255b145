mod tree;

pub use tree::{MenuEntry, MenuRole, MenuSection, MenuTree, RECORDING_ACCELERATOR};
