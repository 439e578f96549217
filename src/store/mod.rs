pub mod mutate;
pub mod root;
pub mod tree;

pub use root::{DocumentRoot, SharedRoot};
