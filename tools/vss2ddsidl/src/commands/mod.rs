pub mod export;
pub mod structs;
pub mod tree;
