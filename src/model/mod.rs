pub mod block;
pub mod config;
pub mod file_tree;
pub mod workspace;
