//! Use-case services built on top of store, layout and interaction.

pub mod tree_service;
