//! TUI widgets

pub mod chrome;
pub mod help;
pub mod map;
pub mod selection;
pub mod tabs;
pub mod timeline;
