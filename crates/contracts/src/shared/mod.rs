pub mod catalog;
pub mod conventions;
pub mod selection;
pub mod tabs;
