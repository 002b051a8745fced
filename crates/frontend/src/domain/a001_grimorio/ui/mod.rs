pub mod selection;
pub mod spellbook;
