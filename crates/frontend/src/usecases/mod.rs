pub mod u601_selection_counter;
pub mod u602_tab_switcher;
