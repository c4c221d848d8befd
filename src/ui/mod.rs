pub mod clickable_label;
pub mod panels;
pub mod signal;
pub mod viewer;
