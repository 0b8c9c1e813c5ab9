pub mod gallery_state;
pub mod viewer;
