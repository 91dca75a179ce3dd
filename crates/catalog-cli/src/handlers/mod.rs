pub mod fields;
pub mod view;
