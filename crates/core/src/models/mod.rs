pub mod category;
pub mod form;
pub mod line_item;
pub mod settings;
pub mod summary;
pub mod transaction;
