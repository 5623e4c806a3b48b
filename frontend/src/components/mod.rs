pub mod data_form;
pub mod header;
pub mod item_list;
