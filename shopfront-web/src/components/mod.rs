pub mod alert;
pub mod item_card;
pub mod select;
pub mod store_view;
