pub mod footer;
pub mod header;
pub mod helpers;
pub mod layer;
pub mod overlay;
pub mod page_body;
pub mod search_field;
