pub mod lookup;
pub mod navigation;
pub mod search;
