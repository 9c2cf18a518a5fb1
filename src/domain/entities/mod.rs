pub mod trashed_item;
