pub mod size_service;
pub mod trash_location;
