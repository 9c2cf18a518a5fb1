pub mod trash_repository;
