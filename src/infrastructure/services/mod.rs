pub mod host_settings_service;
