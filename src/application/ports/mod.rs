pub mod settings_ports;
pub mod trash_ports;
