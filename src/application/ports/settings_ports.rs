/// Port for settings owned by the hosting file manager
#[cfg_attr(test, mockall::automock)]
pub trait HostSettingsPort: Send + Sync {
    /// Whether deleting a file moves it to the trash instead of unlinking it
    fn delete_to_trash(&self) -> bool;
}
