//! Drive registration metadata.

/// A drive the host should mount for this provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriveInfo {
    /// Drive name presented to the host.
    pub name: String,
    /// Root path of the drive.
    pub root: String,
}

/// The provider's default drive set: a single drive named `Maze` rooted
/// at the empty path, which resolves to the maze origin.
pub fn default_drives() -> Vec<DriveInfo> {
    vec![DriveInfo {
        name: "Maze".to_owned(),
        root: String::new(),
    }]
}
