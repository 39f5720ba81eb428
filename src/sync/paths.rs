//! Remote document paths, built in fixed-capacity buffers.

use core::fmt::Write;

/// Longest path the bridge will address: `/<name>/<node>`.
pub const MAX_PATH_LEN: usize = 64;

/// A remote document path such as `/Stagg EKG+/status`.
pub type RemotePath = heapless::String<MAX_PATH_LEN>;

/// Build `/<device_name>/<node>`.
///
/// Returns `None` when the device has no identity yet (empty name) or the
/// path would not fit; both cases mean "nothing to address".
pub fn node_path(device_name: &str, node: &str) -> Option<RemotePath> {
    if device_name.is_empty() {
        return None;
    }
    let mut path = RemotePath::new();
    write!(path, "/{}/{}", device_name, node).ok()?;
    Some(path)
}
