//! Platform-independent path rendering.

use std::path::Path;

/// Render a path with forward-slash separators.
///
/// Path handling elsewhere stays platform-native; only the text embedded in
/// the document is canonicalized. A Windows verbatim prefix (`\\?\`) is
/// dropped so the result never starts with a mixed-separator marker.
///
/// ```
/// use briefing::path::to_posix;
/// use std::path::Path;
///
/// assert_eq!(to_posix(Path::new(r"C:\Users\dev\project")), "C:/Users/dev/project");
/// assert_eq!(to_posix(Path::new("/home/dev/project")), "/home/dev/project");
/// ```
pub fn to_posix(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let trimmed = raw.strip_prefix(r"\\?\").unwrap_or(&*raw);
    trimmed.replace('\\', "/")
}
