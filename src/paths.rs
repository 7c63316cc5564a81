//! Path helpers for switcher results
//!
//! Joining a project root with a listed relative path, and splitting a
//! listed path into the parts the list view shows.

/// Join a project root with a project-relative path
///
/// The separator is sniffed from the root: a root containing a backslash
/// is joined with `\`, anything else with `/`. Neither side is normalized,
/// so a root with a trailing separator yields a doubled one.
///
/// # Examples
///
/// ```
/// use quickswitch::paths::join_root;
///
/// assert_eq!(join_root("/root", "src/main.ts"), "/root/src/main.ts");
/// assert_eq!(join_root("C:\\root", "src\\main.ts"), "C:\\root\\src\\main.ts");
/// ```
#[must_use]
pub fn join_root(root: &str, relative: &str) -> String {
    let separator = if root.contains('\\') { '\\' } else { '/' };
    let mut joined = String::with_capacity(root.len() + 1 + relative.len());
    joined.push_str(root);
    joined.push(separator);
    joined.push_str(relative);
    joined
}

/// Display parts of a listed file path
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileInfo {
    /// Last path segment
    pub file_name: String,
    /// Everything before the last separator (empty for top-level files)
    pub directory: String,
    /// Text after the last dot of the file name, empty for dotfiles
    pub extension: String,
}

/// Split a listed path into file name, directory and extension
#[must_use]
pub fn file_info(path: &str) -> FileInfo {
    let (directory, file_name) = match path.rfind(['/', '\\']) {
        Some(idx) => (&path[..idx], &path[idx + 1..]),
        None => ("", path),
    };

    let extension = match file_name.rfind('.') {
        Some(dot) if dot > 0 => &file_name[dot + 1..],
        _ => "",
    };

    FileInfo {
        file_name: file_name.to_string(),
        directory: directory.to_string(),
        extension: extension.to_string(),
    }
}
