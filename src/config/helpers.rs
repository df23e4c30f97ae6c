use std::path::{Path, PathBuf};

/// Keys are compared case-insensitively; the store only ever sees lower case.
pub(super) fn normalize(path: &str) -> String {
    path.to_lowercase()
}

/// Full path of option `name` in `section`; global options have no prefix.
pub(crate) fn option_path(section: &str, name: &str) -> String {
    if section.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", section, name)
    }
}

/// Section part of a full option path: everything before the last dot.
pub(super) fn section_of(path: &str) -> &str {
    path.rsplit_once('.').map_or("", |(section, _)| section)
}

/// Expand a leading `~/` to the home directory. Paths are returned unchanged
/// when there is no home directory to expand to.
pub(super) fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
