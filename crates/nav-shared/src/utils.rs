//! Path helpers shared by the resolver and the console.

use crate::constants::{PATH_SEPARATOR, ROOT_PATH};

/// Collapse repeated separators, trim the trailing one, and force a leading
/// one. The empty path normalizes to `/`.
pub fn normalize_path(path: &str) -> String {
    join_paths(std::iter::once(path))
}

/// Join path segments into one absolute path.
///
/// Empty segments contribute nothing, so a child with an empty path mounts at
/// its parent's path.
pub fn join_paths<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut joined = String::new();
    for part in segments
        .into_iter()
        .flat_map(|segment| segment.split(PATH_SEPARATOR))
        .filter(|part| !part.is_empty())
    {
        joined.push(PATH_SEPARATOR);
        joined.push_str(part);
    }

    if joined.is_empty() {
        ROOT_PATH.to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("account"), "/account");
        assert_eq!(normalize_path("//user///account/"), "/user/account");
    }

    #[test]
    fn test_join_paths() {
        assert_eq!(join_paths(["", "account"]), "/account");
        assert_eq!(join_paths(["/image-manage", "imageList"]), "/image-manage/imageList");
        assert_eq!(join_paths(["/user/", "/account"]), "/user/account");
        assert_eq!(join_paths(["/user", ""]), "/user");
        assert_eq!(join_paths(Vec::<&str>::new()), "/");
    }
}
