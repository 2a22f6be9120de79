use crate::error::{Error, Result};

/// Check an entry pathname against the HRX path grammar.
///
/// A trailing `/` marks a directory and is not part of any component.
pub(crate) fn validate(pathname: &str) -> Result<()> {
    let invalid = |reason| Error::InvalidPath {
        pathname: pathname.to_string(),
        reason,
    };

    let trimmed = pathname.strip_suffix('/').unwrap_or(pathname);
    if trimmed.is_empty() {
        return Err(invalid("empty path"));
    }
    if trimmed.starts_with('/') {
        return Err(invalid("absolute path"));
    }

    for component in trimmed.split('/') {
        match component {
            "" => return Err(invalid("empty component")),
            "." | ".." => return Err(invalid("relative component")),
            _ => {}
        }
        if component
            .chars()
            .any(|c| c.is_control() || c == ':' || c == '\\')
        {
            return Err(invalid("forbidden character"));
        }
    }

    Ok(())
}
