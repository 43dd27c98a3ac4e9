//! DNS hostname syntax checks for the image allowlist.

const MAX_HOSTNAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Check whether `candidate` is a bare DNS hostname.
///
/// Accepts dot-separated labels of ASCII letters, digits, and hyphens with no
/// leading or trailing hyphen per label. Schemes, paths, ports, wildcards, and
/// whitespace all fail the check.
pub fn is_valid_hostname(candidate: &str) -> bool {
    if candidate.is_empty() || candidate.len() > MAX_HOSTNAME_LEN {
        return false;
    }
    candidate.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// Case-insensitive comparison key for allowlist matching and duplicate detection.
pub fn normalized(hostname: &str) -> String {
    hostname.to_ascii_lowercase()
}
