//! Email address matcher
//!
//! Accepts `local@domain` where:
//! - local is 1..=256 characters of `[A-Za-z0-9+._%-]`
//! - domain is a label of an alphanumeric followed by at most 64 of
//!   `[A-Za-z0-9-]`, then one or more `.label` parts whose tails are at most
//!   25 characters
//!
//! The whole string must match; there is no trimming.

const MAX_LOCAL_LEN: usize = 256;
const MAX_FIRST_LABEL_TAIL: usize = 64;
const MAX_LABEL_TAIL: usize = 25;

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "+._%-".contains(c)
}

fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

fn is_valid_label(label: &str, max_tail: usize) -> bool {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    let tail = chars.as_str();
    tail.len() <= max_tail && tail.chars().all(is_label_char)
}

/// Check whether `value` is a well-formed email address
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > MAX_LOCAL_LEN || !local.chars().all(is_local_char) {
        return false;
    }

    let mut labels = domain.split('.');
    let Some(first) = labels.next() else {
        return false;
    };
    if !is_valid_label(first, MAX_FIRST_LABEL_TAIL) {
        return false;
    }

    let mut rest = 0;
    for label in labels {
        if !is_valid_label(label, MAX_LABEL_TAIL) {
            return false;
        }
        rest += 1;
    }
    rest > 0
}
