//! Shared validation helpers.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` does not normalize to an http(s) URL.
pub(crate) fn validate_url(errors: &mut Vec<String>, name: &str, value: &str) {
    if let Err(e) = tabmark_url::normalize(value) {
        errors.push(format!("{name} = {value:?} is not a valid url ({e})"));
    }
}
