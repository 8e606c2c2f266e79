//! Helpers for fully-qualified domain names in their textual form.

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 253;

/// Returns `true` for the root zone, written either as `""` or `"."`.
pub fn is_root(name: &str) -> bool {
    matches!(name.trim(), "" | ".")
}

/// Canonicalise `name` to its trailing-dot form. The root becomes `"."`.
pub fn fqdn(name: &str) -> String {
    let name = name.trim();
    if is_root(name) {
        return ".".to_string();
    }
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

/// Checks label and total lengths of a textual name.
pub fn validate_name(name: &str) -> Result<(), String> {
    if is_root(name) {
        return Ok(());
    }

    let name = name.trim();
    let relative = name.strip_suffix('.').unwrap_or(name);

    if relative.len() > MAX_NAME_LEN {
        return Err(format!("name longer than {} bytes", MAX_NAME_LEN));
    }

    for label in relative.split('.') {
        if label.is_empty() {
            return Err("empty label".to_string());
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(format!("label '{}' longer than {} bytes", label, MAX_LABEL_LEN));
        }
        if label.chars().any(|c| c.is_whitespace()) {
            return Err(format!("label '{}' contains whitespace", label));
        }
    }

    Ok(())
}

/// Strips `.<zone>` from the end of `name`, ignoring ASCII case.
///
/// Both arguments are expected in trailing-dot form. For the root zone only
/// the trailing dot is removed. Returns `None` when `name` is not strictly
/// below `zone`.
pub fn strip_zone_suffix<'a>(name: &'a str, zone: &str) -> Option<&'a str> {
    if is_root(zone) {
        return name.strip_suffix('.').filter(|rest| !rest.is_empty());
    }

    let split = name.len().checked_sub(zone.len() + 1)?;
    let zone_part = name.get(split..)?.strip_prefix('.')?;

    if split > 0 && zone_part.eq_ignore_ascii_case(zone) {
        name.get(..split)
    } else {
        None
    }
}

/// Returns `true` when `name` equals `zone` or sits below it, ignoring
/// ASCII case. Matching is label aligned, so `badexample.com.` is not
/// inside `example.com.`.
pub fn is_in_zone(name: &str, zone: &str) -> bool {
    if is_root(zone) {
        return true;
    }
    let name = fqdn(name);
    name.eq_ignore_ascii_case(zone) || strip_zone_suffix(&name, zone).is_some()
}

/// Number of labels in a trailing-dot name; the root has none.
pub fn label_count(name: &str) -> usize {
    if is_root(name) {
        return 0;
    }
    let name = name.trim();
    name.strip_suffix('.').unwrap_or(name).split('.').count()
}
