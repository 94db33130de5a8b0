//! Field validators and the SSN input formatter.
//!
//! All functions here are pure and stateless. Validators return `Ok(())`
//! or a human-readable message suitable for display next to the field;
//! they never touch the network.

/// Validate an SSN: required, exactly 3-2-4 digit groups separated by
/// hyphens after trimming.
pub fn validate_ssn(input: &str) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("SSN is required".to_string());
    }
    if !is_canonical_ssn(trimmed) {
        return Err("SSN must be in the format 123-45-6789".to_string());
    }
    Ok(())
}

fn is_canonical_ssn(s: &str) -> bool {
    let mut groups = s.split('-');
    let (Some(a), Some(b), Some(c), None) =
        (groups.next(), groups.next(), groups.next(), groups.next())
    else {
        return false;
    };
    is_digits(a, 3) && is_digits(b, 2) && is_digits(c, 4)
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// Validate a first or last name: required, trimmed length in [2,50],
/// letters, spaces, hyphens and apostrophes only.
pub fn validate_name(label: &str, input: &str) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} is required", label));
    }
    let len = trimmed.chars().count();
    if !(2..=50).contains(&len) {
        return Err(format!("{} must be between 2 and 50 characters", label));
    }
    let ok = trimmed
        .chars()
        .all(|c| c.is_alphabetic() || c == ' ' || c == '-' || c == '\'');
    if !ok {
        return Err(format!(
            "{} may only contain letters, spaces, hyphens and apostrophes",
            label
        ));
    }
    Ok(())
}

/// Validate an employee number: required, trimmed length in [1,20],
/// letters, digits, hyphen and underscore only.
pub fn validate_employee_no(input: &str) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Employee number is required".to_string());
    }
    if trimmed.chars().count() > 20 {
        return Err("Employee number must be at most 20 characters".to_string());
    }
    let ok = trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !ok {
        return Err(
            "Employee number may only contain letters, digits, hyphens and underscores"
                .to_string(),
        );
    }
    Ok(())
}

/// Re-format arbitrary input as an SSN while the user types.
///
/// Strips everything that is not a digit, keeps at most nine digits, and
/// re-inserts hyphens after the third and fifth digit. Idempotent on an
/// already-formatted string.
pub fn format_ssn(input: &str) -> String {
    let mut out = String::with_capacity(11);
    let mut count = 0;
    for c in input.chars() {
        if !c.is_ascii_digit() {
            continue;
        }
        if count == 9 {
            break;
        }
        if count == 3 || count == 5 {
            out.push('-');
        }
        out.push(c);
        count += 1;
    }
    out
}
