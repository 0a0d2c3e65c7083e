//! Field checks shared by the content payloads.

use crate::{errors::ModelError, StringList};

/// Reject blank required text.
pub fn required(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} is required")));
    }
    Ok(())
}

pub fn max_len(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.chars().count() > max {
        return Err(ModelError::Validation(format!("{field} must be at most {max} characters")));
    }
    Ok(())
}

/// Required short text: non-blank and within the column width.
pub fn short_text(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    required(field, value)?;
    max_len(field, value, max)
}

pub fn email(value: &str) -> Result<(), ModelError> {
    let mut parts = value.trim().splitn(2, '@');
    match (parts.next(), parts.next()) {
        (Some(local), Some(domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => Ok(()),
        _ => Err(ModelError::Validation("invalid email".into())),
    }
}

/// Trim list entries and drop the blank ones.
pub fn string_list(items: Vec<String>) -> StringList {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_required_is_rejected() {
        assert!(required("name", "  ").is_err());
        assert!(required("name", "Shield").is_ok());
    }

    #[test]
    fn max_len_counts_chars_not_bytes() {
        assert!(max_len("title", "酪梨智慧", 4).is_ok());
        assert!(max_len("title", "酪梨智慧!", 4).is_err());
    }

    #[test]
    fn email_shape() {
        assert!(email("a@x.com").is_ok());
        assert!(email("a@b@c").is_err());
        assert!(email("@x.com").is_err());
        assert!(email("nobody").is_err());
    }

    #[test]
    fn string_list_drops_blank_entries() {
        let list = string_list(vec![" a ".into(), "".into(), "  ".into(), "b".into()]);
        assert_eq!(list, StringList::from(vec!["a", "b"]));
    }
}
