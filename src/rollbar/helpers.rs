//! Helper functions shared by the command handlers

use crate::error::{Result, RollbarError};

/// Result type of a command handler
pub type CommandResult<T = ()> = std::result::Result<T, Box<dyn std::error::Error>>;

/// How a user refers to a resource on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier<'a> {
    Id(i64),
    Name(&'a str),
}

impl<'a> Identifier<'a> {
    /// Numeric input is an ID, anything else a name
    pub fn parse(input: &'a str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(id) => Identifier::Id(id),
            Err(_) => Identifier::Name(input),
        }
    }
}

/// Replace a bare `NotFound` with a message naming what was looked up
pub fn describe_not_found<T>(result: Result<T>, what: &str, key: &str) -> CommandResult<T> {
    match result {
        Ok(value) => Ok(value),
        Err(RollbarError::NotFound) => Err(format!("{} '{}' not found", what, key).into()),
        Err(e) => Err(e.into()),
    }
}

/// Keep only items whose name contains `filter` (case-insensitive)
pub fn filter_by_name<T, F>(items: &mut Vec<T>, filter: Option<&str>, name: F)
where
    F: Fn(&T) -> &str,
{
    if let Some(filter) = filter {
        let filter_lower = filter.to_lowercase();
        items.retain(|item| name(item).to_lowercase().contains(&filter_lower));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_parse() {
        assert_eq!(Identifier::parse("42"), Identifier::Id(42));
        assert_eq!(Identifier::parse(" 7 "), Identifier::Id(7));
        assert_eq!(Identifier::parse("backend"), Identifier::Name("backend"));
        assert_eq!(Identifier::parse("42-api"), Identifier::Name("42-api"));
    }

    #[test]
    fn test_describe_not_found() {
        let result: Result<()> = Err(RollbarError::NotFound);
        let err = describe_not_found(result, "Project", "backend").unwrap_err();
        assert_eq!(err.to_string(), "Project 'backend' not found");

        let result: Result<()> = Err(RollbarError::Unauthorized);
        let err = describe_not_found(result, "Project", "backend").unwrap_err();
        assert!(!err.to_string().contains("not found"));
    }

    #[test]
    fn test_filter_by_name() {
        let mut names = vec!["Backend", "frontend", "ops"];
        filter_by_name(&mut names, Some("END"), |n| *n);
        assert_eq!(names, vec!["Backend", "frontend"]);

        filter_by_name(&mut names, None, |n| *n);
        assert_eq!(names.len(), 2);
    }
}
