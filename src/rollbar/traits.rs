//! Common traits for Rollbar resources

/// Common trait for resources identified by a numeric id and a name
pub trait RollbarResource {
    /// Get the resource ID
    fn id(&self) -> i64;

    /// Get the human-readable name
    fn name(&self) -> &str;
}

/// Find the first resource whose name equals `name`
pub fn find_by_name<'a, T: RollbarResource>(items: &'a [T], name: &str) -> Option<&'a T> {
    items.iter().find(|item| item.name() == name)
}
