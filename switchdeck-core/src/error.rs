//! Structured error types for router construction.
//!
//! Only configuration can fail: a container id that resolves to nothing.
//! Everything else (missing section elements, missing buttons) is a
//! tolerated gap, and the corresponding styling step is skipped silently.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("container element with id '{0}' not found")]
    ContainerNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_container() {
        let err = RouterError::ContainerNotFound("router".into());
        assert_eq!(err.to_string(), "container element with id 'router' not found");
    }
}
