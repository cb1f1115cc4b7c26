use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Permanent policy rejection. Retrying will not help.
    #[error("Operation '{operation}' is not supported for {entity}")]
    UnsupportedOperation {
        operation: &'static str,
        entity: &'static str,
    },
}

impl StoreError {
    pub fn unsupported(operation: &'static str, entity: &'static str) -> Self {
        StoreError::UnsupportedOperation { operation, entity }
    }
}
