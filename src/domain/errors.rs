use derive_more::Display;

/// Small error set for the browser-facing ports. None of these are fatal:
/// callers log them and carry on with in-memory state.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DashboardError {
    #[display(fmt = "Storage unavailable: {}", _0)]
    StorageUnavailable(String),
    #[display(fmt = "Storage read failed: {}", _0)]
    StorageRead(String),
    #[display(fmt = "Storage write failed: {}", _0)]
    StorageWrite(String),
    #[display(fmt = "Document unavailable: {}", _0)]
    DocumentUnavailable(String),
    #[display(fmt = "Invalid config: {}", _0)]
    InvalidConfig(String),
}

impl std::error::Error for DashboardError {}

pub type StoreResult<T> = Result<T, DashboardError>;
pub type DocumentResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::DashboardError;

    #[test]
    fn display_prefixes_kind() {
        let err = DashboardError::StorageWrite("quota exceeded".into());
        assert_eq!(err.to_string(), "Storage write failed: quota exceeded");
    }
}
