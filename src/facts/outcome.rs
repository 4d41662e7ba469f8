/// Result of a remote API call for a single package.
#[derive(Debug)]
pub enum ApiOutcome<T> {
    /// Request succeeded and the resource was found.
    Success(T),

    /// The requested resource does not exist (404).
    NotFound,

    /// Request failed. Per-record failures are logged and the record is dropped.
    Failed(ohno::AppError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use ohno::app_err;

    #[test]
    fn test_success_carries_value() {
        let outcome: ApiOutcome<u32> = ApiOutcome::Success(7);
        assert!(matches!(outcome, ApiOutcome::Success(7)));
    }

    #[test]
    fn test_failed_carries_error() {
        let outcome: ApiOutcome<u32> = ApiOutcome::Failed(app_err!("boom"));
        assert!(matches!(outcome, ApiOutcome::Failed(_)));
    }
}
