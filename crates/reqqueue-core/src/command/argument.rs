use crate::errors::{ReqQueueError, Result};
use serde::de::DeserializeOwned;

/// Parse structured command argument text into a record
///
/// The serde error text is kept in the message so the user sees which
/// field or position was wrong.
pub fn parse_json_argument<T: DeserializeOwned>(args: &str) -> Result<T> {
    serde_json::from_str(args.trim()).map_err(|e| {
        ReqQueueError::InvalidArgument {
            reason: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;
    use crate::model::EmploymentRequest;

    #[test]
    fn test_parse_error_carries_serde_description() {
        let err = parse_json_argument::<EmploymentRequest>("{\"applicant\": 5}").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert!(err.message().starts_with("Invalid argument: "));
        assert!(err.message().contains("invalid type"));
    }

    #[test]
    fn test_empty_argument_is_an_error() {
        assert!(parse_json_argument::<EmploymentRequest>("   ").is_err());
    }
}
