//! Classification tables for failed responses.
//!
//! Both lookups are total: an unknown status or error code maps to
//! [`ErrorKind::Generic`] instead of failing.

use crate::clients::ErrorKind;

/// API error codes, including the legacy exception names still returned by
/// older API versions, with their kind and normalized code.
const ERROR_CODE_TABLE: &[(&str, ErrorKind, &str)] = &[
    // Authorization
    ("USER_UNAUTHORIZED", ErrorKind::Authorization, "USER_UNAUTHORIZED"),
    ("UserUnauthorizedException", ErrorKind::Authorization, "USER_UNAUTHORIZED"),
    ("Unauthorized", ErrorKind::Authorization, "USER_UNAUTHORIZED"),
    ("missingRequiredPermissions", ErrorKind::Authorization, "MISSING_REQUIRED_PERMISSIONS"),
    ("MISSING_REQUIRED_PERMISSIONS", ErrorKind::Authorization, "MISSING_REQUIRED_PERMISSIONS"),
    // Rate limits
    ("RATE_LIMIT_EXCEEDED", ErrorKind::RateLimit, "RATE_LIMIT_EXCEEDED"),
    ("RateLimitExceededException", ErrorKind::RateLimit, "RATE_LIMIT_EXCEEDED"),
    ("DAILY_LIMIT_EXCEEDED", ErrorKind::RateLimit, "DAILY_LIMIT_EXCEEDED"),
    ("CONCURRENCY_LIMIT_EXCEEDED", ErrorKind::RateLimit, "CONCURRENCY_LIMIT_EXCEEDED"),
    ("maxConcurrencyExceeded", ErrorKind::RateLimit, "CONCURRENCY_LIMIT_EXCEEDED"),
    ("IP_RATE_LIMIT_EXCEEDED", ErrorKind::RateLimit, "IP_RATE_LIMIT_EXCEEDED"),
    ("FIELD_LIMIT_EXCEEDED", ErrorKind::RateLimit, "FIELD_LIMIT_EXCEEDED"),
    ("API_TEMPORARILY_BLOCKED", ErrorKind::RateLimit, "API_TEMPORARILY_BLOCKED"),
    // Complexity
    ("COMPLEXITY_BUDGET_EXHAUSTED", ErrorKind::Complexity, "COMPLEXITY_BUDGET_EXHAUSTED"),
    ("ComplexityException", ErrorKind::Complexity, "COMPLEXITY_BUDGET_EXHAUSTED"),
    ("COMPLEXITY_EXCEPTION", ErrorKind::Complexity, "COMPLEXITY_BUDGET_EXHAUSTED"),
    // Not found
    ("RESOURCE_NOT_FOUND", ErrorKind::ResourceNotFound, "RESOURCE_NOT_FOUND"),
    ("ResourceNotFoundException", ErrorKind::ResourceNotFound, "RESOURCE_NOT_FOUND"),
    // Server
    ("INTERNAL_SERVER_ERROR", ErrorKind::InternalServer, "INTERNAL_SERVER_ERROR"),
    // Invalid requests
    ("INVALID_ARGUMENT", ErrorKind::InvalidRequest, "INVALID_ARGUMENT"),
    ("InvalidArgumentException", ErrorKind::InvalidRequest, "INVALID_ARGUMENT"),
    ("PARSE_ERROR", ErrorKind::InvalidRequest, "PARSE_ERROR"),
    ("JsonParseException", ErrorKind::InvalidRequest, "PARSE_ERROR"),
    ("COLUMN_VALUE_EXCEPTION", ErrorKind::InvalidRequest, "COLUMN_VALUE_EXCEPTION"),
    ("ColumnValueException", ErrorKind::InvalidRequest, "COLUMN_VALUE_EXCEPTION"),
    ("CORRECTED_VALUE_EXCEPTION", ErrorKind::InvalidRequest, "CORRECTED_VALUE_EXCEPTION"),
    ("CorrectedValueException", ErrorKind::InvalidRequest, "CORRECTED_VALUE_EXCEPTION"),
    ("ARGUMENT_LIMIT_EXCEEDED", ErrorKind::InvalidRequest, "ARGUMENT_LIMIT_EXCEEDED"),
    ("INVALID_USER_ID", ErrorKind::InvalidRequest, "INVALID_USER_ID"),
    ("InvalidUserIdException", ErrorKind::InvalidRequest, "INVALID_USER_ID"),
    ("INVALID_VERSION", ErrorKind::InvalidRequest, "INVALID_VERSION"),
    ("InvalidVersionException", ErrorKind::InvalidRequest, "INVALID_VERSION"),
    ("INVALID_COLUMN_ID", ErrorKind::InvalidRequest, "INVALID_COLUMN_ID"),
    ("InvalidColumnIdException", ErrorKind::InvalidRequest, "INVALID_COLUMN_ID"),
    ("INVALID_ITEM_ID", ErrorKind::InvalidRequest, "INVALID_ITEM_ID"),
    ("InvalidItemIdException", ErrorKind::InvalidRequest, "INVALID_ITEM_ID"),
    ("INVALID_BOARD_ID", ErrorKind::InvalidRequest, "INVALID_BOARD_ID"),
    ("InvalidBoardIdException", ErrorKind::InvalidRequest, "INVALID_BOARD_ID"),
    ("INVALID_GROUP_ID", ErrorKind::InvalidRequest, "INVALID_GROUP_ID"),
    ("InvalidGroupIdException", ErrorKind::InvalidRequest, "INVALID_GROUP_ID"),
    ("INVALID_WORKSPACE_ID", ErrorKind::InvalidRequest, "INVALID_WORKSPACE_ID"),
    ("InvalidWorkspaceIdException", ErrorKind::InvalidRequest, "INVALID_WORKSPACE_ID"),
    ("CREATE_BOARD_EXCEPTION", ErrorKind::InvalidRequest, "CREATE_BOARD_EXCEPTION"),
    ("CreateBoardException", ErrorKind::InvalidRequest, "CREATE_BOARD_EXCEPTION"),
    ("ITEMS_LIMITATION_EXCEPTION", ErrorKind::InvalidRequest, "ITEMS_LIMITATION_EXCEPTION"),
    ("ItemsLimitationException", ErrorKind::InvalidRequest, "ITEMS_LIMITATION_EXCEPTION"),
    ("ITEM_NAME_TOO_LONG", ErrorKind::InvalidRequest, "ITEM_NAME_TOO_LONG"),
    ("ItemNameTooLongException", ErrorKind::InvalidRequest, "ITEM_NAME_TOO_LONG"),
    ("RECORD_INVALID", ErrorKind::InvalidRequest, "RECORD_INVALID"),
    ("RecordInvalidException", ErrorKind::InvalidRequest, "RECORD_INVALID"),
];

/// Maps an HTTP status code to an error kind.
///
/// # Example
///
/// ```rust
/// use monday_api::clients::{status_code_error_kind, ErrorKind};
///
/// assert_eq!(status_code_error_kind(401), ErrorKind::Authorization);
/// assert_eq!(status_code_error_kind(418), ErrorKind::Generic);
/// ```
#[must_use]
pub const fn status_code_error_kind(status: u16) -> ErrorKind {
    match status {
        400 => ErrorKind::InvalidRequest,
        401 | 403 => ErrorKind::Authorization,
        404 => ErrorKind::ResourceNotFound,
        429 => ErrorKind::RateLimit,
        500..=599 => ErrorKind::InternalServer,
        _ => ErrorKind::Generic,
    }
}

/// Maps an API `error_code` to an error kind and its normalized code.
///
/// Unknown codes map to [`ErrorKind::Generic`] with the code unchanged.
///
/// # Example
///
/// ```rust
/// use monday_api::clients::{error_code_error_kind, ErrorKind};
///
/// assert_eq!(
///     error_code_error_kind("ComplexityException"),
///     (ErrorKind::Complexity, "COMPLEXITY_BUDGET_EXHAUSTED".to_string())
/// );
/// assert_eq!(
///     error_code_error_kind("SOMETHING_NEW"),
///     (ErrorKind::Generic, "SOMETHING_NEW".to_string())
/// );
/// ```
#[must_use]
pub fn error_code_error_kind(error_code: &str) -> (ErrorKind, String) {
    ERROR_CODE_TABLE
        .iter()
        .find(|(code, _, _)| *code == error_code)
        .map_or_else(
            || (ErrorKind::Generic, error_code.to_string()),
            |(_, kind, normalized)| (*kind, (*normalized).to_string()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(status_code_error_kind(400), ErrorKind::InvalidRequest);
        assert_eq!(status_code_error_kind(401), ErrorKind::Authorization);
        assert_eq!(status_code_error_kind(403), ErrorKind::Authorization);
        assert_eq!(status_code_error_kind(404), ErrorKind::ResourceNotFound);
        assert_eq!(status_code_error_kind(429), ErrorKind::RateLimit);
        assert_eq!(status_code_error_kind(500), ErrorKind::InternalServer);
        assert_eq!(status_code_error_kind(503), ErrorKind::InternalServer);
        assert_eq!(status_code_error_kind(599), ErrorKind::InternalServer);
    }

    #[test]
    fn test_unknown_status_codes_map_to_generic() {
        for status in [0, 100, 200, 302, 405, 409, 422, 600, u16::MAX] {
            assert_eq!(status_code_error_kind(status), ErrorKind::Generic);
        }
    }

    #[test]
    fn test_error_code_mapping_for_documented_codes() {
        let cases = [
            ("USER_UNAUTHORIZED", ErrorKind::Authorization),
            ("RATE_LIMIT_EXCEEDED", ErrorKind::RateLimit),
            ("DAILY_LIMIT_EXCEEDED", ErrorKind::RateLimit),
            ("CONCURRENCY_LIMIT_EXCEEDED", ErrorKind::RateLimit),
            ("COMPLEXITY_BUDGET_EXHAUSTED", ErrorKind::Complexity),
            ("RESOURCE_NOT_FOUND", ErrorKind::ResourceNotFound),
            ("INVALID_ARGUMENT", ErrorKind::InvalidRequest),
            ("PARSE_ERROR", ErrorKind::InvalidRequest),
            ("COLUMN_VALUE_EXCEPTION", ErrorKind::InvalidRequest),
            ("ARGUMENT_LIMIT_EXCEEDED", ErrorKind::InvalidRequest),
        ];

        for (code, kind) in cases {
            assert_eq!(error_code_error_kind(code), (kind, code.to_string()));
        }
    }

    #[test]
    fn test_legacy_codes_are_normalized() {
        assert_eq!(
            error_code_error_kind("UserUnauthorizedException"),
            (ErrorKind::Authorization, "USER_UNAUTHORIZED".to_string())
        );
        assert_eq!(
            error_code_error_kind("maxConcurrencyExceeded"),
            (ErrorKind::RateLimit, "CONCURRENCY_LIMIT_EXCEEDED".to_string())
        );
        assert_eq!(
            error_code_error_kind("InvalidBoardIdException"),
            (ErrorKind::InvalidRequest, "INVALID_BOARD_ID".to_string())
        );
    }

    #[test]
    fn test_unknown_error_code_maps_to_generic_with_raw_code() {
        assert_eq!(
            error_code_error_kind("BRAND_NEW_CODE"),
            (ErrorKind::Generic, "BRAND_NEW_CODE".to_string())
        );
        assert_eq!(error_code_error_kind(""), (ErrorKind::Generic, String::new()));
    }

    #[test]
    fn test_lookups_are_case_sensitive() {
        assert_eq!(error_code_error_kind("user_unauthorized").0, ErrorKind::Generic);
    }

    #[test]
    fn test_mappers_are_idempotent() {
        for code in ["RATE_LIMIT_EXCEEDED", "ComplexityException", "unknown"] {
            assert_eq!(error_code_error_kind(code), error_code_error_kind(code));
        }
        for status in [200, 401, 500, 999] {
            assert_eq!(status_code_error_kind(status), status_code_error_kind(status));
        }
    }

    #[test]
    fn test_normalized_codes_map_to_themselves() {
        for (_, kind, normalized) in ERROR_CODE_TABLE {
            assert_eq!(
                error_code_error_kind(normalized),
                (*kind, (*normalized).to_string()),
                "normalized code {normalized} is not a table entry with the same kind"
            );
        }
    }
}
