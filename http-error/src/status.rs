//! Standard HTTP reason phrases.

/// Reason phrase reported for codes missing from the table.
pub const CUSTOM_STATUS_NAME: &str = "Custom Status Code";

/// Status used when none can be derived.
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// Canonical reason phrase of a registered status code.
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    let phrase = match code {
        100 => "Continue",
        101 => "Switching Protocols",
        102 => "Processing",
        103 => "Early Hints",
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        203 => "Non-Authoritative Information",
        204 => "No Content",
        205 => "Reset Content",
        206 => "Partial Content",
        207 => "Multi-Status",
        208 => "Already Reported",
        226 => "IM Used",
        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        305 => "Use Proxy",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Payload Too Large",
        414 => "URI Too Long",
        415 => "Unsupported Media Type",
        416 => "Range Not Satisfiable",
        417 => "Expectation Failed",
        418 => "I'm a Teapot",
        421 => "Misdirected Request",
        422 => "Unprocessable Entity",
        423 => "Locked",
        424 => "Failed Dependency",
        425 => "Too Early",
        426 => "Upgrade Required",
        428 => "Precondition Required",
        429 => "Too Many Requests",
        431 => "Request Header Fields Too Large",
        451 => "Unavailable For Legal Reasons",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version Not Supported",
        506 => "Variant Also Negotiates",
        507 => "Insufficient Storage",
        508 => "Loop Detected",
        509 => "Bandwidth Limit Exceeded",
        510 => "Not Extended",
        511 => "Network Authentication Required",
        _ => return None,
    };
    Some(phrase)
}

/// Reason phrase, or [`CUSTOM_STATUS_NAME`] for unregistered codes.
pub fn status_name(code: u16) -> &'static str {
    reason_phrase(code).unwrap_or(CUSTOM_STATUS_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(status_name(200), "OK");
        assert_eq!(status_name(404), "Not Found");
        assert_eq!(status_name(405), "Method Not Allowed");
        assert_eq!(status_name(418), "I'm a Teapot");
        assert_eq!(status_name(511), "Network Authentication Required");
    }

    #[test]
    fn test_unknown_codes_get_placeholder() {
        assert_eq!(reason_phrase(299), None);
        assert_eq!(status_name(299), CUSTOM_STATUS_NAME);
        assert_eq!(status_name(0), CUSTOM_STATUS_NAME);
        assert_eq!(status_name(u16::MAX), CUSTOM_STATUS_NAME);
    }
}
