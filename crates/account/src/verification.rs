use regex::Regex;

/// Extract a 6-digit verification code from an email body.
///
/// Tries the sign-up mail's exact phrasing first, then looser labelled
/// forms, and returns the first capture.
pub fn extract_verification_code(body: &str) -> Option<String> {
    let patterns = [
        r"verification code is (\d{6})",
        r"(?i)verification code[:\s]+(\d{6})",
        r"(?i)\bcode[:\s]+(\d{6})\b",
    ];

    for pattern in patterns {
        if let Ok(re) = Regex::new(pattern) {
            if let Some(captures) = re.captures(body) {
                if let Some(code) = captures.get(1) {
                    return Some(code.as_str().to_string());
                }
            }
        }
    }

    None
}
