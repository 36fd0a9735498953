/// Cookie Cursor stores its session token in after sign-in.
pub const SESSION_COOKIE_NAME: &str = "WorkosCursorSessionToken";

/// Extract the bearer token from the session cookie's value.
///
/// The cookie packs `<user id>%3A%3A<token>`; the token is everything after
/// the URL-encoded `::` separator.
pub fn token_from_cookie(value: &str) -> Option<String> {
    value
        .split_once("%3A%3A")
        .map(|(_, token)| token.to_string())
        .filter(|token| !token.is_empty())
}
