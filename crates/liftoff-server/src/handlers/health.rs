/// Health check endpoint.
///
/// Returns a fixed "OK" body so external orchestrators can probe liveness.
pub async fn health() -> &'static str {
    "OK"
}
