/// Body served at the root route.
pub const GREETING: &str = "Deployed via Jenkins CI/CD 🚀";

/// Root endpoint; confirms which build is live behind the load balancer.
pub async fn root() -> &'static str {
    GREETING
}
