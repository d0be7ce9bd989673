use mongodb::{Client, bson::doc};
use tracing::warn;

/// `ping` the given database; used by the readiness probe.
pub async fn check_health(client: &Client, database: &str) -> bool {
    match client.database(database).run_command(doc! { "ping": 1 }).await {
        Ok(_) => true,
        Err(e) => {
            warn!(error = %e, "MongoDB ping failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires a running MongoDB
    async fn test_check_health() {
        let url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let client = Client::with_uri_str(&url).await.unwrap();
        assert!(check_health(&client, "admin").await);
    }
}
