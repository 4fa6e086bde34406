use mongodb::{bson::doc, Client};
use tracing::debug;

use crate::common::DatabaseError;

/// Check MongoDB health with a `ping` command
pub async fn check_health(client: &Client) -> Result<(), DatabaseError> {
    debug!("Running MongoDB health check");

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(format!("MongoDB health check failed: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_check_health() {
        let client = Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        check_health(&client).await.unwrap();
    }
}
