use crate::{
    core::{PulseClient, PulseError, net},
    health::model::HealthCheck,
};

pub(crate) async fn fetch_health(client: &PulseClient) -> Result<HealthCheck, PulseError> {
    let url = client.health_url()?;
    let resp = client.http().get(url).send().await?;

    if !resp.status().is_success() {
        return Err(net::status_error(resp).await);
    }

    let body = net::get_text(resp, "health").await?;
    Ok(serde_json::from_str(&body)?)
}
