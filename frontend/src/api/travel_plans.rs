use serde_json::Value;

use super::{
    client::ApiClient,
    types::{ApiError, TravelPlanData},
};

impl ApiClient {
    /// `POST {base}/travel-plans`. Any 2xx with a JSON body is a success; the
    /// body is returned untouched.
    pub async fn create_travel_plan(
        &self,
        access_token: &str,
        plan: &TravelPlanData,
    ) -> Result<Value, ApiError> {
        let headers = Self::json_auth_headers(access_token)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/travel-plans", base_url))
            .headers(headers)
            .json(plan)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()))
        } else {
            let message = response
                .text()
                .await
                .ok()
                .map(|body| body.trim().to_string())
                .filter(|body| !body.is_empty());
            Err(ApiError::Http {
                status: status.as_u16(),
                message,
            })
        }
    }
}
