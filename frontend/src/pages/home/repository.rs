use crate::api::{ApiClient, ApiError, TravelPlanData};
use serde_json::Value;
use std::rc::Rc;

#[derive(Clone)]
pub struct TravelPlanRepository {
    client: Rc<ApiClient>,
}

impl TravelPlanRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        access_token: &str,
        plan: &TravelPlanData,
    ) -> Result<Value, ApiError> {
        self.client.create_travel_plan(access_token, plan).await
    }
}
