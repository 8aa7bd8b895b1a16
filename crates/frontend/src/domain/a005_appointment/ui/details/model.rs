use crate::shared::http::{item_path, ApiClient};
use contracts::domain::a005_appointment::{Appointment, AppointmentDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_error::ApiError;

pub async fn fetch_by_id(api: &ApiClient, id: &str) -> Result<Appointment, ApiError> {
    api.get(&item_path(&Appointment::api_path(), id)).await
}

pub async fn save_form(api: &ApiClient, dto: &AppointmentDto) -> Result<(), ApiError> {
    match &dto.id {
        Some(id) => api.put_unit(&item_path(&Appointment::api_path(), id), dto).await,
        None => api.post_unit(&Appointment::api_path(), dto).await,
    }
}
