use contracts::shared::api_error::ApiError;
use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::http::ApiClient;

/// Login with e-mail and password
pub async fn login(email: String, senha: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, senha };
    ApiClient::anonymous().post("/auth/login", &request).await
}
