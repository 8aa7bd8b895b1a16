//! HTTP-клиент консоли поверх `gloo-net`.
//!
//! Токен передаётся клиенту явно из сессии; сам клиент ничего не хранит.

use crate::shared::api_utils::api_base;
use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
}

/// Путь записи: `/{collection}/{id}` с экранированием id
pub fn item_path(collection_path: &str, id: &str) -> String {
    format!("{}/{}", collection_path, urlencoding::encode(id))
}

/// Строка запроса для списков; пустые параметры не добавляются
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query)
        .map_err(|e| ApiError::Decode(format!("query string: {}", e)))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

impl ApiClient {
    pub fn new(base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base: base.into(),
            token,
        }
    }

    /// Клиент без токена (для `/auth/login`)
    pub fn anonymous() -> Self {
        Self::new(api_base(), None)
    }

    pub fn with_token(token: Option<&str>) -> Self {
        Self::new(api_base(), token.map(str::to_string))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        log::debug!("GET {}", path);
        let request = self
            .authorize(Request::get(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        execute(request).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        self.get(&with_query(path, query)?).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        log::debug!("POST {}", path);
        self.send_json(Request::post(&self.url(path)), body).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        log::debug!("PUT {}", path);
        self.send_json(Request::put(&self.url(path)), body).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        log::debug!("PATCH {}", path);
        self.send_json(Request::patch(&self.url(path)), body).await
    }

    /// Мутация, тело ответа которой не нужно
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.post::<B, IgnoredAny>(path, body).await.map(|_| ())
    }

    pub async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.put::<B, IgnoredAny>(path, body).await.map(|_| ())
    }

    pub async fn patch_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.patch::<B, IgnoredAny>(path, body).await.map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        log::debug!("DELETE {}", path);
        let request = self
            .authorize(Request::delete(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        execute::<IgnoredAny>(request).await.map(|_| ())
    }

    async fn send_json<B, T>(&self, builder: RequestBuilder, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        execute(request).await
    }
}

async fn execute<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    let response = request.send().await.map_err(|e| {
        log::warn!("request failed: {}", e);
        ApiError::Network(e.to_string())
    })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let err = ApiError::from_response(status, &body);
        log::warn!("{} {}: {}", response.url(), status, err);
        return Err(err);
    }

    decode_body(&body)
}

/// Пустое тело (204) читается как `null`
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| {
        log::error!("decode failed: {}", e);
        ApiError::Decode(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_query::ListQuery;

    #[test]
    fn test_item_path_escapes_id() {
        assert_eq!(item_path("/clientes", "64b7f0"), "/clientes/64b7f0");
        assert_eq!(item_path("/vendas", "a b/c"), "/vendas/a%20b%2Fc");
    }

    #[test]
    fn test_query_string() {
        let q = ListQuery::new().with_search("Ana").with_status(Some("Pagos"));
        assert_eq!(
            with_query("/boletos", &q).unwrap(),
            "/boletos?search=Ana&status=Pagos"
        );
        assert_eq!(with_query("/clientes", &ListQuery::new()).unwrap(), "/clientes");
    }

    #[test]
    fn test_empty_body_decodes_as_ignored() {
        assert!(decode_body::<IgnoredAny>("").is_ok());
        assert!(decode_body::<IgnoredAny>(r#"{"ok":true}"#).is_ok());
        assert!(matches!(
            decode_body::<Vec<u32>>("{"),
            Err(ApiError::Decode(_))
        ));
    }
}
