//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::meal::MealForm;
use shared::response::ErrorBody;

/// HTTP client for making network requests to the catalog/order service
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with a multipart form
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<T> {
        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with a multipart form
    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<T> {
        let response = self
            .client
            .put(self.url(path))
            .multipart(form)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// Non-2xx bodies are parsed for the service's `detail`/`message` reason
    /// and surfaced verbatim when present; 2xx bodies that fail to
    /// deserialize are a `MalformedResponse`, not a silent `None`.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let reason = ErrorBody::parse(&text)
                .reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));

            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthenticated),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(reason)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(reason)),
                _ => Err(ClientError::Server {
                    status: status.as_u16(),
                    message: reason,
                }),
            };
        }

        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| ClientError::MalformedResponse(format!("{e} in body: {text}")))
    }
}

/// Build the multipart form for a meal create/update.
///
/// The image part is attached only when a replacement asset is present;
/// omitting it tells the server to keep any existing image.
pub(crate) fn meal_multipart(form: &MealForm) -> reqwest::multipart::Form {
    let mut parts = reqwest::multipart::Form::new()
        .text("name", form.name.clone())
        .text("ingredients", form.ingredients.clone())
        .text("calories", form.calories.to_string())
        .text("protein", form.protein.to_string())
        .text("carbs", form.carbs.to_string())
        .text("fats", form.fats.to_string())
        .text("price", form.price.to_string());

    if let Some(cuisine) = &form.cuisine {
        parts = parts.text("cuisine", cuisine.clone());
    }
    if let Some(image) = &form.image {
        let part = reqwest::multipart::Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone());
        parts = parts.part("image", part);
    }

    parts
}
