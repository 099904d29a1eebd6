//! HTTP client for the cart endpoints.
//!
//! All mutating calls are form-encoded POSTs carrying the CSRF token the
//! page session issued. Responses are decoded into [`payload`] types and
//! interpreted by the caller; this layer only distinguishes "the exchange
//! happened" from transport/status failures.
//!
//! [`payload`]: crate::payload

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::UrlSearchParams;

use crate::error::CartError;
use crate::payload::{AddResponse, CheckoutResponse, SummaryResponse, UpdateResponse};

const CSRF_COOKIE: &str = "csrftoken";
const CSRF_HEADER: &str = "X-CSRFToken";

const SUMMARY_URL: &str = "/cart/summary_ajax/";
const UPDATE_URL: &str = "/cart/update_ajax/";
const CHECKOUT_PREPARE_URL: &str = "/cart/checkout_prepare/";

/// Client bound to the CSRF token read once at module startup. If the
/// token expires mid-session the server rejects the request and the
/// caller sees a status error; there is no refresh path.
pub struct CartApi {
    csrf_token: Option<String>,
}

impl CartApi {
    pub fn from_cookie() -> Self {
        let csrf_token = minishop_dom::cookie::get(CSRF_COOKIE);
        if csrf_token.is_none() {
            log::warn!("no {CSRF_COOKIE} cookie; mutating requests will be rejected");
        }
        Self { csrf_token }
    }

    pub async fn add_to_cart(&self, pid: &str, quantity: u32) -> Result<AddResponse, CartError> {
        let params = UrlSearchParams::new()?;
        params.append("quantity", &quantity.to_string());
        let resp = self
            .post(&format!("/cart/add_ajax/{pid}/"), &params)
            .await?;
        Self::decode(resp).await
    }

    /// Quantity update. A non-OK status yields `Ok(None)`: the caller
    /// leaves the UI untouched and lets the user retry.
    pub async fn update_quantity(
        &self,
        pid: &str,
        quantity: u32,
    ) -> Result<Option<UpdateResponse>, CartError> {
        let params = UrlSearchParams::new()?;
        params.append("pid", pid);
        params.append("quantity", &quantity.to_string());
        let resp = self.post_raw(UPDATE_URL, &params).await?;
        if !resp.ok() {
            return Ok(None);
        }
        Ok(Some(resp.json::<UpdateResponse>().await?))
    }

    pub async fn remove_item(&self, pid: &str) -> Result<UpdateResponse, CartError> {
        let params = UrlSearchParams::new()?;
        params.append("pid", pid);
        params.append("action", "remove");
        let resp = self.post(UPDATE_URL, &params).await?;
        Self::decode(resp).await
    }

    pub async fn prepare_checkout(
        &self,
        selected: &[String],
    ) -> Result<CheckoutResponse, CartError> {
        let params = UrlSearchParams::new()?;
        for pid in selected {
            params.append("selected", pid);
        }
        let resp = self.post(CHECKOUT_PREPARE_URL, &params).await?;
        Self::decode(resp).await
    }

    pub async fn summary(&self) -> Result<SummaryResponse, CartError> {
        let resp = Request::get(SUMMARY_URL).send().await?;
        Self::decode(resp).await
    }

    fn with_csrf(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.csrf_token {
            Some(token) => builder.header(CSRF_HEADER, token),
            None => builder,
        }
    }

    async fn post_raw(&self, url: &str, params: &UrlSearchParams) -> Result<Response, CartError> {
        // URLSearchParams bodies get the form-encoded content type from
        // the browser's fetch itself.
        let request = self.with_csrf(Request::post(url)).body(params.clone())?;
        Ok(request.send().await?)
    }

    async fn post(&self, url: &str, params: &UrlSearchParams) -> Result<Response, CartError> {
        let resp = self.post_raw(url, params).await?;
        if !resp.ok() {
            return Err(CartError::Status(resp.status()));
        }
        Ok(resp)
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, CartError> {
        if !resp.ok() {
            return Err(CartError::Status(resp.status()));
        }
        Ok(resp.json::<T>().await?)
    }
}
