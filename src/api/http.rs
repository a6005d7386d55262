use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use super::DrinkService;
use crate::error::{Error, Result};
use crate::lifecycle::Transition;
use crate::models::{
    AdminLogin, AdminVerification, CreateDrink, CreateOrder, Drink, DrinkId, Order, OrderId, Settings, Statistics,
};

/// Blocking REST client for a running service. One attempt per call: no
/// retries, no de-duplication of overlapping requests.
pub struct HttpService {
    base_url: String,
    client: Client,
}

impl HttpService {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// Uses a pre-configured client, e.g. with timeouts or proxy settings.
    pub fn with_client(base_url: &str, client: Client) -> Self {
        HttpService {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn send(&self, what: &str, request: RequestBuilder) -> Result<Response> {
        debug!(what, "sending request");

        let response = request.send().map_err(|e| {
            error!(what, error = %e, "request failed");
            Error::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(what, status = status.as_u16(), "service rejected request");
            return Err(Error::Status {
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    fn fetch<T: DeserializeOwned>(&self, what: &str, request: RequestBuilder) -> Result<T> {
        let body = self.send(what, request)?.json::<T>()?;
        Ok(body)
    }
}

impl DrinkService for HttpService {
    fn verify_admin(&self, password: &str) -> Result<bool> {
        let login = AdminLogin {
            password: password.to_string(),
        };
        let verification: AdminVerification =
            self.fetch("verify admin", self.client.post(self.url("/verify-admin")).json(&login))?;

        Ok(verification.valid)
    }

    fn drinks(&self) -> Result<Vec<Drink>> {
        self.fetch("load drinks", self.client.get(self.url("/drinks")))
    }

    fn create_drink(&self, drink: &CreateDrink) -> Result<Drink> {
        self.fetch("create drink", self.client.post(self.url("/drinks")).json(drink))
    }

    fn update_drink(&self, id: DrinkId, drink: &CreateDrink) -> Result<Drink> {
        self.fetch(
            "update drink",
            self.client.put(self.url(&format!("/drinks/{id}"))).json(drink),
        )
    }

    fn delete_drink(&self, id: DrinkId) -> Result<()> {
        self.send("delete drink", self.client.delete(self.url(&format!("/drinks/{id}"))))?;
        Ok(())
    }

    fn statistics(&self) -> Result<Statistics> {
        self.fetch("load statistics", self.client.get(self.url("/statistics")))
    }

    fn reset_statistics(&self) -> Result<()> {
        self.send("reset statistics", self.client.post(self.url("/statistics/reset")))?;
        Ok(())
    }

    fn orders(&self) -> Result<Vec<Order>> {
        self.fetch("load orders", self.client.get(self.url("/orders")))
    }

    fn create_order(&self, order: &CreateOrder) -> Result<Order> {
        self.fetch("submit order", self.client.post(self.url("/orders")).json(order))
    }

    fn transition_order(&self, id: OrderId, transition: Transition) -> Result<()> {
        let path = format!("/orders/{id}/{}", transition.endpoint());
        self.send("update order status", self.client.put(self.url(&path)))?;
        Ok(())
    }

    fn settings(&self) -> Result<Settings> {
        self.fetch("load settings", self.client.get(self.url("/settings")))
    }

    fn update_settings(&self, settings: &Settings) -> Result<Settings> {
        self.send("save settings", self.client.post(self.url("/settings")).json(settings))?;
        Ok(*settings)
    }
}
