//! Customer endpoints
//!
//! Partners manage their sub-customers here. Requests made with a tenant
//! scoped client act on behalf of that sub-customer.

use super::{CORE_BASE_PATH, Resource, fetch_page, require};
use crate::{
    client::Client,
    error::Result,
    types::{Customer, CustomerCreate, CustomerExt, Page, PageRequest},
};

/// Customers API resource.
#[derive(Clone, Debug)]
pub struct Customers {
    client: Client,
}

impl Customers {
    /// Create a new Customers resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    fn path(id: &str) -> String {
        format!("{CORE_BASE_PATH}customer/{id}")
    }

    /// Fetch one page of customers.
    pub async fn page(&self, request: &PageRequest) -> Result<(Page, Vec<Customer>)> {
        fetch_page(&self.client, &format!("{CORE_BASE_PATH}customer"), request).await
    }

    /// Fetch a customer with address and hierarchy details.
    pub async fn get(&self, id: &str) -> Result<CustomerExt> {
        let path = Self::path(id);
        require(self.client.get(&path, None).await?, &path)
    }

    /// Create a sub-customer.
    pub async fn create(&self, customer: &CustomerCreate) -> Result<Customer> {
        let path = format!("{CORE_BASE_PATH}customer");
        require(self.client.post(&path, customer).await?, &path)
    }

    /// Update a customer.
    pub async fn update(&self, id: &str, customer: &CustomerCreate) -> Result<Customer> {
        let path = Self::path(id);
        require(self.client.put(&path, customer).await?, &path)
    }

    /// Delete a customer. The API answers with an empty body.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete::<serde_json::Value>(&Self::path(id))
            .await
            .map(|_| ())
    }
}

impl Resource for Customers {
    fn client(&self) -> &Client {
        &self.client
    }
}
