//! Set listing endpoints.

use crate::QbReaderClient;
use qbreader_core::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetListResponse {
    set_list: Vec<String>,
}

/// Set listing endpoints
pub struct SetApi<'a> {
    client: &'a QbReaderClient,
}

impl<'a> SetApi<'a> {
    pub(crate) fn new(client: &'a QbReaderClient) -> Self {
        Self { client }
    }

    /// Names of every set in the database
    pub async fn list(&self) -> Result<Vec<String>> {
        let response: SetListResponse = self.client.get("/set-list").await?;
        Ok(response.set_list)
    }

    /// Number of packets in a set
    ///
    /// Same as [`PacketApi::count`](crate::api::PacketApi::count).
    pub async fn num_packets(&self, set_name: &str) -> Result<u32> {
        self.client.packets().count(set_name).await
    }
}
