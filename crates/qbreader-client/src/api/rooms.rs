//! Multiplayer room endpoints.

use crate::QbReaderClient;
use qbreader_core::{Result, Room};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoomListResponse {
    room_list: Vec<Room>,
}

/// Multiplayer room endpoints
pub struct RoomApi<'a> {
    client: &'a QbReaderClient,
}

impl<'a> RoomApi<'a> {
    pub(crate) fn new(client: &'a QbReaderClient) -> Self {
        Self { client }
    }

    /// Rooms currently listed on the multiplayer page
    pub async fn list(&self) -> Result<Vec<Room>> {
        let response: RoomListResponse = self.client.get("/multiplayer/room-list").await?;
        Ok(response.room_list)
    }
}
