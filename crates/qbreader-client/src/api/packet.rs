//! Packet endpoints.

use super::validate;
use crate::QbReaderClient;
use qbreader_core::{Bonus, BonusRecord, Packet, PacketRecord, Result, Tossup, TossupRecord};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TossupsResponse {
    tossups: Vec<TossupRecord>,
}

#[derive(Debug, Deserialize)]
struct BonusesResponse {
    bonuses: Vec<BonusRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NumPacketsResponse {
    num_packets: u32,
}

/// Packet endpoints
pub struct PacketApi<'a> {
    client: &'a QbReaderClient,
}

impl<'a> PacketApi<'a> {
    pub(crate) fn new(client: &'a QbReaderClient) -> Self {
        Self { client }
    }

    /// Fetch a full packet of a set
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let packet = client.packets().packet("2023 PACE NSC", 1).await?;
    /// for (tossup, bonus) in &packet {
    ///     println!("{tossup}\n{bonus}");
    /// }
    /// ```
    pub async fn packet(&self, set_name: &str, packet_number: u32) -> Result<Packet> {
        let record: PacketRecord = self
            .client
            .get_with_query("/packet", &packet_params(set_name, packet_number))
            .await?;

        // The endpoint only returns the question lists
        Packet::try_from(PacketRecord {
            set_name: record.set_name.or_else(|| Some(set_name.to_string())),
            packet_number: record.packet_number.or(Some(packet_number)),
            ..record
        })
    }

    /// Fetch only the tossups of a packet, ordered by question number
    pub async fn tossups(&self, set_name: &str, packet_number: u32) -> Result<Vec<Tossup>> {
        let response: TossupsResponse = self
            .client
            .get_with_query("/packet-tossups", &packet_params(set_name, packet_number))
            .await?;

        let mut tossups: Vec<Tossup> = validate(response.tossups)?;
        tossups.sort_by_key(Tossup::question_number);
        Ok(tossups)
    }

    /// Fetch only the bonuses of a packet, ordered by question number
    pub async fn bonuses(&self, set_name: &str, packet_number: u32) -> Result<Vec<Bonus>> {
        let response: BonusesResponse = self
            .client
            .get_with_query("/packet-bonuses", &packet_params(set_name, packet_number))
            .await?;

        let mut bonuses: Vec<Bonus> = validate(response.bonuses)?;
        bonuses.sort_by_key(Bonus::question_number);
        Ok(bonuses)
    }

    /// Number of packets in a set
    pub async fn count(&self, set_name: &str) -> Result<u32> {
        let response: NumPacketsResponse = self
            .client
            .get_with_query("/num-packets", &[("setName", set_name.to_string())])
            .await?;
        Ok(response.num_packets)
    }
}

fn packet_params(set_name: &str, packet_number: u32) -> [(&'static str, String); 2] {
    [
        ("setName", set_name.to_string()),
        ("packetNumber", packet_number.to_string()),
    ]
}
