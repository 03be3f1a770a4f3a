use super::{Bonus, BonusRecord, Difficulty, Tossup, TossupRecord};
use crate::error::{QbError, Result};
use serde::{Deserialize, Serialize};
use std::iter::Zip;

/// One packet of a set: its tossups and bonuses, each ordered by question number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PacketRecord", into = "PacketRecord")]
pub struct Packet {
    tossups: Vec<Tossup>,
    bonuses: Vec<Bonus>,
    packet_number: u32,
    difficulty: Difficulty,
    set_name: String,
}

impl Packet {
    /// Create a packet, taking ownership of the questions and sorting them
    ///
    /// The sort is stable, so questions sharing a number keep their input order.
    pub fn new<D>(
        mut tossups: Vec<Tossup>,
        mut bonuses: Vec<Bonus>,
        packet_number: u32,
        difficulty: D,
        set_name: impl Into<String>,
    ) -> Result<Self>
    where
        D: TryInto<Difficulty>,
        QbError: From<D::Error>,
    {
        let difficulty = difficulty.try_into()?;
        tossups.sort_by_key(Tossup::question_number);
        bonuses.sort_by_key(Bonus::question_number);

        Ok(Self {
            tossups,
            bonuses,
            packet_number,
            difficulty,
            set_name: set_name.into(),
        })
    }

    #[must_use]
    pub fn tossups(&self) -> &[Tossup] {
        &self.tossups
    }

    #[must_use]
    pub fn bonuses(&self) -> &[Bonus] {
        &self.bonuses
    }

    #[must_use]
    pub const fn packet_number(&self) -> u32 {
        self.packet_number
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn set_name(&self) -> &str {
        &self.set_name
    }

    /// Iterate over (tossup, bonus) pairs in question order
    ///
    /// Stops at the end of the shorter list; a packet without bonuses yields
    /// nothing even if it has tossups.
    pub fn iter(&self) -> Zip<std::slice::Iter<'_, Tossup>, std::slice::Iter<'_, Bonus>> {
        self.tossups.iter().zip(self.bonuses.iter())
    }

    /// Split the packet back into its tossups and bonuses
    #[must_use]
    pub fn into_parts(self) -> (Vec<Tossup>, Vec<Bonus>) {
        (self.tossups, self.bonuses)
    }
}

impl std::fmt::Display for Packet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Packet {} of {}", self.packet_number, self.set_name)
    }
}

impl<'a> IntoIterator for &'a Packet {
    type Item = (&'a Tossup, &'a Bonus);
    type IntoIter = Zip<std::slice::Iter<'a, Tossup>, std::slice::Iter<'a, Bonus>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Packet {
    type Item = (Tossup, Bonus);
    type IntoIter = Zip<std::vec::IntoIter<Tossup>, std::vec::IntoIter<Bonus>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tossups.into_iter().zip(self.bonuses)
    }
}

/// Packet as it appears on the wire
///
/// The packet endpoints return only the question lists, so the header fields
/// are optional. Missing ones are taken from the first question.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PacketRecord {
    #[serde(default)]
    pub tossups: Vec<TossupRecord>,
    #[serde(default)]
    pub bonuses: Vec<BonusRecord>,
    #[serde(default, alias = "packetNumber", skip_serializing_if = "Option::is_none")]
    pub packet_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<i64>,
    #[serde(default, alias = "setName", skip_serializing_if = "Option::is_none")]
    pub set_name: Option<String>,
}

impl TryFrom<PacketRecord> for Packet {
    type Error = QbError;

    fn try_from(record: PacketRecord) -> Result<Self> {
        let tossups = record
            .tossups
            .into_iter()
            .map(Tossup::try_from)
            .collect::<Result<Vec<_>>>()?;
        let bonuses = record
            .bonuses
            .into_iter()
            .map(Bonus::try_from)
            .collect::<Result<Vec<_>>>()?;

        let first_tossup = tossups.first();
        let first_bonus = bonuses.first();

        let packet_number = record
            .packet_number
            .or_else(|| first_tossup.map(Tossup::packet_number))
            .or_else(|| first_bonus.map(Bonus::packet_number))
            .unwrap_or_default();

        let difficulty = match record.difficulty {
            Some(code) => Difficulty::try_from(code)?,
            None => first_tossup
                .map(Tossup::difficulty)
                .or_else(|| first_bonus.map(Bonus::difficulty))
                .unwrap_or_default(),
        };

        let set_name = record
            .set_name
            .or_else(|| first_tossup.map(|t| t.set_name().to_string()))
            .or_else(|| first_bonus.map(|b| b.set_name().to_string()))
            .unwrap_or_default();

        Self::new(tossups, bonuses, packet_number, difficulty, set_name)
    }
}

impl From<Packet> for PacketRecord {
    fn from(packet: Packet) -> Self {
        Self {
            tossups: packet.tossups.into_iter().map(Into::into).collect(),
            bonuses: packet.bonuses.into_iter().map(Into::into).collect(),
            packet_number: Some(packet.packet_number),
            difficulty: Some(i64::from(packet.difficulty.code())),
            set_name: Some(packet.set_name),
        }
    }
}
