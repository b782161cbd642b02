use serde::{Deserialize, Serialize};

/// A DNS record that was used to resolve the address of a server.
///
/// The record kind is discriminated by its `type` member. Each kind carries its own required
/// members, so a record can never be half A and half SRV.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum DnsRecord {
    /// An address record that maps a name to an IPv4 address.
    #[serde(rename = "A")]
    A(ARecord),
    /// A service record that points to the host and port of the Minecraft service.
    #[serde(rename = "SRV")]
    Srv(SrvRecord),
}

impl DnsRecord {
    /// Returns the time-to-live of this record in seconds.
    pub fn ttl(&self) -> u32 {
        match self {
            DnsRecord::A(record) => record.ttl,
            DnsRecord::Srv(record) => record.ttl,
        }
    }
}

/// An A record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ARecord {
    pub ttl: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub address: String,
}

/// An SRV record (`_minecraft._tcp.<host>`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SrvRecord {
    pub ttl: u32,
    pub name: String,
    pub target: String,
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
}
