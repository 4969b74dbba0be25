use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Lifecycle stage of a support ticket, with the French wire names the
/// ticket feed has always carried.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default, Serialize)]
pub enum TicketStatus {
    #[serde(rename = "en_attente_analyse")]
    WaitingAnalysis,
    #[serde(rename = "assigne_technicien")]
    Assigned,
    #[serde(rename = "en_cours")]
    InProgress,
    #[serde(rename = "resolu")]
    Resolved,
    #[serde(rename = "cloture")]
    Closed,
    #[serde(rename = "rejete")]
    Rejected,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl TicketStatus {
    pub fn new_from_string(ticket_status: &str) -> Self {
        match ticket_status {
            "en_attente_analyse" => TicketStatus::WaitingAnalysis,
            "assigne_technicien" => TicketStatus::Assigned,
            "en_cours" => TicketStatus::InProgress,
            "resolu" => TicketStatus::Resolved,
            "cloture" => TicketStatus::Closed,
            "rejete" => TicketStatus::Rejected,
            _ => TicketStatus::Unknown,
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            TicketStatus::WaitingAnalysis => "en_attente_analyse",
            TicketStatus::Assigned => "assigne_technicien",
            TicketStatus::InProgress => "en_cours",
            TicketStatus::Resolved => "resolu",
            TicketStatus::Closed => "cloture",
            TicketStatus::Rejected => "rejete",
            TicketStatus::Unknown => "unknown",
        }
    }

    /// On a technician's plate right now: assigned or in progress. Tickets
    /// still waiting on analysis are not yet anyone's workload, whatever
    /// the feed says about their assignment.
    pub fn is_open(&self) -> bool {
        matches!(self, TicketStatus::Assigned | TicketStatus::InProgress)
    }

    pub fn is_resolved_or_closed(&self) -> bool {
        matches!(self, TicketStatus::Resolved | TicketStatus::Closed)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.variant_name())
    }
}

// Ticket feeds are exported by a system we do not control; a status this
// crate has never heard of must not sink the whole import.
impl<'de> Deserialize<'de> for TicketStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ticket_status_string = String::deserialize(deserializer)?;
        Ok(TicketStatus::new_from_string(&ticket_status_string))
    }
}
