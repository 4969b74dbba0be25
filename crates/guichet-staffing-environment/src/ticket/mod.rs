pub mod performance;
pub mod status;

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::technician_environment::technician::TechnicianId;
use crate::ticket::status::TicketStatus;

#[derive(PartialEq, Eq, Hash, Clone, Debug, Serialize, Deserialize)]
pub struct TicketNumber(pub String);

impl TicketNumber {
    pub fn new(ticket_number: &str) -> Self {
        Self(ticket_number.to_string())
    }
}

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One ticket as the feed reports it. Timestamps are optional because the
/// feed backfills them as the ticket moves; a record is useful long before
/// it is complete.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct TicketRecord {
    pub number: TicketNumber,
    pub title: String,
    #[serde(default)]
    pub status: TicketStatus,
    #[serde(default)]
    pub assigned_technician: Option<TechnicianId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assigned_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl TicketRecord {
    pub fn builder(number: &str, title: &str) -> TicketRecordBuilder {
        TicketRecordBuilder(TicketRecord {
            number: TicketNumber::new(number),
            title: title.to_string(),
            status: TicketStatus::default(),
            assigned_technician: None,
            created_at: None,
            assigned_at: None,
            resolved_at: None,
        })
    }
}

pub struct TicketRecordBuilder(TicketRecord);

impl TicketRecordBuilder {
    pub fn status(mut self, status: TicketStatus) -> Self {
        self.0.status = status;
        self
    }

    pub fn assigned_technician(mut self, technician_id: TechnicianId) -> Self {
        self.0.assigned_technician = Some(technician_id);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.0.created_at = Some(created_at);
        self
    }

    pub fn assigned_at(mut self, assigned_at: DateTime<Utc>) -> Self {
        self.0.assigned_at = Some(assigned_at);
        self
    }

    pub fn resolved_at(mut self, resolved_at: DateTime<Utc>) -> Self {
        self.0.resolved_at = Some(resolved_at);
        self
    }

    pub fn build(self) -> TicketRecord {
        self.0
    }
}

/// Every ticket the environment knows about, in feed order.
#[derive(PartialEq, Clone, Debug, Default, Serialize, Deserialize)]
pub struct TicketLedger {
    pub tickets: Vec<TicketRecord>,
}

impl TicketLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ticket: TicketRecord) {
        self.tickets.push(ticket);
    }

    pub fn for_technician<'a>(
        &'a self,
        technician_id: &'a TechnicianId,
    ) -> impl Iterator<Item = &'a TicketRecord> {
        self.tickets
            .iter()
            .filter(move |ticket| ticket.assigned_technician.as_ref() == Some(technician_id))
    }

    pub fn open_count(&self, technician_id: &TechnicianId) -> usize {
        self.for_technician(technician_id)
            .filter(|ticket| ticket.status.is_open())
            .count()
    }

    pub fn in_progress_count(&self, technician_id: &TechnicianId) -> usize {
        self.for_technician(technician_id)
            .filter(|ticket| ticket.status == TicketStatus::InProgress)
            .count()
    }
}
