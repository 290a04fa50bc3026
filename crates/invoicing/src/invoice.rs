use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use benefika_core::{DivisionId, DomainError, FinancerId, InvoiceId};

/// Which side of the platform issued this invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceKind {
    /// The platform invoices a division.
    PlatformToDivision,
    /// A division invoices one of its financers.
    DivisionToFinancer,
}

/// The parties of an invoice, encoded per kind.
///
/// A platform invoice has a recipient division only; a financer invoice has
/// an issuing division and a recipient financer. Encoding the parties in the
/// variant makes "which division/financer is involved" unambiguous per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvoiceParties {
    PlatformToDivision {
        recipient_division: DivisionId,
    },
    DivisionToFinancer {
        issuer_division: DivisionId,
        recipient_financer: FinancerId,
    },
}

/// Invoice status lifecycle.
///
/// `Draft → Confirmed → Sent → Paid`; `Cancelled` is reachable from every
/// non-paid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Confirmed,
    Sent,
    Paid,
    Cancelled,
}

/// Target statuses of a bulk status update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatusTarget {
    Confirmed,
    Sent,
    Paid,
    Cancelled,
}

/// An invoice between two parties of the tenant hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    id: InvoiceId,
    parties: InvoiceParties,
    status: InvoiceStatus,
    /// Total in smallest currency unit.
    total_cents: u64,
    issued_at: DateTime<Utc>,
    due_date: DateTime<Utc>,
}

impl Invoice {
    pub fn draft(
        id: InvoiceId,
        parties: InvoiceParties,
        total_cents: u64,
        issued_at: DateTime<Utc>,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            parties,
            status: InvoiceStatus::Draft,
            total_cents,
            issued_at,
            due_date,
        }
    }

    pub fn id(&self) -> InvoiceId {
        self.id
    }

    pub fn parties(&self) -> InvoiceParties {
        self.parties
    }

    pub fn status(&self) -> InvoiceStatus {
        self.status
    }

    pub fn total_cents(&self) -> u64 {
        self.total_cents
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    pub fn kind(&self) -> InvoiceKind {
        match self.parties {
            InvoiceParties::PlatformToDivision { .. } => InvoiceKind::PlatformToDivision,
            InvoiceParties::DivisionToFinancer { .. } => InvoiceKind::DivisionToFinancer,
        }
    }

    /// The division that issued this invoice, if a division issued it.
    pub fn issuer_division(&self) -> Option<DivisionId> {
        match self.parties {
            InvoiceParties::PlatformToDivision { .. } => None,
            InvoiceParties::DivisionToFinancer { issuer_division, .. } => Some(issuer_division),
        }
    }

    /// The division on the receiving end, if the recipient is a division.
    pub fn recipient_division(&self) -> Option<DivisionId> {
        match self.parties {
            InvoiceParties::PlatformToDivision { recipient_division } => Some(recipient_division),
            InvoiceParties::DivisionToFinancer { .. } => None,
        }
    }

    /// The financer on the receiving end, if the recipient is a financer.
    pub fn recipient_financer(&self) -> Option<FinancerId> {
        match self.parties {
            InvoiceParties::PlatformToDivision { .. } => None,
            InvoiceParties::DivisionToFinancer {
                recipient_financer, ..
            } => Some(recipient_financer),
        }
    }

    /// Confirm a draft invoice.
    pub fn confirm(&mut self) -> Result<(), DomainError> {
        self.transition(InvoiceStatus::Draft, InvoiceStatus::Confirmed, "confirm")
    }

    /// Mark a confirmed invoice as sent to its recipient.
    pub fn mark_sent(&mut self) -> Result<(), DomainError> {
        self.transition(InvoiceStatus::Confirmed, InvoiceStatus::Sent, "mark sent")
    }

    /// Mark an invoice as paid. Payment can arrive before the invoice was
    /// flagged as sent, so both `Confirmed` and `Sent` accept it.
    pub fn mark_paid(&mut self) -> Result<(), DomainError> {
        match self.status {
            InvoiceStatus::Confirmed | InvoiceStatus::Sent => {
                self.status = InvoiceStatus::Paid;
                Ok(())
            }
            status => Err(transition_error("mark paid", status)),
        }
    }

    /// Cancel the invoice. Paid invoices cannot be cancelled.
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        match self.status {
            InvoiceStatus::Paid => Err(transition_error("cancel", InvoiceStatus::Paid)),
            InvoiceStatus::Cancelled => Err(transition_error("cancel", InvoiceStatus::Cancelled)),
            _ => {
                self.status = InvoiceStatus::Cancelled;
                Ok(())
            }
        }
    }

    fn transition(
        &mut self,
        from: InvoiceStatus,
        to: InvoiceStatus,
        action: &str,
    ) -> Result<(), DomainError> {
        if self.status != from {
            return Err(transition_error(action, self.status));
        }
        self.status = to;
        Ok(())
    }
}

fn transition_error(action: &str, status: InvoiceStatus) -> DomainError {
    DomainError::invariant(format!("cannot {action} an invoice in status {status:?}"))
}
