//! Service codes and the transport statuses they encode
//!
//! A service code carries its transport status in its leading digits:
//! `status = code / 1000`, so `200001` is transmitted as `200` and `404002`
//! as `404`. The error-code registry must allocate codes inside the
//! namespace of the status they are meant to be sent with.

use serde::{Deserialize, Serialize};

/// Application-level status identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceCode(u32);

impl ServiceCode {
    /// Number of service codes per transport status
    pub const NAMESPACE: u32 = 1000;

    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Transport status encoded by this code (integer division by 1000)
    pub const fn transport_status(self) -> TransportStatus {
        TransportStatus(self.0 / Self::NAMESPACE)
    }
}

impl From<u32> for ServiceCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl std::fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Protocol-level response status derived from a [`ServiceCode`]
///
/// No range check happens here; transport adapters decide what to do with
/// values their protocol cannot carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransportStatus(u32);

impl TransportStatus {
    pub const fn new(status: u32) -> Self {
        Self(status)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn class(self) -> StatusClass {
        StatusClass::of(self)
    }
}

impl std::fmt::Display for TransportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome class of a transport status, driving how much detail is disclosed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    /// Anything below 400 (and below 100, which no transport accepts anyway)
    Success,
    /// 400–499: the caller's fault; error text is disclosed
    ClientFault,
    /// 500 and above: internal fault; error detail is withheld
    ServerFault,
}

impl StatusClass {
    pub const fn of(status: TransportStatus) -> Self {
        match status.0 {
            400..=499 => StatusClass::ClientFault,
            500.. => StatusClass::ServerFault,
            _ => StatusClass::Success,
        }
    }

    pub const fn is_fault(self) -> bool {
        !matches!(self, StatusClass::Success)
    }

    pub const fn is_server_fault(self) -> bool {
        matches!(self, StatusClass::ServerFault)
    }
}

impl std::fmt::Display for StatusClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusClass::Success => write!(f, "success"),
            StatusClass::ClientFault => write!(f, "client_fault"),
            StatusClass::ServerFault => write!(f, "server_fault"),
        }
    }
}
