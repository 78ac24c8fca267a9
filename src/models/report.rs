use std::fmt::{Display, Formatter, Result};

use crate::models::error::SendFailure;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Mail,
    Chat,
}

impl Display for Channel {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Channel::Mail => write!(f, "mail"),
            Channel::Chat => write!(f, "chat"),
        }
    }
}

/// One send attempt for one recipient on one channel.
///
/// `row` is `None` for the aggregated anniversary announcement, which has
/// no single roster row.
#[derive(Debug)]
pub struct SendOutcome {
    pub row: Option<usize>,
    pub recipient: String,
    pub channel: Channel,
    pub result: std::result::Result<(), SendFailure>,
}

/// Explicit completion record of one dispatch batch.
///
/// The batch always runs to the end; every attempted send lands here as a
/// success or a failure instead of being swallowed by logging.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<SendOutcome>,
}

impl BatchReport {
    pub fn push(&mut self, outcome: SendOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn sent(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }
}
