//! One submit attempt: validate, assemble, hand off to the transport.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use gemform_domain::FieldId;

use crate::{
    error::TransportError,
    payload::{assemble_from, SubmissionPayload},
    source::FieldValueSource,
    validator::FormValidator,
};

/// Delivers a payload to the search agent.
pub trait SubmitTransport {
    fn send(&self, payload: &SubmissionPayload) -> Result<SubmitReceipt, TransportError>;
}

impl<T: SubmitTransport + ?Sized> SubmitTransport for Box<T> {
    fn send(&self, payload: &SubmissionPayload) -> Result<SubmitReceipt, TransportError> {
        (**self).send(payload)
    }
}

/// Acknowledgement of a delivered payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub status: u16,
    pub body: String,
    pub submitted_at: DateTime<Utc>,
}

impl SubmitReceipt {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            submitted_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation blocked the attempt; nothing was built or sent.
    Invalid { missing: Vec<FieldId> },
    Sent {
        payload: SubmissionPayload,
        receipt: SubmitReceipt,
    },
    TransportFailed {
        payload: SubmissionPayload,
        error: TransportError,
    },
}

impl SubmitOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent { .. })
    }
}

type FailureHook = Box<dyn Fn(&TransportError) + Send + Sync>;

pub struct SubmitService<T: SubmitTransport> {
    transport: T,
    validator: FormValidator,
    on_failure: Option<FailureHook>,
}

impl<T: SubmitTransport> SubmitService<T> {
    pub fn new(transport: T, validator: FormValidator) -> Self {
        Self {
            transport,
            validator,
            on_failure: None,
        }
    }

    /// Registers a callback invoked after a transport failure has been logged.
    pub fn on_transport_failure(
        mut self,
        hook: impl Fn(&TransportError) + Send + Sync + 'static,
    ) -> Self {
        self.on_failure = Some(Box::new(hook));
        self
    }

    pub fn is_form_valid(&self) -> bool {
        self.validator.is_form_valid()
    }

    pub fn validator(&self) -> &FormValidator {
        &self.validator
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Reads `source` afresh and attempts one submission.
    ///
    /// Transport failures never change the validity flag.
    pub fn submit(&mut self, source: &impl FieldValueSource) -> SubmitOutcome {
        if !self.validator.validate(source) {
            let missing = self.validator.missing_fields(source);
            let missing_ids: Vec<&str> = missing.iter().map(FieldId::as_str).collect();
            warn!(
                missing = ?missing_ids,
                "form is not valid; fill in all required fields"
            );
            return SubmitOutcome::Invalid { missing };
        }

        let payload = assemble_from(source);
        match self.transport.send(&payload) {
            Ok(receipt) => {
                info!(
                    status = receipt.status,
                    filters = payload.filter.len(),
                    "search request submitted"
                );
                SubmitOutcome::Sent { payload, receipt }
            }
            Err(err) => {
                error!(error = %err, "search request failed");
                if let Some(hook) = &self.on_failure {
                    hook(&err);
                }
                SubmitOutcome::TransportFailed {
                    payload,
                    error: err,
                }
            }
        }
    }
}
