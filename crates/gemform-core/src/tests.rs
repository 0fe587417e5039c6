use std::cell::RefCell;
use std::collections::BTreeMap;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use serde_json::json;

use gemform_domain::{CaratOption, Category, ContactInfo, FieldId, Metal, TypeOption};

use crate::{
    assemble, FormSession, FormValidator, SubmissionPayload, SubmitOutcome, SubmitReceipt,
    SubmitService, SubmitTransport, TransportError,
};

#[derive(Default)]
struct RecordingTransport {
    sent: RefCell<Vec<SubmissionPayload>>,
    fail_with: Option<TransportError>,
}

impl SubmitTransport for RecordingTransport {
    fn send(&self, payload: &SubmissionPayload) -> Result<SubmitReceipt, TransportError> {
        self.sent.borrow_mut().push(payload.clone());
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(SubmitReceipt::new(200, "{\"ok\":true}")),
        }
    }
}

fn ring_session() -> FormSession {
    let mut session = FormSession::new();
    session.select_category(Category::Ring);
    session.select_type(TypeOption::Alliance).unwrap();
    session.set_value(FieldId::WeightFrom, "10").unwrap();
    session.select_metal(Metal::Gold);
    session.select_carat(CaratOption::K18).unwrap();
    session.set_value(FieldId::RingSizeFrom, "6").unwrap();
    session.set_value(FieldId::RingSizeTo, "6").unwrap();
    session.set_value(FieldId::StoneType, "Diamond").unwrap();
    session.set_value(FieldId::Email, "a@b.com").unwrap();
    session.set_value(FieldId::Phone, "123").unwrap();
    session.set_value(FieldId::Name, "X").unwrap();
    session
}

#[test]
fn end_to_end_ring_filter_matches_expected_shape() {
    let session = ring_session();
    let contact = ContactInfo::new("a@b.com", "123", "X");
    let payload = assemble(&contact, &session);

    assert_eq!(
        payload.filter.clone().into_value(),
        json!({
            "category": "Ring",
            "type": "Alliance",
            "weight": {"from": "10", "to": "10"},
            "metal": "Gold",
            "carat": "18",
            "ringSize": {"from": "6", "to": "6"},
            "stoneType": "Diamond",
        })
    );
    for absent in ["price", "length", "width", "stoneColor", "brand"] {
        assert!(!payload.filter.contains(absent), "{absent} should be absent");
    }
}

#[test]
fn submit_sends_payload_when_valid() {
    let mut service = SubmitService::new(RecordingTransport::default(), FormValidator::default());
    let outcome = service.submit(&ring_session());

    assert!(outcome.is_sent());
    assert!(service.is_form_valid());
    let sent = service.transport().sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].contact.email, "a@b.com");
    assert_eq!(sent[0].filter.scalar(FieldId::Carat), Some("18"));
}

#[test]
fn submit_blocks_invalid_form_without_sending() {
    let mut service = SubmitService::new(RecordingTransport::default(), FormValidator::default());
    let mut session = ring_session();
    session.set_value(FieldId::Phone, "   ").unwrap();

    let outcome = service.submit(&session);
    assert_eq!(outcome, SubmitOutcome::Invalid { missing: vec![FieldId::Phone] });
    assert!(!service.is_form_valid());
    assert!(service.transport().sent.borrow().is_empty());
}

#[test]
fn transport_failure_reaches_hook_and_keeps_form_valid() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let transport = RecordingTransport {
        fail_with: Some(TransportError::Connect("connection refused".into())),
        ..Default::default()
    };
    let mut service = SubmitService::new(transport, FormValidator::default())
        .on_transport_failure(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

    let outcome = service.submit(&ring_session());
    assert!(matches!(
        outcome,
        SubmitOutcome::TransportFailed {
            error: TransportError::Connect(_),
            ..
        }
    ));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(service.is_form_valid());
}

#[test]
fn every_submit_rereads_current_values() {
    let mut service = SubmitService::new(RecordingTransport::default(), FormValidator::default());
    let mut session = ring_session();
    service.submit(&session);
    session.set_value(FieldId::Brand, "Pandora").unwrap();
    service.submit(&session);

    let sent = service.transport().sent.borrow();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].filter.scalar(FieldId::Brand), None);
    assert_eq!(sent[1].filter.scalar(FieldId::Brand), Some("Pandora"));
}

#[test]
fn plain_value_map_is_a_valid_source() {
    let mut raw: BTreeMap<String, String> = BTreeMap::new();
    raw.insert("email".into(), "c@d.com".into());
    raw.insert("phone".into(), "555".into());
    raw.insert("name".into(), "Y".into());
    raw.insert("lengthTo".into(), "40".into());

    let mut service = SubmitService::new(RecordingTransport::default(), FormValidator::default());
    let outcome = service.submit(&raw);
    let SubmitOutcome::Sent { payload, .. } = outcome else {
        panic!("expected submission to be sent");
    };
    assert_eq!(
        payload.filter.into_value(),
        json!({"length": {"from": "40", "to": "40"}})
    );
}
