use cloudrec_core::{submit, Database, Record, SubmitError, Transport};
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
struct Offline;

impl Display for Offline {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "offline")
    }
}

impl std::error::Error for Offline {}

#[derive(Default)]
struct RecordingTransport {
    sent: RefCell<Vec<(String, Map<String, Value>)>>,
    fail: bool,
}

impl Transport for RecordingTransport {
    type Error = Offline;

    fn send(&self, action: &str, payload: &Map<String, Value>) -> Result<(), Self::Error> {
        if self.fail {
            return Err(Offline);
        }
        self.sent
            .borrow_mut()
            .push((action.to_string(), payload.clone()));
        Ok(())
    }
}

#[test]
fn submit_sends_validated_envelope() {
    let transport = RecordingTransport::default();
    let request = Database::public().save_request(vec![Record::new("Note").unwrap()]);

    submit(&request, &transport).unwrap();

    let sent = transport.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "record:save");
    assert_eq!(sent[0].1["atomic"], true);
}

#[test]
fn submit_never_sends_invalid_request() {
    let transport = RecordingTransport::default();
    let request = Database::public().save_request(Vec::new());

    let err = submit(&request, &transport).unwrap_err();
    assert!(matches!(err, SubmitError::Invalid(_)));
    assert!(transport.sent.borrow().is_empty());
}

#[test]
fn submit_surfaces_transport_failure() {
    let transport = RecordingTransport {
        fail: true,
        ..RecordingTransport::default()
    };
    let request = Database::public().save_request(vec![Record::new("Note").unwrap()]);

    let err = submit(&request, &transport).unwrap_err();
    assert!(matches!(err, SubmitError::Transport(Offline)));
    assert_eq!(err.to_string(), "transport failed: offline");
}
