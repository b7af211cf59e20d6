//! Test fixtures and helpers shared by the integration tests.

use address_book::{AddressBook, Config, Record, Session};
use std::io::Cursor;

/// Build a record, asserting every phone is accepted.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name).expect("fixture names are valid");
    for phone in phones {
        assert!(
            record.add_phone(phone).is_added(),
            "fixture phone {} should be valid",
            phone
        );
    }
    record
}

/// The phones of a record as plain strings.
pub fn phone_values(record: &Record) -> Vec<String> {
    record.phones().iter().map(|p| p.to_string()).collect()
}

/// Run a scripted session without the menu, returning the final book and transcript.
#[allow(dead_code)]
pub fn run_session(script: &str) -> (AddressBook, String) {
    let config = Config {
        show_menu: false,
        ..Config::default()
    };
    let mut session = Session::new(Cursor::new(script.as_bytes()), Vec::new(), &config);
    session.run().expect("in-memory I/O does not fail");
    let (book, output) = session.into_parts();
    (book, String::from_utf8(output).expect("transcript is UTF-8"))
}
