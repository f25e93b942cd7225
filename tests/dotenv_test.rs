//! `.env` loading tests.

mod common;

use std::env;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use trendview::credentials::load_dotenv_from;

use common::fixtures_dir;

/// In-memory log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_dotenv_fills_unset_and_keeps_existing() {
    // SAFETY: no other test touches these variables.
    unsafe {
        env::remove_var("TRENDVIEW_FIXTURE_VALUE");
        env::set_var("TRENDVIEW_FIXTURE_PRESET", "preset");
    }

    assert!(load_dotenv_from(&fixtures_dir().join("sample.env")));

    assert_eq!(env::var("TRENDVIEW_FIXTURE_VALUE").as_deref(), Ok("from-dotenv"));
    assert_eq!(env::var("TRENDVIEW_FIXTURE_PRESET").as_deref(), Ok("preset"));
}

#[test]
fn test_missing_dotenv_is_not_an_error() {
    assert!(!load_dotenv_from(&fixtures_dir().join("nonexistent.env")));
}

#[test]
fn test_malformed_dotenv_is_logged() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let loaded = tracing::subscriber::with_default(subscriber, || {
        load_dotenv_from(&fixtures_dir().join("malformed.env"))
    });

    assert!(!loaded);
    let output = logs.contents();
    assert!(output.contains("WARN"), "{output}");
    assert!(output.contains("failed to read .env file"), "{output}");
    assert!(output.contains("malformed.env"), "{output}");
}
