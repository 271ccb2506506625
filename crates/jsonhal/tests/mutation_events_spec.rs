use jsonhal::*;
use serde_json::json;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

#[test]
fn given_trace_subscriber_when_mutating_links_then_set_and_delete_are_logged() {
    let mut hal = Hal::new();

    let output = capture(|| {
        hal.set_link("self", "/v1/hello/world/1", "");
        hal.delete_link("self");
        hal.delete_link("missing");
    });

    assert!(output.contains("setting link"));
    assert!(output.contains("deleting link"));
    assert!(output.contains("link=self"));
    assert!(output.contains("link=missing"));
}

#[test]
fn given_trace_subscriber_when_mutating_embedded_then_set_and_delete_are_logged() {
    let mut hal = Hal::new();

    let output = capture(|| {
        hal.set_embedded("foobar", json!({ "id": 1 }));
        hal.delete_embedded("foobar");
    });

    assert!(output.contains("setting embedded resource"));
    assert!(output.contains("deleting embedded resource"));
    assert!(output.contains("embedded=foobar"));
    assert!(hal.is_empty());
}
