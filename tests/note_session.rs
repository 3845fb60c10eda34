//! End-to-end tests: typed input in, preview text and printer jobs out.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use taskslip::PrinterConfig;
use taskslip::session::{Session, StopReason};
use taskslip::transport::{MemoryTransport, Transport};

const INIT: [u8; 2] = [0x1B, 0x40];
const CUT: [u8; 3] = [0x1B, 0x64, 0x02];

fn half_past_noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 3)
        .unwrap()
        .and_hms_opt(12, 30, 0)
        .unwrap()
}

fn session_with(transport: &Arc<MemoryTransport>) -> Session {
    let transport: Arc<dyn Transport> = transport.clone();
    Session::new(PrinterConfig::default(), transport).with_clock(half_past_noon)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[tokio::test]
async fn prints_each_note_as_one_job() {
    let transport = Arc::new(MemoryTransport::new());
    let mut session = session_with(&transport);
    let input = "Groceries\nbuy **milk**\n\n\nWork\n# Standup\n\n\n";
    let mut out = Vec::new();

    let summary = session
        .run(input.as_bytes(), &mut out, std::future::pending())
        .await
        .unwrap();

    assert_eq!(summary.printed, 2);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.reason, StopReason::InputClosed);

    let jobs = transport.jobs();
    assert_eq!(jobs.len(), 2);
    for job in &jobs {
        assert!(job.starts_with(&INIT));
        assert!(job.ends_with(&CUT));
    }
    assert!(contains(&jobs[0], b"Groceries"));
    assert!(contains(&jobs[0], b"milk"));
    assert!(!contains(&jobs[0], b"Standup"));
    assert!(contains(&jobs[1], b"Standup"));
}

#[tokio::test]
async fn transcript_shows_prompts_and_preview() {
    let transport = Arc::new(MemoryTransport::new());
    let mut session = session_with(&transport);
    let mut out = Vec::new();

    session
        .run("Todo\n:-- call mom --:\n\n\n".as_bytes(), &mut out, std::future::pending())
        .await
        .unwrap();

    let transcript = String::from_utf8(out).unwrap();
    let rule = "-".repeat(41);
    let expected_preview = format!(
        "**Todo**\n12:30 PM{}3 March 2026\n{}\n:-- call mom --:\n",
        " ".repeat(41 - 8 - 12),
        rule
    );
    assert!(transcript.starts_with("Subject: \n    Todo\n"));
    assert!(transcript.contains(&expected_preview));
    assert!(transcript.ends_with("Subject: "));
}

#[tokio::test]
async fn blank_subject_prints_time_line_first() {
    let transport = Arc::new(MemoryTransport::new());
    let mut session = session_with(&transport);
    let mut out = Vec::new();

    session
        .run("   \nhello\n\n\n".as_bytes(), &mut out, std::future::pending())
        .await
        .unwrap();

    let transcript = String::from_utf8(out).unwrap();
    assert!(transcript.contains("    Task\n"));
    assert!(!transcript.contains("****"));
    assert!(transcript.contains("\n12:30 PM"));
}

#[tokio::test]
async fn unlexable_line_is_printed_verbatim() {
    let transport = Arc::new(MemoryTransport::new());
    let mut session = session_with(&transport);
    let mut out = Vec::new();

    session
        .run("x\nmeet @ 5, ok?\n\n\n".as_bytes(), &mut out, std::future::pending())
        .await
        .unwrap();

    let transcript = String::from_utf8(out).unwrap();
    assert!(transcript.contains("meet @ 5, ok?\n"));
    assert!(contains(&transport.jobs()[0], b"meet @ 5, ok?"));
}

#[tokio::test]
async fn failed_flush_does_not_stop_the_session() {
    let transport = Arc::new(MemoryTransport::offline());
    let mut session = session_with(&transport);
    let mut out = Vec::new();

    let summary = session
        .run("a\none\n\n\nb\ntwo\n\n\n".as_bytes(), &mut out, std::future::pending())
        .await
        .unwrap();

    assert_eq!(summary.printed, 0);
    assert_eq!(summary.failed, 2);
    assert!(transport.jobs().is_empty());
    let transcript = String::from_utf8(out).unwrap();
    assert_eq!(transcript.matches("[printer] Flush failed: ").count(), 2);
}

#[tokio::test]
async fn offline_printer_refuses_to_connect() {
    let transport: Arc<dyn Transport> = Arc::new(MemoryTransport::offline());
    let result = Session::connect(PrinterConfig::default(), transport).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn cancellation_mid_note_sends_nothing() {
    let transport = Arc::new(MemoryTransport::new());
    let mut session = session_with(&transport);
    let mut out = Vec::new();

    // the writer half stays open, so the reader waits after "milk"
    let (reader, mut writer) = tokio::io::duplex(64);
    tokio::io::AsyncWriteExt::write_all(&mut writer, b"Groceries\nmilk\n")
        .await
        .unwrap();
    let shutdown = tokio::time::sleep(std::time::Duration::from_millis(50));

    let summary = session
        .run(tokio::io::BufReader::new(reader), &mut out, shutdown)
        .await
        .unwrap();

    assert_eq!(summary.reason, StopReason::Cancelled);
    assert_eq!(summary.printed, 0);
    assert!(transport.jobs().is_empty());
    drop(writer);
}

#[tokio::test]
async fn cancellation_after_a_note_keeps_the_printed_one() {
    let transport = Arc::new(MemoryTransport::new());
    let mut session = session_with(&transport);
    let mut out = Vec::new();

    let (reader, mut writer) = tokio::io::duplex(64);
    tokio::io::AsyncWriteExt::write_all(&mut writer, b"one\nfirst\n\n\ntwo\nsecond\n")
        .await
        .unwrap();
    let shutdown = tokio::time::sleep(std::time::Duration::from_millis(50));

    let summary = session
        .run(tokio::io::BufReader::new(reader), &mut out, shutdown)
        .await
        .unwrap();

    assert_eq!(summary.reason, StopReason::Cancelled);
    assert_eq!(summary.printed, 1);
    let jobs = transport.jobs();
    assert_eq!(jobs.len(), 1);
    assert!(contains(&jobs[0], b"first"));
    drop(writer);
}

#[tokio::test]
async fn thread_fed_input_prints_and_cancels() {
    use std::os::unix::net::UnixStream;
    use taskslip::input::BlockingLines;

    let transport = Arc::new(MemoryTransport::new());
    let mut session = session_with(&transport);
    let mut out = Vec::new();

    // one finished note, then the reader blocks on the open socket
    let (reader, mut peer) = UnixStream::pair().unwrap();
    std::io::Write::write_all(&mut peer, b"Groceries\nmilk\n\n\n").unwrap();
    let lines = BlockingLines::spawn(std::io::BufReader::new(reader));
    let shutdown = tokio::time::sleep(std::time::Duration::from_millis(100));

    let summary = tokio::time::timeout(
        std::time::Duration::from_secs(2),
        session.run_lines(lines, &mut out, shutdown),
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(summary.reason, StopReason::Cancelled);
    assert_eq!(summary.printed, 1);
    assert_eq!(transport.jobs().len(), 1);
    drop(peer);
}
