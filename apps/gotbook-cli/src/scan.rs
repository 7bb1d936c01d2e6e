//! Stdin scanner feed
//!
//! Stands in for the camera: each input line is one frame.

use std::io::{self, BufRead, Write};

use gotbook_core::{BarcodeHandler, ScanEvent, ScanSession, Symbology};
use tracing::info;

/// Line that presses the lookup button
const PRESS: &str = "!";

/// One line of the feed, interpreted
#[derive(Debug, PartialEq, Eq)]
enum FeedLine<'a> {
    Empty,
    Press,
    Payload(&'a str),
}

fn parse_line(line: &str) -> FeedLine<'_> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        FeedLine::Empty
    } else if line.trim() == PRESS {
        FeedLine::Press
    } else {
        FeedLine::Payload(line)
    }
}

/// Feed every line of `input` into `session`, echoing the button title
/// after each frame and the lookup URL after each press.
pub fn run_feed<R: BufRead, W: Write>(
    session: &mut ScanSession,
    symbology: Symbology,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    let mut frames = 0usize;
    for line in input.lines() {
        let line = line?;
        frames += 1;
        match parse_line(&line) {
            FeedLine::Empty => session.on_no_barcode(),
            FeedLine::Press => {
                match session.take_lookup() {
                    Some(url) => writeln!(out, "open {}", url)?,
                    None => writeln!(out, "no ISBN to look up")?,
                }
                continue;
            }
            FeedLine::Payload(payload) => {
                session.on_barcode_detected(ScanEvent {
                    symbology,
                    payload: Some(payload.to_string()),
                });
            }
        }
        writeln!(out, "[{}]", session.state().button_title)?;
    }
    info!(frames, "scanner feed ended");
    Ok(())
}
