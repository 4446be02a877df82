//! Exchange scanning.
//!
//! [`ExchangeScanner`] walks a recording in file order, writing every visited
//! request URL to the observation channel, and yields the exchanges whose URL
//! equals the target. It is lazy: callers that stop after the first match
//! never visit (or print) the exchanges behind it.

use std::io::Write;
use std::slice;

use log::trace;

use crate::error_handling::InspectError;
use crate::tape::{Exchange, Recording};

/// Lazy, single-pass search for exchanges with a given request URL.
///
/// Once exhausted it stays exhausted; scan again with a fresh scanner.
pub struct ExchangeScanner<'a, W: Write> {
    exchanges: slice::Iter<'a, Exchange>,
    target: Option<&'a str>,
    out: W,
    visited: usize,
}

impl<'a, W: Write> ExchangeScanner<'a, W> {
    /// Creates a scanner over `recording`.
    ///
    /// With no `target` every URL is listed and nothing is yielded.
    pub fn new(recording: &'a Recording, target: Option<&'a str>, out: W) -> Self {
        Self {
            exchanges: recording.exchanges().iter(),
            target,
            out,
            visited: 0,
        }
    }

    /// Number of exchanges visited so far.
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// The observation writer, for printing details of a match between steps.
    pub fn output(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<'a, W: Write> Iterator for ExchangeScanner<'a, W> {
    type Item = Result<&'a Exchange, InspectError>;

    fn next(&mut self) -> Option<Self::Item> {
        for exchange in self.exchanges.by_ref() {
            self.visited += 1;
            let url = exchange.request.url.as_str();
            if let Err(e) = writeln!(self.out, "{url}") {
                return Some(Err(InspectError::Output(e)));
            }
            if self.target == Some(url) {
                trace!("Exchange #{} matches target", self.visited - 1);
                return Some(Ok(exchange));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tape::parse_recording;

    fn recording(urls: &[&str]) -> Recording {
        let items: Vec<String> = urls
            .iter()
            .map(|u| {
                format!(r#"{{"request":{{"url":"{u}"}},"response":{{"body":"","headers":{{}}}}}}"#)
            })
            .collect();
        parse_recording(&format!("[{}]", items.join(","))).expect("valid tape")
    }

    fn printed(out: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(out)
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_first_match_stops_scanning() {
        let recording = recording(&["https://a.test/1", "https://a.test/x", "https://a.test/3"]);
        let mut out = Vec::new();
        let mut scanner = ExchangeScanner::new(&recording, Some("https://a.test/x"), &mut out);

        let found = scanner.next().expect("should match").expect("no io error");
        assert_eq!(found.request.url, "https://a.test/x");
        assert_eq!(scanner.visited(), 2);
        drop(scanner);

        assert_eq!(printed(&out), vec!["https://a.test/1", "https://a.test/x"]);
    }

    #[test]
    fn test_no_match_lists_every_url() {
        let recording = recording(&["https://a.test/1", "https://a.test/2"]);
        let mut out = Vec::new();
        let mut scanner = ExchangeScanner::new(&recording, Some("https://a.test/x"), &mut out);

        assert!(scanner.next().is_none());
        assert!(scanner.next().is_none());
        assert_eq!(scanner.visited(), 2);
        drop(scanner);

        assert_eq!(printed(&out), vec!["https://a.test/1", "https://a.test/2"]);
    }

    #[test]
    fn test_without_target_nothing_is_yielded() {
        let recording = recording(&["https://a.test/1", "https://a.test/1"]);
        let mut out = Vec::new();
        let matches = ExchangeScanner::new(&recording, None, &mut out).count();

        assert_eq!(matches, 0);
        assert_eq!(printed(&out).len(), 2);
    }

    #[test]
    fn test_full_consumption_yields_every_match() {
        let recording = recording(&["https://a.test/x", "https://a.test/2", "https://a.test/x"]);
        let mut out = Vec::new();
        let matches: Vec<&Exchange> =
            ExchangeScanner::new(&recording, Some("https://a.test/x"), &mut out)
                .collect::<Result<_, _>>()
                .expect("no io error");

        assert_eq!(matches.len(), 2);
        assert_eq!(printed(&out).len(), 3);
    }

    #[test]
    fn test_match_is_exact() {
        let recording = recording(&["https://a.test/x/", "HTTPS://A.TEST/X"]);
        let mut out = Vec::new();
        let mut scanner = ExchangeScanner::new(&recording, Some("https://a.test/x"), &mut out);
        assert!(scanner.next().is_none());
    }
}
