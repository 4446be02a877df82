//! tape_inspector library: offline inspection of recorded HTTP traffic
//!
//! Loads a tape (a JSON array of recorded request/response exchanges), lists
//! every request URL it visits, and for the exchange whose URL matches the
//! target prints the request, the base64-decoded response body, the response
//! headers, and the gunzipped body.
//!
//! # Example
//!
//! ```no_run
//! use tape_inspector::{Config, run_inspection};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     tape: std::path::PathBuf::from("tape-directory/session.json"),
//!     target_url: Some("https://a.test/x".to_string()),
//!     ..Default::default()
//! };
//!
//! let report = run_inspection(config)?;
//! println!("visited {} of {} exchanges", report.visited, report.exchanges);
//! # Ok(())
//! # }
//! ```

pub mod config;
mod decode;
mod decompress;
mod error_handling;
pub mod initialization;
mod render;
mod scan;
mod tape;

// Re-export public API
pub use config::{Config, ConfigValidationError, DecompressFailurePolicy, LogFormat, LogLevel};
pub use decode::decode_body;
pub use decompress::{decompress_gzip, ScratchBuffer};
pub use error_handling::{InitializationError, InspectError, Stage};
pub use render::ByteLiteral;
pub use run::{inspect, run_inspection, InspectionReport};
pub use scan::ExchangeScanner;
pub use tape::{
    load_recording, parse_recording, Exchange, RecordedRequest, RecordedResponse, Recording,
};

// Internal run module (drives the inspection pipeline)
mod run {
    use std::io::Write;
    use std::path::PathBuf;

    use anyhow::Result;
    use log::{debug, info, warn};

    use crate::config::{Config, DecompressFailurePolicy};
    use crate::decode::decode_body;
    use crate::decompress::decompress_gzip;
    use crate::error_handling::InspectError;
    use crate::render::{write_decompressed, write_raw_body, write_request};
    use crate::scan::ExchangeScanner;
    use crate::tape::{load_recording, Exchange, Recording};

    /// Outcome of an inspection run.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct InspectionReport {
        /// Tape that was inspected
        pub tape: PathBuf,
        /// Number of exchanges in the tape
        pub exchanges: usize,
        /// Number of exchanges visited (and listed) before scanning stopped
        pub visited: usize,
        /// Number of exchanges whose URL matched the target
        pub matched: usize,
        /// Number of matched bodies that were gunzipped
        pub decompressed: usize,
        /// Number of matched bodies left compressed under the `warn` policy
        pub degraded: usize,
    }

    impl InspectionReport {
        /// True when no visited exchange matched the target.
        pub fn not_found(&self) -> bool {
            self.matched == 0
        }
    }

    /// Scans `recording` and prints the inspection output to `out`.
    ///
    /// Stops after the first match unless `config.all_matches` is set.
    /// Output written before a failure stays written.
    ///
    /// # Errors
    ///
    /// Decode errors always propagate; decompression errors propagate under
    /// [`DecompressFailurePolicy::Fail`]; write failures surface as
    /// `InspectError::Output`.
    pub fn inspect<W: Write>(
        recording: &Recording,
        config: &Config,
        out: W,
    ) -> Result<InspectionReport, InspectError> {
        let mut report = InspectionReport {
            tape: config.tape.clone(),
            exchanges: recording.len(),
            visited: 0,
            matched: 0,
            decompressed: 0,
            degraded: 0,
        };

        let target = config.target_url.as_deref();
        let mut scanner = ExchangeScanner::new(recording, target, out);
        while let Some(exchange) = scanner.next() {
            let exchange = exchange?;
            report.matched += 1;
            inspect_exchange(
                scanner.output(),
                exchange,
                config.on_decompress_error,
                &mut report,
            )?;
            if !config.all_matches {
                break;
            }
        }
        report.visited = scanner.visited();
        scanner.output().flush()?;

        if let (Some(target), true) = (target, report.not_found()) {
            info!("No exchange matched {target}");
        }
        Ok(report)
    }

    fn inspect_exchange<W: Write>(
        out: &mut W,
        exchange: &Exchange,
        policy: DecompressFailurePolicy,
        report: &mut InspectionReport,
    ) -> Result<(), InspectError> {
        let url = exchange.request.url.as_str();
        write_request(out, exchange)?;

        debug!("Decoding response body of {url}");
        let raw = decode_body(exchange)?;
        write_raw_body(out, exchange, &raw)?;
        out.flush()?;

        debug!("Decompressing {} body bytes", raw.len());
        match decompress_gzip(&raw) {
            Ok(bytes) => {
                write_decompressed(out, &bytes)?;
                report.decompressed += 1;
            }
            Err(e) if policy == DecompressFailurePolicy::Warn => {
                warn!("Leaving body of {url} undecompressed ({} stage): {e}", e.stage());
                report.degraded += 1;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn staged<T>(result: Result<T, InspectError>) -> Result<T> {
        result.map_err(|e| {
            let stage = e.stage();
            anyhow::Error::new(e).context(format!("{stage} stage failed"))
        })
    }

    /// Runs an inspection with the provided configuration.
    ///
    /// Loads the tape and prints the inspection output to stdout; logs go to
    /// the logger, if one is installed.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, or if the load,
    /// decode, decompress or output stage fails. The error chain starts with
    /// `"<stage> stage failed"`.
    pub fn run_inspection(config: Config) -> Result<InspectionReport> {
        config.validate()?;

        info!("Inspecting tape {}", config.tape.display());
        let recording = staged(load_recording(&config.tape))?;

        let stdout = std::io::stdout();
        let report = staged(inspect(&recording, &config, stdout.lock()))?;

        info!(
            "Visited {} of {} exchange{} ({} matched, {} decompressed, {} left compressed)",
            report.visited,
            report.exchanges,
            if report.exchanges == 1 { "" } else { "s" },
            report.matched,
            report.decompressed,
            report.degraded
        );
        Ok(report)
    }
}
