use super::table::TextTable;
use chrono::{DateTime, FixedOffset, Local, SecondsFormat};
use dnsc_domain::{QueryResult, ResultsOutput};
use std::time::Duration;

const SEPARATOR: &str = "---";

/// Renders a collected result set as an aligned comparison table.
#[derive(Debug, Clone, Copy)]
pub struct SummaryRenderer {
    output: ResultsOutput,
    omit_timestamp: bool,
}

impl SummaryRenderer {
    pub fn new(output: ResultsOutput, omit_timestamp: bool) -> Self {
        Self {
            output,
            omit_timestamp,
        }
    }

    pub fn render(&self, results: &[QueryResult]) -> String {
        let performed = (!self.omit_timestamp).then(|| Local::now().fixed_offset());
        self.render_at(results, performed)
    }

    /// Same as [`render`](Self::render) with an explicit report time.
    pub fn render_at(
        &self,
        results: &[QueryResult],
        performed: Option<DateTime<FixedOffset>>,
    ) -> String {
        let records_found = results.iter().any(|r| !r.answers.is_empty());

        let mut table = TextTable::default();
        let header: &[&str] = match (records_found, self.output) {
            (false, _) => &["Server", "RTT", "Query", "Type", "Answer"],
            (true, ResultsOutput::MultiLine) => &[
                "Server",
                "RTT",
                "Query",
                "Type",
                "Answer",
                "Answer Type",
                "TTL",
            ],
            (true, ResultsOutput::SingleLine) => {
                &["Server", "RTT", "Query", "Type", "Answers", "TTL"]
            }
        };
        table.push_row(header.iter().copied());
        table.push_row(header.iter().map(|_| SEPARATOR));

        for result in results {
            let rtt = format_rtt(result.response_time);
            let requested = result.requested_type_label();
            let lead = [
                result.server.as_str(),
                rtt.as_str(),
                result.query.as_str(),
                requested,
            ];

            if let Some(err) = &result.error {
                let message = err.to_string();
                table.push_row(lead.iter().copied().chain([message.as_str()]));
                continue;
            }

            let records = result.records();
            match self.output {
                ResultsOutput::MultiLine => {
                    for record in &records {
                        let ttl = record.ttl.to_string();
                        table.push_row(lead.iter().copied().chain([
                            record.value.as_str(),
                            record.record_type,
                            ttl.as_str(),
                        ]));
                    }
                }
                ResultsOutput::SingleLine => {
                    let answers = records
                        .iter()
                        .map(|r| format!("{} ({})", r.value, r.record_type))
                        .collect::<Vec<_>>()
                        .join(", ");
                    let ttls = records
                        .iter()
                        .map(|r| r.ttl.to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    table.push_row(
                        lead.iter()
                            .copied()
                            .chain([answers.as_str(), ttls.as_str()]),
                    );
                }
            }
        }

        let mut out = String::from("\n\n");
        out.push_str(&table.render());
        out.push('\n');
        if let Some(performed) = performed {
            out.push_str("Query Performed: ");
            out.push_str(&performed.to_rfc3339_opts(SecondsFormat::Secs, true));
            out.push('\n');
        }
        out
    }
}

/// Formats a round-trip time rounded to the millisecond (`0s`, `12ms`,
/// `1.5s`, `1m2.003s`, `1h1m40s`).
pub fn format_rtt(rtt: Duration) -> String {
    let ms = (rtt.as_micros() + 500) / 1000;
    if ms == 0 {
        return "0s".to_string();
    }
    if ms < 1000 {
        return format!("{}ms", ms);
    }

    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let secs = (ms % 60_000) / 1000;
    let frac = ms % 1000;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{}h{}m", hours, minutes));
    } else if minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    out.push_str(&secs.to_string());
    if frac > 0 {
        let frac = format!("{:03}", frac);
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out.push('s');
    out
}
