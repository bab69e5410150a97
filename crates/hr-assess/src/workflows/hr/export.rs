//! Spreadsheet export of candidate reports for a job.

use std::io::Write;

use serde::Serialize;

use super::domain::CandidateReport;

#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Encoding(std::string::FromUtf8Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(err) => write!(f, "failed to write candidate export: {}", err),
            ExportError::Csv(err) => write!(f, "invalid candidate CSV row: {}", err),
            ExportError::Encoding(err) => write!(f, "candidate export is not UTF-8: {}", err),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(err) => Some(err),
            ExportError::Csv(err) => Some(err),
            ExportError::Encoding(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Serialize)]
struct CandidateRow<'a> {
    #[serde(rename = "Session")]
    session: &'a str,
    #[serde(rename = "Candidate")]
    candidate: &'a str,
    #[serde(rename = "Completed At")]
    completed_at: String,
    #[serde(rename = "IQ")]
    iq: f64,
    #[serde(rename = "Reliability")]
    reliability: String,
    #[serde(rename = "Emotionality")]
    emotionality: String,
    #[serde(rename = "SJT")]
    sjt: f64,
    #[serde(rename = "Top Drivers")]
    top_drivers: String,
    #[serde(rename = "Validity")]
    validity: &'a str,
    #[serde(rename = "Lie Score")]
    lie_score: String,
    #[serde(rename = "Status")]
    status: &'a str,
    #[serde(rename = "Fit %")]
    fit: u8,
}

impl<'a> From<&'a CandidateReport> for CandidateRow<'a> {
    fn from(report: &'a CandidateReport) -> Self {
        let record = &report.record;
        let validity = record.validity.as_ref();

        Self {
            session: &record.session_id.0,
            candidate: &record.candidate_name,
            completed_at: record.completed_at.to_rfc3339(),
            iq: record.metrics.iq,
            reliability: format!("{:.2}", record.metrics.reliability),
            emotionality: format!("{:.2}", record.metrics.emotionality),
            sjt: record.metrics.sjt,
            top_drivers: record.top_drivers.join("; "),
            validity: validity.map_or("", |profile| profile.status_label.as_str()),
            lie_score: validity
                .map(|profile| format!("{:.1}", profile.lie_score))
                .unwrap_or_default(),
            status: &record.status_label,
            fit: report.fit.fit_percentage,
        }
    }
}

pub fn write_candidates<W: Write>(
    writer: W,
    reports: &[CandidateReport],
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for report in reports {
        csv_writer.serialize(CandidateRow::from(report))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn candidates_csv(reports: &[CandidateReport]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_candidates(&mut buffer, reports)?;
    String::from_utf8(buffer).map_err(ExportError::Encoding)
}
