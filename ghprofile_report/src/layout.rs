//! The report as an ordered list of blocks, independent of any drawing.

use crate::ReportInput;

use time::format_description::well_known::{Iso8601, Rfc3339};
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

pub const TITLE: &str = "GitHub Profile Report";
pub const NO_REPOSITORIES: &str = "No public repositories found.";

const INCH: f32 = 72.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Title(String),
    Heading(String),
    Paragraph(String),
    /// Vertical gap, in points.
    Spacer(f32),
    Table(Table),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableStyle {
    /// Shaded bold key column, grey grid.
    KeyValue,
    /// Styled header row, alternating body rows.
    Listing,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    pub style: TableStyle,
    /// In points.
    pub column_widths: Vec<f32>,
    pub rows: Vec<Vec<String>>,
}

impl Block {
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }
}

pub fn build_story(input: &ReportInput, generated_at: OffsetDateTime) -> Vec<Block> {
    let mut story = vec![
        Block::Title(TITLE.to_string()),
        Block::Paragraph(format!("Generated on {}", format_generated_at(generated_at))),
        Block::Spacer(30.0),
        Block::Heading("Profile Information".to_string()),
        Block::Spacer(12.0),
        Block::Table(Table {
            style: TableStyle::KeyValue,
            column_widths: vec![2.0 * INCH, 4.5 * INCH],
            rows: profile_rows(input),
        }),
        Block::Spacer(30.0),
        Block::Heading(format!("Top Repositories ({})", input.repos.len())),
        Block::Spacer(12.0),
    ];

    if input.repos.is_empty() {
        story.push(Block::Paragraph(NO_REPOSITORIES.to_string()));
    } else {
        story.push(Block::Table(Table {
            style: TableStyle::Listing,
            column_widths: vec![2.5 * INCH, 1.5 * INCH, 2.0 * INCH],
            rows: repository_rows(input),
        }));
    }

    story
}

/// Username, Name and Bio always; Location, Company and Email only when set.
fn profile_rows(input: &ReportInput) -> Vec<Vec<String>> {
    let profile = &input.profile;
    let mut rows = vec![
        row(["Username", &input.username]),
        row(["Name", profile.name.as_deref().unwrap_or("N/A")]),
        row(["Bio", profile.bio.as_deref().unwrap_or("No bio available")]),
    ];

    let optional = [
        ("Location", &profile.location),
        ("Company", &profile.company),
        ("Email", &profile.email),
    ];
    for (key, value) in optional {
        if let Some(value) = value.as_deref().filter(|value| !value.is_empty()) {
            rows.push(row([key, value]));
        }
    }

    rows
}

fn repository_rows(input: &ReportInput) -> Vec<Vec<String>> {
    let header = row(["Repository", "Language", "Last Updated"]);
    let body = input.repos.iter().map(|repo| {
        vec![
            repo.name.as_deref().unwrap_or("N/A").to_string(),
            repo.language.as_deref().unwrap_or("N/A").to_string(),
            format_updated(repo.updated.as_deref().unwrap_or("N/A")),
        ]
    });

    std::iter::once(header).chain(body).collect()
}

fn row<const N: usize>(cells: [&str; N]) -> Vec<String> {
    cells.iter().map(|cell| cell.to_string()).collect()
}

/// Best effort "Feb 11, 2024 04:43 PM". Text that is not a timestamp comes
/// back unchanged.
pub fn format_updated(raw: &str) -> String {
    if raw.is_empty() || raw == "N/A" {
        return raw.to_string();
    }

    parse_timestamp(raw)
        .and_then(|timestamp| {
            timestamp
                .format(format_description!(
                    "[month repr:short] [day], [year] [hour repr:12]:[minute] [period]"
                ))
                .ok()
        })
        .unwrap_or_else(|| raw.to_string())
}

/// Wall-clock time as written; any offset is kept, not converted.
fn parse_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    let wall_clock = |timestamp: OffsetDateTime| PrimitiveDateTime::new(timestamp.date(), timestamp.time());

    OffsetDateTime::parse(raw, &Rfc3339)
        .map(wall_clock)
        .or_else(|_| OffsetDateTime::parse(raw, &Iso8601::DEFAULT).map(wall_clock))
        .or_else(|_| PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT))
        .or_else(|_| Date::parse(raw, format_description!("[year]-[month]-[day]")).map(Date::midnight))
        .ok()
}

fn format_generated_at(at: OffsetDateTime) -> String {
    at.format(format_description!(
        "[month repr:long] [day], [year] at [hour repr:12]:[minute] [period]"
    ))
    .unwrap_or_else(|_| at.to_string())
}
