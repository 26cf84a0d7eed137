use dioxus::prelude::*;

use crate::scan::{SheetFile, SheetScanSummary};
use crate::utils::format_long_date;

fn headline(total_sheets: u64) -> String {
    format!("✅ Scan complete: We found {} survey files.", total_sheets)
}

fn oldest_line(summary: &SheetScanSummary) -> String {
    format!(
        "Oldest file created on {}.",
        format_long_date(summary.oldest_created.as_ref())
    )
}

fn newest_line(summary: &SheetScanSummary) -> String {
    format!(
        "Most recently modified file on {}.",
        format_long_date(summary.newest_modified.as_ref())
    )
}

/// Scan result card: headline, date lines, and the file table.
///
/// The table is omitted entirely when the listing is empty, even though
/// `total_sheets` may still be nonzero.
#[component]
pub fn ScanSummaryCard(summary: SheetScanSummary) -> Element {
    let headline = headline(summary.total_sheets);
    let oldest = oldest_line(&summary);
    let newest = newest_line(&summary);
    let has_files = !summary.files.is_empty();

    rsx! {
        section { class: "el-summary-card",
            h2 { class: "el-summary-headline", "{headline}" }
            p { "{oldest}" }
            p { "{newest}" }

            if has_files {
                table { class: "el-table",
                    thead {
                        tr {
                            th { "File Name" }
                            th { "Creation Date" }
                        }
                    }
                    tbody {
                        for (idx, file) in summary.files.iter().enumerate() {
                            SheetFileRow { key: "{idx}", file: file.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SheetFileRow(file: SheetFile) -> Element {
    let created = format_long_date(file.created.as_ref());

    rsx! {
        tr {
            td { "{file.name}" }
            td { "{created}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn utc(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn summary() -> SheetScanSummary {
        SheetScanSummary {
            total_sheets: 3,
            oldest_created: Some(utc("2024-01-05T00:00:00Z")),
            newest_modified: Some(utc("2024-06-10T00:00:00Z")),
            files: vec![],
        }
    }

    #[test]
    fn test_headline_contains_the_count() {
        assert_eq!(headline(3), "✅ Scan complete: We found 3 survey files.");
    }

    #[test]
    fn test_date_lines_use_long_dates() {
        let summary = summary();
        assert_eq!(oldest_line(&summary), "Oldest file created on January 5, 2024.");
        assert_eq!(
            newest_line(&summary),
            "Most recently modified file on June 10, 2024."
        );
    }

    #[test]
    fn test_date_lines_fall_back_to_sentinel() {
        let summary = SheetScanSummary {
            total_sheets: 0,
            oldest_created: None,
            newest_modified: None,
            files: vec![],
        };
        assert_eq!(oldest_line(&summary), "Oldest file created on N/A.");
        assert_eq!(newest_line(&summary), "Most recently modified file on N/A.");
    }
}
