use crate::domain::model::FeedRecord;
use scraper::{ElementRef, Html, Selector};

/// Zero-based position of the services table among the page's `tbody`
/// elements. Page-layout assumption: status.aws.amazon.com renders seven
/// tbodies of navigation and summary chrome before the per-service outage
/// table. Positional lookup is brittle; when the page changes, this constant
/// (or the whole locator) is the thing to swap.
const STATUS_TABLE_INDEX: usize = 7;

/// Class combination the page puts on service-name cells.
const SERVICE_CELL_SELECTOR: &str = "td.bb.top.pad8";

/// Parsed status page. Wraps the HTML tree and isolates every structural
/// assumption about the page layout behind one type.
pub struct StatusPage {
    document: Html,
}

impl StatusPage {
    /// Parsing is lenient: malformed markup still yields a tree, it just
    /// won't contain anything the extractor recognises.
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Locates the services table, or `None` when the page carries fewer
    /// tbodies than expected. A missing table means zero records, not an
    /// error.
    fn status_table(&self) -> Option<ElementRef<'_>> {
        let tbody = selector("tbody");
        self.document.select(&tbody).nth(STATUS_TABLE_INDEX)
    }

    /// Walks the service rows and returns one record per row that has both a
    /// non-empty service name and a non-empty feed link, in document order.
    ///
    /// Tie-break policy: when a row has several matching cells or anchors,
    /// the last one wins. The source page puts exactly one service cell per
    /// row and the RSS anchor last, so this is the compatible reading of
    /// ambiguous rows.
    pub fn extract_records(&self, country_filter: Option<&str>) -> Vec<FeedRecord> {
        let Some(table) = self.status_table() else {
            tracing::warn!(
                "Services table not found (page has fewer than {} tbody elements)",
                STATUS_TABLE_INDEX + 1
            );
            return Vec::new();
        };

        let row_selector = selector("tr");
        let cell_selector = selector(SERVICE_CELL_SELECTOR);
        let anchor_selector = selector("a");

        let mut records = Vec::new();
        for row in table.select(&row_selector) {
            // 取得服務名稱
            let mut service = String::new();
            for cell in row.select(&cell_selector) {
                let text = cell.text().collect::<String>().trim().to_string();

                match country_filter {
                    None => service = text,
                    Some(filter) if text.contains(&format!("({})", filter)) => service = text,
                    Some(_) => {}
                }
            }

            // 取得RSS連結
            let mut feed_path = String::new();
            for anchor in row.select(&anchor_selector) {
                feed_path = anchor.value().attr("href").unwrap_or_default().to_string();
            }

            if service.is_empty() || feed_path.is_empty() {
                continue;
            }

            records.push(FeedRecord { service, feed_path });
        }

        tracing::debug!("Extracted {} record(s) from services table", records.len());
        records
    }
}

// Selectors are static and known-valid.
fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a page with seven chrome tbodies followed by the services
    /// table containing the given rows.
    fn page_with_rows(rows: &str) -> String {
        let mut html = String::from("<html><body>");
        for _ in 0..7 {
            html.push_str("<table><tbody><tr><td>chrome</td></tr></tbody></table>");
        }
        html.push_str("<table><tbody>");
        html.push_str(rows);
        html.push_str("</tbody></table></body></html>");
        html
    }

    fn service_row(name: &str, href: &str) -> String {
        format!(
            r#"<tr><td class="bb top pad8">{}</td><td><a href="{}">RSS</a></td></tr>"#,
            name, href
        )
    }

    #[test]
    fn test_extracts_single_row_without_filter() {
        let html = page_with_rows(&service_row("EC2 (N. Virginia)", "/rss/ec2-us-east-1.rss"));
        let page = StatusPage::parse(&html);

        let records = page.extract_records(None);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].service, "EC2 (N. Virginia)");
        assert_eq!(records[0].feed_path, "/rss/ec2-us-east-1.rss");
    }

    #[test]
    fn test_filter_keeps_only_matching_country() {
        let rows = format!(
            "{}{}",
            service_row("EC2 (N. Virginia)", "/rss/ec2-us-east-1.rss"),
            service_row("EC2 (Tokyo)", "/rss/ec2-ap-northeast-1.rss"),
        );
        let page = StatusPage::parse(&page_with_rows(&rows));

        let records = page.extract_records(Some("Tokyo"));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].service, "EC2 (Tokyo)");
    }

    #[test]
    fn test_filter_matches_literal_parenthesised_substring() {
        // "Virginia" only appears as "N. Virginia", so "(Virginia)" must not match
        let html = page_with_rows(&service_row("EC2 (N. Virginia)", "/rss/ec2.rss"));
        let page = StatusPage::parse(&html);

        assert!(page.extract_records(Some("Virginia")).is_empty());
        assert_eq!(page.extract_records(Some("N. Virginia")).len(), 1);
    }

    #[test]
    fn test_row_with_empty_href_is_discarded() {
        let html = page_with_rows(
            r#"<tr><td class="bb top pad8">EC2 (Tokyo)</td><td><a href="">RSS</a></td></tr>"#,
        );
        let page = StatusPage::parse(&html);

        assert!(page.extract_records(None).is_empty());
    }

    #[test]
    fn test_row_without_service_cell_is_discarded() {
        let html = page_with_rows(r#"<tr><td><a href="/rss/x.rss">RSS</a></td></tr>"#);
        let page = StatusPage::parse(&html);

        assert!(page.extract_records(None).is_empty());
    }

    #[test]
    fn test_missing_services_table_yields_no_records() {
        // Only two tbodies on the whole page
        let html = "<html><body>\
            <table><tbody><tr><td>a</td></tr></tbody></table>\
            <table><tbody><tr><td>b</td></tr></tbody></table>\
            </body></html>";
        let page = StatusPage::parse(html);

        assert!(page.extract_records(None).is_empty());
    }

    #[test]
    fn test_last_anchor_wins() {
        let html = page_with_rows(
            r#"<tr><td class="bb top pad8">EC2 (Tokyo)</td>
               <td><a href="/details">details</a><a href="/rss/ec2.rss">RSS</a></td></tr>"#,
        );
        let page = StatusPage::parse(&html);

        let records = page.extract_records(None);
        assert_eq!(records[0].feed_path, "/rss/ec2.rss");
    }

    #[test]
    fn test_last_matching_cell_wins() {
        let html = page_with_rows(
            r#"<tr><td class="bb top pad8">First</td><td class="bb top pad8">Second</td>
               <td><a href="/rss/x.rss">RSS</a></td></tr>"#,
        );
        let page = StatusPage::parse(&html);

        let records = page.extract_records(None);
        assert_eq!(records[0].service, "Second");
    }

    #[test]
    fn test_records_keep_document_order() {
        let rows = format!(
            "{}{}{}",
            service_row("A (Tokyo)", "/rss/a.rss"),
            service_row("B (Tokyo)", "/rss/b.rss"),
            service_row("C (Tokyo)", "/rss/c.rss"),
        );
        let page = StatusPage::parse(&page_with_rows(&rows));

        let services: Vec<String> = page
            .extract_records(None)
            .into_iter()
            .map(|r| r.service)
            .collect();
        assert_eq!(services, vec!["A (Tokyo)", "B (Tokyo)", "C (Tokyo)"]);
    }

    #[test]
    fn test_whitespace_only_service_text_is_discarded() {
        let html = page_with_rows(
            r#"<tr><td class="bb top pad8">   </td><td><a href="/rss/x.rss">RSS</a></td></tr>"#,
        );
        let page = StatusPage::parse(&html);

        assert!(page.extract_records(None).is_empty());
    }

    #[test]
    fn test_all_records_have_non_empty_fields() {
        let rows = format!(
            "{}{}{}",
            service_row("EC2 (Tokyo)", "/rss/ec2.rss"),
            r#"<tr><td class="bb top pad8">S3 (Tokyo)</td></tr>"#,
            service_row("", "/rss/empty.rss"),
        );
        let page = StatusPage::parse(&page_with_rows(&rows));

        let records = page.extract_records(None);
        assert_eq!(records.len(), 1);
        for record in &records {
            assert!(!record.service.is_empty());
            assert!(!record.feed_path.is_empty());
        }
    }
}
