use crate::domain::model::{FeedRecord, OpmlDocument};

/// Feed paths on the status page are host-relative.
const STATUS_HOST: &str = "http://status.aws.amazon.com";
const HTML_URL: &str = "http://status.aws.amazon.com/";

const OPML_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<opml version="1.0">
	<head>
	<title>AWS Service Status(Asia Pacific)</title>
	</head>
	<body>
		$body
	</body>
</opml>
"#;

/// Renders the records into a complete OPML 1.0 document. Zero records is
/// valid and produces an envelope with an empty body section.
pub fn render_document(records: &[FeedRecord]) -> OpmlDocument {
    let outlines: Vec<String> = records.iter().map(render_outline).collect();
    let xml = OPML_TEMPLATE.replace("$body", &outlines.join("\n"));

    OpmlDocument {
        xml,
        outline_count: records.len(),
    }
}

fn render_outline(record: &FeedRecord) -> String {
    let title = escape_attr(&record.service);
    let xml_url = escape_attr(&format!("{}{}", STATUS_HOST, record.feed_path));

    format!(
        r#"<outline type="rss" text="{title}" title="{title}" xmlUrl="{xml_url}" htmlUrl="{HTML_URL}" />"#
    )
}

/// Escapes XML attribute-value metacharacters so service names like
/// "S3 <EU>" cannot produce malformed output.
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
