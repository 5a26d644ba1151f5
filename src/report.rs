use std::fs::File;
use std::io::Write;

use anyhow::Result;

use crate::models::ProductRecord;

const STYLE: &str = "\
body { font-family: Arial, sans-serif; font-size: 20px; line-height: 1.6; margin: 20px; }
h1 { font-size: 32px; margin-bottom: 20px; font-weight: 600; }
table { width: 100%; border-collapse: collapse; margin-top: 20px; }
th, td { padding: 12px; text-align: left; vertical-align: top; }
th { background-color: #f2f2f2; font-size: 24px; font-weight: 600; }
td { font-size: 20px; word-wrap: break-word; max-width: 300px; overflow-wrap: break-word; white-space: normal; }
img { max-width: 220px; height: auto; }
a { color: #0073bb; text-decoration: none; }
a:hover { text-decoration: underline; }
";

/// Renders the final record set as a standalone HTML document. Field values
/// are escaped here; upstream hands over display-ready strings.
pub fn render(records: &[ProductRecord], query: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str(&format!("<title>Amazon Search Results - {}</title>\n", escape(query)));
    html.push_str("<style>\n");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str(&format!("<h1>Amazon Search Results - {}</h1>\n", escape(query)));
    html.push_str("<table border=\"1\" cellpadding=\"10\">\n");
    html.push_str("<tr><th>Image</th><th>Product Name</th><th>Rating</th><th>Reviews</th><th>Price</th></tr>\n");

    for record in records {
        html.push_str("<tr>\n");
        html.push_str(&format!(
            "<td><img src=\"{}\" alt=\"Product Image\"></td>\n",
            escape(&record.image_url)
        ));
        html.push_str(&format!(
            "<td><a href=\"{}\" target=\"_blank\">{}</a></td>\n",
            escape(&record.link),
            escape(&record.name)
        ));
        html.push_str(&format!("<td>{} stars</td>\n", record.rating));
        html.push_str(&format!("<td>{} reviews</td>\n", record.review_count));
        html.push_str(&format!("<td>{}</td>\n", escape(&record.price)));
        html.push_str("</tr>\n");
    }

    html.push_str("</table>\n</body>\n</html>\n");
    html
}

pub fn save_report(records: &[ProductRecord], query: &str, filename: &str) -> Result<()> {
    let html = render(records, query);
    let mut file = File::create(filename)?;
    file.write_all(html.as_bytes())?;
    Ok(())
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
