use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::models::ProductRecord;
use crate::selectors;

const CURRENCY_SYMBOL: &str = "£";

/// Extracts candidate records from one search-result page, in document order.
///
/// Entries missing a required sub-field or rated below `min_rating` are
/// reported through `sink` and skipped; neither fails the page. A rating
/// phrase whose first token is not numeric skips only that entry.
pub fn extract_products(
    html: &str,
    base_url: &str,
    min_rating: f64,
    sink: &mut dyn DiagnosticSink,
) -> Vec<ProductRecord> {
    let doc = Html::parse_document(html);
    let mut records = Vec::new();

    for item in doc.select(&selectors::RESULT) {
        let name = select_text(item, &selectors::NAME);
        let rating_text = select_text(item, &selectors::RATING);
        let reviews_text = select_text(item, &selectors::REVIEWS);
        let price_text = select_text(item, &selectors::PRICE);
        let image_url = select_attr(item, &selectors::IMAGE, "src");
        let href = select_attr(item, &selectors::LINK, "href");

        let (name, rating_text, reviews_text, price_text, image_url, href) =
            match (name, rating_text, reviews_text, price_text, image_url, href) {
                (Some(n), Some(r), Some(v), Some(p), Some(i), Some(h)) => (n, r, v, p, i, h),
                (name, ..) => {
                    sink.report(Diagnostic::MissingData {
                        name: name.unwrap_or_else(|| "<unnamed product>".to_string()),
                    });
                    continue;
                }
            };

        let rating = match parse_rating(&rating_text) {
            Some(rating) => rating,
            None => {
                sink.report(Diagnostic::RatingMalformed { name, text: rating_text });
                continue;
            }
        };

        if rating < min_rating {
            sink.report(Diagnostic::BelowMinRating { name, rating });
            continue;
        }

        records.push(ProductRecord {
            link: join_link(base_url, &href),
            name,
            rating,
            review_count: parse_review_count(&reviews_text),
            price: format_price(parse_price(&price_text)),
            image_url,
        });
    }

    debug!("extracted {} candidate records", records.len());
    records
}

fn select_text(item: ElementRef, selector: &Selector) -> Option<String> {
    item.select(selector)
        .next()
        .map(|e| e.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

fn select_attr(item: ElementRef, selector: &Selector, attr: &str) -> Option<String> {
    item.select(selector)
        .next()
        .and_then(|e| e.value().attr(attr))
        .map(str::to_string)
}

/// First whitespace-delimited token of the rating phrase, as a float.
/// "4.5 out of 5 stars" -> 4.5.
fn parse_rating(text: &str) -> Option<f64> {
    text.split_whitespace().next()?.parse().ok()
}

/// Total: "1,234" -> 1234; anything not purely numeric after stripping
/// thousands separators -> 0.
pub fn parse_review_count(text: &str) -> u64 {
    let cleaned = text.trim().replace(',', "");
    if !cleaned.is_empty() && cleaned.chars().all(|c| c.is_ascii_digit()) {
        cleaned.parse().unwrap_or(0)
    } else {
        0
    }
}

/// Total: strips the currency symbol and thousands separators, defaults to
/// 0.0 when the remainder is not a float.
pub fn parse_price(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Two decimal places with trailing zeros and a trailing point stripped:
/// 10.00 -> "£10", 10.50 -> "£10.5", 10.55 -> "£10.55".
pub fn format_price(value: f64) -> String {
    let mut formatted = format!("{:.2}", value);
    while formatted.ends_with('0') {
        formatted.pop();
    }
    if formatted.ends_with('.') {
        formatted.pop();
    }
    format!("{}{}", CURRENCY_SYMBOL, formatted)
}

fn join_link(base_url: &str, href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{}{}", base_url.trim_end_matches('/'), href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.amazon.co.uk";

    fn card(id: &str, rating: &str, reviews: &str, price: &str) -> String {
        format!(
            r#"<div data-component-type="s-search-result">
                <img class="s-image" src="https://img.example.com/{id}.jpg">
                <h2><a href="/dp/{id}"><span>Product {id}</span></a></h2>
                <span class="a-icon-alt">{rating}</span>
                <span class="a-size-base">{reviews}</span>
                <span class="a-offscreen">{price}</span>
            </div>"#
        )
    }

    fn page(cards: &[String]) -> String {
        format!("<html><body>{}</body></html>", cards.join("\n"))
    }

    #[test]
    fn extracts_fields_in_document_order() {
        let html = page(&[
            card("A1", "4.5 out of 5 stars", "1,234", "£10.55"),
            card("A2", "4.8 out of 5 stars", "89", "£99.99"),
        ]);
        let mut diags = Vec::new();
        let records = extract_products(&html, BASE, 4.3, &mut diags);

        assert_eq!(records.len(), 2);
        assert!(diags.is_empty());

        assert_eq!(records[0].name, "Product A1");
        assert_eq!(records[0].link, "https://www.amazon.co.uk/dp/A1");
        assert_eq!(records[0].rating, 4.5);
        assert_eq!(records[0].review_count, 1234);
        assert_eq!(records[0].price, "£10.55");
        assert_eq!(records[0].image_url, "https://img.example.com/A1.jpg");
        assert_eq!(records[1].name, "Product A2");
    }

    #[test]
    fn missing_field_skips_entry_with_diagnostic() {
        let broken = r#"<div data-component-type="s-search-result">
            <img class="s-image" src="https://img.example.com/x.jpg">
            <h2><a href="/dp/X1"><span>Broken Product</span></a></h2>
            <span class="a-icon-alt">4.6 out of 5 stars</span>
            <span class="a-size-base">12</span>
        </div>"#;
        let html = page(&[broken.to_string(), card("A1", "4.5 out of 5 stars", "7", "£5.00")]);
        let mut diags = Vec::new();
        let records = extract_products(&html, BASE, 4.3, &mut diags);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Product A1");
        assert_eq!(
            diags,
            vec![Diagnostic::MissingData { name: "Broken Product".to_string() }]
        );
    }

    #[test]
    fn missing_name_reports_placeholder() {
        let broken = r#"<div data-component-type="s-search-result">
            <span class="a-icon-alt">4.6 out of 5 stars</span>
        </div>"#;
        let html = page(&[broken.to_string()]);
        let mut diags = Vec::new();
        let records = extract_products(&html, BASE, 4.3, &mut diags);

        assert!(records.is_empty());
        assert_eq!(
            diags,
            vec![Diagnostic::MissingData { name: "<unnamed product>".to_string() }]
        );
    }

    #[test]
    fn malformed_rating_skips_only_that_entry() {
        let html = page(&[
            card("A1", "four-ish stars", "10", "£5.00"),
            card("A2", "4.7 out of 5 stars", "10", "£5.00"),
        ]);
        let mut diags = Vec::new();
        let records = extract_products(&html, BASE, 4.3, &mut diags);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Product A2");
        assert_eq!(
            diags,
            vec![Diagnostic::RatingMalformed {
                name: "Product A1".to_string(),
                text: "four-ish stars".to_string(),
            }]
        );
    }

    #[test]
    fn below_min_rating_is_filtered() {
        let html = page(&[
            card("A1", "3.9 out of 5 stars", "5000", "£5.00"),
            card("A2", "4.3 out of 5 stars", "10", "£5.00"),
        ]);
        let mut diags = Vec::new();
        let records = extract_products(&html, BASE, 4.3, &mut diags);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Product A2");
        assert_eq!(
            diags,
            vec![Diagnostic::BelowMinRating { name: "Product A1".to_string(), rating: 3.9 }]
        );
    }

    #[test]
    fn every_record_meets_min_rating() {
        let html = page(&[
            card("A1", "1.0 out of 5 stars", "1", "£1"),
            card("A2", "4.3 out of 5 stars", "2", "£2"),
            card("A3", "5.0 out of 5 stars", "3", "£3"),
        ]);
        let records = extract_products(&html, BASE, 4.3, &mut Vec::<Diagnostic>::new());
        assert!(records.iter().all(|r| r.rating >= 4.3));
    }

    #[test]
    fn absolute_href_is_kept_as_is() {
        let entry = r#"<div data-component-type="s-search-result">
            <img class="s-image" src="https://img.example.com/a.jpg">
            <h2><a href="https://www.amazon.co.uk/dp/ABS"><span>Abs Product</span></a></h2>
            <span class="a-icon-alt">4.5 out of 5 stars</span>
            <span class="a-size-base">3</span>
            <span class="a-offscreen">£2</span>
        </div>"#;
        let records =
            extract_products(&page(&[entry.to_string()]), BASE, 4.3, &mut Vec::<Diagnostic>::new());
        assert_eq!(records[0].link, "https://www.amazon.co.uk/dp/ABS");
    }

    #[test]
    fn empty_page_yields_no_records() {
        let mut diags = Vec::new();
        let records = extract_products("<html><body></body></html>", BASE, 4.3, &mut diags);
        assert!(records.is_empty());
        assert!(diags.is_empty());
    }

    #[test]
    fn review_count_parsing() {
        assert_eq!(parse_review_count("1,234"), 1234);
        assert_eq!(parse_review_count("89"), 89);
        assert_eq!(parse_review_count(" 321 "), 321);
        assert_eq!(parse_review_count("N/A"), 0);
        assert_eq!(parse_review_count("about 50"), 0);
        assert_eq!(parse_review_count(""), 0);
    }

    #[test]
    fn price_parsing() {
        assert_eq!(parse_price("£1,234.56"), 1234.56);
        assert_eq!(parse_price("£10.55"), 10.55);
        assert_eq!(parse_price("100"), 100.0);
        assert_eq!(parse_price("unavailable"), 0.0);
        assert_eq!(parse_price(""), 0.0);
    }

    #[test]
    fn price_formatting() {
        assert_eq!(format_price(10.00), "£10");
        assert_eq!(format_price(10.50), "£10.5");
        assert_eq!(format_price(10.55), "£10.55");
        assert_eq!(format_price(0.0), "£0");
        assert_eq!(format_price(1234.56), "£1234.56");
    }
}
