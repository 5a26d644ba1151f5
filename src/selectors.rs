//! CSS selectors for Amazon search-result markup.
//!
//! When Amazon changes their HTML structure, this is the file to update.

use scraper::Selector;
use std::sync::LazyLock;

/// Search-result card container.
pub static RESULT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div[data-component-type='s-search-result']").unwrap());

/// Product title text inside the card heading.
pub static NAME: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2 a span").unwrap());

/// Heading link carrying the relative product href.
pub static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2 a").unwrap());

/// Rating phrase, e.g. "4.5 out of 5 stars".
pub static RATING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.a-icon-alt").unwrap());

/// Review count, e.g. "1,234".
pub static REVIEWS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.a-size-base").unwrap());

/// Displayed price, e.g. "£10.55".
pub static PRICE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.a-offscreen").unwrap());

/// Product thumbnail.
pub static IMAGE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img.s-image").unwrap());
