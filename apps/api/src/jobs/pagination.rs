use serde::Serialize;

/// Fixed page size for `/alljobs`.
pub const PAGE_SIZE: u64 = 20;

/// Page number from raw query pairs. A repeated `page` reads its first value;
/// a missing one is page 1.
pub fn page_from_query(pairs: &[(String, String)]) -> u32 {
    pairs
        .iter()
        .find(|(key, _)| key == "page")
        .map_or(1, |(_, value)| parse_page(value))
}

/// Reads a 1-based page number leniently: leading whitespace and a sign are
/// accepted, parsing stops at the first non-digit ("2abc" is 2). Missing
/// digits, zero, negatives and overflow all yield 1.
pub fn parse_page(raw: &str) -> u32 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    match rest[..digits_end].parse::<u32>() {
        Ok(n) if n >= 1 && !negative => n,
        _ => 1,
    }
}

/// Row offset of the first item on `page`.
pub fn page_offset(page: u32) -> u64 {
    (u64::from(page) - 1) * PAGE_SIZE
}

pub fn total_pages(total_items: u64) -> u64 {
    total_items.div_ceil(PAGE_SIZE)
}

/// Response body of `/alljobs`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub total_items: u64,
    pub total_pages: u64,
    pub current_page: u32,
    pub data: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn new(total_items: u64, current_page: u32, data: Vec<T>) -> Self {
        Self {
            total_items,
            total_pages: total_pages(total_items),
            current_page,
            data,
        }
    }
}
