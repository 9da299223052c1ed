use url::Url;

/// Parse a `Link` pagination header and return the page number advertised by
/// its `rel="last"` segment, if any.
///
/// A header looks like (wrapped for readability):
///
/// ```text
/// <https://api.github.com/.../commits?per_page=1&page=2>; rel="next",
/// <https://api.github.com/.../commits?per_page=1&page=34>; rel="last"
/// ```
///
/// Segments with other relations are ignored. A `last` segment whose URL is
/// malformed or carries no numeric `page` parameter is skipped rather than
/// treated as an error.
pub fn parse_link_last_page(link_header: &str) -> Option<u64> {
    link_header
        .split(',')
        .map(str::trim)
        .filter(|segment| segment.contains(r#"rel="last""#))
        .find_map(last_page_of_segment)
}

fn last_page_of_segment(segment: &str) -> Option<u64> {
    let start = segment.find('<')?;
    let end = start + segment[start..].find('>')?;
    let target = Url::parse(&segment[start + 1..end]).ok()?;

    target
        .query_pairs()
        .find(|(name, _)| name == "page")
        .and_then(|(_, value)| value.parse().ok())
}
