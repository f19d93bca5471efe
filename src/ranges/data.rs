use crate::ranges::PresetRange;

const fn preset(
    from: &'static str,
    to: &'static str,
    display: &'static str,
    section: u32,
) -> PresetRange {
    PresetRange {
        from,
        to,
        display,
        section,
    }
}

/// The quick ranges offered by the time picker, in display order.
///
/// Sections: 0 current periods, 1 previous periods, 2 recent minutes and
/// hours, 3 longer lookbacks, 4 fixed calendar years.
static QUICK_RANGES: [PresetRange; 34] = [
    preset("now/d", "now/d", "Today", 0),
    preset("now/w", "now/w", "This week", 0),
    preset("now/M", "now/M", "This month", 0),
    preset("now/y", "now/y", "This year", 0),
    preset("now/d", "now", "The day so far", 0),
    preset("now/w", "now", "Week to date", 0),
    preset("now/M", "now", "Month to date", 0),
    preset("now/y", "now", "Year to date", 0),
    preset("now-1d/d", "now-1d/d", "Yesterday", 1),
    preset("now-2d/d", "now-2d/d", "Day before yesterday", 1),
    preset("now-7d/d", "now-7d/d", "This day last week", 1),
    preset("now-1w/w", "now-1w/w", "Previous week", 1),
    preset("now-1M/M", "now-1M/M", "Previous month", 1),
    preset("now-1y/y", "now-1y/y", "Previous year", 1),
    preset("now-15m", "now", "Last 15 minutes", 2),
    preset("now-30m", "now", "Last 30 minutes", 2),
    preset("now-1h", "now", "Last 1 hour", 2),
    preset("now-4h", "now", "Last 4 hours", 2),
    preset("now-12h", "now", "Last 12 hours", 2),
    preset("now-24h", "now", "Last 24 hours", 2),
    preset("now-7d", "now", "Last 7 days", 2),
    preset("now-30d", "now", "Last 30 days", 3),
    preset("now-60d", "now", "Last 60 days", 3),
    preset("now-90d", "now", "Last 90 days", 3),
    preset("now-6M", "now", "Last 6 months", 3),
    preset("now-1y", "now", "Last 1 year", 3),
    preset("now-2y", "now", "Last 2 years", 3),
    preset("now-5y", "now", "Last 5 years", 3),
    preset("2011-01-01", "2011-12-31", "2011", 4),
    preset("2012-01-01", "2012-12-31", "2012", 4),
    preset("2013-01-01", "2013-12-31", "2013", 4),
    preset("2014-01-01", "2014-12-31", "2014", 4),
    preset("2015-01-01", "2015-12-31", "2015", 4),
    preset("2016-01-01", "2016-12-31", "2016", 4),
];

/// Returns the full preset table in definition order.
pub fn quick_ranges() -> &'static [PresetRange] {
    &QUICK_RANGES
}

/// Heading shown above a section in the picker. Unknown section indices get
/// a fallback group rather than an error.
pub fn section_title(section: u32) -> &'static str {
    match section {
        0 => "Current periods",
        1 => "Previous periods",
        2 => "Recently",
        3 => "Long term",
        4 => "Calendar years",
        _ => "Other",
    }
}

/// Whether a bound is date-math shorthand for the external evaluator, as
/// opposed to a literal calendar date. The grammar itself is opaque here;
/// this only recognizes the anchor ("now", optionally followed by rounding
/// or offset operators).
pub fn is_date_math(bound: &str) -> bool {
    match bound.strip_prefix("now") {
        Some(rest) => rest.is_empty() || rest.starts_with(['/', '-', '+']),
        None => false,
    }
}
