use chrono_tz::Tz;

use crate::Record;

/// Concatenate per-instant record batches and sort by each record's own
/// `monitordate`.
///
/// - Batches are appended in iteration order; nothing is de-duplicated.
/// - Timestamps compare as absolute moments: an RFC 3339 offset is honoured,
///   offset-free layouts are wall-clock time in `tz`.
/// - The sort is stable, so records sharing a moment keep their relative
///   input order.
/// - Records with a missing or unparsable timestamp sort after every dated
///   record.
pub fn merge_records<I>(batches: I, tz: Tz) -> Vec<Record>
where
    I: IntoIterator<Item = Vec<Record>>,
{
    let mut out: Vec<Record> = batches.into_iter().flatten().collect();
    sort_by_monitor_date(&mut out, tz);
    out
}

/// Stable sort ascending by parsed `monitordate`, undated records last.
pub fn sort_by_monitor_date(records: &mut [Record], tz: Tz) {
    records.sort_by_cached_key(|r| {
        let at = r.monitor_time_in(tz);
        (at.is_none(), at)
    });
}
