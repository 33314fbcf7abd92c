use time::{OffsetDateTime, UtcOffset};

const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

/// Formats a byte count with one decimal in the largest fitting unit.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut unit_index = 0;
    let mut divisor: u64 = 1024;
    while unit_index + 1 < UNITS.len() && bytes / divisor >= 1024 {
        divisor *= 1024;
        unit_index += 1;
    }

    let tenths = bytes.saturating_mul(10) / divisor;
    let unit = UNITS[unit_index];

    format!("{}.{} {unit}", tenths / 10, tenths % 10)
}

/// Formats a modification timestamp in the local offset, falling back to
/// UTC when the local offset is unavailable.
pub fn format_modified(modified_at: OffsetDateTime) -> String {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);

    format_timestamp(modified_at.to_offset(offset))
}

/// Formats `timestamp` as `YYYY-MM-DD HH:MM` without changing its offset.
pub fn format_timestamp(timestamp: OffsetDateTime) -> String {
    let year = timestamp.year();
    let month = u8::from(timestamp.month());
    let day = timestamp.day();
    let hour = timestamp.hour();
    let minute = timestamp.minute();

    format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}")
}
