//! Line codec for the student data file.
//!
//! One record per line, fields `id,name,age,course,grades` joined by commas.
//! Values are written as-is: a comma or newline inside a field corrupts the
//! line on reload.

use roster_core::StudentRecord;

/// Field delimiter within a line.
pub const FIELD_SEPARATOR: char = ',';

/// Number of fields in an encoded record.
pub const FIELD_COUNT: usize = 5;

/// Encodes a record as one line, without the trailing newline.
pub fn encode_line(record: &StudentRecord) -> String {
    format!(
        "{}{sep}{}{sep}{}{sep}{}{sep}{}",
        record.id(),
        record.name(),
        record.age(),
        record.course(),
        record.grades(),
        sep = FIELD_SEPARATOR
    )
}

/// Decodes one line into a record.
///
/// Empty tokens are skipped, so consecutive commas count as one. The first
/// five tokens are used and anything after the fifth is ignored. Returns
/// None when fewer than five tokens remain.
pub fn decode_line(line: &str) -> Option<StudentRecord> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    let mut tokens = line.split(FIELD_SEPARATOR).filter(|t| !t.is_empty());
    let id = tokens.next()?;
    let name = tokens.next()?;
    let age = parse_age(tokens.next()?);
    let course = tokens.next()?;
    let grades = tokens.next()?;

    StudentRecord::new(id, name, age, course, grades).ok()
}

/// Parses a leading decimal integer, ignoring trailing garbage.
///
/// Leading whitespace and one sign are accepted. A token without leading
/// digits parses as 0. Values outside `i32` saturate.
pub fn parse_age(token: &str) -> i32 {
    let trimmed = token.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let limit = i64::from(i32::MAX) + 1;
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| (acc * 10 + i64::from(b - b'0')).min(limit));

    let value = if negative { -magnitude } else { magnitude };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
