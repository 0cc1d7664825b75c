use crate::error::SearchError;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use photo_core::{Photo, PhotoResultSet};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// Length of the `yyyy-MM-dd'T'HH:mm:ss` part of `created_at`.
const LOCAL_PART_LEN: usize = 19;

#[derive(Debug, Deserialize)]
struct PhotoRecord {
    image_url: String,
    name: String,
    created_at: String,
}

/// 500px の検索レスポンスを `Photo` の列に変換する
///
/// The envelope must be a JSON object with a `photos` array of objects,
/// otherwise the whole response is rejected. Each object is decoded on its own
/// and any object that does not decode is left out.
pub fn parse_search_results(body: &[u8]) -> Result<PhotoResultSet, SearchError> {
    let document: Value = serde_json::from_slice(body).map_err(|_| SearchError::Parse)?;
    let elements = document
        .get("photos")
        .and_then(Value::as_array)
        .ok_or(SearchError::Parse)?;

    if !elements.iter().all(Value::is_object) {
        return Err(SearchError::Parse);
    }

    let photos: PhotoResultSet = elements.iter().filter_map(decode_photo).collect();

    let dropped = elements.len() - photos.len();
    if dropped > 0 {
        tracing::trace!("Dropped {} of {} photo records", dropped, elements.len());
    }

    Ok(photos)
}

fn decode_photo(element: &Value) -> Option<Photo> {
    let record = PhotoRecord::deserialize(element).ok()?;
    let captured_at = parse_created_at(&record.created_at)?;
    // Relative references are dropped: there is no base to fetch them from
    let image_url = Url::parse(&record.image_url).ok()?;

    Some(Photo {
        title: record.name,
        image_url,
        captured_at,
    })
}

/// `yyyy-MM-dd'T'HH:mm:ssZZZZZ` 形式の日時をパースする
///
/// The offset may be `Z`, `+HH:MM` or `+HHMM`. Fractional seconds, whitespace
/// and a missing offset are rejected.
pub fn parse_created_at(s: &str) -> Option<DateTime<Utc>> {
    if !s.is_char_boundary(LOCAL_PART_LEN) {
        return None;
    }
    let (local, offset) = s.split_at(LOCAL_PART_LEN);

    // chrono's %Y also takes signs and short years, so pin the layout first
    let layout_ok = local.bytes().enumerate().all(|(i, b)| match i {
        4 | 7 => b == b'-',
        10 => b == b'T',
        13 | 16 => b == b':',
        _ => b.is_ascii_digit(),
    });
    if !layout_ok {
        return None;
    }
    let naive = NaiveDateTime::parse_from_str(local, "%Y-%m-%dT%H:%M:%S").ok()?;
    let offset = parse_offset(offset)?;

    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_offset(s: &str) -> Option<FixedOffset> {
    if s == "Z" {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = if let Some(rest) = s.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = s.strip_prefix('-') {
        (-1, rest)
    } else {
        return None;
    };

    let digits = match rest.len() {
        5 if rest.as_bytes()[2] == b':' => format!("{}{}", &rest[..2], &rest[3..]),
        4 => rest.to_string(),
        _ => return None,
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    if minutes >= 60 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
