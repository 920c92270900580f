//! Static registry of supported Taiwanese administrative regions.
//!
//! Maps short ASCII codes (e.g. "taipei") to the canonical Chinese
//! `locationName` strings the CWA API accepts. The table is fixed at
//! compile time; all accessors are read-only.

use std::collections::HashMap;

/// Registered (code, canonical name) pairs, in registration order.
///
/// Names use the CWA's spelling (臺 rather than 台) so they can be passed
/// verbatim as the upstream `locationName` query parameter.
const LOCATIONS: &[(&str, &str)] = &[
    ("taipei", "臺北市"),
    ("newtaipei", "新北市"),
    ("taoyuan", "桃園市"),
    ("taichung", "臺中市"),
    ("tainan", "臺南市"),
    ("kaohsiung", "高雄市"),
    ("keelung", "基隆市"),
    ("hsinchu", "新竹市"),
    ("hsinchucounty", "新竹縣"),
    ("miaoli", "苗栗縣"),
    ("changhua", "彰化縣"),
    ("nantou", "南投縣"),
    ("yunlin", "雲林縣"),
    ("chiayi", "嘉義市"),
    ("chiayicounty", "嘉義縣"),
    ("pingtung", "屏東縣"),
    ("yilan", "宜蘭縣"),
    ("hualien", "花蓮縣"),
    ("taitung", "臺東縣"),
    ("penghu", "澎湖縣"),
    ("kinmen", "金門縣"),
    ("lienchiang", "連江縣"),
];

/// Resolve a location code to its canonical Chinese name.
///
/// Input is trimmed and lowercased before lookup, so `" TaiPei "` and
/// `"taipei"` resolve identically. Returns `None` for empty or unknown
/// input; the table has 22 entries, a linear scan is fine.
pub fn resolve(code: &str) -> Option<&'static str> {
    let normalized = code.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    LOCATIONS
        .iter()
        .find(|(c, _)| *c == normalized)
        .map(|(_, name)| *name)
}

/// Whether `code` resolves to a registered location.
pub fn is_known(code: &str) -> bool {
    resolve(code).is_some()
}

/// All registered codes, in registration order.
pub fn all_codes() -> Vec<&'static str> {
    LOCATIONS.iter().map(|(code, _)| *code).collect()
}

/// Owned snapshot of the full code → name table.
///
/// Callers get their own map; mutating it cannot affect the registry.
pub fn all_entries() -> HashMap<&'static str, &'static str> {
    LOCATIONS.iter().copied().collect()
}

/// (code, name) pairs in registration order, for building ordered JSON.
pub fn entries_in_order() -> &'static [(&'static str, &'static str)] {
    LOCATIONS
}
