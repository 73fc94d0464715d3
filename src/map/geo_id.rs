/// Number of trailing `GEO_ID` characters that make up a county FIPS code.
pub const FIPS_LEN: usize = 5;

/// Derive the metrics join key from a raw Census `GEO_ID` (e.g. "0500000US06037" -> "06037").
///
/// The key is the last five characters, or the whole id when it is shorter. A missing
/// or empty id has no key. The suffix is not checked for being numeric.
pub fn fips_key(geo_id: Option<&str>) -> Option<&str> {
    let geo_id = geo_id.filter(|id| !id.is_empty())?;
    let start = geo_id.char_indices()
        .rev()
        .nth(FIPS_LEN - 1)
        .map_or(0, |(i, _)| i);
    Some(&geo_id[start..])
}
