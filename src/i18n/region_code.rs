/// Region code helpers shared by the registry and callers.
pub struct RegionCode;

impl RegionCode {
    const UNKNOWN: &'static str = "ZZ";

    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        Self::UNKNOWN
    }

    /// Region codes are compared case-sensitively, as in the metadata files.
    pub fn is_unknown(region_code: &str) -> bool {
        region_code == Self::UNKNOWN
    }
}
