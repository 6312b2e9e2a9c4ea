// Shot zone catalog: the six scoring zones and their point values.

/// One of the six shot-location zones tracked by the stats provider.
///
/// The declaration order is the catalog order: every per-zone section of a
/// report iterates zones in this order so output field ordering is stable
/// across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    RestrictedArea,
    PaintNonRa,
    MidRange,
    LeftCorner3,
    RightCorner3,
    AboveBreak3,
}

impl Zone {
    /// All six zones in catalog order.
    pub const ALL: [Zone; 6] = [
        Zone::RestrictedArea,
        Zone::PaintNonRa,
        Zone::MidRange,
        Zone::LeftCorner3,
        Zone::RightCorner3,
        Zone::AboveBreak3,
    ];

    /// Short code used in report keys and internal column names.
    pub fn code(self) -> &'static str {
        match self {
            Zone::RestrictedArea => "RA",
            Zone::PaintNonRa => "NRA",
            Zone::MidRange => "MR",
            Zone::LeftCorner3 => "LC3",
            Zone::RightCorner3 => "RC3",
            Zone::AboveBreak3 => "AB3",
        }
    }

    /// Point value of a made shot from this zone.
    pub fn points(self) -> u32 {
        match self {
            Zone::RestrictedArea | Zone::PaintNonRa | Zone::MidRange => 2,
            Zone::LeftCorner3 | Zone::RightCorner3 | Zone::AboveBreak3 => 3,
        }
    }

    /// Index of this zone within [`Zone::ALL`]; used for per-zone arrays.
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn six_zones_with_unique_codes() {
        let codes: HashSet<&str> = Zone::ALL.iter().map(|z| z.code()).collect();
        assert_eq!(codes.len(), 6);
    }

    #[test]
    fn three_two_point_and_three_three_point_zones() {
        let twos = Zone::ALL.iter().filter(|z| z.points() == 2).count();
        let threes = Zone::ALL.iter().filter(|z| z.points() == 3).count();
        assert_eq!(twos, 3);
        assert_eq!(threes, 3);
        for z in Zone::ALL {
            assert!(z.points() == 2 || z.points() == 3);
        }
    }

    #[test]
    fn catalog_order_matches_indices() {
        for (i, z) in Zone::ALL.iter().enumerate() {
            assert_eq!(z.index(), i);
        }
        assert_eq!(Zone::ALL[0].code(), "RA");
        assert_eq!(Zone::ALL[5].code(), "AB3");
    }
}
