use crate::record::ObjectBounds;

/// Absolute per-axis extents of a bounding box
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundsSize {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BoundsSize {
    const TIERS: [(i32, u8); 3] = [(768, 3), (512, 2), (256, 1)];

    pub fn from_bounds(bounds: &ObjectBounds) -> Self {
        let (a, b) = (bounds.first, bounds.second);
        Self {
            x: b.x.saturating_sub(a.x).saturating_abs(),
            y: b.y.saturating_sub(a.y).saturating_abs(),
            z: b.z.saturating_sub(a.z).saturating_abs(),
        }
    }

    /// Tier from the horizontal extents only
    pub fn horizontal_tier(&self) -> u8 {
        Self::tier([self.x, self.y])
    }

    /// Tier from all three extents
    pub fn uniform_tier(&self) -> u8 {
        Self::tier([self.x, self.y, self.z])
    }

    fn tier<const N: usize>(extents: [i32; N]) -> u8 {
        Self::TIERS
            .iter()
            .find(|(threshold, _)| extents.iter().any(|e| e >= threshold))
            .map_or(0, |&(_, tier)| tier)
    }
}
