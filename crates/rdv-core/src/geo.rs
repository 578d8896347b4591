//! Planar coordinates and rectangular areas.
//!
//! Street graphs arrive already projected to a metric CRS (UTM or similar),
//! so distances here are plain Euclidean distances in metres.  Geodesic
//! maths belongs to whoever does the projection.

/// A projected position in metres.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in metres.
    #[inline]
    pub fn distance_m(self, other: PlanarPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl std::fmt::Display for PlanarPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// An axis-aligned rectangle in projected coordinates: the "hot zone" a
/// user draws on the map.
///
/// Bounds are inclusive on every side.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox {
    pub min: PlanarPoint,
    pub max: PlanarPoint,
}

impl BBox {
    /// Build a box from any two opposite corners.
    pub fn from_corners(a: PlanarPoint, b: PlanarPoint) -> Self {
        Self {
            min: PlanarPoint::new(a.x.min(b.x), a.y.min(b.y)),
            max: PlanarPoint::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Smallest box covering every point in `points`.  `None` if empty.
    pub fn enclosing(points: &[PlanarPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = BBox { min: *first, max: *first };
        for p in rest {
            bbox.min.x = bbox.min.x.min(p.x);
            bbox.min.y = bbox.min.y.min(p.y);
            bbox.max.x = bbox.max.x.max(p.x);
            bbox.max.y = bbox.max.y.max(p.y);
        }
        Some(bbox)
    }

    #[inline]
    pub fn contains(&self, p: PlanarPoint) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    #[inline]
    pub fn center(&self) -> PlanarPoint {
        PlanarPoint::new((self.min.x + self.max.x) * 0.5, (self.min.y + self.max.y) * 0.5)
    }
}
