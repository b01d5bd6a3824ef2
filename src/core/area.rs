//! Achsenparalleles Integer-Rechteck auf dem Tile-Raster.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Unveränderliches Rechteck in Map-Zellen.
///
/// Breite und Höhe sollten nicht negativ sein, werden aber nicht erzwungen.
/// Alle Grenzen sind halboffen: `min_x` gehört zum Rechteck, `max_x` nicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Area {
    /// Linke Kante (absolute Map-Zelle)
    pub x: i32,
    /// Untere Kante (absolute Map-Zelle)
    pub y: i32,
    /// Breite in Zellen
    pub width: i32,
    /// Höhe in Zellen
    pub height: i32,
}

impl Area {
    /// Erstellt ein neues Rechteck.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rechteck der Größe 1×1 an einer Zelle.
    pub const fn cell(x: i32, y: i32) -> Self {
        Self::new(x, y, 1, 1)
    }

    /// Erste Spalte (inklusive).
    pub fn min_x(&self) -> i32 {
        self.x
    }

    /// Erste Spalte rechts außerhalb (exklusive).
    pub fn max_x(&self) -> i32 {
        self.x + self.width
    }

    /// Erste Zeile (inklusive).
    pub fn min_y(&self) -> i32 {
        self.y
    }

    /// Erste Zeile oberhalb außerhalb (exklusive).
    pub fn max_y(&self) -> i32 {
        self.y + self.height
    }

    /// Anzahl der Zellen (0 bei degenerierten Rechtecken).
    pub fn cell_count(&self) -> usize {
        if self.width <= 0 || self.height <= 0 {
            return 0;
        }
        self.width as usize * self.height as usize
    }

    /// Prüft ob eine absolute Zelle im Rechteck liegt.
    pub fn contains(&self, point: IVec2) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    /// Prüft ob `other` vollständig (absolut) in diesem Rechteck liegt.
    pub fn contains_area(&self, other: &Area) -> bool {
        other.min_x() >= self.min_x()
            && other.max_x() <= self.max_x()
            && other.min_y() >= self.min_y()
            && other.max_y() <= self.max_y()
    }

    /// Echte Überlappung; gemeinsame Kanten zählen nicht.
    pub fn intersects(&self, other: &Area) -> bool {
        self.intersection(other).is_some()
    }

    /// Größtes gemeinsames Teilrechteck oder `None`, wenn sich die Rechtecke
    /// höchstens an einer Kante berühren.
    pub fn intersection(&self, other: &Area) -> Option<Area> {
        let overlaps_x = self.min_x() < other.max_x() && other.min_x() < self.max_x();
        let overlaps_y = self.min_y() < other.max_y() && other.min_y() < self.max_y();
        if !overlaps_x || !overlaps_y {
            return None;
        }

        let x = self.min_x().max(other.min_x());
        let y = self.min_y().max(other.min_y());
        Some(Area::new(
            x,
            y,
            self.max_x().min(other.max_x()) - x,
            self.max_y().min(other.max_y()) - y,
        ))
    }

    /// Kleinstes Rechteck, das beide Rechtecke umschließt.
    pub fn bounding_union(&self, other: &Area) -> Area {
        let x = self.min_x().min(other.min_x());
        let y = self.min_y().min(other.min_y());
        Area::new(
            x,
            y,
            self.max_x().max(other.max_x()) - x,
            self.max_y().max(other.max_y()) - y,
        )
    }

    /// Verschobene Kopie im lokalen Koordinatensystem von `origin`.
    pub fn relative(&self, origin: &Area) -> Area {
        Area::new(self.x - origin.x, self.y - origin.y, self.width, self.height)
    }

    /// Absolute Map-Zelle → lokale Zelle dieses Rechtecks.
    pub fn to_local(&self, absolute: IVec2) -> IVec2 {
        absolute - self.origin()
    }

    /// Lokale Zelle → absolute Map-Zelle.
    pub fn to_absolute(&self, local: IVec2) -> IVec2 {
        local + self.origin()
    }

    /// Zeilenweiser Index einer lokalen Zelle (`y * width + x`).
    pub fn local_index(&self, local: IVec2) -> Option<usize> {
        if local.x < 0 || local.y < 0 || local.x >= self.width || local.y >= self.height {
            return None;
        }
        Some(local.y as usize * self.width as usize + local.x as usize)
    }

    /// Untere linke Ecke als Zelle `(x, y)`.
    pub fn origin(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Iteriert alle absoluten Zellen zeilenweise.
    pub fn cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        let (width, height) = (self.width.max(0), self.height.max(0));
        (0..height).flat_map(move |ly| (0..width).map(move |lx| self.to_absolute(IVec2::new(lx, ly))))
    }
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}×{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Area::new(0, 0, 2, 2);
        let b = Area::new(2, 0, 2, 2);
        let c = Area::new(0, 2, 2, 2);

        assert!(!a.intersects(&b));
        assert!(!a.intersects(&c));
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn test_intersection_is_common_sub_rectangle() {
        let a = Area::new(0, 0, 4, 4);
        let b = Area::new(2, 1, 5, 2);

        assert_eq!(a.intersection(&b), Some(Area::new(2, 1, 2, 2)));
        assert_eq!(b.intersection(&a), Some(Area::new(2, 1, 2, 2)));
    }

    #[test]
    fn test_contains_area_is_absolute() {
        let outer = Area::new(-2, -2, 6, 6);

        assert!(outer.contains_area(&Area::new(0, 0, 4, 4)));
        assert!(outer.contains_area(&outer));
        assert!(!outer.contains_area(&Area::new(0, 0, 5, 1)));
    }

    #[test]
    fn test_contains_point_is_half_open() {
        let area = Area::new(1, 1, 2, 2);

        assert!(area.contains(IVec2::new(1, 1)));
        assert!(area.contains(IVec2::new(2, 2)));
        assert!(!area.contains(IVec2::new(3, 1)));
        assert!(!area.contains(IVec2::new(1, 0)));
    }

    #[test]
    fn test_relative_and_local_conversion() {
        let region = Area::new(10, 20, 4, 3);
        let sub = Area::new(12, 21, 1, 1);

        assert_eq!(sub.relative(&region), Area::new(2, 1, 1, 1));
        assert_eq!(region.to_local(IVec2::new(13, 22)), IVec2::new(3, 2));
        assert_eq!(region.to_absolute(IVec2::new(3, 2)), IVec2::new(13, 22));
        assert_eq!(region.local_index(IVec2::new(3, 2)), Some(11));
        assert_eq!(region.local_index(IVec2::new(4, 0)), None);
    }

    #[test]
    fn test_cells_iterates_row_major() {
        let cells: Vec<IVec2> = Area::new(5, 7, 2, 2).cells().collect();
        assert_eq!(
            cells,
            vec![
                IVec2::new(5, 7),
                IVec2::new(6, 7),
                IVec2::new(5, 8),
                IVec2::new(6, 8)
            ]
        );
        assert_eq!(Area::new(0, 0, -1, 3).cell_count(), 0);
    }
}
