//! Zeichenreihenfolge der Regionen.

use std::cmp::Ordering;

use super::{Area, RegionModel};

/// Vergleicht zwei Regionsflächen für die Zeichenreihenfolge.
///
/// Überlappen sich die X-Projektionen, entscheidet `min_y`; sonst bei
/// überlappenden Y-Projektionen `min_x`; sonst `min_x + min_y`.
/// Die Relation ist für beliebige Layouts nicht transitiv.
pub fn compare_draw_order(a: &Area, b: &Area) -> Ordering {
    let overlaps_x = a.min_x() < b.max_x() && b.min_x() < a.max_x();
    let overlaps_y = a.min_y() < b.max_y() && b.min_y() < a.max_y();

    if overlaps_x {
        a.min_y().cmp(&b.min_y())
    } else if overlaps_y {
        a.min_x().cmp(&b.min_x())
    } else {
        (a.min_x() + a.min_y()).cmp(&(b.min_x() + b.min_y()))
    }
}

/// Sortiert Regionen stabil nach [`compare_draw_order`].
///
/// Einfügesortierung statt `sort_by`: die Standard-Sortierung darf bei
/// nicht totalen Ordnungen paniken.
pub fn sort_for_drawing(regions: &mut [RegionModel]) {
    for i in 1..regions.len() {
        let mut j = i;
        while j > 0
            && compare_draw_order(&regions[j - 1].area(), &regions[j].area()) == Ordering::Greater
        {
            regions.swap(j - 1, j);
            j -= 1;
        }
    }
}
