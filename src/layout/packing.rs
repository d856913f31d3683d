use std::collections::HashMap;

use uuid::Uuid;

/// Horizontal extent of one bar inside a lane.
#[derive(Debug, Clone, Copy)]
pub struct PackedBar {
    pub id: Uuid,
    pub x: f32,
    pub width: f32,
}

/// Whether two bars overlap horizontally. Exactly adjacent bars do not.
pub fn bars_overlap(a: &PackedBar, b: &PackedBar) -> bool {
    a.x < b.x + b.width && b.x < a.x + a.width
}

/// Assign each bar to a row so that no two bars sharing a row overlap once
/// `padding` is added after each bar.
///
/// First-fit over bars sorted by left edge: each bar takes the lowest row
/// whose last occupant ends at or before the bar's start, or opens a new
/// row. For intervals this greedy order is optimal: the row count equals
/// the maximum number of simultaneously overlapping bars.
pub fn pack_into_rows(bars: &[PackedBar], padding: f32) -> HashMap<Uuid, usize> {
    let mut sorted: Vec<&PackedBar> = bars.iter().collect();
    // Stable sort keeps input order for bars starting at the same x.
    sorted.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));

    // Next free x position per row.
    let mut row_ends: Vec<f32> = Vec::new();
    let mut rows = HashMap::with_capacity(bars.len());

    for bar in sorted {
        let padded_end = bar.x + bar.width + padding;
        match row_ends.iter().position(|&free_at| bar.x >= free_at) {
            Some(row) => {
                row_ends[row] = padded_end;
                rows.insert(bar.id, row);
            }
            None => {
                row_ends.push(padded_end);
                rows.insert(bar.id, row_ends.len() - 1);
            }
        }
    }

    rows
}

/// Number of rows a packing occupies.
pub fn row_count(rows: &HashMap<Uuid, usize>) -> usize {
    rows.values().max().map_or(0, |max| max + 1)
}
