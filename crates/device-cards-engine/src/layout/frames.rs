use serde::{Deserialize, Serialize};

use super::partition::{Group, GroupShape};

/// Spacing, insets and row proportions used to turn rows into rectangles.
///
/// Heights are fractions of the content width (container width minus the
/// leading and trailing insets).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    pub inter_item_spacing: f64,
    pub content_inset_top: f64,
    pub content_inset_leading: f64,
    pub content_inset_bottom: f64,
    pub content_inset_trailing: f64,
    pub paired_height_fraction: f64,
    pub orphan_height_fraction: f64,
    pub emphasized_height_fraction: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            inter_item_spacing: 16.0,
            content_inset_top: 0.0,
            content_inset_leading: 16.0,
            content_inset_bottom: 10.0,
            content_inset_trailing: 16.0,
            paired_height_fraction: 0.5,
            orphan_height_fraction: 0.25,
            emphasized_height_fraction: 0.5,
        }
    }
}

impl LayoutMetrics {
    pub fn height_fraction(&self, shape: GroupShape) -> f64 {
        match shape {
            GroupShape::PairedCompact => self.paired_height_fraction,
            GroupShape::OrphanBasic => self.orphan_height_fraction,
            GroupShape::Emphasized => self.emphasized_height_fraction,
        }
    }

    fn content_width(&self, container_width: f64) -> f64 {
        (container_width - self.content_inset_leading - self.content_inset_trailing).max(0.0)
    }
}

/// Rectangle for a single card, addressed by its index in the working sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellFrame {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowFrame {
    pub shape: GroupShape,
    pub y: f64,
    pub height: f64,
    pub cells: Vec<CellFrame>,
}

/// Stack rows vertically inside a container of the given width.
pub fn compute_frames(groups: &[Group], metrics: &LayoutMetrics, container_width: f64) -> Vec<RowFrame> {
    let content_width = metrics.content_width(container_width);
    let mut rows = Vec::with_capacity(groups.len());
    let mut y = metrics.content_inset_top;

    for group in groups {
        let height = content_width * metrics.height_fraction(group.shape);
        let gaps = group.len().saturating_sub(1) as f64 * metrics.inter_item_spacing;
        let cell_width = if content_width > 0.0 {
            ((content_width - gaps) * group.shape.cell_width_fraction()).max(0.0)
        } else {
            0.0
        };

        let cells = group
            .range
            .clone()
            .enumerate()
            .map(|(slot, index)| CellFrame {
                index,
                x: metrics.content_inset_leading + slot as f64 * (cell_width + metrics.inter_item_spacing),
                y,
                width: cell_width,
                height,
            })
            .collect();

        rows.push(RowFrame {
            shape: group.shape,
            y,
            height,
            cells,
        });
        y += height + metrics.inter_item_spacing;
    }

    rows
}

/// Total height of the section including the bottom inset.
pub fn content_height(rows: &[RowFrame], metrics: &LayoutMetrics) -> f64 {
    match rows.last() {
        Some(last) => last.y + last.height + metrics.content_inset_bottom,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::partition;
    use crate::models::CardStyle::{Basic, Complex};

    #[test]
    fn test_one_cell_per_card_in_order() {
        let styles = [Complex, Basic, Basic, Basic, Complex];
        let rows = compute_frames(&partition(&styles), &LayoutMetrics::default(), 400.0);

        let indices: Vec<usize> = rows.iter().flat_map(|r| r.cells.iter().map(|c| c.index)).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_pair_cells_split_content_width() {
        let metrics = LayoutMetrics::default();
        let rows = compute_frames(&partition(&[Basic, Basic]), &metrics, 400.0);

        assert_eq!(rows.len(), 1);
        let cells = &rows[0].cells;
        // 400 - 16 - 16 = 368 content, minus one 16 gap, halved
        assert_eq!(cells[0].width, 176.0);
        assert_eq!(cells[1].width, 176.0);
        assert_eq!(cells[0].x, 16.0);
        assert_eq!(cells[1].x, 16.0 + 176.0 + 16.0);
        assert_eq!(rows[0].height, 184.0);
    }

    #[test]
    fn test_rows_stack_with_spacing() {
        let metrics = LayoutMetrics::default();
        let rows = compute_frames(&partition(&[Complex, Basic, Complex]), &metrics, 416.0);

        assert_eq!(rows[0].y, 0.0);
        assert_eq!(rows[0].height, 192.0);
        assert_eq!(rows[1].y, 192.0 + 16.0);
        assert_eq!(rows[1].height, 96.0);
        assert_eq!(rows[1].cells[0].width, 384.0);
        assert_eq!(rows[2].y, 192.0 + 16.0 + 96.0 + 16.0);
        assert_eq!(content_height(&rows, &metrics), rows[2].y + 192.0 + 10.0);
    }

    #[test]
    fn test_narrow_container_gives_empty_frames() {
        let rows = compute_frames(&partition(&[Basic, Basic]), &LayoutMetrics::default(), 10.0);
        assert!(rows[0].cells.iter().all(|c| c.width == 0.0 && c.height == 0.0));
    }

    #[test]
    fn test_no_rows_no_height() {
        assert_eq!(content_height(&[], &LayoutMetrics::default()), 0.0);
    }
}
