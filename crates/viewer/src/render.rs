//! ASCII rendering of the tree onto a character grid.
//!
//! Node borders are drawn for nodes intersecting the probe, queried
//! items are filled in, and the frame ends with the diagnostic
//! overlay lines.

use spatial::{Region, SpatialIndex, SpatialNode};

/// Character grid mapping a world-space viewport onto terminal cells.
#[derive(Debug)]
pub struct Canvas {
    viewport: Region,
    cols: usize,
    rows: usize,
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(viewport: Region, cols: usize, rows: usize) -> Self {
        Self {
            viewport,
            cols: cols.max(2),
            rows: rows.max(2),
            cells: vec![' '; cols.max(2) * rows.max(2)],
        }
    }

    /// Map a region into an inclusive cell rectangle, or `None` when
    /// it lies outside the viewport.
    fn cell_rect(&self, region: Region) -> Option<(usize, usize, usize, usize)> {
        if !region.intersects(&self.viewport) {
            return None;
        }
        let c0 = self.to_col(region.x);
        let r0 = self.to_row(region.y);
        let c1 = self.to_col(region.x + region.width - 1);
        let r1 = self.to_row(region.y + region.height - 1);
        Some((c0, r0, c1, r1))
    }

    fn to_col(&self, x: i32) -> usize {
        let span = i64::from(self.viewport.width.max(1));
        let offset = i64::from(x - self.viewport.x) * self.cols as i64 / span;
        offset.clamp(0, self.cols as i64 - 1) as usize
    }

    fn to_row(&self, y: i32) -> usize {
        let span = i64::from(self.viewport.height.max(1));
        let offset = i64::from(y - self.viewport.y) * self.rows as i64 / span;
        offset.clamp(0, self.rows as i64 - 1) as usize
    }

    fn plot(&mut self, col: usize, row: usize, glyph: char) {
        self.cells[row * self.cols + col] = glyph;
    }

    /// Draw a region's border.
    pub fn draw_outline(&mut self, region: Region, glyph: char) {
        let Some((c0, r0, c1, r1)) = self.cell_rect(region) else {
            return;
        };
        for col in c0..=c1 {
            self.plot(col, r0, glyph);
            self.plot(col, r1, glyph);
        }
        for row in r0..=r1 {
            self.plot(c0, row, glyph);
            self.plot(c1, row, glyph);
        }
    }

    /// Fill a region's interior.
    pub fn fill(&mut self, region: Region, glyph: char) {
        let Some((c0, r0, c1, r1)) = self.cell_rect(region) else {
            return;
        };
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.plot(col, row, glyph);
            }
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for row in 0..self.rows {
            out.extend(&self.cells[row * self.cols..(row + 1) * self.cols]);
            out.push('\n');
        }
        out
    }
}

/// Border glyph per tree depth, so nested quadrants stay readable.
pub fn depth_glyph(depth: u32) -> char {
    match depth % 5 {
        0 => '#',
        1 => '=',
        2 => '+',
        3 => '-',
        _ => '.',
    }
}

/// Render one frame: node borders near the probe, queried items, the
/// probe outline, and the overlay counters.
pub fn render_frame(index: &SpatialIndex, probe: Region, cols: usize, rows: usize) -> String {
    let mut canvas = Canvas::new(index.region(), cols, rows);

    index.visit_visible(&probe, &mut |node: &SpatialNode| {
        canvas.draw_outline(node.region(), depth_glyph(node.depth()));
    });

    let items = index.query(probe);
    for item in &items {
        canvas.fill(item.region(), 'o');
    }
    canvas.draw_outline(probe, '*');

    let mut out = canvas.render();
    out.push_str(&format!(
        "rendered items: {} of {} total\n",
        items.len(),
        index.total_count()
    ));
    out.push_str(&format!("active area: {:?}\n", index.region()));
    out.push_str(&format!("probe area: {:?}\n", probe));
    out.push_str(&format!("unhandled items: {}\n", index.unhandled_count()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use spatial::Item;

    #[test]
    fn test_outline_marks_corners() {
        let mut canvas = Canvas::new(Region::new(0, 0, 100, 100), 10, 10);
        canvas.draw_outline(Region::new(0, 0, 100, 100), '#');
        let frame = canvas.render();

        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with('#'));
        assert!(lines[0].ends_with('#'));
        assert!(lines[9].starts_with('#'));
        assert!(lines[9].ends_with('#'));
    }

    #[test]
    fn test_outside_region_is_clipped() {
        let mut canvas = Canvas::new(Region::new(0, 0, 100, 100), 10, 10);
        canvas.draw_outline(Region::new(500, 500, 50, 50), '#');

        assert!(canvas.render().chars().all(|c| c == ' ' || c == '\n'));
    }

    #[test]
    fn test_frame_contains_overlay_lines() {
        let mut index = SpatialIndex::new(Region::new(0, 0, 100, 100));
        index.insert(Item::new(Region::new(10, 10, 5, 5)));

        let frame = render_frame(&index, Region::new(0, 0, 50, 50), 20, 10);
        assert!(frame.contains("rendered items: 1 of 1 total"));
        assert!(frame.contains("unhandled items: 0"));
        assert!(frame.contains('o'));
        assert!(frame.contains('*'));
    }
}
