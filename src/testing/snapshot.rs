//! Snapshot rendering helpers.
//!
//! Functions for converting rendered widget output into plain-text strings
//! suitable for snapshot testing and assertions.

use crate::geometry::Region;
use crate::render::strip::Strip;
use crate::widget::Widget;

/// Render a widget at the origin to a plain text string.
///
/// Each row becomes one line, with trailing spaces trimmed. Lines are
/// separated by `'\n'` and the final line has no trailing newline.
///
/// # Examples
///
/// ```ignore
/// use gilt_stepper::testing::render_to_string;
/// use gilt_stepper::widgets::VerticalStepper;
///
/// assert_eq!(render_to_string(&VerticalStepper::new(), 1, 2), "▲\n▼");
/// ```
pub fn render_to_string(widget: &dyn Widget, width: i32, height: i32) -> String {
    let strips = widget.render(Region::new(0, 0, width, height));
    strips_to_string(&strips, width, height)
}

/// Convert raw strips to a plain text string.
///
/// Builds a `width` x `height` grid of spaces, then overlays each strip's
/// cells at their (x, y) positions. Cells outside the grid are dropped.
pub fn strips_to_string(strips: &[Strip], width: i32, height: i32) -> String {
    if width <= 0 || height <= 0 {
        return String::new();
    }

    let mut grid: Vec<Vec<char>> = vec![vec![' '; width as usize]; height as usize];

    for strip in strips {
        if strip.y < 0 || strip.y >= height {
            continue;
        }
        let row = &mut grid[strip.y as usize];
        for (i, cell) in strip.cells.iter().enumerate() {
            let x = strip.x_offset + i as i32;
            if (0..width).contains(&x) {
                row[x as usize] = cell.ch;
            }
        }
    }

    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_owned())
        .collect::<Vec<_>>()
        .join("\n")
}
