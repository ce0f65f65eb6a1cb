//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Widest the centered content column gets on large terminals
pub const MAX_CONTENT_WIDTH: u16 = 96;

/// Screen areas shared by every view
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar (glass container)
    pub header: Rect,

    /// Active screen
    pub body: Rect,

    /// Single row of key hints
    pub footer: Rect,
}

/// Split the frame into header, body and footer
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3), // Top border + title row + bottom border
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    ScreenAreas {
        header,
        body,
        footer,
    }
}

/// Horizontally centered column no wider than [`MAX_CONTENT_WIDTH`]
pub fn content_column(area: Rect) -> Rect {
    let [column] = Layout::horizontal([Constraint::Max(MAX_CONTENT_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    column
}

/// Rect of at most `width` x `height`, centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.body.y, 3);
        assert_eq!(layout.body.height, 20); // 24 - 3 - 1
        assert_eq!(layout.footer.y, 23);
        assert_eq!(layout.footer.height, 1);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = create(area);
        assert_eq!(
            layout.header.height + layout.body.height + layout.footer.height,
            area.height
        );
    }

    #[test]
    fn test_content_column_caps_width() {
        let wide = content_column(Rect::new(0, 0, 200, 10));
        assert_eq!(wide.width, MAX_CONTENT_WIDTH);
        assert_eq!(wide.x, (200 - MAX_CONTENT_WIDTH) / 2);

        let narrow = content_column(Rect::new(0, 0, 60, 10));
        assert_eq!(narrow.width, 60);
        assert_eq!(narrow.x, 0);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect(20, 4, area);
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (10, 3, 20, 4));

        let rect = centered_rect(100, 100, area);
        assert_eq!(rect, area);
    }
}
