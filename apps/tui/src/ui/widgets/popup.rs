use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Buffer;
use ratatui::widgets::{Clear, Widget};

/// Centered popup area sized as a percentage of the enclosing area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// Centered fixed-size popup area, clamped to the enclosing area.
pub fn anchored_rect(width: u16, height: u16, area: Rect) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

pub struct ClearWidget;

impl Widget for ClearWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::anchored_rect;
    use ratatui::layout::Rect;

    #[test]
    fn anchored_rect_centers_within_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = anchored_rect(60, 16, area);

        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 12);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 16);
    }

    #[test]
    fn anchored_rect_clamps_to_small_areas() {
        let area = Rect::new(0, 0, 30, 10);
        let popup = anchored_rect(60, 16, area);

        assert_eq!(popup.width, 30);
        assert_eq!(popup.height, 10);
        assert_eq!(popup.x, 0);
        assert_eq!(popup.y, 0);
    }
}
