use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use todo_core::Notice;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerVariant {
    /// Input the app refused.
    Warning,
    /// Edge of the history log.
    Info,
}

impl BannerVariant {
    fn color(self) -> Color {
        match self {
            BannerVariant::Warning => Color::Red,
            BannerVariant::Info => Color::Yellow,
        }
    }
}

/// A notice on screen, remembered with the instant it appeared.
#[derive(Debug, Clone)]
pub struct Banner {
    pub notice: Notice,
    pub variant: BannerVariant,
    pub created_at: Instant,
}

impl Banner {
    pub fn new(notice: Notice) -> Self {
        let variant = if notice.is_history_boundary() {
            BannerVariant::Info
        } else {
            BannerVariant::Warning
        };
        Self {
            notice,
            variant,
            created_at: Instant::now(),
        }
    }

    pub fn message(&self) -> &'static str {
        self.notice.message()
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let color = self.variant.color();
        let message = self.message();

        // +4 for border chars and padding
        let box_width = (message.len() + 4).min(area.width as usize) as u16;
        let centered_x = area.width.saturating_sub(box_width) / 2;

        let banner_area = Rect {
            x: area.x + centered_x,
            y: area.y,
            width: box_width,
            height: 3.min(area.height),
        };

        let widget = Paragraph::new(message)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );

        frame.render_widget(Clear, banner_area);
        frame.render_widget(widget, banner_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_follows_notice_kind() {
        assert_eq!(Banner::new(Notice::NothingToUndo).variant, BannerVariant::Info);
        assert_eq!(Banner::new(Notice::EmptyTask).variant, BannerVariant::Warning);
    }

    #[test]
    fn test_expiry() {
        let mut banner = Banner::new(Notice::EmptyList);
        assert!(!banner.is_expired(Duration::from_secs(2)));

        banner.created_at = Instant::now() - Duration::from_secs(3);
        assert!(banner.is_expired(Duration::from_secs(2)));
    }
}
