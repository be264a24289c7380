use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::Theme;

const STEPS: [&str; 6] = [
    "Postcode",
    "Waste Type",
    "Select Skip",
    "Permit Check",
    "Choose Date",
    "Payment",
];

/// Checkout progress indicator.
///
/// Steps before the current one render as completed, the current one is
/// highlighted, later ones are dimmed. Purely informational.
pub struct StepsBar {
    current: usize,
}

impl StepsBar {
    #[must_use]
    pub const fn new(current: usize) -> Self {
        Self { current }
    }

    fn marker(&self, index: usize) -> String {
        if index < self.current {
            "✔".to_string()
        } else {
            (index + 1).to_string()
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut spans = Vec::new();
        for (index, name) in STEPS.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" › ", Style::default().fg(theme.overlay0)));
            }

            let style = if index < self.current {
                Style::default().fg(theme.green)
            } else if index == self.current {
                Style::default().fg(theme.blue).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.overlay0)
            };
            spans.push(Span::styled(format!("{} {name}", self.marker(index)), style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_steps_show_a_check_mark() {
        let bar = StepsBar::new(2);
        assert_eq!(bar.marker(0), "✔");
        assert_eq!(bar.marker(1), "✔");
    }

    #[test]
    fn current_and_pending_steps_show_their_number() {
        let bar = StepsBar::new(2);
        assert_eq!(bar.marker(2), "3");
        assert_eq!(bar.marker(5), "6");
    }
}
