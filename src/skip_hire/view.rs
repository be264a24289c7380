use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::Theme;
use crate::api::SkipOffering;
use crate::skip_hire::message::SkipHireMsg;
use crate::widget::{CardGrid, GridEvent, Handled, StepsBar};

/// Zero-based index of "Select Skip" in the checkout steps.
const CURRENT_STEP: usize = 2;

/// The offering grid with its summary panel and navigation footer.
///
/// The grid cursor (arrow keys) is visual only; the committed selection
/// changes on activation and defaults to the first offering.
pub struct OfferingGridView {
    grid: CardGrid<SkipOffering>,
    selected_id: Option<u64>,
}

impl OfferingGridView {
    pub fn new(offerings: Vec<SkipOffering>) -> Self {
        let selected_id = offerings.first().map(|o| o.id);
        Self {
            grid: CardGrid::new(offerings),
            selected_id,
        }
    }

    /// Commit the offering with this id as the selection. Re-selecting the
    /// current offering is a no-op, not a toggle.
    pub fn select(&mut self, id: u64) {
        self.selected_id = Some(id);
    }

    pub fn selected_offering(&self) -> Option<&SkipOffering> {
        self.selected_id
            .and_then(|id| self.grid.items().iter().find(|o| o.id == id))
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Handled<SkipHireMsg> {
        match self.grid.handle_key(key) {
            Handled::Event(GridEvent::Activated(offering)) => {
                return Handled::Event(SkipHireMsg::Select(offering.id));
            }
            Handled::Event(GridEvent::Changed(_)) | Handled::Consumed => {
                return Handled::Consumed;
            }
            Handled::Ignored => {}
        }

        match key.code {
            KeyCode::Char('r') => SkipHireMsg::LoadOfferings.into(),
            KeyCode::Char('b') => SkipHireMsg::NavigateBack.into(),
            KeyCode::Char('c') => SkipHireMsg::ContinueCheckout.into(),
            _ => Handled::Ignored,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let summary_height = if self.selected_offering().is_some() { 3 } else { 0 };
        let [steps_area, title_area, grid_area, summary_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(summary_height),
            Constraint::Length(1),
        ])
        .areas(area);

        StepsBar::new(CURRENT_STEP).render(frame, steps_area, theme);
        Self::render_title(frame, title_area, theme);
        self.render_grid(frame, grid_area, theme);
        if let Some(offering) = self.selected_offering() {
            Self::render_summary(offering, frame, summary_area, theme);
        }
        Self::render_footer(frame, footer_area, theme);
    }

    fn render_title(frame: &mut Frame, area: Rect, theme: &Theme) {
        let lines = vec![
            Line::styled(
                "Choose Your Skip Size",
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )
            .centered(),
            Line::styled(
                "Select the skip size that best suits your needs",
                Style::default().fg(theme.subtext0),
            )
            .centered(),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_grid(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let selected_id = self.selected_id;
        let theme = *theme;
        self.grid.render(frame, area, &theme, move |offering| {
            let selected = selected_id == Some(offering.id);
            let marker = if selected {
                Line::styled("✔ Selected", Style::default().fg(theme.green))
            } else {
                Line::raw("")
            };
            vec![
                Line::styled(
                    offering.to_string(),
                    Style::default()
                        .fg(theme.yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::styled(
                    format!("Hire period: {} days", offering.hire_period_days),
                    Style::default().fg(theme.subtext0),
                ),
                Line::styled(
                    format!("£{}", offering.display_price()),
                    Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
                ),
                Line::styled(
                    format!(
                        "£{:.2} + VAT (£{:.2})",
                        offering.price_before_vat, offering.vat
                    ),
                    Style::default().fg(theme.subtext1),
                ),
                marker,
            ]
        });
    }

    fn render_summary(offering: &SkipOffering, frame: &mut Frame, area: Rect, theme: &Theme) {
        let line = Line::from(vec![
            Span::styled(
                offering.to_string(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ·  ", Style::default().fg(theme.overlay0)),
            Span::styled(
                format!("£{}", offering.display_price()),
                Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ·  ", Style::default().fg(theme.overlay0)),
            Span::styled(
                format!("Hire period: {} days", offering.hire_period_days),
                Style::default().fg(theme.subtext0),
            ),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.surface1))
            .title(" Summary ");
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
        let hints = Line::styled(
            "←↑↓→ move · Enter select · r reload · b back · c continue · q quit",
            Style::default().fg(theme.subtext0),
        )
        .centered();
        frame.render_widget(Paragraph::new(hints), area);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::api::test_offering;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn first_offering_is_selected_by_default() {
        let view = OfferingGridView::new(vec![test_offering(7), test_offering(8)]);
        assert_eq!(view.selected_offering().map(|o| o.id), Some(7));
    }

    #[test]
    fn no_default_selection_without_offerings() {
        let view = OfferingGridView::new(vec![]);
        assert!(view.selected_offering().is_none());
    }

    #[test]
    fn activation_emits_a_select_message_for_the_cursor_card() {
        let mut view = OfferingGridView::new(vec![test_offering(7), test_offering(8)]);
        view.handle_key(key(KeyCode::Right));
        match view.handle_key(key(KeyCode::Enter)) {
            Handled::Event(SkipHireMsg::Select(id)) => assert_eq!(id, 8),
            _ => panic!("expected a select message"),
        }
    }

    #[test]
    fn cursor_movement_does_not_change_the_selection() {
        let mut view = OfferingGridView::new(vec![test_offering(7), test_offering(8)]);
        view.handle_key(key(KeyCode::Right));
        assert_eq!(view.selected_offering().map(|o| o.id), Some(7));
    }

    #[test]
    fn reload_and_navigation_keys_map_to_messages() {
        let mut view = OfferingGridView::new(vec![test_offering(7)]);
        assert!(matches!(
            view.handle_key(key(KeyCode::Char('r'))),
            Handled::Event(SkipHireMsg::LoadOfferings)
        ));
        assert!(matches!(
            view.handle_key(key(KeyCode::Char('b'))),
            Handled::Event(SkipHireMsg::NavigateBack)
        ));
        assert!(matches!(
            view.handle_key(key(KeyCode::Char('c'))),
            Handled::Event(SkipHireMsg::ContinueCheckout)
        ));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut view = OfferingGridView::new(vec![test_offering(7)]);
        assert!(!view.handle_key(key(KeyCode::Char('x'))).is_consumed());
    }
}
