use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::Theme;
use crate::widget::Handled;

const CARD_MIN_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 7;
const MAX_COLUMNS: usize = 3;

pub enum GridEvent<'a, T> {
    /// Cursor moved onto a different card.
    Changed(&'a T),
    /// Card under the cursor was activated.
    Activated(&'a T),
}

/// A grid of selectable cards with keyboard navigation.
///
/// The grid tracks a cursor, not a committed choice; callers decide what
/// activation means. Column count adapts to the render area and is reused
/// by the vertical movement math.
pub struct CardGrid<T> {
    items: Vec<T>,
    cursor: usize,
    columns: usize,
    row_offset: usize,
}

impl<T> CardGrid<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            cursor: 0,
            columns: 1,
            row_offset: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn cursor_item(&self) -> Option<&T> {
        self.items.get(self.cursor)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Handled<GridEvent<'_, T>> {
        use KeyCode::{Char, Down, End, Enter, Home, Left, Right, Up};

        if self.items.is_empty() {
            return Handled::Ignored;
        }

        let before = self.cursor;
        match key.code {
            Right | Char('l') => self.move_to(self.cursor + 1),
            Left | Char('h') => self.move_to(self.cursor.saturating_sub(1)),
            Down | Char('j') => self.move_to(self.cursor + self.columns),
            Up | Char('k') => self.move_to(self.cursor.saturating_sub(self.columns)),
            Home | Char('g') => self.move_to(0),
            End | Char('G') => self.move_to(self.items.len() - 1),
            Enter | Char(' ') => {
                return Handled::Event(GridEvent::Activated(&self.items[self.cursor]));
            }
            _ => return Handled::Ignored,
        }

        if self.cursor == before {
            Handled::Consumed
        } else {
            Handled::Event(GridEvent::Changed(&self.items[self.cursor]))
        }
    }

    fn move_to(&mut self, index: usize) {
        self.cursor = index.min(self.items.len() - 1);
    }

    /// Render the grid, drawing each card with the given renderer.
    ///
    /// The border of the card under the cursor is highlighted; everything
    /// inside the card is up to the renderer.
    pub fn render<F>(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, card: F)
    where
        F: Fn(&T) -> Vec<Line<'static>>,
    {
        if self.items.is_empty() {
            return;
        }

        self.columns = usize::from(area.width / CARD_MIN_WIDTH).clamp(1, MAX_COLUMNS);
        let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
        let total_rows = self.items.len().div_ceil(self.columns);
        self.scroll_to_cursor(visible_rows, total_rows);

        let row_areas =
            Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(area);

        for (slot, row) in (self.row_offset..total_rows).take(visible_rows).enumerate() {
            let col_areas = Layout::horizontal(vec![
                Constraint::Ratio(1, self.columns as u32);
                self.columns
            ])
            .split(row_areas[slot]);

            for col in 0..self.columns {
                let index = row * self.columns + col;
                let Some(item) = self.items.get(index) else {
                    break;
                };

                let border_style = if index == self.cursor {
                    Style::default().fg(theme.lavender)
                } else {
                    Style::default().fg(theme.surface1)
                };
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(border_style);
                frame.render_widget(Paragraph::new(card(item)).block(block), col_areas[col]);
            }
        }
    }

    fn scroll_to_cursor(&mut self, visible_rows: usize, total_rows: usize) {
        let cursor_row = self.cursor / self.columns;
        if cursor_row < self.row_offset {
            self.row_offset = cursor_row;
        } else if cursor_row >= self.row_offset + visible_rows {
            self.row_offset = cursor_row + 1 - visible_rows;
        }
        self.row_offset = self.row_offset.min(total_rows.saturating_sub(visible_rows));
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn grid() -> CardGrid<u32> {
        CardGrid::new(vec![10, 20, 30, 40, 50])
    }

    #[test]
    fn cursor_starts_on_the_first_item() {
        assert_eq!(grid().cursor_item(), Some(&10));
    }

    #[test]
    fn right_moves_and_reports_the_change() {
        let mut g = grid();
        match g.handle_key(key(KeyCode::Right)) {
            Handled::Event(GridEvent::Changed(item)) => assert_eq!(*item, 20),
            _ => panic!("expected a change event"),
        }
    }

    #[test]
    fn left_clamps_at_the_first_item() {
        let mut g = grid();
        assert!(matches!(g.handle_key(key(KeyCode::Left)), Handled::Consumed));
        assert_eq!(g.cursor_item(), Some(&10));
    }

    #[test]
    fn vertical_movement_steps_by_column_count() {
        let mut g = grid();
        g.columns = 2;
        g.handle_key(key(KeyCode::Down));
        assert_eq!(g.cursor_item(), Some(&30));
        g.handle_key(key(KeyCode::Up));
        assert_eq!(g.cursor_item(), Some(&10));
    }

    #[test]
    fn down_past_the_end_clamps_to_the_last_item() {
        let mut g = grid();
        g.columns = 3;
        g.handle_key(key(KeyCode::Down));
        g.handle_key(key(KeyCode::Down));
        assert_eq!(g.cursor_item(), Some(&50));
    }

    #[test]
    fn enter_activates_the_item_under_the_cursor() {
        let mut g = grid();
        g.handle_key(key(KeyCode::Right));
        match g.handle_key(key(KeyCode::Enter)) {
            Handled::Event(GridEvent::Activated(item)) => assert_eq!(*item, 20),
            _ => panic!("expected an activation event"),
        }
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let mut g = grid();
        assert!(!g.handle_key(key(KeyCode::Char('x'))).is_consumed());
    }

    #[test]
    fn empty_grid_ignores_everything() {
        let mut g: CardGrid<u32> = CardGrid::new(vec![]);
        assert!(!g.handle_key(key(KeyCode::Enter)).is_consumed());
    }
}
