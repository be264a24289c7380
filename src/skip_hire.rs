//! The "Select Skip" checkout step.
//!
//! Follows a single-funnel update pattern:
//! - `init()` queues the initial fetch message
//! - `handle_input()` queues messages from user input
//! - `handle_tick()` advances animations
//! - `update()` processes all queued messages and is the only place that
//!   can spawn commands or report errors

mod command;
mod message;
mod view;

pub use message::SkipHireMsg;

use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::Theme;
use crate::api::{SkipApi, SkipOffering};
use crate::command::{Command, UpdateResult};
use crate::config::LocationConfig;
use crate::skip_hire::command::FetchOfferingsCmd;
use crate::skip_hire::view::OfferingGridView;
use crate::tui::Event;
use crate::widget::{Handled, Spinner};

/// Current view state of the page.
///
/// A failed fetch lands in `Empty` just like a zero-offering response; the
/// reason is retained for logs and tests but never rendered as an error.
enum State {
    Loading,
    Empty { reason: Option<String> },
    Grid(OfferingGridView),
}

/// Page for picking a skip size from the offerings of one location.
pub struct SkipHirePage {
    api: SkipApi,
    location: LocationConfig,
    spinner: Spinner,
    state: State,
    msg_tx: UnboundedSender<SkipHireMsg>,
    msg_rx: UnboundedReceiver<SkipHireMsg>,
}

impl SkipHirePage {
    pub fn new(api: SkipApi, location: LocationConfig) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        Self {
            api,
            location,
            spinner: Spinner::new(),
            state: State::Loading,
            msg_tx,
            msg_rx,
        }
    }

    /// Queue the initial fetch; one outbound call per page lifetime unless
    /// the user reloads.
    pub fn init(&mut self) {
        self.queue(SkipHireMsg::LoadOfferings);
    }

    /// Queue a message to be processed by `update()`.
    fn queue(&self, msg: SkipHireMsg) {
        let _ = self.msg_tx.send(msg);
    }

    pub fn handle_tick(&mut self) {
        if matches!(self.state, State::Loading) {
            self.spinner.on_tick();
        }
    }

    /// Handle an input event. Returns `true` if the event was consumed.
    ///
    /// While the fetch is outstanding no offering-dependent interaction is
    /// accepted.
    pub fn handle_input(&mut self, event: &Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };

        let handled = match &mut self.state {
            State::Loading => Handled::Ignored,
            State::Empty { .. } => match key.code {
                KeyCode::Char('r') => SkipHireMsg::LoadOfferings.into(),
                KeyCode::Char('b') => SkipHireMsg::NavigateBack.into(),
                _ => Handled::Ignored,
            },
            State::Grid(view) => view.handle_key(*key),
        };

        let consumed = handled.is_consumed();
        if let Some(msg) = handled.event() {
            self.queue(msg);
        }
        consumed
    }

    /// Process all queued messages and return the result.
    pub fn update(&mut self) -> UpdateResult {
        let mut commands: Vec<Box<dyn Command>> = Vec::new();

        while let Ok(msg) = self.msg_rx.try_recv() {
            match self.process_message(msg) {
                UpdateResult::Idle => {}
                UpdateResult::Commands(cmds) => commands.extend(cmds),
                other @ (UpdateResult::Close | UpdateResult::Error(_)) => return other,
            }
        }

        if commands.is_empty() {
            UpdateResult::Idle
        } else {
            UpdateResult::Commands(commands)
        }
    }

    fn process_message(&mut self, msg: SkipHireMsg) -> UpdateResult {
        match msg {
            SkipHireMsg::LoadOfferings => {
                self.spinner.set_label("Loading skip options...");
                self.state = State::Loading;
                FetchOfferingsCmd::new(
                    self.api.clone(),
                    self.location.clone(),
                    self.msg_tx.clone(),
                )
                .into()
            }

            SkipHireMsg::OfferingsLoaded(offerings) => {
                info!(count = offerings.len(), "skip offerings loaded");
                self.state = if offerings.is_empty() {
                    State::Empty { reason: None }
                } else {
                    State::Grid(OfferingGridView::new(offerings))
                };
                UpdateResult::Idle
            }

            SkipHireMsg::LoadFailed(reason) => {
                warn!(%reason, "failed to load skip offerings");
                self.state = State::Empty {
                    reason: Some(reason),
                };
                UpdateResult::Idle
            }

            SkipHireMsg::Select(id) => {
                if let State::Grid(view) = &mut self.state {
                    view.select(id);
                }
                UpdateResult::Idle
            }

            SkipHireMsg::NavigateBack => {
                debug!("back requested; previous checkout step is not implemented");
                UpdateResult::Idle
            }

            SkipHireMsg::ContinueCheckout => {
                if let Some(offering) = self.selected_offering() {
                    debug!(
                        id = offering.id,
                        size = offering.size,
                        "continue requested; next checkout step is not implemented"
                    );
                }
                UpdateResult::Idle
            }
        }
    }

    pub fn view(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        match &mut self.state {
            State::Loading => self.spinner.render(frame, area, theme),
            State::Empty { .. } => Self::render_empty(frame, area, theme),
            State::Grid(view) => view.render(frame, area, theme),
        }
    }

    fn render_empty(frame: &mut Frame, area: Rect, theme: &Theme) {
        let lines = vec![
            Line::styled(
                "⚠  No Skip Options Available",
                Style::default()
                    .fg(theme.yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .centered(),
            Line::raw("").centered(),
            Line::styled(
                "There are currently no skip options available for your area.",
                Style::default().fg(theme.text),
            )
            .centered(),
            Line::styled("Press r to reload.", Style::default().fg(theme.subtext0)).centered(),
        ];
        let area = area.centered(Constraint::Max(64), Constraint::Length(4));
        frame.render_widget(Paragraph::new(lines), area);
    }

    /// The offering the user has currently committed to, if any.
    pub fn selected_offering(&self) -> Option<&SkipOffering> {
        match &self.state {
            State::Grid(view) => view.selected_offering(),
            State::Loading | State::Empty { .. } => None,
        }
    }

    /// Why the last fetch failed, if it did.
    pub fn failure_reason(&self) -> Option<&str> {
        match &self.state {
            State::Empty { reason } => reason.as_deref(),
            State::Loading | State::Grid(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, State::Loading)
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self.state, State::Empty { .. })
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::api::test_offering;
    use crate::config::ApiConfig;

    fn page() -> SkipHirePage {
        let api = SkipApi::new(&ApiConfig::default()).unwrap();
        SkipHirePage::new(api, LocationConfig::default())
    }

    fn key_event(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn init_enters_loading_and_requests_one_fetch() {
        let mut p = page();
        p.init();
        match p.update() {
            UpdateResult::Commands(cmds) => assert_eq!(cmds.len(), 1),
            _ => panic!("expected a fetch command"),
        }
        assert!(p.is_loading());
    }

    #[test]
    fn non_empty_load_selects_the_first_offering() {
        let mut p = page();
        p.queue(SkipHireMsg::OfferingsLoaded(vec![
            test_offering(5),
            test_offering(9),
        ]));
        p.update();
        assert_eq!(p.selected_offering().map(|o| o.id), Some(5));
    }

    #[test]
    fn empty_load_shows_the_empty_state_without_a_selection() {
        let mut p = page();
        p.queue(SkipHireMsg::OfferingsLoaded(vec![]));
        p.update();
        assert!(p.is_empty_state());
        assert!(p.selected_offering().is_none());
        assert!(p.failure_reason().is_none());
    }

    #[test]
    fn failed_load_looks_like_an_empty_result_but_keeps_the_reason() {
        let mut p = page();
        p.queue(SkipHireMsg::LoadFailed("connection refused".to_string()));
        p.update();
        assert!(p.is_empty_state());
        assert!(p.selected_offering().is_none());
        assert_eq!(p.failure_reason(), Some("connection refused"));
    }

    #[test]
    fn selecting_is_idempotent() {
        let mut p = page();
        p.queue(SkipHireMsg::OfferingsLoaded(vec![
            test_offering(5),
            test_offering(9),
        ]));
        p.update();

        p.queue(SkipHireMsg::Select(9));
        p.update();
        assert_eq!(p.selected_offering().map(|o| o.id), Some(9));

        p.queue(SkipHireMsg::Select(9));
        p.update();
        assert_eq!(p.selected_offering().map(|o| o.id), Some(9));
    }

    #[test]
    fn reload_from_the_empty_state_returns_to_loading() {
        let mut p = page();
        p.queue(SkipHireMsg::LoadFailed("boom".to_string()));
        p.update();

        assert!(p.handle_input(&key_event(KeyCode::Char('r'))));
        match p.update() {
            UpdateResult::Commands(cmds) => assert_eq!(cmds.len(), 1),
            _ => panic!("expected a fetch command"),
        }
        assert!(p.is_loading());
    }

    #[test]
    fn input_is_not_consumed_while_loading() {
        let mut p = page();
        p.init();
        p.update();
        assert!(p.is_loading());
        assert!(!p.handle_input(&key_event(KeyCode::Enter)));
    }

    #[test]
    fn activation_in_the_grid_commits_the_cursor_card() {
        let mut p = page();
        p.queue(SkipHireMsg::OfferingsLoaded(vec![
            test_offering(5),
            test_offering(9),
        ]));
        p.update();

        assert!(p.handle_input(&key_event(KeyCode::Right)));
        assert!(p.handle_input(&key_event(KeyCode::Enter)));
        p.update();
        assert_eq!(p.selected_offering().map(|o| o.id), Some(9));
    }
}
