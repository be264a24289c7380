use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use tracing::{debug, error, warn};

use crate::Theme;
use crate::api::SkipApi;
use crate::command::UpdateResult;
use crate::config::AppConfig;
use crate::skip_hire::SkipHirePage;
use crate::tui::{Event, Tui};

const FRAME_RATE: f64 = 60.0;
const TICK_RATE: f64 = 4.0;

/// The application: owns the terminal and drives the page.
///
/// After every handled event the page's update funnel runs; any commands it
/// returns are spawned onto the runtime and report back through the page's
/// own message channel.
pub struct App {
    page: SkipHirePage,
    theme: Theme,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig, theme: Theme) -> Result<Self> {
        let api = SkipApi::new(&config.api)?;
        Ok(Self {
            page: SkipHirePage::new(api, config.location.clone()),
            theme,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new(FRAME_RATE, TICK_RATE)?;
        tui.enter()?;

        self.page.init();
        self.drive();

        loop {
            self.handle_event(&mut tui).await?;
            self.drive();
            if self.should_quit {
                break;
            }
        }

        tui.exit()?;
        Ok(())
    }

    async fn handle_event(&mut self, tui: &mut Tui) -> Result<()> {
        let Some(event) = tui.next_event().await else {
            self.should_quit = true;
            return Ok(());
        };

        match event {
            Event::Quit => self.should_quit = true,
            Event::Tick => self.page.handle_tick(),
            Event::Render => self.render(tui)?,
            Event::Resize(width, height) => {
                tui.resize(Rect::new(0, 0, width, height))?;
                self.render(tui)?;
            }
            Event::Key(key) => {
                if !self.page.handle_input(&Event::Key(key)) {
                    self.handle_global_key(key);
                }
            }
            Event::Error(e) => error!(error = %e, "terminal event error"),
            Event::Init => {}
        }

        Ok(())
    }

    fn handle_global_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
        }
    }

    fn drive(&mut self) {
        match self.page.update() {
            UpdateResult::Idle => {}
            UpdateResult::Commands(commands) => {
                for command in commands {
                    debug!(name = %command.name(), "spawning command");
                    tokio::spawn(async move {
                        if let Err(e) = command.execute().await {
                            warn!(error = %e, "command failed");
                        }
                    });
                }
            }
            UpdateResult::Close => self.should_quit = true,
            UpdateResult::Error(e) => error!(error = %e, "page update failed"),
        }
    }

    fn render(&mut self, tui: &mut Tui) -> Result<()> {
        let theme = self.theme;
        let page = &mut self.page;
        tui.draw(|frame| page.view(frame, frame.area(), &theme))?;
        Ok(())
    }
}
