use chrono::NaiveDateTime;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::{
    client::WeatherClient,
    clock::{self, ClockTicker},
    model::Snapshot,
    theme::Theme,
    view::PanelView,
};

/// Location used on startup when the user has not picked one.
pub const DEFAULT_LOCATION: &str = "Mumbai";

/// Drives the whole panel: owns the client, the view, the current target
/// location, the displayed clock state, and the active ticker.
///
/// All mutation happens on the task that owns the controller; the ticker
/// task only sends messages back through the channel whose sender is handed
/// in at construction.
pub struct PanelController<V: PanelView> {
    client: WeatherClient,
    view: V,
    target: String,
    /// Displayed clock state, seeded on render, advanced on ticks. `None`
    /// until the first successful render.
    local_clock: Option<NaiveDateTime>,
    ticker: Option<ClockTicker>,
    tick_tx: mpsc::Sender<()>,
}

impl<V: PanelView> PanelController<V> {
    pub fn new(client: WeatherClient, view: V, tick_tx: mpsc::Sender<()>) -> Self {
        Self {
            client,
            view,
            target: DEFAULT_LOCATION.to_string(),
            local_clock: None,
            ticker: None,
            tick_tx,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Fetch and render one location.
    ///
    /// Marks the search pending and clears any error notice up front; on
    /// failure shows the error's user message and leaves previously rendered
    /// data (and its ticking clock) untouched. The pending state is cleared
    /// unconditionally on the way out. Never escalates: a failed load is
    /// terminal for that request only.
    pub async fn load(&mut self, location: &str) {
        self.view.set_search_pending(true);
        self.view.clear_error();

        match self.client.fetch_current(location).await {
            Ok(snapshot) => self.render(snapshot),
            Err(err) => {
                warn!(error = %err, location, "load failed");
                self.view.show_error(err.user_message());
            }
        }

        self.view.set_search_pending(false);
        self.view.flush();
    }

    /// Handle a search submission. Whitespace-only input is ignored: no
    /// request, no error, no change to displayed state.
    pub async fn submit(&mut self, input: &str) {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return;
        }

        self.target = trimmed.to_string();
        let target = self.target.clone();
        self.load(&target).await;
    }

    /// Load whatever the current target location is.
    pub async fn load_target(&mut self) {
        let target = self.target.clone();
        self.load(&target).await;
    }

    /// One simulated clock tick: advance the stored point-in-time and
    /// rewrite only the date/time line. A no-op until a render has seeded
    /// the clock.
    pub fn tick(&mut self) {
        let Some(current) = self.local_clock else {
            return;
        };

        let advanced = clock::advance(current);
        self.local_clock = Some(advanced);
        self.view.set_date_line(&clock::format_date_line(&advanced));
        self.view.flush();
    }

    fn render(&mut self, snapshot: Snapshot) {
        debug!(location = %snapshot.display_name(), "rendering snapshot");

        self.local_clock = Some(snapshot.localtime);

        self.view.set_temperature(&snapshot.temperature_text());
        self.view.set_location(&snapshot.display_name());
        self.view.set_condition(&snapshot.condition);
        self.view.set_icon(&snapshot.icon_url(), &snapshot.icon_alt());
        self.view
            .set_date_line(&clock::format_date_line(&snapshot.localtime));
        self.view
            .set_status_line(&format!("Local time source: {}", snapshot.localtime_raw));
        self.view
            .set_theme(Theme::classify(&snapshot.condition, snapshot.is_day));

        // Cancel-then-restart: replacing the ticker aborts the old task.
        self.ticker = Some(ClockTicker::start(self.tick_tx.clone()));
    }
}
