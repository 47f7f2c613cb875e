use smithay_client_toolkit::reexports::calloop::{
    LoopHandle,
    timer::{TimeoutAction, Timer},
};
use std::time::Instant;

use crate::{
    canvas::Canvas,
    format::TextFormatter,
    layout::Layout,
    scene::{self, Frame},
    theme::Theme,
    ticker::{Snapshot, Ticker},
    time::LocalClock,
    widget::Widget,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

pub struct ClockScreen {
    pub widget: Widget,
    canvas: Canvas,
    theme: Theme,
    layout: Layout,
    formatter: TextFormatter,
    ticker: Ticker<LocalClock>,
    visibility: Visibility,
    start_requested: bool,
}

impl ClockScreen {
    pub fn new(
        widget: Widget,
        theme: Theme,
        layout: Layout,
        formatter: TextFormatter,
        ticker: Ticker<LocalClock>,
    ) -> Self {
        Self {
            widget,
            canvas: Canvas::new(layout.width, layout.height),
            theme,
            layout,
            formatter,
            ticker,
            visibility: Visibility::Hidden,
            start_requested: false,
        }
    }

    /// Called on every layer configure, only the first one starts the ticker.
    pub fn show(&mut self) {
        if self.visibility == Visibility::Visible {
            self.ticker.republish();
            return;
        }

        log::info!(
            "showing {}x{} clock, {} theme",
            self.layout.width,
            self.layout.height,
            self.theme.name
        );
        self.canvas.init(&scene::compose_dial(&self.theme, &self.layout));
        self.visibility = Visibility::Visible;
        self.start_requested = true;
    }

    pub fn hide(&mut self) {
        if self.visibility == Visibility::Visible {
            log::info!("hiding clock after {} ticks", self.ticker.ticks());
        }
        self.visibility = Visibility::Hidden;
        self.widget.exit = true;
    }

    /// Starts the redraw loop once the screen became visible. The timer drops
    /// itself as soon as the screen is hidden.
    pub fn start_ticking(&mut self, loop_handle: &LoopHandle<'_, Self>) -> anyhow::Result<()> {
        if !std::mem::take(&mut self.start_requested) {
            return Ok(());
        }

        log::debug!("starting ticker, {:?} cadence", self.ticker.cadence());
        loop_handle
            .insert_source(Timer::immediate(), is_happening)
            .map_err(|err| anyhow::anyhow!("failed to insert timer: {}", err.error))?;
        Ok(())
    }

    /// Redraws when a tick published a new snapshot since the last redraw.
    pub fn consume_redraw(&mut self) {
        if self.visibility != Visibility::Visible {
            return;
        }
        let Some(snapshot) = self.ticker.take_fresh() else {
            return;
        };

        let frame = self.frame(&snapshot);
        let hands = scene::compose_hands(&frame, &self.theme, &self.layout);
        self.canvas.draw(&hands);

        if let Err(err) = self.widget.update_surface(&self.canvas.primitives) {
            log::warn!("dropping frame for {}: {}", frame.time_text, err);
        }
    }

    fn frame(&self, snapshot: &Snapshot) -> Frame {
        Frame {
            time: snapshot.time,
            time_text: self.formatter.time(&snapshot.at),
            date_text: self.formatter.date(&snapshot.at),
        }
    }
}

fn is_happening(_: Instant, _: &mut (), screen: &mut ClockScreen) -> TimeoutAction {
    if screen.visibility == Visibility::Visible {
        TimeoutAction::ToDuration(screen.ticker.tick())
    } else {
        log::debug!("screen hidden, dropping ticker");
        TimeoutAction::Drop
    }
}
