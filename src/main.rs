use clap::Parser;
use smithay_client_toolkit::reexports::{calloop::EventLoop, calloop_wayland_source::WaylandSource};
use wayland_client::{Connection, globals::registry_queue_init};

use dialtime::{
    ClockScreen, Config, Theme, Widget, format::TextFormatter, layout::Layout, ticker::Ticker,
    time::LocalClock,
};

fn main() {
    env_logger::init();

    if let Err(err) = run(Config::parse()) {
        log::error!("{:#}", err);
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(config: Config) -> anyhow::Result<()> {
    let layout = Layout::new(config.width);
    let formatter = TextFormatter::resolve(config.locale.as_deref());
    log::info!(
        "dialtime {} with {} theme, {:?} layer, locale {:?}",
        env!("CARGO_PKG_VERSION"),
        config.theme,
        config.layer,
        formatter.locale()
    );

    let conn = Connection::connect_to_env()?;
    let (globals, event_queue) = registry_queue_init(&conn)?;
    let qh = event_queue.handle();

    let widget = Widget::new(&globals, &qh, &layout, config.layer.into())?;
    let mut screen = ClockScreen::new(
        widget,
        Theme::from(config.theme),
        layout,
        formatter,
        Ticker::new(LocalClock, config.cadence()),
    );

    let mut event_loop: EventLoop<ClockScreen> = EventLoop::try_new()?;
    let loop_handle = event_loop.handle();

    WaylandSource::new(conn, event_queue).insert(loop_handle.clone())?;

    loop {
        event_loop.dispatch(None, &mut screen)?;

        screen.start_ticking(&loop_handle)?;
        screen.consume_redraw();

        if screen.widget.exit {
            log::info!("exiting dialtime");
            break;
        }
    }

    Ok(())
}
