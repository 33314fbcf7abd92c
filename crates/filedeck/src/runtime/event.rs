use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::{Event, KeyEventKind};
use tokio::sync::mpsc;

use crate::app::{App, AppEvent};
use crate::runtime::{EventResult, key_handler};

pub(crate) fn spawn_event_reader(
    event_tx: mpsc::UnboundedSender<Event>,
    shutdown: Arc<AtomicBool>,
) {
    std::thread::spawn(move || {
        while !shutdown.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(250)) {
                Ok(true) => {
                    if let Ok(event) = crossterm::event::read()
                        && event_tx.send(event).is_err()
                    {
                        break;
                    }
                }
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}

pub(crate) async fn process_events(
    app: &mut App,
    event_rx: &mut mpsc::UnboundedReceiver<Event>,
    tick: &mut tokio::time::Interval,
) -> io::Result<EventResult> {
    enum LoopSignal {
        App(Option<AppEvent>),
        Terminal(Option<Event>),
        Tick,
    }

    // Wait for a key press, a finished store call, or the next tick. Store
    // tasks make progress while this future is pending.
    let signal = tokio::select! {
        biased;
        event = event_rx.recv() => LoopSignal::Terminal(event),
        app_event = app.next_app_event() => LoopSignal::App(app_event),
        _ = tick.tick() => LoopSignal::Tick,
    };

    match signal {
        LoopSignal::Terminal(Some(event)) => {
            if matches!(process_event(app, event).await, EventResult::Quit) {
                return Ok(EventResult::Quit);
            }
        }
        LoopSignal::Terminal(None) => return Ok(EventResult::Quit),
        LoopSignal::App(Some(app_event)) => app.apply_app_event(app_event),
        LoopSignal::App(None) | LoopSignal::Tick => {}
    }

    // Drain remaining queued input before re-rendering so rapid key presses
    // are processed immediately instead of one-per-frame.
    while let Ok(event) = event_rx.try_recv() {
        if matches!(process_event(app, event).await, EventResult::Quit) {
            return Ok(EventResult::Quit);
        }
    }

    app.process_pending_app_events();
    app.reap_finished_tasks();

    Ok(EventResult::Continue)
}

async fn process_event(app: &mut App, event: Event) -> EventResult {
    if let Event::Key(key) = event
        && key.kind == KeyEventKind::Press
    {
        return key_handler::handle_key_event(app, key).await;
    }

    EventResult::Continue
}
