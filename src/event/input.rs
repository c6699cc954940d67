use crossbeam_channel::Sender;
use crossterm::event::{self, Event as CtEvent, KeyEventKind};
use std::thread::JoinHandle;
use std::time::Duration;

use super::Event;

/// Map a terminal event onto an app event. Key releases and repeats are
/// dropped so a toggle fires once per press.
fn translate(ev: CtEvent) -> Option<Event> {
    match ev {
        CtEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CtEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
        CtEvent::Resize(..) => Some(Event::Resize),
        _ => None,
    }
}

pub fn spawn_input_thread(tx: Sender<Event>) -> JoinHandle<()> {
    std::thread::spawn(move || loop {
        if !event::poll(Duration::from_millis(100)).unwrap_or(false) {
            continue;
        }
        let Ok(ev) = event::read() else {
            continue;
        };
        if let Some(ev) = translate(ev) {
            if tx.send(ev).is_err() {
                break;
            }
        }
    })
}

/// Drives the loading spinner.
pub fn spawn_tick_thread(tx: Sender<Event>, interval: Duration) -> JoinHandle<()> {
    std::thread::spawn(move || loop {
        std::thread::sleep(interval);
        if tx.send(Event::Tick).is_err() {
            break;
        }
    })
}
