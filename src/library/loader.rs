use crossbeam_channel::Sender;
use std::thread::JoinHandle;

use tracing::debug;

use crate::event::Event;

use super::{fetch_all_tracks, LibrarySource};

/// Load the library on a worker thread and deliver the result as one event.
pub fn spawn_loader(source: LibrarySource, event_tx: Sender<Event>) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let result = fetch_all_tracks(&source);
        if event_tx.send(Event::LibraryLoaded(result)).is_err() {
            debug!("event loop gone before library finished loading");
        }
    })
}
