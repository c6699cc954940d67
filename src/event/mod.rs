pub mod input;

use crate::library::error::LoadError;
use crate::library::track::Track;

#[derive(Debug)]
pub enum Event {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
    Tick,
    LibraryLoaded(Result<Vec<Track>, LoadError>),
}
