use crate::lyrics::{SearchError, SearchHit};

#[derive(Debug)]
pub enum Event {
    Input(InputEvent),
    Search(Result<SearchHit, SearchError>),
    Tick,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}
