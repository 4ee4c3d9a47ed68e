pub mod actions;
pub mod events;
pub mod session;
pub mod state;

use crate::config::Config;
use crate::favorites::{FavoritesStore, Toggled};
use crate::input;
use crate::lyrics::{OvhClient, SearchError, SearchHit, SearchRequest, search};
use crate::storage::Storage;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::Event;
use session::{FavoriteLoad, Session};
use state::{AppState, Focus, Toast};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Lines moved by PageUp/PageDown in the lyrics pane.
const LYRICS_PAGE: u16 = 10;

/// Build a session from config: HTTP client, storage and saved favorites.
///
/// Unreadable favorites are logged and replaced by an empty list.
pub fn open_session(cfg: &Config) -> anyhow::Result<Session<Storage>> {
    let lookup = OvhClient::new(&cfg.api)?;
    let storage = Storage::open(&cfg.paths.database())?;

    let mut favorites = FavoritesStore::new(storage);
    if let Err(e) = favorites.load() {
        tracing::warn!("could not read saved favorites, starting empty: {e}");
    }

    Ok(Session::new(Arc::new(lookup), favorites))
}

pub struct App {
    cfg: Config,
    state: AppState,
    session: Session<Storage>,
}

impl App {
    pub fn new(cfg: Config) -> anyhow::Result<Self> {
        let session = open_session(&cfg)?;
        Ok(Self {
            cfg,
            state: AppState::new(),
            session,
        })
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(64);

        input::spawn_input_task(tx.clone(), self.cfg.input.mouse);

        tui::draw(terminal, &mut self.state, &self.session)?;

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action, &tx);
                    }
                }
                Event::Search(result) => self.on_search_finished(result),
                Event::Tick => {
                    self.state.tick = self.state.tick.wrapping_add(1);
                    // Only the spinner and toasts change on their own.
                    if !self.session.loading() && self.state.toast.is_none() {
                        continue;
                    }
                }
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &mut self.state, &self.session)?;
        }

        Ok(())
    }

    fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::Submit => {
                let (artist, title) = (self.state.artist_input.clone(), self.state.title_input.clone());
                match self.session.begin_search(&artist, &title) {
                    Ok(request) => self.spawn_search(request, tx),
                    Err(SearchError::Busy) => {}
                    Err(e) => self.state.status = e.to_string(),
                }
            }
            Action::ToggleFavorite => match self.session.toggle_favorite() {
                Some(Toggled::Added) => {
                    self.state.toast = Some(Toast::success("Added to favorites"));
                }
                Some(Toggled::Removed) => {
                    self.state.toast = Some(Toast::success("Removed from favorites"));
                    self.state.favorites_list.clamp(self.session.favorites().len());
                }
                None => {
                    self.state.toast = Some(Toast::error("Nothing to save yet"));
                }
            },
            Action::OpenSelected => self.open_selected_favorite(tx),
            Action::RemoveSelected => {
                let index = self.state.favorites_list.selected;
                if let Some(song) = self.session.remove_favorite(index) {
                    self.state.toast = Some(Toast::success(format!("Removed {}", song.heading())));
                    self.state.favorites_list.clamp(self.session.favorites().len());
                }
            }
            Action::Clear => {
                // Inputs stay locked until the running search reports back.
                if !self.session.loading() {
                    self.session.clear();
                    self.state.clear_inputs();
                    self.state.status.clear();
                }
            }
            _ => self.reduce(action),
        }
    }

    fn spawn_search(&mut self, request: SearchRequest, tx: &mpsc::Sender<Event>) {
        self.state.status = format!("Searching: {} - {}", request.artist, request.title);
        self.state.lyrics_scroll = 0;

        let lookup = self.session.lookup();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = search::run(lookup.as_ref(), &request).await;
            let _ = tx.send(Event::Search(result)).await;
        });
    }

    fn on_search_finished(&mut self, result: Result<SearchHit, SearchError>) {
        self.session.finish_search(&result);
        self.state.status = match &result {
            Ok(hit) if hit.matched_title != hit.song.title => {
                format!("Found as \"{}\"", hit.matched_title)
            }
            Ok(_) => String::new(),
            Err(e) => e.to_string(),
        };
    }

    fn open_selected_favorite(&mut self, tx: &mpsc::Sender<Event>) {
        let index = self.state.favorites_list.selected;
        match self.session.load_favorite(index) {
            Ok(FavoriteLoad::Cached(song)) => {
                self.state.artist_input = song.artist;
                self.state.title_input = song.title;
                self.state.lyrics_scroll = 0;
                self.state.status.clear();
            }
            Ok(FavoriteLoad::Search(request)) => {
                self.state.artist_input = request.artist.clone();
                self.state.title_input = request.title.clone();
                self.spawn_search(request, tx);
            }
            Ok(FavoriteLoad::Missing) | Err(SearchError::Busy) => {}
            Err(e) => self.state.status = e.to_string(),
        }
    }

    fn reduce(&mut self, action: Action) {
        let loading = self.session.loading();
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::FocusNext => self.state.focus = self.state.focus.next(),
            Action::FocusPrev => self.state.focus = self.state.focus.prev(),
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::InputChar(c) if !loading => {
                if let Some(input) = self.state.focused_input_mut() {
                    input.push(c);
                }
            }
            Action::Backspace if !loading => {
                if let Some(input) = self.state.focused_input_mut() {
                    input.pop();
                }
            }
            Action::ClearInput if !loading => {
                if let Some(input) = self.state.focused_input_mut() {
                    input.clear();
                }
            }
            Action::ListUp => {
                self.state.favorites_list.select_prev();
            }
            Action::ListDown => {
                let len = self.session.favorites().len();
                self.state.favorites_list.select_next(len);
            }
            Action::ScrollUp => self.state.lyrics_scroll = self.state.lyrics_scroll.saturating_sub(1),
            Action::ScrollDown => self.state.lyrics_scroll = self.state.lyrics_scroll.saturating_add(1),
            Action::PageUp => {
                self.state.lyrics_scroll = self.state.lyrics_scroll.saturating_sub(LYRICS_PAGE);
            }
            Action::PageDown => {
                self.state.lyrics_scroll = self.state.lyrics_scroll.saturating_add(LYRICS_PAGE);
            }
            _ => {}
        }
        if self.state.focus == Focus::Favorites {
            self.state.favorites_list.clamp(self.session.favorites().len());
        }
    }
}
