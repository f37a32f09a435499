use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    display::FillerLetters,
    game::GameSession,
    models::{Coordinate, Outcome},
    protocol::messages::{ClientMessage, ServerMessage, WordInfo},
};

/// Presentation side of one game: the session plus what the player sees
pub struct Frontend<R: Rng = StdRng> {
    session: GameSession<R>,
    filler: FillerLetters,
    filler_rng: StdRng,
    auto_restart: bool,
}

impl<R: Rng> Frontend<R> {
    pub fn new(session: GameSession<R>, mut filler_rng: StdRng, auto_restart: bool) -> Self {
        let filler = FillerLetters::generate(session.size(), &mut filler_rng);
        Self {
            session,
            filler,
            filler_rng,
            auto_restart,
        }
    }

    /// Frontend whose filler letters come from the thread RNG
    pub fn with_random_filler(session: GameSession<R>, auto_restart: bool) -> Self {
        Self::new(session, StdRng::from_rng(&mut rand::rng()), auto_restart)
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    /// Parse one line of input and produce the replies for it.
    /// Failures become `Error` messages instead of ending the game.
    pub fn handle_line(&mut self, line: &str) -> Vec<ServerMessage> {
        match serde_json::from_str::<ClientMessage>(line) {
            Ok(client_msg) => match self.handle_client_message(client_msg) {
                Ok(replies) => replies,
                Err(e) => {
                    tracing::warn!("Error handling message: {}", e);
                    vec![ServerMessage::Error {
                        message: e.to_string(),
                    }]
                }
            },
            Err(e) => {
                tracing::error!("Failed to parse message: {}", e);
                vec![ServerMessage::Error {
                    message: format!("Invalid message format: {}", e),
                }]
            }
        }
    }

    /// Handle individual client messages
    pub fn handle_client_message(&mut self, msg: ClientMessage) -> anyhow::Result<Vec<ServerMessage>> {
        let replies = match msg {
            ClientMessage::NewGame => {
                tracing::info!("Player starting a new game");
                self.new_game()?;
                vec![self.game_state()]
            }
            ClientMessage::SelectCell { row, col } => {
                tracing::debug!("Player toggling cell ({}, {})", row, col);
                let selection = self.session.select_cell(Coordinate::new(row, col))?;
                vec![ServerMessage::SelectionUpdated {
                    selection: selection.to_vec(),
                }]
            }
            ClientMessage::ConfirmSelection => self.confirm(),
            ClientMessage::ClearSelection => {
                self.session.clear_selection();
                vec![ServerMessage::SelectionUpdated {
                    selection: self.session.selection().to_vec(),
                }]
            }
            ClientMessage::GetState => vec![self.game_state()],
        };

        Ok(replies)
    }

    /// Apply a confirm. Replies already earned are kept even if the
    /// follow-up restart fails.
    fn confirm(&mut self) -> Vec<ServerMessage> {
        let selection = self.session.selection().to_vec();
        let confirmation = self.session.confirm_selection();

        let mut replies = match &confirmation.outcome {
            Outcome::Empty => vec![ServerMessage::NothingSelected],
            Outcome::AlreadyFound(word) => vec![ServerMessage::AlreadyFound { word: word.clone() }],
            Outcome::Incorrect => vec![ServerMessage::IncorrectWord {
                cells: self.session.flagged_cells().to_vec(),
            }],
            Outcome::Correct(word) => vec![ServerMessage::WordFound {
                word: word.clone(),
                cells: selection,
            }],
        };

        if confirmation.game_won() {
            replies.push(ServerMessage::GameWon);
            if self.auto_restart {
                match self.new_game() {
                    Ok(()) => replies.push(self.game_state()),
                    Err(e) => {
                        tracing::error!("Failed to start a new game after the win: {}", e);
                        replies.push(ServerMessage::Error {
                            message: e.to_string(),
                        });
                    }
                }
            }
        }

        replies
    }

    fn new_game(&mut self) -> anyhow::Result<()> {
        self.session.start_new_game()?;
        self.filler = FillerLetters::generate(self.session.size(), &mut self.filler_rng);
        Ok(())
    }

    /// Snapshot of everything a client needs to draw the board
    pub fn game_state(&self) -> ServerMessage {
        let found = self.session.found_words();
        let mut found_cells: Vec<Coordinate> = self.session.found_cells().into_iter().collect();
        found_cells.sort();

        ServerMessage::GameState {
            size: self.session.size(),
            rows: self.filler.render_rows(self.session.grid()),
            words: self
                .session
                .word_list()
                .iter()
                .map(|word| WordInfo {
                    word: word.to_string(),
                    found: found.contains(word),
                })
                .collect(),
            selection: self.session.selection().to_vec(),
            found_cells,
            status: self.session.status(),
        }
    }
}
