//! A player's session: persistent collections plus the running match.
//!
//! The session is the only owner of the two persistent collections. It
//! loads them from a [`DeckStore`] once, hands copies to each match, and
//! writes them back only when a match settles. Abandoning a match never
//! touches the collections.
//!
//! In-memory state is updated before any write. If a write fails, the
//! session keeps a dirty flag and [`Session::flush`] retries it.

use log::{debug, info, warn};

use super::error::SessionError;
use super::machine::{Match, MatchEvent, MatchStep};
use super::settlement::{settle_match, Settlement};
use crate::cards::CardId;
use crate::core::{GameRng, GameRngState, MatchConfig, Side, SideMap};
use crate::decks::Deck;
use crate::storage::{DeckCodec, DeckKey, DeckStore};

/// Session state for one player against the automatic opponent.
pub struct Session<S: DeckStore> {
    store: S,
    codec: DeckCodec,
    config: MatchConfig,
    rng: GameRng,
    collections: SideMap<Deck>,
    selected: Option<Deck>,
    current: Option<Match>,
    last_settlement: Option<Settlement>,
    dirty: bool,
}

impl<S: DeckStore> Session<S> {
    /// Load a session from `store` using the default codec.
    ///
    /// Missing collections are replaced by fresh starter collections (both
    /// sides, so the two stay comparable) and saved immediately.
    pub fn load(store: S, config: MatchConfig, seed: u64) -> Result<Self, SessionError> {
        Self::load_with_codec(store, DeckCodec::default(), config, seed)
    }

    /// Load a session with an explicit blob codec.
    pub fn load_with_codec(
        store: S,
        codec: DeckCodec,
        config: MatchConfig,
        seed: u64,
    ) -> Result<Self, SessionError> {
        let mut session = Self {
            store,
            codec,
            config,
            rng: GameRng::new(seed),
            collections: SideMap::with_default(),
            selected: None,
            current: None,
            last_settlement: None,
            dirty: false,
        };

        let player = session.read(DeckKey::PlayerDeck)?;
        let opponent = session.read(DeckKey::OpponentDeck)?;
        match (player, opponent) {
            (Some(player), Some(opponent)) => {
                debug!("loaded collections: {} vs {} cards", player.len(), opponent.len());
                session.collections = SideMap::from_pair(player, opponent);
            }
            _ => session.reset_collections()?,
        }

        session.selected = session
            .read(DeckKey::SelectedGameDeck)?
            .filter(|deck| deck.ids().all(|id| session.collections[Side::Player].contains(id)));

        Ok(session)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// A side's persistent collection.
    #[must_use]
    pub fn collection(&self, side: Side) -> &Deck {
        &self.collections[side]
    }

    /// The player's saved match-deck choice, if any.
    #[must_use]
    pub fn selected_deck(&self) -> Option<&Deck> {
        self.selected.as_ref()
    }

    /// The running (or just finished) match.
    #[must_use]
    pub fn current_match(&self) -> Option<&Match> {
        self.current.as_ref()
    }

    /// Report from the last settled match.
    #[must_use]
    pub fn last_settlement(&self) -> Option<&Settlement> {
        self.last_settlement.as_ref()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Collections or the cleared deck choice have not reached the store yet.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// Checkpoint of the session RNG, for resuming a session deterministically.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Continue from a checkpoint taken with [`Session::rng_state`].
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    // === Deck management ===

    /// Regenerate both starter collections and save them.
    ///
    /// Discards the saved match-deck choice and any running match.
    pub fn reset_collections(&mut self) -> Result<(), SessionError> {
        let copies = self.config.copies_per_element;
        self.collections = SideMap::new(|_| Deck::starter(copies, &mut self.rng));
        self.current = None;
        self.selected = None;
        info!("collections reset to starter decks");
        self.persist()
    }

    /// Choose the player's cards for upcoming matches.
    ///
    /// Needs exactly `deck_size` distinct cards from the player's
    /// collection, or the whole collection if it is smaller than that.
    pub fn select_game_deck(&mut self, ids: &[CardId]) -> Result<(), SessionError> {
        let expected = self.config.deck_size.min(self.collections[Side::Player].len());
        if ids.len() != expected {
            return Err(SessionError::WrongSelectionSize {
                expected,
                actual: ids.len(),
            });
        }

        let deck = self.collections[Side::Player].subset(ids)?;
        self.write(DeckKey::SelectedGameDeck, &deck)?;
        self.selected = Some(deck);
        Ok(())
    }

    // === Match lifecycle ===

    /// Start a new match, discarding any match in progress.
    ///
    /// The player brings the selected deck (or the first `deck_size` cards
    /// of the collection); the opponent brings `deck_size` cards sampled
    /// from its collection.
    pub fn start_match(&mut self) -> Result<&Match, SessionError> {
        let deck_size = self.config.deck_size;
        let player_deck = match &self.selected {
            Some(selected) => selected.clone(),
            None => self.collections[Side::Player].take_front(deck_size),
        };
        let opponent_deck = self.collections[Side::Opponent].sample(deck_size, &mut self.rng);

        for (side, deck) in [(Side::Player, &player_deck), (Side::Opponent, &opponent_deck)] {
            if deck.is_empty() {
                return Err(SessionError::EmptyCollection(side));
            }
        }

        let rng = self.rng.fork();
        self.last_settlement = None;
        let started = Match::new(self.config.clone(), player_deck, opponent_deck, rng);
        Ok(&*self.current.insert(started))
    }

    /// Feed an event to the running match.
    ///
    /// When the event ends the match, settlement is applied to the
    /// collections, the saved deck choice is cleared, and both are written
    /// before this returns. A failed write leaves the settled state in
    /// memory; call [`Session::flush`] to retry it.
    pub fn advance(&mut self, event: MatchEvent) -> Result<MatchStep, SessionError> {
        let current = self.current.as_mut().ok_or(SessionError::NoMatch)?;
        let step = current.advance(event)?;

        if let MatchStep::Finished { outcome, .. } = &step {
            let (collections, settlement) =
                settle_match(&self.collections, &current.state().round_results, *outcome);
            self.collections = collections;
            self.selected = None;
            self.last_settlement = Some(settlement);
            self.persist()?;
        }
        Ok(step)
    }

    /// Retry a write that failed during settlement or reset.
    ///
    /// A no-op when nothing is pending.
    pub fn flush(&mut self) -> Result<(), SessionError> {
        if !self.dirty {
            return Ok(());
        }
        self.persist()
    }

    /// Drop the running match. Collections are untouched.
    pub fn abandon_match(&mut self) {
        if self.current.take().is_some() {
            info!("match abandoned");
        }
    }

    // === Storage ===

    fn read(&self, key: DeckKey) -> Result<Option<Deck>, SessionError> {
        match self.store.load(key)? {
            Some(blob) => Ok(Some(self.codec.decode(&blob)?)),
            None => Ok(None),
        }
    }

    fn write(&mut self, key: DeckKey, deck: &Deck) -> Result<(), SessionError> {
        let blob = self.codec.encode(deck)?;
        self.store.save(key, blob)?;
        Ok(())
    }

    /// Write both collections and the current deck choice.
    fn persist(&mut self) -> Result<(), SessionError> {
        self.dirty = true;
        if let Err(e) = self.write_all() {
            warn!("saving collections failed, kept in memory: {e}");
            return Err(e);
        }
        self.dirty = false;
        Ok(())
    }

    fn write_all(&mut self) -> Result<(), SessionError> {
        let (player, opponent) = self.collections.clone().into_pair();
        self.write(DeckKey::PlayerDeck, &player)?;
        self.write(DeckKey::OpponentDeck, &opponent)?;
        match self.selected.clone() {
            Some(selected) => self.write(DeckKey::SelectedGameDeck, &selected)?,
            None => self.store.remove(DeckKey::SelectedGameDeck)?,
        }
        Ok(())
    }
}
