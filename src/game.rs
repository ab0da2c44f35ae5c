// src/game.rs

use crate::model::{Content, OptionStatus};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Resultado de pulsar una opción.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Partida terminada, opción ya usada o desconocida.
    Ignored,
    /// Paso correcto; `position` es 1-based.
    Correct { position: usize },
    /// Último paso correcto: la partida queda completa.
    Completed,
    /// No era el paso esperado; vuelve a `Idle` tras el retardo.
    Incorrect,
}

#[derive(Clone, Copy, Debug)]
struct StatusSlot {
    status: OptionStatus,
    stamp: u64,
}

#[derive(Clone, Debug)]
struct PendingRevert {
    option: String,
    stamp: u64,
    due: Duration,
}

/// Una ronda del juego de ordenar pasos.
///
/// El tiempo lo pone quien llama (`now`), medido desde cualquier origen
/// monótono; en la app es el reloj de frames de egui.
#[derive(Debug, Clone)]
pub struct SequencingGame {
    content: Arc<Content>,
    shuffled: Vec<String>,
    selected: Vec<String>,
    statuses: HashMap<String, StatusSlot>,
    reverts: Vec<PendingRevert>,
    next_stamp: u64,
}

impl SequencingGame {
    pub fn new_game<R: Rng + ?Sized>(content: Arc<Content>, rng: &mut R) -> Self {
        let shuffled = shuffle_steps(&content.steps, rng);
        log::info!("new sequencing round with {} steps", shuffled.len());
        Self {
            content,
            shuffled,
            selected: Vec::new(),
            statuses: HashMap::new(),
            reverts: Vec::new(),
            next_stamp: 0,
        }
    }

    /// Descarta la ronda actual (incluidos los retornos pendientes) y baraja de nuevo.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::new_game(self.content.clone(), rng);
    }

    pub fn canonical(&self) -> &[String] {
        &self.content.steps
    }

    pub fn shuffled_options(&self) -> &[String] {
        &self.shuffled
    }

    pub fn selected_order(&self) -> &[String] {
        &self.selected
    }

    pub fn total_steps(&self) -> usize {
        self.content.steps.len()
    }

    pub fn score(&self) -> usize {
        self.selected.len()
    }

    pub fn is_complete(&self) -> bool {
        self.selected.len() == self.content.steps.len()
    }

    pub fn next_expected(&self) -> Option<&str> {
        self.content.steps.get(self.selected.len()).map(String::as_str)
    }

    pub fn status(&self, option: &str) -> OptionStatus {
        self.statuses
            .get(option)
            .map(|slot| slot.status)
            .unwrap_or_default()
    }

    pub fn select_option(&mut self, option: &str, now: Duration) -> Selection {
        if self.is_complete() || !self.shuffled.iter().any(|o| o == option) {
            return Selection::Ignored;
        }
        if self.status(option) == OptionStatus::Used {
            return Selection::Ignored;
        }

        if self.next_expected() == Some(option) {
            self.set_status(option, OptionStatus::Used);
            self.selected.push(option.to_owned());
            if self.is_complete() {
                log::info!("sequencing round complete, score {}", self.score());
                Selection::Completed
            } else {
                Selection::Correct {
                    position: self.selected.len(),
                }
            }
        } else {
            let stamp = self.set_status(option, OptionStatus::Incorrect);
            self.reverts.push(PendingRevert {
                option: option.to_owned(),
                stamp,
                due: now + self.content.settings.revert_delay(),
            });
            Selection::Incorrect
        }
    }

    /// Aplica los retornos a `Idle` que ya vencieron. Un retorno solo se
    /// aplica si la opción conserva el mismo sello y sigue `Incorrect`.
    pub fn tick(&mut self, now: Duration) -> usize {
        let (due, waiting): (Vec<_>, Vec<_>) =
            self.reverts.drain(..).partition(|r| r.due <= now);
        self.reverts = waiting;

        let mut reverted = 0;
        for revert in due {
            if let Some(slot) = self.statuses.get_mut(&revert.option) {
                if slot.stamp == revert.stamp && slot.status == OptionStatus::Incorrect {
                    slot.status = OptionStatus::Idle;
                    reverted += 1;
                }
            }
        }
        reverted
    }

    /// Momento del próximo retorno pendiente, para programar el repintado.
    pub fn next_revert_at(&self) -> Option<Duration> {
        self.reverts.iter().map(|r| r.due).min()
    }

    fn set_status(&mut self, option: &str, status: OptionStatus) -> u64 {
        self.next_stamp += 1;
        let stamp = self.next_stamp;
        self.statuses
            .insert(option.to_owned(), StatusSlot { status, stamp });
        stamp
    }
}

/// Baraja uniforme (Fisher-Yates) que repite mientras salga el orden canónico.
pub fn shuffle_steps<R: Rng + ?Sized>(steps: &[String], rng: &mut R) -> Vec<String> {
    // Con 0 o 1 pasos no hay otra permutación posible
    if steps.len() < 2 {
        return steps.to_vec();
    }
    loop {
        let mut shuffled = steps.to_vec();
        shuffled.shuffle(rng);
        if shuffled != steps {
            return shuffled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_content_embedded;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const DELAY: Duration = Duration::from_millis(800);

    fn content() -> Arc<Content> {
        Arc::new(read_content_embedded().unwrap())
    }

    fn game(seed: u64) -> SequencingGame {
        SequencingGame::new_game(content(), &mut StdRng::seed_from_u64(seed))
    }

    fn wrong_option(game: &SequencingGame) -> String {
        let expected = game.next_expected().unwrap();
        game.shuffled_options()
            .iter()
            .find(|o| o.as_str() != expected && game.status(o) != OptionStatus::Used)
            .unwrap()
            .clone()
    }

    #[test]
    fn shuffle_is_a_non_identity_permutation() {
        let steps = content().steps.clone();
        let mut sorted_steps = steps.clone();
        sorted_steps.sort();
        for seed in 0..200 {
            let shuffled = shuffle_steps(&steps, &mut StdRng::seed_from_u64(seed));
            assert_eq!(shuffled.len(), steps.len());
            assert_ne!(shuffled, steps);
            let mut sorted = shuffled.clone();
            sorted.sort();
            assert_eq!(sorted, sorted_steps);
        }
    }

    #[test]
    fn two_step_shuffle_always_swaps() {
        let steps = vec!["a".to_owned(), "b".to_owned()];
        for seed in 0..50 {
            let shuffled = shuffle_steps(&steps, &mut StdRng::seed_from_u64(seed));
            assert_eq!(shuffled, ["b", "a"]);
        }
    }

    #[test]
    fn new_game_starts_idle() {
        let game = game(1);
        assert!(game.selected_order().is_empty());
        assert_eq!(game.score(), 0);
        assert!(!game.is_complete());
        assert!(game
            .shuffled_options()
            .iter()
            .all(|o| game.status(o) == OptionStatus::Idle));
        assert_eq!(game.next_revert_at(), None);
    }

    #[test]
    fn canonical_order_completes_the_round() {
        let mut game = game(2);
        let steps = game.canonical().to_vec();
        for (i, step) in steps.iter().enumerate() {
            let outcome = game.select_option(step, Duration::ZERO);
            if i + 1 == steps.len() {
                assert_eq!(outcome, Selection::Completed);
            } else {
                assert_eq!(outcome, Selection::Correct { position: i + 1 });
            }
        }
        assert!(game.is_complete());
        assert_eq!(game.score(), steps.len());
        assert_eq!(game.selected_order(), steps.as_slice());
        assert!(steps.iter().all(|s| game.status(s) == OptionStatus::Used));
    }

    #[test]
    fn wrong_tap_is_transient() {
        let mut game = game(3);
        let wrong = wrong_option(&game);
        let t0 = Duration::from_secs(5);

        assert_eq!(game.select_option(&wrong, t0), Selection::Incorrect);
        assert_eq!(game.status(&wrong), OptionStatus::Incorrect);
        assert!(game.selected_order().is_empty());
        assert_eq!(game.score(), 0);
        assert_eq!(game.next_revert_at(), Some(t0 + DELAY));

        assert_eq!(game.tick(t0 + DELAY - Duration::from_millis(1)), 0);
        assert_eq!(game.status(&wrong), OptionStatus::Incorrect);

        assert_eq!(game.tick(t0 + DELAY), 1);
        assert_eq!(game.status(&wrong), OptionStatus::Idle);
        assert_eq!(game.next_revert_at(), None);
    }

    #[test]
    fn used_option_is_idempotent() {
        let mut game = game(4);
        let first = game.canonical()[0].clone();
        game.select_option(&first, Duration::ZERO);

        let before = game.selected_order().to_vec();
        assert_eq!(game.select_option(&first, Duration::ZERO), Selection::Ignored);
        assert_eq!(game.selected_order(), before.as_slice());
        assert_eq!(game.score(), 1);
        assert_eq!(game.status(&first), OptionStatus::Used);
    }

    #[test]
    fn taps_after_completion_are_ignored() {
        let mut game = game(5);
        for step in game.canonical().to_vec() {
            game.select_option(&step, Duration::ZERO);
        }
        let last = game.canonical().last().unwrap().clone();
        assert_eq!(game.select_option(&last, Duration::ZERO), Selection::Ignored);
        assert_eq!(game.select_option("not an option", Duration::ZERO), Selection::Ignored);
        assert_eq!(game.score(), game.total_steps());
    }

    #[test]
    fn unknown_option_is_ignored() {
        let mut game = game(6);
        assert_eq!(game.select_option("Wash the car", Duration::ZERO), Selection::Ignored);
        assert_eq!(game.status("Wash the car"), OptionStatus::Idle);
        assert_eq!(game.next_revert_at(), None);
    }

    #[test]
    fn stale_revert_does_not_touch_a_used_option() {
        let mut game = game(7);
        let steps = game.canonical().to_vec();

        // El paso 2 es incorrecto ahora, pero pasa a ser el esperado enseguida
        assert_eq!(game.select_option(&steps[1], Duration::ZERO), Selection::Incorrect);
        game.select_option(&steps[0], Duration::from_millis(100));
        assert_eq!(
            game.select_option(&steps[1], Duration::from_millis(200)),
            Selection::Correct { position: 2 }
        );

        assert_eq!(game.tick(DELAY), 0);
        assert_eq!(game.status(&steps[1]), OptionStatus::Used);
    }

    #[test]
    fn second_wrong_tap_restarts_the_revert_window() {
        let mut game = game(8);
        let wrong = wrong_option(&game);

        game.select_option(&wrong, Duration::ZERO);
        game.select_option(&wrong, Duration::from_millis(500));

        // El primer retorno vence pero ya no corresponde al sello actual
        assert_eq!(game.tick(DELAY), 0);
        assert_eq!(game.status(&wrong), OptionStatus::Incorrect);

        assert_eq!(game.tick(Duration::from_millis(500) + DELAY), 1);
        assert_eq!(game.status(&wrong), OptionStatus::Idle);
    }

    #[test]
    fn reset_drops_pending_reverts_and_progress() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut game = SequencingGame::new_game(content(), &mut rng);
        let first = game.canonical()[0].clone();
        game.select_option(&first, Duration::ZERO);
        let wrong = wrong_option(&game);
        game.select_option(&wrong, Duration::ZERO);

        game.reset(&mut rng);
        assert!(game.selected_order().is_empty());
        assert_eq!(game.score(), 0);
        assert_eq!(game.status(&first), OptionStatus::Idle);
        assert_eq!(game.status(&wrong), OptionStatus::Idle);
        assert_eq!(game.next_revert_at(), None);
        assert_ne!(game.shuffled_options(), game.canonical());
    }

    #[test]
    fn random_play_keeps_prefix_invariants() {
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = SequencingGame::new_game(content(), &mut rng);
            let options = game.shuffled_options().to_vec();
            let mut now = Duration::ZERO;

            for _ in 0..400 {
                let pick = &options[rng.random_range(0..options.len())];
                game.select_option(pick, now);
                now += Duration::from_millis(rng.random_range(0..400));
                game.tick(now);

                let n = game.selected_order().len();
                assert_eq!(game.score(), n);
                assert_eq!(game.selected_order(), &game.canonical()[..n]);
                assert_eq!(game.is_complete(), n == game.total_steps());
                let used = options
                    .iter()
                    .filter(|o| game.status(o) == OptionStatus::Used)
                    .count();
                assert_eq!(used, n);
            }
        }
    }
}
