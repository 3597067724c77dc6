//! Desktop UI: category selection, flashcard study, quiz and results screens.
//! Screens only render session state and forward input to the session methods.

use eframe::egui;
use egui::{Color32, RichText};
use std::time::Instant;
use vocab_cards::config::AppConfig;
use vocab_cards::export::json::export_category_to_path;
use vocab_cards::models::category::{category_info, search_categories};
use vocab_cards::speech::{LogSpeaker, Pronouncer};
use vocab_cards::{DeckSession, Direction, QuizGenerator, QuizSession, VocabError, VocabularyStore};

const CORRECT_COLOR: Color32 = Color32::from_rgb(46, 160, 67);
const INCORRECT_COLOR: Color32 = Color32::from_rgb(207, 34, 46);

/// Application screen states
#[derive(Default)]
enum AppScreen {
    #[default]
    CategorySelection,
    Learning,
    Quiz,
}

#[derive(Clone, Copy, Default, PartialEq, Eq)]
enum Mode {
    #[default]
    Learn,
    Quiz,
}

/// Input collected during a frame, applied after rendering.
#[derive(Clone, Copy, Default)]
struct LearnActions {
    flip: bool,
    previous: bool,
    next: bool,
    shuffle: bool,
    toggle_direction: bool,
    toggle_examples: bool,
    pronounce: bool,
    answer: Option<bool>,
    back: bool,
}

#[derive(Clone, Copy, Default)]
struct QuizActions {
    choose: Option<usize>,
    next: bool,
    retry: bool,
    back: bool,
}

pub struct VocabApp {
    store: VocabularyStore,
    config: AppConfig,
    pronouncer: Pronouncer,

    current_screen: AppScreen,
    mode: Mode,
    learn_direction: Direction,
    quiz_direction: Direction,
    search_query: String,

    deck: Option<DeckSession>,
    advance_at: Option<Instant>,
    show_examples: bool,

    quiz: Option<QuizSession>,

    show_message_dialog: bool,
    message: String,
}

impl eframe::App for VocabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_pending_advance(ctx);

        match self.current_screen {
            AppScreen::CategorySelection => self.render_selection_screen(ctx),
            AppScreen::Learning => self.render_learning_screen(ctx),
            AppScreen::Quiz => self.render_quiz_screen(ctx),
        }

        if self.show_message_dialog {
            egui::Window::new("Dutch Flashcards")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&self.message);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.show_message_dialog = false;
                    }
                });
        }
    }
}

impl VocabApp {
    pub fn new(store: VocabularyStore, config: AppConfig) -> Self {
        Self {
            store,
            pronouncer: Pronouncer::new(Box::new(LogSpeaker::default())),
            current_screen: AppScreen::CategorySelection,
            mode: Mode::Learn,
            learn_direction: config.learn_direction,
            quiz_direction: config.quiz_direction,
            search_query: String::new(),
            deck: None,
            advance_at: None,
            show_examples: false,
            quiz: None,
            show_message_dialog: false,
            message: String::new(),
            config,
        }
    }

    fn show_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.show_message_dialog = true;
    }

    /// Finishes the auto-advance scheduled by scoring a card, once its delay is over.
    fn run_pending_advance(&mut self, ctx: &egui::Context) {
        let Some(due) = self.advance_at else {
            return;
        };
        let now = Instant::now();
        if now >= due {
            if let Some(deck) = &mut self.deck {
                deck.complete_pending_advance();
            }
            self.advance_at = None;
        } else {
            ctx.request_repaint_after(due - now);
        }
    }

    /// Renders the category list with mode, direction and search controls
    fn render_selection_screen(&mut self, ctx: &egui::Context) {
        let mut action_start: Option<String> = None;
        let mut action_export: Option<String> = None;

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.search_query.clear();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("🇳🇱 Dutch Flashcards");

            if let Some(outcome) = self.store.load_outcome() {
                if outcome.is_fallback() {
                    ui.colored_label(
                        Color32::from_rgb(191, 135, 0),
                        "Could not load data.json, using the built-in vocabulary.",
                    );
                }
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.mode, Mode::Learn, "📖 Learn");
                ui.selectable_value(&mut self.mode, Mode::Quiz, "📝 Quiz");
            });

            let direction = match self.mode {
                Mode::Learn => &mut self.learn_direction,
                Mode::Quiz => &mut self.quiz_direction,
            };
            ui.horizontal(|ui| {
                for option in [Direction::SourceToTarget, Direction::TargetToSource] {
                    ui.selectable_value(
                        direction,
                        option,
                        format!("{} {}", option.indicator(), option.label()),
                    );
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("🔍");
                ui.text_edit_singleline(&mut self.search_query);
                if !self.search_query.is_empty() && ui.button("✖").clicked() {
                    self.search_query.clear();
                }
            });

            let categories = search_categories(&self.store, &self.search_query);
            if !self.search_query.trim().is_empty() {
                ui.label(format!("{} categories found", categories.len()));
            }
            if categories.is_empty() {
                ui.label("No categories found matching your search.");
            }

            ui.add_space(10.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                for info in &categories {
                    let count = self.store.category_count(&info.id);
                    ui.horizontal(|ui| {
                        let label = format!(
                            "{} {} ({} word{})",
                            info.icon,
                            info.display_name,
                            count,
                            if count == 1 { "" } else { "s" }
                        );
                        if ui.button(label).clicked() {
                            action_start = Some(info.id.clone());
                        }
                        if ui.small_button("💾").on_hover_text("Export as JSON").clicked() {
                            action_export = Some(info.id.clone());
                        }
                    });
                }
            });
        });

        // Execute deferred actions
        if let Some(id) = action_start {
            match self.mode {
                Mode::Learn => self.start_learning(&id),
                Mode::Quiz => self.start_quiz(&id, self.quiz_direction),
            }
        }
        if let Some(id) = action_export {
            self.handle_export(&id);
        }
    }

    fn start_learning(&mut self, category_id: &str) {
        match DeckSession::select_category(&self.store, category_id, self.learn_direction) {
            Ok(deck) => {
                self.deck = Some(deck);
                self.advance_at = None;
                self.current_screen = AppScreen::Learning;
            }
            Err(e) => {
                log::warn!("Cannot start study session: {}", e);
                self.show_message(e.to_string());
            }
        }
    }

    fn start_quiz(&mut self, category_id: &str, direction: Direction) {
        let generated =
            QuizGenerator::new(&self.store).generate(category_id, direction, &mut rand::rng());
        match generated {
            Ok(questions) => {
                self.quiz = Some(QuizSession::new(category_id, direction, questions));
                self.current_screen = AppScreen::Quiz;
            }
            Err(VocabError::InsufficientWords { required, .. }) => {
                self.show_message(format!(
                    "This category needs at least {} words to create a quiz.",
                    required
                ));
            }
            Err(e) => self.show_message(e.to_string()),
        }
    }

    fn back_to_categories(&mut self) {
        self.deck = None;
        self.quiz = None;
        self.advance_at = None;
        self.current_screen = AppScreen::CategorySelection;
    }

    fn learn_keyboard_actions(ctx: &egui::Context) -> LearnActions {
        let mut actions = LearnActions::default();
        if ctx.wants_keyboard_input() {
            return actions;
        }
        ctx.input(|i| {
            actions.previous = i.key_pressed(egui::Key::ArrowLeft);
            actions.next = i.key_pressed(egui::Key::ArrowRight);
            actions.flip = i.key_pressed(egui::Key::Space);
            actions.toggle_direction = i.key_pressed(egui::Key::T);
            actions.toggle_examples = i.key_pressed(egui::Key::E);
            actions.pronounce = i.key_pressed(egui::Key::P);
            actions.back = i.key_pressed(egui::Key::Escape);
            if i.key_pressed(egui::Key::Num1) {
                actions.answer = Some(false);
            } else if i.key_pressed(egui::Key::Num2) {
                actions.answer = Some(true);
            }
        });
        actions
    }

    /// Renders the flashcard study screen
    fn render_learning_screen(&mut self, ctx: &egui::Context) {
        let mut actions = Self::learn_keyboard_actions(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(deck) = &self.deck else {
                return;
            };
            let info = category_info(&deck.category_id);

            ui.horizontal(|ui| {
                ui.heading(format!("{} {}", info.icon, info.display_name));
                if ui.button("⬅ Categories").clicked() {
                    actions.back = true;
                }
            });

            ui.horizontal(|ui| {
                ui.label(format!(
                    "{} {}",
                    deck.direction().indicator(),
                    deck.direction().label()
                ));
                if ui.button("⇄").on_hover_text("Toggle direction (T)").clicked() {
                    actions.toggle_direction = true;
                }
            });

            if deck.is_empty() {
                ui.add_space(20.0);
                ui.label("This category has no words.");
                return;
            }

            ui.label(format!("Card {} / {}", deck.position() + 1, deck.len()));
            ui.add(egui::ProgressBar::new(deck.progress_fraction()));

            ui.add_space(20.0);

            if let Some(word) = deck.current_word() {
                let front = deck.direction().prompt_of(word);
                let back = deck.direction().answer_of(word);

                ui.group(|ui| {
                    ui.set_min_height(200.0);
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0);
                        ui.label(RichText::new(front).size(32.0).strong());
                        ui.add_space(20.0);

                        if deck.is_revealed() {
                            ui.label(RichText::new(back).size(24.0));
                        } else {
                            ui.label("(Press Space or 'Flip' to reveal)");
                        }

                        ui.add_space(10.0);
                        let tags: Vec<&str> = [&word.part_of_speech, &word.difficulty_level]
                            .into_iter()
                            .filter_map(|tag| tag.as_deref())
                            .collect();
                        if !tags.is_empty() {
                            ui.label(RichText::new(tags.join(" · ")).italics());
                        }
                    });
                });
            }

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui.button("◀ Previous").clicked() {
                    actions.previous = true;
                }
                if ui.button("🔄 Flip").clicked() {
                    actions.flip = true;
                }
                if ui.button("Next ▶").clicked() {
                    actions.next = true;
                }
                if ui.button("🔀 Shuffle").clicked() {
                    actions.shuffle = true;
                }
                if ui.button("🔊 Pronounce").clicked() {
                    actions.pronounce = true;
                }
            });

            if deck.is_revealed() && !deck.has_pending_advance() {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui
                        .button(RichText::new("✗ Incorrect (1)").color(INCORRECT_COLOR))
                        .clicked()
                    {
                        actions.answer = Some(false);
                    }
                    if ui
                        .button(RichText::new("✓ Correct (2)").color(CORRECT_COLOR))
                        .clicked()
                    {
                        actions.answer = Some(true);
                    }
                });
            }

            ui.add_space(10.0);
            ui.label(format!(
                "Correct: {} / {} ({}%)",
                deck.correct_count(),
                deck.total_attempts(),
                deck.accuracy_percentage()
            ));

            ui.separator();

            let mut show_examples = self.show_examples;
            if ui.checkbox(&mut show_examples, "Show examples (E)").changed() {
                actions.toggle_examples = true;
            }

            if self.show_examples {
                if let Some(word) = deck.current_word() {
                    if word.examples.is_empty() {
                        ui.label("No example sentences available for this word.");
                    }
                    for example in &word.examples {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&example.source_sentence).strong());
                            if ui.small_button("🔊").clicked() {
                                self.pronouncer.pronounce(&example.source_sentence);
                            }
                        });
                        ui.label(&example.target_sentence);
                        ui.add_space(5.0);
                    }
                }
            }
        });

        self.apply_learn_actions(ctx, actions);
    }

    fn apply_learn_actions(&mut self, ctx: &egui::Context, actions: LearnActions) {
        if actions.back {
            self.back_to_categories();
            return;
        }
        if actions.toggle_examples {
            self.show_examples = !self.show_examples;
        }

        let Some(deck) = &mut self.deck else {
            return;
        };

        if actions.toggle_direction {
            deck.toggle_direction();
        }
        if actions.flip {
            deck.toggle_reveal();
        }
        if actions.previous {
            deck.previous();
        }
        if actions.next {
            deck.next();
        }
        if actions.shuffle {
            deck.shuffle(&mut rand::rng());
        }
        if actions.pronounce {
            if let Some(word) = deck.current_word() {
                self.pronouncer.pronounce(&word.source);
            }
        }
        if let Some(is_correct) = actions.answer {
            if deck.record_answer(is_correct) {
                let delay = self.config.auto_advance_delay;
                self.advance_at = Some(Instant::now() + delay);
                ctx.request_repaint_after(delay);
            }
        }
        if !deck.has_pending_advance() {
            self.advance_at = None;
        }
    }

    fn quiz_keyboard_actions(ctx: &egui::Context) -> QuizActions {
        let mut actions = QuizActions::default();
        if ctx.wants_keyboard_input() {
            return actions;
        }
        ctx.input(|i| {
            for (index, key) in [egui::Key::Num1, egui::Key::Num2, egui::Key::Num3]
                .into_iter()
                .enumerate()
            {
                if i.key_pressed(key) {
                    actions.choose = Some(index);
                }
            }
            actions.next = i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Space);
            actions.back = i.key_pressed(egui::Key::Escape);
        });
        actions
    }

    /// Renders the running quiz, or its results once every question is answered
    fn render_quiz_screen(&mut self, ctx: &egui::Context) {
        let mut actions = Self::quiz_keyboard_actions(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(quiz) = &self.quiz else {
                return;
            };
            let info = category_info(&quiz.category_id);

            ui.horizontal(|ui| {
                ui.heading(format!("{} {} Quiz", info.icon, info.display_name));
                if ui.button("⬅ Categories").clicked() {
                    actions.back = true;
                }
            });
            ui.separator();

            if let Some(summary) = quiz.result_summary() {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.heading("🏆 Quiz Complete!");
                    ui.label(RichText::new(format!("{}%", summary.percentage)).size(40.0).strong());
                    ui.label(format!("{} / {} correct", summary.score, summary.total));
                    ui.colored_label(CORRECT_COLOR, format!("Correct: {}", summary.score));
                    ui.colored_label(INCORRECT_COLOR, format!("Incorrect: {}", summary.incorrect));
                    ui.add_space(20.0);
                    if ui.button("🔁 Retry Quiz").clicked() {
                        actions.retry = true;
                    }
                    if ui.button("Back to Categories").clicked() {
                        actions.back = true;
                    }
                });
                return;
            }

            let Some(question) = quiz.current_question() else {
                return;
            };
            let (number, total) = quiz.progress();
            ui.label(format!("Question {} / {}    Score: {}", number, total, quiz.score()));

            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.label(quiz.direction.quiz_prompt());
                ui.label(RichText::new(&question.prompt).size(32.0).strong());
            });
            ui.add_space(20.0);

            let selected = quiz.selected_answer();
            for (index, option) in question.options.iter().enumerate() {
                let mut text = RichText::new(format!("{}. {}", index + 1, option)).size(18.0);
                if selected.is_some() {
                    if question.is_correct(option) {
                        text = text.color(CORRECT_COLOR).strong();
                    } else if selected == Some(option.as_str()) {
                        text = text.color(INCORRECT_COLOR);
                    }
                }
                let button =
                    egui::Button::new(text).min_size(egui::vec2(ui.available_width(), 36.0));
                if ui.add(button).clicked() {
                    actions.choose = Some(index);
                }
            }

            if let Some(is_correct) = quiz.last_answer_correct() {
                ui.add_space(10.0);
                if is_correct {
                    ui.colored_label(CORRECT_COLOR, "✓ Correct!");
                } else {
                    ui.colored_label(INCORRECT_COLOR, "✗ Incorrect!");
                    ui.label(format!("Correct answer: {}", question.correct_answer));
                }

                let next_label = if quiz.is_last_question() {
                    "View Results 🏆"
                } else {
                    "Next Question ➡"
                };
                if ui.button(next_label).clicked() {
                    actions.next = true;
                }
            }
        });

        self.apply_quiz_actions(actions);
    }

    fn apply_quiz_actions(&mut self, actions: QuizActions) {
        if actions.back {
            self.back_to_categories();
            return;
        }
        if actions.retry {
            if let Some(quiz) = &self.quiz {
                let (category_id, direction) = (quiz.category_id.clone(), quiz.direction);
                self.start_quiz(&category_id, direction);
            }
            return;
        }

        let Some(quiz) = &mut self.quiz else {
            return;
        };
        if let Some(index) = actions.choose {
            quiz.answer_by_index(index);
        } else if actions.next {
            quiz.next();
        }
    }

    /// Handles category export to JSON file
    fn handle_export(&mut self, category_id: &str) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(format!("{}.json", category_id))
            .add_filter("JSON files", &["json"])
            .save_file()
        else {
            return;
        };

        match export_category_to_path(&self.store, category_id, &path) {
            Ok(count) => self.show_message(format!(
                "Category '{}' exported successfully ({} words)!",
                category_info(category_id).display_name,
                count
            )),
            Err(e) => self.show_message(format!("Export failed: {}", e)),
        }
    }
}
