//! Main application UI.
//! Draws the deck view, pagination bar and card form, and feeds clicks back as messages.

use eframe::egui;
use flashcard_deck::config::ViewConfig;
use flashcard_deck::pagination::PageControl;
use flashcard_deck::source::{DeckSource, PendingLoad};
use flashcard_deck::view::{CardView, LoadStatus};
use flashcard_deck::{DeckView, Message};
use tracing::info;

const CARD_HEIGHT: f32 = 90.0;

/// Main application state
pub struct DeckApp {
    view: DeckView,
    source: DeckSource,
    pending: Option<PendingLoad>,
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        // We store actions to execute after UI rendering to avoid borrowing conflicts
        let mut messages: Vec<Message> = Vec::new();

        let reload = self.render_source_bar(ctx);
        self.render_main_screen(ctx, &mut messages);
        self.render_form(ctx, &mut messages);
        self.render_alert(ctx, &mut messages);

        // Execute deferred actions
        for message in messages {
            self.view.update(message);
        }
        if let Some(source) = reload {
            self.start_load(ctx, source);
        }
    }
}

impl DeckApp {
    /// Creates the app and starts loading the configured deck
    pub fn new(ctx: &egui::Context, config: ViewConfig) -> Self {
        let mut app = Self {
            view: DeckView::new(config.page_size),
            source: config.source.clone(),
            pending: None,
        };
        app.start_load(ctx, config.source);
        app
    }

    fn start_load(&mut self, ctx: &egui::Context, source: DeckSource) {
        info!(%source, "loading cards");
        let repaint = ctx.clone();
        self.source = source.clone();
        self.pending = Some(PendingLoad::spawn(source, move || repaint.request_repaint()));
        self.view.update(Message::LoadStarted);
    }

    fn poll_load(&mut self) {
        if let Some(result) = self.pending.as_ref().and_then(PendingLoad::poll) {
            self.pending = None;
            self.view.update(Message::Loaded(result));
        }
    }

    /// Renders the bottom bar with the current source. Returns a source to load, if any
    fn render_source_bar(&self, ctx: &egui::Context) -> Option<DeckSource> {
        let mut reload: Option<DeckSource> = None;
        egui::TopBottomPanel::bottom("source_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Source: {}", self.source));
                if ui.button("Open...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("JSON files", &["json"])
                        .pick_file()
                    {
                        reload = Some(DeckSource::File(path));
                    }
                }
                if ui.button("Reload").clicked() {
                    reload = Some(self.source.clone());
                }
            });
        });
        reload
    }

    /// Renders the toolbar, the current page of cards and the pagination bar
    fn render_main_screen(&self, ctx: &egui::Context, messages: &mut Vec<Message>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("New Card").clicked() {
                    messages.push(Message::OpenCreate);
                }
                ui.separator();
                match self.view.status() {
                    LoadStatus::Pending => {
                        ui.spinner();
                    }
                    LoadStatus::Loaded { cards, at } => {
                        ui.label(format!("{} cards, loaded at {}", cards, at.format("%H:%M:%S")));
                    }
                    LoadStatus::Failed => {}
                }
            });

            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("cards_page")
                .max_height(ui.available_height() - 40.0)
                .show(ui, |ui| {
                    for card in self.view.visible_cards() {
                        render_card(ui, &card, messages);
                        ui.add_space(6.0);
                    }
                });

            ui.separator();

            ui.horizontal_wrapped(|ui| {
                let current = self.view.current_page();
                for control in self.view.controls() {
                    let clicked = match control {
                        PageControl::Page(n) => {
                            ui.selectable_label(n == current, control.label()).clicked()
                        }
                        PageControl::Prev | PageControl::Next => {
                            ui.button(control.label()).clicked()
                        }
                    };
                    if clicked {
                        messages.push(match control {
                            PageControl::Prev => Message::PrevPage,
                            PageControl::Page(n) => Message::GoToPage(n),
                            PageControl::Next => Message::NextPage,
                        });
                    }
                }
            });
        });
    }

    /// Renders the create/edit dialog while a form is open
    fn render_form(&mut self, ctx: &egui::Context, messages: &mut Vec<Message>) {
        let alert_open = self.view.alert().is_some();
        let Some(form) = self.view.form_mut() else {
            return;
        };

        egui::Window::new(form.heading())
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!alert_open, |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Title:");
                        if form.title_locked() {
                            ui.label(&form.title);
                        } else {
                            ui.text_edit_singleline(&mut form.title);
                        }
                    });

                    ui.label("Content:");
                    ui.text_edit_multiline(&mut form.content);

                    ui.add_space(10.0);

                    ui.horizontal(|ui| {
                        if ui.button("Save").clicked() {
                            messages.push(Message::SubmitForm);
                        }
                        if ui.button("Cancel").clicked() {
                            messages.push(Message::CancelForm);
                        }
                    });
                });
            });
    }

    fn render_alert(&self, ctx: &egui::Context, messages: &mut Vec<Message>) {
        if let Some(alert) = self.view.alert() {
            egui::Window::new("Invalid card")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    ui.label(alert.to_string());
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        messages.push(Message::DismissAlert);
                    }
                });
        }
    }
}

/// One flip card: title on the front, content on the back. Click to flip.
fn render_card(ui: &mut egui::Ui, card: &CardView<'_>, messages: &mut Vec<Message>) {
    let (face, fill) = if card.flipped {
        (&card.card.content, ui.visuals().faint_bg_color)
    } else {
        (&card.card.title, ui.visuals().extreme_bg_color)
    };

    let response = egui::Frame::group(ui.style())
        .fill(fill)
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(ui.available_width(), CARD_HEIGHT));
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                if card.flipped {
                    ui.label(face);
                } else {
                    ui.heading(face);
                }
            });
        })
        .response
        .interact(egui::Sense::click());

    if response.clicked() {
        messages.push(Message::ToggleFlip(card.slot));
    }

    if ui.small_button("Edit").clicked() {
        messages.push(Message::OpenEdit(card.index));
    }
}
