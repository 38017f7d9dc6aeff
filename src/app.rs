//! Main application state and eframe::App implementation.
//!
//! The app owns at most one [`Session`] at a time. Payloads are parsed on a
//! background thread and handed over through a channel; everything after
//! that happens inside the frame loop, which is the only place session
//! state is mutated.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::Instant;

use anyhow::Context as _;
use eframe::egui;

use crate::history::RunHistory;
use crate::settings::UserSettings;
use crate::state::{
    LoadResult, LoadingState, PendingLoad, Session, ToastType, OVERVIEW_HEIGHT,
    SUPPORTED_EXTENSIONS,
};

/// Main application state
pub struct QuickViewApp {
    /// Currently loaded session, if any
    pub session: Option<Session>,
    /// Path of the payload behind the current session
    pub source_path: Option<PathBuf>,
    /// Payload queued in the background loader
    pending_load: Option<PendingLoad>,
    /// Receiver for the background load result
    load_receiver: Option<Receiver<LoadResult>>,
    /// Current loading state
    pub loading_state: LoadingState,
    /// Active toast notification: message, creation time, type
    pub toast_message: Option<(String, Instant, ToastType)>,
    /// Last file-drop time, for debouncing duplicate drop events
    last_drop_time: Option<Instant>,
    /// In-progress overview drag selection: anchor time and latest pointer
    /// time, both epoch ms
    pub overview_drag: Option<(f64, f64)>,
    /// Persisted user settings
    pub settings: UserSettings,
}

impl Default for QuickViewApp {
    fn default() -> Self {
        Self {
            session: None,
            source_path: None,
            pending_load: None,
            load_receiver: None,
            loading_state: LoadingState::Idle,
            toast_message: None,
            last_drop_time: None,
            overview_drag: None,
            settings: UserSettings::load(),
        }
    }
}

impl QuickViewApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self::default()
    }

    /// Start loading a payload in the background
    pub fn start_loading_file(&mut self, path: PathBuf) {
        if matches!(self.loading_state, LoadingState::Loading(_)) {
            self.show_toast("Already loading a file", ToastType::Info);
            return;
        }

        let pending = PendingLoad::new(path);
        self.loading_state = LoadingState::Loading(pending.name.clone());

        let (sender, receiver): (Sender<LoadResult>, Receiver<LoadResult>) = channel();
        self.load_receiver = Some(receiver);

        // Spawn background thread for parsing
        let load_path = pending.path.clone();
        self.pending_load = Some(pending);
        thread::spawn(move || {
            let result = Self::load_payload_sync(&load_path);
            let _ = sender.send(result);
        });
    }

    /// Read and parse a payload file (runs on the loader thread)
    fn load_payload_sync(path: &Path) -> LoadResult {
        match Self::read_and_parse(path) {
            Ok(session) => LoadResult::Success(Box::new(session)),
            // {:#} renders the whole context chain on one line
            Err(e) => LoadResult::Error(format!("{e:#}")),
        }
    }

    fn read_and_parse(path: &Path) -> anyhow::Result<Session> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let history = RunHistory::parse(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Session::new(history))
    }

    /// Poll the background loader and apply its result
    fn check_loading_complete(&mut self, ctx: &egui::Context) {
        if let Some(receiver) = &self.load_receiver {
            if let Ok(result) = receiver.try_recv() {
                match result {
                    LoadResult::Success(session) => {
                        tracing::info!(
                            repository = %session.history.repository,
                            series = session.series.len(),
                            "payload loaded"
                        );
                        ctx.send_viewport_cmd(egui::ViewportCommand::Title(format!(
                            "{} :: QuickView",
                            session.history.repository
                        )));
                        self.show_toast(
                            &format!(
                                "Loaded {} series from {}",
                                session.series.len(),
                                session.history.repository
                            ),
                            ToastType::Success,
                        );
                        self.source_path = self.pending_load.take().map(|p| p.path);
                        self.overview_drag = None;
                        self.session = Some(*session);
                    }
                    LoadResult::Error(e) => {
                        tracing::warn!("payload load failed: {e}");
                        self.pending_load = None;
                        self.show_toast(&format!("Error: {}", e), ToastType::Error);
                    }
                }
                self.load_receiver = None;
                self.loading_state = LoadingState::Idle;
            }
        }
    }

    /// Handle a payload dropped onto the window
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        if matches!(self.loading_state, LoadingState::Loading(_)) {
            return;
        }

        // One physical drop can surface over several frames
        if let Some(last_drop) = self.last_drop_time {
            if last_drop.elapsed().as_secs() < 2 {
                return;
            }
        }

        let Some(path) =
            ctx.input(|i| i.raw.dropped_files.iter().find_map(|f| f.path.clone()))
        else {
            return;
        };

        self.last_drop_time = Some(Instant::now());

        if path.extension().is_some_and(|ext| ext == "json") {
            self.start_loading_file(path);
        } else {
            self.show_toast("Only .json run histories are supported", ToastType::Info);
        }
    }

    /// Open the native file dialog and load the picked payload
    pub fn open_payload_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Run history", SUPPORTED_EXTENSIONS)
            .pick_file()
        {
            self.start_loading_file(path);
        }
    }

    /// Show a toast notification
    pub fn show_toast(&mut self, message: &str, toast_type: ToastType) {
        self.toast_message = Some((message.to_string(), Instant::now(), toast_type));
    }
}

impl eframe::App for QuickViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_loading_complete(ctx);
        self.handle_dropped_files(ctx);

        // Keep polling the loader without waiting for input events
        if matches!(self.loading_state, LoadingState::Loading(_)) {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("info_panel").show(ctx, |ui| {
            self.render_info_panel(ui);
        });

        if self.session.is_some() {
            egui::TopBottomPanel::bottom("overview_panel")
                .exact_height(OVERVIEW_HEIGHT)
                .show(ctx, |ui| {
                    self.render_overview(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.session.is_some() {
                self.render_chart(ui);
            } else {
                self.render_drop_zone(ui);
            }
        });

        self.render_toast(ctx);
    }
}
