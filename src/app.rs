//! Panel application
//!
//! Wires the terminal panel to the settings core: builds the view from a
//! fresh snapshot, feeds panel messages to the sync controller, and reports
//! outcomes in the status line.

use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::settings::{
    build_snapshot, Catalog, ConfigurationStore, ExtensionRegistry, HostActions, PanelMessage,
    SettingsError, SyncController, SyncOutcome,
};
use crate::view::model::{build_view, PanelView};
use crate::view::panel::{render_panel, PanelAction, PanelColors, PanelState, StatusMessage};

/// Read every setting and build the structured view
pub async fn load_view(
    catalog: &Catalog,
    store: &dyn ConfigurationStore,
    extensions: &dyn ExtensionRegistry,
) -> PanelView {
    let snapshot = build_snapshot(catalog, store, extensions).await;
    build_view(&snapshot)
}

pub struct App {
    catalog: Arc<Catalog>,
    store: Arc<dyn ConfigurationStore>,
    extensions: Arc<dyn ExtensionRegistry>,
    sync: SyncController,
    panel: PanelState,
    colors: PanelColors,
    should_quit: bool,
}

impl App {
    /// Build the app and its first render
    pub async fn new(
        catalog: Arc<Catalog>,
        store: Arc<dyn ConfigurationStore>,
        extensions: Arc<dyn ExtensionRegistry>,
        host: Arc<dyn HostActions>,
    ) -> Self {
        let view = load_view(&catalog, store.as_ref(), extensions.as_ref()).await;
        let sync = SyncController::new(catalog.clone(), store.clone(), host);
        Self {
            catalog,
            store,
            extensions,
            sync,
            panel: PanelState::new(&view),
            colors: PanelColors::default(),
            should_quit: false,
        }
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Re-read values and rebuild the panel
    pub async fn refresh(&mut self) {
        let view = load_view(&self.catalog, self.store.as_ref(), self.extensions.as_ref()).await;
        self.panel.reload(&view);
        tracing::debug!("Panel refreshed");
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        match self.panel.handle_key(key) {
            PanelAction::None => {}
            PanelAction::Send(message) => self.dispatch(message).await,
            PanelAction::Refresh => self.refresh().await,
            PanelAction::Quit => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Hand a message to the sync controller and show the result
    pub async fn dispatch(&mut self, message: PanelMessage) {
        let result = self.sync.handle(message).await;
        if let Some(status) = status_for(&result) {
            self.panel.status = Some(status);
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        render_panel(frame, frame.area(), &mut self.panel, &self.colors);
    }
}

fn status_for(result: &Result<SyncOutcome, SettingsError>) -> Option<StatusMessage> {
    match result {
        Ok(SyncOutcome::Written { key, value }) => {
            Some(StatusMessage::Info(format!("{key} = {value}")))
        }
        Ok(SyncOutcome::ThemeWritten { theme }) => {
            Some(StatusMessage::Info(format!("Color theme: {theme}")))
        }
        Ok(SyncOutcome::OpenedRawConfiguration) => {
            Some(StatusMessage::Info("Opened settings.json".to_string()))
        }
        Ok(SyncOutcome::Ignored) => None,
        Err(e) => Some(StatusMessage::Error(format!("Error: {e}"))),
    }
}
