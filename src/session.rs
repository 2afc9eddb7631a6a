//! Editing Session
//!
//! Holds the single "current image" slot plus the state around it:
//! - the file it came from
//! - the directory the user last browsed
//! - which actions are available right now
//!
//! Every operation either fully succeeds or leaves the session exactly as it
//! was. Filters compute a complete new buffer before the slot is replaced.

use std::path::{Path, PathBuf};
use crate::buffer::PixelBuffer;
use crate::engine;
use crate::error::{Result, SnapshopError};
use crate::filter::Filter;
use crate::io;
use crate::settings::Settings;

/// Something the user can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Open,
    SaveAs,
    Close,
    Apply(Filter),
}

pub struct Session {
    settings: Settings,
    current: Option<PixelBuffer>,
    source_path: Option<PathBuf>,
    current_directory: PathBuf,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        let current_directory = settings.start_directory.clone();
        Self {
            settings,
            current: None,
            source_path: None,
            current_directory,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn has_image(&self) -> bool {
        self.current.is_some()
    }

    pub fn image(&self) -> Option<&PixelBuffer> {
        self.current.as_ref()
    }

    /// File the current image was opened from
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Directory of the last successful open or save
    pub fn current_directory(&self) -> &Path {
        &self.current_directory
    }

    fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.current_directory = parent.to_path_buf();
        }
    }

    /// Decode `path` and make it the current image
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let buffer = io::load_image(path).inspect_err(|e| {
            tracing::warn!(path = %path.display(), "Open failed, keeping current image: {e}");
        })?;
        tracing::info!(
            path = %path.display(),
            width = buffer.width(),
            height = buffer.height(),
            "Opened image"
        );
        self.current = Some(buffer);
        self.source_path = Some(path.to_path_buf());
        self.remember_directory(path);
        Ok(())
    }

    /// Install an already decoded buffer as the current image
    pub fn load(&mut self, buffer: PixelBuffer) {
        self.current = Some(buffer);
        self.source_path = None;
    }

    /// Encode the current image to `path`
    pub fn save_as(&mut self, path: &Path) -> Result<()> {
        let buffer = self.current.as_ref().ok_or(SnapshopError::NoImageLoaded)?;
        io::save_image(buffer, path, self.settings.create_missing_dirs).inspect_err(|e| {
            tracing::warn!(path = %path.display(), "Save failed: {e}");
        })?;
        tracing::info!(path = %path.display(), "Saved image");
        self.remember_directory(path);
        Ok(())
    }

    /// Drop the current image
    pub fn close(&mut self) {
        if self.current.take().is_some() {
            tracing::info!("Closed image");
        }
        self.source_path = None;
    }

    /// Replace the current image with its filtered version
    pub fn apply(&mut self, filter: Filter) -> Result<&PixelBuffer> {
        let current = self.current.as_ref().ok_or(SnapshopError::NoImageLoaded)?;
        let filtered = engine::apply_filter(filter, current);
        Ok(&*self.current.insert(filtered))
    }

    /// Actions enabled in the current state, in toolbar order
    pub fn available_actions(&self) -> Vec<Action> {
        let mut actions = vec![Action::Open];
        if self.has_image() {
            actions.extend(Filter::ALL.into_iter().map(Action::Apply));
            actions.push(Action::SaveAs);
            actions.push(Action::Close);
        }
        actions
    }

    pub fn is_enabled(&self, action: Action) -> bool {
        action == Action::Open || self.has_image()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
