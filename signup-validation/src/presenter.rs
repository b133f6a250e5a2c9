// In-memory presenter

use crate::{FieldKind, FieldPresenter, FieldStatus, MessageLength};
use serde::Serialize;

/// What a single field currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub status: FieldStatus,
    pub message: Option<String>,
    pub length: MessageLength,
}

impl FieldView {
    pub fn long_message(&self) -> bool {
        self.length.is_long()
    }
}

/// Presenter that just remembers what it was told to show.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    views: [FieldView; 4],
    resets: usize,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self, field: FieldKind) -> &FieldView {
        &self.views[field.index()]
    }

    /// Views in pass order, paired with their field.
    pub fn views(&self) -> impl Iterator<Item = (FieldKind, &FieldView)> {
        FieldKind::ALL.into_iter().zip(self.views.iter())
    }

    /// Number of field resets performed so far.
    pub fn resets(&self) -> usize {
        self.resets
    }
}

impl FieldPresenter for RecordingPresenter {
    fn reset(&mut self, field: FieldKind) {
        self.views[field.index()] = FieldView::default();
        self.resets += 1;
    }

    fn show_error(&mut self, field: FieldKind, message: &str, length: MessageLength) {
        let view = &mut self.views[field.index()];
        view.status = FieldStatus::Error;
        view.message = Some(message.to_string());
        view.length = length;
    }

    fn show_success(&mut self, field: FieldKind) {
        let view = &mut self.views[field.index()];
        view.status = FieldStatus::Success;
        view.message = None;
    }
}
