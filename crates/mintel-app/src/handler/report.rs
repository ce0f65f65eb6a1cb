//! Report viewer handlers: scrolling, clipboard, export and source links

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::state::{AppState, ReportState, Screen, StatusNote};

use super::{UpdateAction, UpdateResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scroll {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

fn report_view(state: &mut AppState) -> Option<&mut ReportState> {
    match &mut state.screen {
        Screen::Report(view) => Some(view),
        _ => None,
    }
}

pub(crate) fn handle_scroll(state: &mut AppState, scroll: Scroll) -> UpdateResult {
    if let Some(view) = report_view(state) {
        match scroll {
            Scroll::Up => view.scroll_up(1),
            Scroll::Down => view.scroll_down(1),
            Scroll::PageUp => view.scroll_up(view.page_size()),
            Scroll::PageDown => view.scroll_down(view.page_size()),
            Scroll::Top => view.scroll = 0,
            Scroll::Bottom => view.scroll = view.max_scroll(),
        }
    }
    UpdateResult::none()
}

pub(crate) fn handle_copy(state: &mut AppState) -> UpdateResult {
    let command = state.settings.behavior.clipboard_command.clone();
    match report_view(state) {
        Some(view) => UpdateResult::action(UpdateAction::CopyToClipboard {
            content: view.report.content.clone(),
            command,
        }),
        None => UpdateResult::none(),
    }
}

pub(crate) fn handle_copied(state: &mut AppState) -> UpdateResult {
    if !matches!(state.screen, Screen::Report(_)) {
        return UpdateResult::none();
    }
    let ack_id = state.next_copy_ack();
    let after_ms = state.settings.report.copied_ack_ms;
    if let Some(view) = report_view(state) {
        view.copied_ack = Some(ack_id);
        view.status = None;
    }
    UpdateResult::action(UpdateAction::ExpireCopiedAck { ack_id, after_ms })
}

pub(crate) fn handle_copy_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Clipboard copy failed: {}", error);
    if let Some(view) = report_view(state) {
        view.status = Some(StatusNote::Error(format!("Copy failed: {}", error)));
    }
    UpdateResult::none()
}

/// Clear the "Copied" acknowledgment, unless a newer copy replaced it
pub(crate) fn handle_copied_ack_expired(state: &mut AppState, ack_id: u64) -> UpdateResult {
    if let Some(view) = report_view(state) {
        if view.copied_ack == Some(ack_id) {
            view.copied_ack = None;
        } else {
            debug!("Ignoring expiry of superseded copy ack {}", ack_id);
        }
    }
    UpdateResult::none()
}

pub(crate) fn handle_export(state: &mut AppState) -> UpdateResult {
    let directory = state.settings.export.resolved_directory();
    match report_view(state) {
        Some(view) => {
            let path = directory.join(view.report.export_file_name());
            view.status = Some(StatusNote::Info(format!("Exporting to {}", path.display())));
            UpdateResult::action(UpdateAction::ExportReport {
                path,
                content: view.report.content.clone(),
            })
        }
        None => UpdateResult::none(),
    }
}

pub(crate) fn handle_exported(state: &mut AppState, path: PathBuf) -> UpdateResult {
    if let Some(view) = report_view(state) {
        view.status = Some(StatusNote::Info(format!("Saved {}", path.display())));
    }
    UpdateResult::none()
}

pub(crate) fn handle_export_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Report export failed: {}", error);
    if let Some(view) = report_view(state) {
        view.status = Some(StatusNote::Error(format!("Export failed: {}", error)));
    }
    UpdateResult::none()
}

pub(crate) fn handle_open_source(state: &mut AppState, index: usize) -> UpdateResult {
    let browser = state.settings.behavior.browser.clone();
    let Some(view) = report_view(state) else {
        return UpdateResult::none();
    };
    let Some(url) = view.report.sources.get(index).cloned() else {
        debug!("No source #{} to open", index + 1);
        return UpdateResult::none();
    };

    view.status = Some(StatusNote::Info(format!("Opening {}", url)));
    UpdateResult::action(UpdateAction::OpenUrl { url, browser })
}
