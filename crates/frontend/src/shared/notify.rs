//! User-visible notifications (browser alert, mirrored to the console log)

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    pub fn tag(&self) -> &'static str {
        match self {
            NoticeKind::Success => "SUCCESS",
            NoticeKind::Warning => "WARNING",
            NoticeKind::Error => "ERROR",
        }
    }
}

pub fn format_notice(kind: NoticeKind, text: &str) -> String {
    format!("[{}] {}", kind.tag(), text)
}

pub fn notify(kind: NoticeKind, text: &str) {
    match kind {
        NoticeKind::Error => log::error!("{}", text),
        NoticeKind::Warning => log::warn!("{}", text),
        NoticeKind::Success => log::info!("{}", text),
    }
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(&format_notice(kind, text));
    }
}

pub fn success(text: &str) {
    notify(NoticeKind::Success, text);
}

pub fn warning(text: &str) {
    notify(NoticeKind::Warning, text);
}

pub fn error(text: &str) {
    notify(NoticeKind::Error, text);
}
