use std::time::{Duration, Instant};

use crate::color::Color;
use crate::element::Element;
use crate::style::Style;

/// Default duration for toast notifications.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(4);

/// Most toasts shown at once; older ones wait until newer ones expire.
pub const MAX_VISIBLE_TOASTS: usize = 5;

/// Severity of a toast, which picks its accent color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "●",
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Error => "✗",
        }
    }

    pub fn accent(self) -> Color {
        match self {
            Self::Info => Color::oklch(0.8, 0.0, 0.0),
            Self::Success => Color::oklch(0.7, 0.15, 145.0),
            Self::Warning => Color::oklch(0.75, 0.15, 85.0),
            Self::Error => Color::oklch(0.65, 0.2, 25.0),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A toast notification.
///
/// Toasts display temporary messages to the user.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tabula_ui::toast::{Toast, ToastLevel};
///
/// let toast = Toast::error("Export failed").with_duration(Duration::from_secs(8));
/// assert_eq!(toast.level, ToastLevel::Error);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    /// How long to show the toast.
    pub duration: Duration,
}

impl Toast {
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    /// Create an info toast with neutral styling.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Info, message)
    }

    /// Create a success toast with green accent.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, message)
    }

    /// Create a warning toast with yellow accent.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Warning, message)
    }

    /// Create an error toast with red accent.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, message)
    }

    /// Set a custom duration for this toast.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Build the toast's element for rendering.
    pub fn element(&self) -> Element {
        Element::row()
            .style(
                Style::new()
                    .bg(Color::oklch(0.2, 0.02, 250.0))
                    .fg(Color::rgb(220, 220, 230)),
            )
            .data("level", self.level.name())
            .child(Element::icon(self.level.icon()).style(Style::new().fg(self.level.accent())))
            .child(Element::text(self.message.clone()))
    }
}

impl From<String> for Toast {
    fn from(message: String) -> Self {
        Toast::info(message)
    }
}

impl From<&str> for Toast {
    fn from(message: &str) -> Self {
        Toast::info(message)
    }
}

/// Queue of active toasts, newest first.
#[derive(Debug, Default)]
pub struct Toaster {
    toasts: Vec<(Toast, Instant)>,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a toast from `now` until its duration runs out.
    pub fn push(&mut self, toast: impl Into<Toast>, now: Instant) {
        let toast = toast.into();
        log::debug!("[toast] {:?}: {}", toast.level, toast.message);
        self.toasts.insert(0, (toast, now));
    }

    /// Drops expired toasts.
    pub fn prune(&mut self, now: Instant) {
        self.toasts
            .retain(|(toast, created_at)| *created_at + toast.duration > now);
    }

    /// Toasts that would be on screen at `now`, newest first.
    pub fn visible(&self, now: Instant) -> Vec<&Toast> {
        self.toasts
            .iter()
            .filter(|(toast, created_at)| *created_at + toast.duration > now)
            .map(|(toast, _)| toast)
            .take(MAX_VISIBLE_TOASTS)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Stack of visible toasts, newest on top.
    pub fn render(&self, now: Instant) -> Element {
        Element::col()
            .id("toasts")
            .children(self.visible(now).into_iter().map(Toast::element))
    }
}
