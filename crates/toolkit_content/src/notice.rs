//! Transient notices
//!
//! One parameterised notice covers both the feedback acknowledgement and the
//! submission confirmation. Notices carry a deadline instead of a running
//! timer; the owner polls [`NoticeQueue::dismiss_expired`] and calls
//! [`NoticeQueue::clear`] when the view that shows them goes away.

use std::time::{Duration, Instant};

use toolkit_theme::{Resolve, ThemePath};

use crate::node::{div, span, Node};

/// Notice variants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    /// Acknowledges the feedback button, 3 seconds
    Feedback,
    /// Confirms a submitted request, 5 seconds
    Submission,
}

impl NoticeKind {
    /// Auto-dismiss delay for this kind
    pub fn default_duration(self) -> Duration {
        match self {
            NoticeKind::Feedback => Duration::from_secs(3),
            NoticeKind::Submission => Duration::from_secs(5),
        }
    }

    pub fn default_message(self) -> &'static str {
        match self {
            NoticeKind::Feedback => "Thanks! Your feedback helps us improve the toolkit.",
            NoticeKind::Submission => "Your request has been submitted. We'll be in touch shortly.",
        }
    }

    fn accent(self) -> ThemePath {
        match self {
            NoticeKind::Feedback => ThemePath::NoticeBorder,
            NoticeKind::Submission => ThemePath::ColorsStatusSuccess,
        }
    }

    fn class(self) -> &'static str {
        match self {
            NoticeKind::Feedback => "notice notice-feedback",
            NoticeKind::Submission => "notice notice-submission",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
    pub shown_at: Instant,
    pub duration: Duration,
}

impl Notice {
    pub fn deadline(&self) -> Instant {
        self.shown_at + self.duration
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline()
    }

    /// Time left before auto-dismiss, zero once expired
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline().saturating_duration_since(now)
    }
}

/// Pending notices in display order
#[derive(Debug, Default)]
pub struct NoticeQueue {
    next_id: u64,
    notices: Vec<Notice>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notice of `kind` with its default message and duration
    pub fn show(&mut self, kind: NoticeKind, now: Instant) -> u64 {
        self.push(kind, kind.default_message(), kind.default_duration(), now)
    }

    pub fn push(
        &mut self,
        kind: NoticeKind,
        message: impl Into<String>,
        duration: Duration,
        now: Instant,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice {
            id,
            kind,
            message: message.into(),
            shown_at: now,
            duration,
        });
        tracing::debug!(id, ?kind, "notice shown");
        id
    }

    /// Remove a notice early (close button). Returns whether it was pending.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }

    /// Drop every notice whose deadline has passed, returning them
    pub fn dismiss_expired(&mut self, now: Instant) -> Vec<Notice> {
        let (expired, active): (Vec<_>, Vec<_>) =
            self.notices.drain(..).partition(|n| n.is_expired(now));
        self.notices = active;
        if !expired.is_empty() {
            tracing::trace!("{} notices expired", expired.len());
        }
        expired
    }

    pub fn active(&self) -> &[Notice] {
        &self.notices
    }

    /// Drop all pending notices without firing them
    pub fn clear(&mut self) {
        self.notices.clear();
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

/// Render a notice with colors from `theme`
pub fn render_notice(notice: &Notice, theme: &dyn Resolve) -> Node {
    let accent = theme.css(notice.kind.accent());
    div()
        .class(notice.kind.class())
        .attr("role", "status")
        .attr("data-notice-id", notice.id.to_string())
        .style("display", "flex")
        .style("align-items", "center")
        .style("gap", "12px")
        .style("padding", "12px 16px")
        .style("background", theme.css(ThemePath::NoticeBg))
        .style("color", theme.css(ThemePath::NoticeText))
        .style("border", format!("1px solid {}", theme.css(ThemePath::NoticeBorder)))
        .style("border-left", format!("4px solid {accent}"))
        .style("border-radius", theme.css(ThemePath::RadiiCard))
        .style("box-shadow", theme.css(ThemePath::NoticeShadow))
        .child(span().class("notice-message").text(notice.message.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use toolkit_theme::{ColorScheme, ThemeCategory, ThemeResolver};

    #[test]
    fn default_durations() {
        assert_eq!(NoticeKind::Feedback.default_duration(), Duration::from_secs(3));
        assert_eq!(NoticeKind::Submission.default_duration(), Duration::from_secs(5));
    }

    #[test]
    fn expired_notices_are_dropped_in_order() {
        let start = Instant::now();
        let mut queue = NoticeQueue::new();
        let feedback = queue.show(NoticeKind::Feedback, start);
        let submission = queue.show(NoticeKind::Submission, start);

        assert!(queue.dismiss_expired(start + Duration::from_secs(2)).is_empty());

        let expired = queue.dismiss_expired(start + Duration::from_secs(3));
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].id, feedback);
        assert_eq!(queue.active()[0].id, submission);
        assert_eq!(
            queue.active()[0].remaining(start + Duration::from_secs(3)),
            Duration::from_secs(2)
        );

        queue.dismiss_expired(start + Duration::from_secs(6));
        assert!(queue.is_empty());
    }

    #[test]
    fn dismiss_and_clear() {
        let now = Instant::now();
        let mut queue = NoticeQueue::new();
        let id = queue.show(NoticeKind::Feedback, now);
        queue.show(NoticeKind::Submission, now);

        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert_eq!(queue.len(), 1);

        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn rendering_uses_theme_colors() {
        let resolver = ThemeResolver::builtin();
        let theme = resolver.scoped(ColorScheme::Dark, ThemeCategory::Sales);
        let mut queue = NoticeQueue::new();
        queue.push(
            NoticeKind::Submission,
            "Sent <ok>",
            Duration::from_secs(1),
            Instant::now(),
        );

        let node = render_notice(&queue.active()[0], &theme);
        let bg = theme.css(ThemePath::NoticeBg);
        assert_eq!(node.get_style("background"), Some(bg.as_str()));
        assert!(node.to_html().contains("Sent &lt;ok&gt;"));
    }
}
