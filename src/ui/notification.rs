/// Whether a notification reports a failure or a success
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
}

/// A modal message box: a title and an ordered list of lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    kind: NotificationKind,
    lines: Vec<String>,
}

impl Notification {
    pub fn new<I, S>(kind: NotificationKind, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn error<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(NotificationKind::Error, lines)
    }

    pub fn success<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(NotificationKind::Success, lines)
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            NotificationKind::Error => "Error",
            NotificationKind::Success => "Success",
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
