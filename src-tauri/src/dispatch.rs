//! Tray and shortcut action table.
//!
//! Every user-facing action of the shell lives here once; the tray menu and
//! the global shortcuts are both built from these tables.

/// Outbound event names understood by the content layer.
pub mod events {
    pub const NEW_FILE: &str = "new-file";
    pub const NEXT_FILE: &str = "next-file";
    pub const PREVIOUS_FILE: &str = "previous-file";
    pub const PLAY_PAUSE: &str = "play-pause";
}

/// File type requested with a `new-file` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewFileKind {
    Text,
    Html,
    Markdown,
    Audio,
}

impl NewFileKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NewFileKind::Text => "text",
            NewFileKind::Html => "html",
            NewFileKind::Markdown => "markdown",
            NewFileKind::Audio => "audio",
        }
    }
}

/// Action reachable from the tray menu or a global shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    Show,
    NewFile(NewFileKind),
    NextFile,
    PreviousFile,
    PlayPause,
    Quit,
}

impl ShellAction {
    /// Menu item id.
    pub fn id(self) -> &'static str {
        match self {
            ShellAction::Show => "show",
            ShellAction::NewFile(NewFileKind::Text) => "new_text_file",
            ShellAction::NewFile(NewFileKind::Html) => "new_html_file",
            ShellAction::NewFile(NewFileKind::Markdown) => "new_markdown_file",
            ShellAction::NewFile(NewFileKind::Audio) => "new_audio_file",
            ShellAction::NextFile => "next_file",
            ShellAction::PreviousFile => "previous_file",
            ShellAction::PlayPause => "play_pause",
            ShellAction::Quit => "quit",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        TRAY_MENU.iter().find_map(|entry| match entry {
            MenuEntry::Item(action) if action.id() == id => Some(*action),
            _ => None,
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            ShellAction::Show => "Show TagSpaces",
            ShellAction::NewFile(NewFileKind::Text) => "New Text File",
            ShellAction::NewFile(NewFileKind::Html) => "New HTML File",
            ShellAction::NewFile(NewFileKind::Markdown) => "New Markdown File",
            ShellAction::NewFile(NewFileKind::Audio) => "New Audio File",
            ShellAction::NextFile => "Open Next File",
            ShellAction::PreviousFile => "Open Previous File",
            ShellAction::PlayPause => "Pause/Resume Playback",
            ShellAction::Quit => "Quit TagSpaces",
        }
    }

    /// Global shortcut bound to this action, if any.
    pub fn accelerator(self) -> Option<&'static str> {
        SHORTCUTS
            .iter()
            .find(|(_, action)| *action == self)
            .map(|(accelerator, _)| *accelerator)
    }

    /// Event sent to the content layer, as `(name, payload)`.
    pub fn content_event(self) -> Option<(&'static str, &'static str)> {
        match self {
            ShellAction::NewFile(kind) => Some((events::NEW_FILE, kind.as_str())),
            ShellAction::NextFile => Some((events::NEXT_FILE, "next")),
            ShellAction::PreviousFile => Some((events::PREVIOUS_FILE, "previous")),
            ShellAction::PlayPause => Some((events::PLAY_PAUSE, "test")),
            ShellAction::Show | ShellAction::Quit => None,
        }
    }

    /// Whether the main window is brought to front before the event is sent.
    /// Playback toggling stays in the background.
    pub fn reveals_window(self) -> bool {
        !matches!(self, ShellAction::PlayPause | ShellAction::Quit)
    }
}

/// One row of the tray context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Item(ShellAction),
    Separator,
}

/// Tray context menu, top to bottom.
pub const TRAY_MENU: [MenuEntry; 13] = [
    MenuEntry::Item(ShellAction::Show),
    MenuEntry::Separator,
    MenuEntry::Item(ShellAction::NewFile(NewFileKind::Text)),
    MenuEntry::Item(ShellAction::NewFile(NewFileKind::Html)),
    MenuEntry::Item(ShellAction::NewFile(NewFileKind::Markdown)),
    MenuEntry::Item(ShellAction::NewFile(NewFileKind::Audio)),
    MenuEntry::Separator,
    MenuEntry::Item(ShellAction::NextFile),
    MenuEntry::Item(ShellAction::PreviousFile),
    MenuEntry::Separator,
    MenuEntry::Item(ShellAction::PlayPause),
    MenuEntry::Separator,
    MenuEntry::Item(ShellAction::Quit),
];

/// System-wide shortcuts, registered while the shell runs.
pub const SHORTCUTS: [(&str, ShellAction); 5] = [
    ("CommandOrControl+Alt+P", ShellAction::PlayPause),
    ("CommandOrControl+Alt+N", ShellAction::NewFile(NewFileKind::Text)),
    ("CommandOrControl+Alt+I", ShellAction::NextFile),
    ("CommandOrControl+Alt+O", ShellAction::PreviousFile),
    ("CommandOrControl+Alt+S", ShellAction::Show),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_actions() -> Vec<ShellAction> {
        TRAY_MENU
            .iter()
            .filter_map(|entry| match entry {
                MenuEntry::Item(action) => Some(*action),
                MenuEntry::Separator => None,
            })
            .collect()
    }

    #[test]
    fn test_menu_ids_round_trip() {
        for action in menu_actions() {
            assert_eq!(ShellAction::from_id(action.id()), Some(action));
        }
        assert_eq!(ShellAction::from_id("settings"), None);
    }

    #[test]
    fn test_menu_ids_are_unique() {
        let mut ids: Vec<_> = menu_actions().into_iter().map(ShellAction::id).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_menu_layout() {
        assert_eq!(TRAY_MENU.first(), Some(&MenuEntry::Item(ShellAction::Show)));
        assert_eq!(TRAY_MENU.last(), Some(&MenuEntry::Item(ShellAction::Quit)));
        let separators = TRAY_MENU
            .iter()
            .filter(|entry| **entry == MenuEntry::Separator)
            .count();
        assert_eq!(separators, 4);
    }

    #[test]
    fn test_every_shortcut_has_a_menu_item() {
        let actions = menu_actions();
        for (_, action) in SHORTCUTS {
            assert!(actions.contains(&action), "{:?} missing from tray", action);
        }
    }

    #[test]
    fn test_accelerators() {
        assert_eq!(ShellAction::PlayPause.accelerator(), Some("CommandOrControl+Alt+P"));
        assert_eq!(ShellAction::Show.accelerator(), Some("CommandOrControl+Alt+S"));
        assert_eq!(ShellAction::NewFile(NewFileKind::Html).accelerator(), None);
        assert_eq!(ShellAction::Quit.accelerator(), None);
    }

    #[test]
    fn test_content_events() {
        assert_eq!(
            ShellAction::NewFile(NewFileKind::Markdown).content_event(),
            Some(("new-file", "markdown"))
        );
        assert_eq!(ShellAction::NextFile.content_event(), Some(("next-file", "next")));
        assert_eq!(
            ShellAction::PreviousFile.content_event(),
            Some(("previous-file", "previous"))
        );
        assert_eq!(ShellAction::PlayPause.content_event(), Some(("play-pause", "test")));
        assert_eq!(ShellAction::Show.content_event(), None);
    }

    #[test]
    fn test_play_pause_does_not_reveal() {
        assert!(!ShellAction::PlayPause.reveals_window());
        assert!(ShellAction::Show.reveals_window());
        assert!(ShellAction::NewFile(NewFileKind::Audio).reveals_window());
    }
}
