use super::action::Action;
use std::sync::Arc;

/// One entry of the command palette. The shortcut is a label for display only;
/// real bindings live in the keymap.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteCommand {
    pub title: &'static str,
    pub shortcut: Option<&'static str>,
    pub icon: &'static str,
    pub keywords: &'static [&'static str],
    pub action: Action,
}

impl PaletteCommand {
    /// Case-insensitive substring match against the title or any keyword.
    /// `needle` must already be lowercased.
    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .keywords
                .iter()
                .any(|k| k.to_lowercase().contains(needle))
    }
}

/// Builds the palette's command list. The theme entry's icon depends on the
/// current mode, so callers rebuild the list when it flips.
#[must_use]
pub fn build_commands(dark_mode: bool) -> Arc<[PaletteCommand]> {
    Arc::from(vec![
        PaletteCommand {
            title: "Run Query",
            shortcut: Some("Ctrl+Enter"),
            icon: "▶",
            keywords: &["execute", "run", "query"],
            action: Action::RunQuery,
        },
        PaletteCommand {
            title: "Toggle Dark Mode",
            shortcut: Some("Ctrl+D"),
            icon: if dark_mode { "☀" } else { "☾" },
            keywords: &["theme", "light"],
            action: Action::ToggleDarkMode,
        },
        PaletteCommand {
            title: "Show Query History",
            shortcut: Some("Ctrl+H"),
            icon: "◷",
            keywords: &["history", "recent"],
            action: Action::ToggleHistory,
        },
        PaletteCommand {
            title: "Open Query Builder",
            shortcut: Some("Ctrl+B"),
            icon: "⚒",
            keywords: &["builder", "generate"],
            action: Action::ToggleBuilder,
        },
        PaletteCommand {
            title: "Export Results",
            shortcut: Some("Ctrl+E"),
            icon: "⤓",
            keywords: &["csv", "download", "save"],
            action: Action::ExportResults,
        },
        PaletteCommand {
            title: "Next Sample Query",
            shortcut: Some("Ctrl+N"),
            icon: "↻",
            keywords: &["sample", "example"],
            action: Action::NextSample,
        },
        PaletteCommand {
            title: "Show Help",
            shortcut: Some("?"),
            icon: "?",
            keywords: &["keys", "shortcuts"],
            action: Action::ToggleHelp,
        },
        PaletteCommand {
            title: "Quit",
            shortcut: Some("Ctrl+Q"),
            icon: "⏻",
            keywords: &["exit", "close"],
            action: Action::Quit,
        },
    ])
}

/// Indices of the commands matching `query`, in list order. An empty query
/// matches everything.
#[must_use]
pub fn filter_commands(commands: &[PaletteCommand], query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    commands
        .iter()
        .enumerate()
        .filter(|(_, cmd)| cmd.matches(&needle))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let commands = build_commands(false);
        let all: Vec<usize> = (0..commands.len()).collect();
        assert_eq!(filter_commands(&commands, ""), all);
    }

    #[test]
    fn test_matches_title_case_insensitively() {
        let commands = build_commands(false);
        let hits = filter_commands(&commands, "DARK");
        assert_eq!(hits.len(), 1);
        assert_eq!(commands[hits[0]].title, "Toggle Dark Mode");
    }

    #[test]
    fn test_matches_keywords() {
        let commands = build_commands(false);
        let hits = filter_commands(&commands, "csv");
        assert_eq!(hits.len(), 1);
        assert_eq!(commands[hits[0]].action, Action::ExportResults);
    }

    #[test]
    fn test_every_hit_contains_the_query() {
        let commands = build_commands(true);
        for needle in ["e", "ru", "His", "xyz", " "] {
            let lowered = needle.to_lowercase();
            for i in filter_commands(&commands, needle) {
                let cmd = &commands[i];
                assert!(
                    cmd.title.to_lowercase().contains(&lowered)
                        || cmd.keywords.iter().any(|k| k.contains(&lowered)),
                    "{} should not match {needle:?}",
                    cmd.title
                );
            }
        }
    }

    #[test]
    fn test_no_match() {
        assert!(filter_commands(&build_commands(false), "zzz").is_empty());
    }

    #[test]
    fn test_theme_icon_follows_mode() {
        let icon = |dark| {
            build_commands(dark)
                .iter()
                .find(|c| c.action == Action::ToggleDarkMode)
                .map(|c| c.icon)
        };
        assert_eq!(icon(true), Some("☀"));
        assert_eq!(icon(false), Some("☾"));
    }
}
