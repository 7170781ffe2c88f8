use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppMode, AppState};

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    match state.mode {
        AppMode::Normal => {
            let run = if state.session.is_running() {
                FooterItem::highlighted("^R", "running")
            } else {
                FooterItem::new("^R", "run")
            };
            vec![
                FooterGroup {
                    name: "QUERY",
                    items: vec![
                        run,
                        FooterItem::new("^N/^P", "sample"),
                        FooterItem::new("^E", "export"),
                    ],
                },
                FooterGroup {
                    name: "PANELS",
                    items: vec![
                        FooterItem::new("^K", "commands"),
                        FooterItem::new("^H", "history"),
                        FooterItem::new("^B", "builder"),
                        FooterItem::new("^D", "theme"),
                    ],
                },
                FooterGroup {
                    name: "APP",
                    items: vec![FooterItem::new("F1", "help"), FooterItem::new("^Q", "quit")],
                },
            ]
        }
        AppMode::CommandPalette => vec![FooterGroup {
            name: "PALETTE",
            items: vec![
                FooterItem::new("↑/↓", "select"),
                FooterItem::new("Enter", "run"),
                FooterItem::new("Esc", "close"),
            ],
        }],
        AppMode::History => vec![FooterGroup {
            name: "HISTORY",
            items: vec![
                FooterItem::new("j/k", "move"),
                FooterItem::new("Enter", "load"),
                FooterItem::new("c", "clear"),
                FooterItem::new("Esc", "close"),
            ],
        }],
        AppMode::Builder => vec![FooterGroup {
            name: "BUILDER",
            items: vec![
                FooterItem::new("Tab", "field"),
                FooterItem::new("←/→", "table"),
                FooterItem::new("Enter", "generate"),
                FooterItem::new("Esc", "close"),
            ],
        }],
        AppMode::Help => vec![FooterGroup {
            name: "HELP",
            items: vec![FooterItem::new("Esc", "close")],
        }],
    }
}
