//! What the engine is waiting for
//!
//! Classification reads only the window-system flags the engine exposes,
//! never the screen contents.

use nh_core::WindowStatus;
use nh_data::NHW_MENU;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum WindowEvent {
    /// A real decision: the command prompt
    AwaitingCommand,
    /// `--More--` or a text window to dismiss
    AwaitingMore,
    /// A menu window
    AwaitingMenuInput,
    /// A y/n question or a getline prompt
    AwaitingLineInput,
    GameOver,
}

impl WindowEvent {
    /// Any pending prompt that is not the command prompt
    pub fn is_prompt(&self) -> bool {
        matches!(
            self,
            WindowEvent::AwaitingMore
                | WindowEvent::AwaitingMenuInput
                | WindowEvent::AwaitingLineInput
        )
    }
}

/// Classify the engine's window state.
pub fn classify(status: &WindowStatus) -> WindowEvent {
    if status.terminated {
        WindowEvent::GameOver
    } else if status.window_type == NHW_MENU {
        WindowEvent::AwaitingMenuInput
    } else if status.in_getlin || status.in_yn_function {
        WindowEvent::AwaitingLineInput
    } else if status.xwaitforspace {
        WindowEvent::AwaitingMore
    } else {
        WindowEvent::AwaitingCommand
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nh_data::{NHW_MAP, NHW_MESSAGE, NHW_TEXT, WIN_ERR};

    fn status(window_type: i32) -> WindowStatus {
        WindowStatus {
            window_type,
            in_moveloop: true,
            ..WindowStatus::default()
        }
    }

    #[test]
    fn test_command() {
        assert_eq!(classify(&status(NHW_MAP)), WindowEvent::AwaitingCommand);
    }

    #[test]
    fn test_more_and_text_windows() {
        let more = WindowStatus {
            xwaitforspace: true,
            ..status(NHW_MESSAGE)
        };
        assert_eq!(classify(&more), WindowEvent::AwaitingMore);
        let text = WindowStatus {
            xwaitforspace: true,
            ..status(NHW_TEXT)
        };
        assert_eq!(classify(&text), WindowEvent::AwaitingMore);
    }

    #[test]
    fn test_menu_wins_over_more() {
        let menu = WindowStatus {
            xwaitforspace: true,
            ..status(NHW_MENU)
        };
        assert_eq!(classify(&menu), WindowEvent::AwaitingMenuInput);
    }

    #[test]
    fn test_line_input() {
        let yn = WindowStatus {
            in_yn_function: true,
            ..status(NHW_MESSAGE)
        };
        let getlin = WindowStatus {
            in_getlin: true,
            ..status(NHW_MESSAGE)
        };
        assert_eq!(classify(&yn), WindowEvent::AwaitingLineInput);
        assert_eq!(classify(&getlin), WindowEvent::AwaitingLineInput);
        assert!(classify(&yn).is_prompt());
    }

    #[test]
    fn test_terminated_wins() {
        let over = WindowStatus {
            terminated: true,
            gameover: true,
            xwaitforspace: true,
            ..status(WIN_ERR)
        };
        assert_eq!(classify(&over), WindowEvent::GameOver);
        // Game over with death screens still up is not the end yet
        let dying = WindowStatus {
            gameover: true,
            xwaitforspace: true,
            ..status(NHW_TEXT)
        };
        assert_eq!(classify(&dying), WindowEvent::AwaitingMore);
    }
}
