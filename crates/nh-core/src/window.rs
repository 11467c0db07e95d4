//! Blocking points
//!
//! The tty port blocks inside its window procedures whenever it needs a key.
//! Here each of those places is a [`Wait`] value: feeding a key resumes the
//! wait and the engine runs until it reaches the next one.

use nh_data::{NHW_MAP, NHW_MESSAGE, NHW_TEXT, WIN_ERR};

/// Snapshot of the window-system flags a driver classifies on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowStatus {
    /// Type of the window holding the input focus, or `WIN_ERR`
    pub window_type: i32,
    pub xwaitforspace: bool,
    pub in_yn_function: bool,
    pub in_getlin: bool,
    pub gameover: bool,
    pub in_moveloop: bool,
    /// The game has finished and accepts no more input
    pub terminated: bool,
}

/// Questions asked through `yn_function`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Query {
    Eat,
    Quaff,
    Drop,
    Pray,
    Quit,
    ClimbOut,
    Possessions,
}

impl Query {
    /// Item prompts take an inventory letter instead of y/n
    pub fn wants_item(self) -> bool {
        matches!(self, Query::Eat | Query::Quaff | Query::Drop)
    }

    pub fn verb(self) -> &'static str {
        match self {
            Query::Eat => "eat",
            Query::Quaff => "drink",
            Query::Drop => "drop",
            _ => "",
        }
    }

    /// Fixed y/n prompt with its choices and default answer
    pub fn yn_prompt(self) -> (&'static str, &'static str, u8) {
        match self {
            Query::Pray => ("Are you sure you want to pray? [yn] (n)", "yn", b'n'),
            Query::Quit => ("Really quit? [yn] (n)", "yn", b'n'),
            Query::ClimbOut => (
                "Beware, there will be no return!  Still climb? [yn] (n)",
                "yn",
                b'n',
            ),
            Query::Possessions => (
                "Do you want your possessions identified? [ynq] (n)",
                "ynq",
                b'n',
            ),
            Query::Eat | Query::Quaff | Query::Drop => ("", "", 0x1b),
        }
    }
}

/// Where the engine goes once the current wait is over
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Next {
    Command,
    EnterMoveloop,
    /// First command prompt of the game
    Moveloop,
    Ask(Query),
    /// Open a menu or text window, then continue with `then`
    Window {
        kind: i32,
        lines: Vec<String>,
        then: Box<Next>,
    },
    Tombstone,
    Terminate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Wait {
    Command,
    /// `--More--` on the message line
    More(Next),
    /// A menu or text window waiting to be dismissed
    Window {
        kind: i32,
        lines: Vec<String>,
        next: Next,
    },
    YesNo(Query),
    Getline {
        prompt: String,
        buf: String,
    },
    Terminated,
}

impl Wait {
    /// Focused window type and the (xwaitforspace, in_yn_function, in_getlin) flags
    pub fn flags(&self) -> (i32, bool, bool, bool) {
        match self {
            Wait::Command => (NHW_MAP, false, false, false),
            Wait::More(_) => (NHW_MESSAGE, true, false, false),
            Wait::Window { kind, .. } => (*kind, true, false, false),
            Wait::YesNo(_) => (NHW_MESSAGE, false, true, false),
            Wait::Getline { .. } => (NHW_MESSAGE, false, false, true),
            Wait::Terminated => (WIN_ERR, false, false, false),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Wait::Window { kind, .. } if *kind == NHW_TEXT)
    }
}

/// Keys that dismiss `--More--` and windows
pub(crate) fn is_dismiss(key: u8) -> bool {
    matches!(key, b'\r' | b'\n' | b' ' | 0x1b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nh_data::NHW_MENU;

    #[test]
    fn test_flags() {
        assert_eq!(Wait::More(Next::Command).flags(), (NHW_MESSAGE, true, false, false));
        assert_eq!(Wait::YesNo(Query::Quit).flags().2, true);
        let menu = Wait::Window {
            kind: NHW_MENU,
            lines: vec![],
            next: Next::Command,
        };
        assert!(!menu.is_text());
        assert_eq!(Wait::Terminated.flags().0, WIN_ERR);
    }

    #[test]
    fn test_dismiss_keys() {
        for k in [b'\r', b'\n', b' ', 0x1b] {
            assert!(is_dismiss(k));
        }
        assert!(!is_dismiss(b'y'));
    }

    #[test]
    fn test_item_queries() {
        assert!(Query::Eat.wants_item());
        assert!(!Query::Pray.wants_item());
        assert_eq!(Query::Quit.yn_prompt().1, "yn");
    }
}
