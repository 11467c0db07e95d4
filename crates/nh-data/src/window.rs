//! Window-system constants (wintype.h)

/// Message window: the top line
pub const NHW_MESSAGE: i32 = 1;
/// Bottom status lines
pub const NHW_STATUS: i32 = 2;
pub const NHW_MAP: i32 = 3;
/// Menus, including the inventory list
pub const NHW_MENU: i32 = 4;
/// Full-screen text windows (version info, the opening legacy text)
pub const NHW_TEXT: i32 = 5;

/// Maximum number of simultaneously open windows
pub const MAXWIN: usize = 20;

/// Sentinel for "no window"
pub const WIN_ERR: i32 = -1;

// Menu selection modes
pub const PICK_NONE: i32 = 0;
pub const PICK_ONE: i32 = 1;
pub const PICK_ANY: i32 = 2;

// Map dimensions
pub const COLNO: usize = 80;
pub const ROWNO: usize = 21;

/// Width of the message buffer handed to observers
pub const MSG_BUFSZ: usize = 256;

/// Number of status line fields (blstats)
pub const NLE_BLSTATS_SIZE: usize = 25;
/// Number of program-state flags
pub const NLE_PROGRAM_STATE_SIZE: usize = 6;
/// Number of internal-state values
pub const NLE_INTERNAL_SIZE: usize = 9;
