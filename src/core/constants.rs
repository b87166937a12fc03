// Playfield geometry
pub const GRID_COLS: u8 = 20;
pub const GRID_ROWS: u8 = 18;
pub const CELL_COUNT: usize = GRID_COLS as usize * GRID_ROWS as usize;
pub const TILE_PX: i16 = 8;
pub const SCREEN_WIDTH_PX: i16 = GRID_COLS as i16 * TILE_PX; // 160
pub const SCREEN_HEIGHT_PX: i16 = GRID_ROWS as i16 * TILE_PX; // 144

// Snake
pub const BODY_CAPACITY: usize = CELL_COUNT;
pub const START_LENGTH: usize = 3;
pub const START_X_PX: i16 = 80;
pub const START_Y_PX: i16 = 64;

// Frame timing (~59.73 Hz display refresh)
pub const FRAME_INTERVAL_MICROS: u64 = 16_742;

// Save system
pub const SRAM_SIGNATURE: u16 = 0x5A4B; // "KZ"
pub const SAVE_VERSION_MAGIC: u64 = 0x544E_414B_4553_0001; // "TNAKES" v1
pub const HIGH_SCORE_SLOTS: usize = 10;
pub const SAVE_FILE_NAME: &str = "scores.sav";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "tilesnake.log";
