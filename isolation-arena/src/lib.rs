//! 隔离棋对战平台
//!
//! 包含:
//! - 单步计时
//! - 单局对弈与判负
//! - 随机开局循环赛
//! - 棋谱存储

pub mod config;
pub mod game;
pub mod storage;
pub mod timer;
pub mod tournament;

pub use config::{AgentKind, AgentSpec, ArenaConfig, DEFAULT_GAMES_PER_MATCH, DEFAULT_TIME_LIMIT_MS};
pub use game::{play_game, winner_of, Contestant};
pub use storage::RecordStore;
pub use timer::MoveTimer;
pub use tournament::{random_opening, run_tournament, Standings, Tally};
