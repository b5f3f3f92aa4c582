//! 循环赛
//!
//! 每对选手使用同一批随机开局，每个开局双方各执先一次，抵消先后手优势

use std::fmt::Write as _;

use anyhow::{Context, Result};
use isolation::{Board, Move, Player, WinReason};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::ArenaConfig;
use crate::game::{play_game, winner_of, Contestant};
use crate::storage::RecordStore;

/// 随机开局：双方各落在一个随机空格上
pub fn random_opening(width: usize, height: usize, rng: &mut ChaCha8Rng) -> Result<Vec<Move>> {
    let mut board = Board::new(width, height)?;
    let mut opening = Vec::with_capacity(2);
    for _ in 0..2 {
        let mv = board
            .blank_spaces()
            .choose(rng)
            .copied()
            .context("棋盘空格不足，无法生成开局")?;
        board.apply_move(mv)?;
        opening.push(mv);
    }
    Ok(opening)
}

/// 单个选手的战绩
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    /// 因超时判负的局数
    pub timeouts: u32,
    /// 因非法走法判负的局数
    pub illegal: u32,
}

impl Tally {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }

    /// 胜率（百分比），没有对局时为 0
    pub fn win_rate(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            n => 100.0 * self.wins as f64 / n as f64,
        }
    }

    fn record_loss(&mut self, reason: WinReason) {
        self.losses += 1;
        match reason {
            WinReason::Timeout => self.timeouts += 1,
            WinReason::IllegalMove => self.illegal += 1,
            WinReason::NoLegalMoves => {}
        }
    }
}

/// 循环赛积分表，顺序与配置中的选手顺序一致
#[derive(Debug, Clone, PartialEq)]
pub struct Standings {
    pub tallies: Vec<Tally>,
}

impl Standings {
    pub fn tally(&self, name: &str) -> Option<&Tally> {
        self.tallies.iter().find(|t| t.name == name)
    }

    /// 全部对局数
    pub fn total_games(&self) -> u32 {
        self.tallies.iter().map(|t| t.wins).sum()
    }

    /// 渲染为文本表格
    pub fn render(&self) -> String {
        let width = self
            .tallies
            .iter()
            .map(|t| t.name.len())
            .max()
            .unwrap_or(0)
            .max("Agent".len());

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<width$}  {:>5}  {:>6}  {:>8}  {:>7}  {:>6}",
            "Agent", "Wins", "Losses", "Timeouts", "Illegal", "Win %"
        );
        for t in &self.tallies {
            let _ = writeln!(
                out,
                "{:<width$}  {:>5}  {:>6}  {:>8}  {:>7}  {:>5.1}%",
                t.name,
                t.wins,
                t.losses,
                t.timeouts,
                t.illegal,
                t.win_rate()
            );
        }
        out
    }
}

/// 按配置进行循环赛
pub fn run_tournament(config: &ArenaConfig) -> Result<Standings> {
    config.validate()?;

    let store = config
        .record_dir
        .as_ref()
        .map(|dir| RecordStore::open(dir.clone()))
        .transpose()?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut tallies: Vec<Tally> = config.agents.iter().map(|a| Tally::new(&a.name)).collect();
    let mut game_index = 0;

    for i in 0..config.agents.len() {
        for j in (i + 1)..config.agents.len() {
            info!(
                "Match: {} vs {}",
                config.agents[i].name, config.agents[j].name
            );

            for _ in 0..config.games_per_match {
                let opening = random_opening(config.width, config.height, &mut rng)?;
                debug!("Opening {} / {}", opening[0], opening[1]);

                for (first, second) in [(i, j), (j, i)] {
                    let spec_one = &config.agents[first];
                    let spec_two = &config.agents[second];
                    let mut agent_one = spec_one.build();
                    let mut agent_two = spec_two.build();

                    let record = play_game(
                        config.width,
                        config.height,
                        &opening,
                        [
                            Contestant::new(&spec_one.name, agent_one.as_mut()),
                            Contestant::new(&spec_two.name, agent_two.as_mut()),
                        ],
                        config.time_limit_ms,
                    )
                    .with_context(|| {
                        format!("对局失败: {} vs {}", spec_one.name, spec_two.name)
                    })?;

                    if let (Some(winner), Some(result)) = (winner_of(&record), record.result) {
                        let (winner_idx, loser_idx) = match winner {
                            Player::One => (first, second),
                            Player::Two => (second, first),
                        };
                        tallies[winner_idx].wins += 1;
                        tallies[loser_idx].record_loss(result.reason);
                        debug!(
                            "{} beats {} ({:?}) after {} moves",
                            tallies[winner_idx].name,
                            tallies[loser_idx].name,
                            result.reason,
                            record.moves.len()
                        );
                    }

                    game_index += 1;
                    if let Some(store) = &store {
                        store.save(game_index, &record)?;
                    }
                }
            }
        }
    }

    Ok(Standings { tallies })
}
