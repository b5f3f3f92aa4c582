//! 对战平台配置

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use isolation::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
use isolation_ai::{Agent, AlphaBetaPlayer, Heuristic, MinimaxPlayer, RandomPlayer, SearchConfig};
use serde::{Deserialize, Serialize};

/// 默认单步时限（毫秒）
pub const DEFAULT_TIME_LIMIT_MS: u64 = 150;

/// 默认每组对局的开局数（每个开局双方各执先一次）
pub const DEFAULT_GAMES_PER_MATCH: u32 = 5;

/// 智能体类型
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentKind {
    /// 随机走子
    Random,
    /// 固定深度 Minimax
    Minimax {
        #[serde(default)]
        search: SearchConfig,
    },
    /// 迭代加深 Alpha-Beta
    AlphaBeta {
        #[serde(default)]
        search: SearchConfig,
    },
}

/// 参赛选手
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub name: String,
    pub kind: AgentKind,
}

impl AgentSpec {
    pub fn new(name: impl Into<String>, kind: AgentKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// 创建智能体实例（每局一个新实例）
    pub fn build(&self) -> Box<dyn Agent> {
        match self.kind {
            AgentKind::Random => Box::new(RandomPlayer::new()),
            AgentKind::Minimax { search } => Box::new(MinimaxPlayer::new(search)),
            AgentKind::AlphaBeta { search } => Box::new(AlphaBetaPlayer::new(search)),
        }
    }
}

/// 对战平台配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: usize,
    pub height: usize,
    /// 单步时限（毫秒）
    pub time_limit_ms: u64,
    /// 每组对局的开局数
    pub games_per_match: u32,
    /// 随机开局的种子
    pub seed: u64,
    /// 棋谱保存目录，为空则不保存
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_dir: Option<PathBuf>,
    pub agents: Vec<AgentSpec>,
}

impl ArenaConfig {
    /// 从 JSON 文件加载
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {:?}", path))?;
        let config = Self::from_json(&content)
            .with_context(|| format!("解析配置文件失败: {:?}", path))?;
        Ok(config)
    }

    /// 从 JSON 字符串解析并校验
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ArenaConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!("棋盘尺寸无效: {}x{}", self.width, self.height);
        }
        if self.width * self.height < 2 {
            bail!("棋盘至少需要两个格子");
        }
        if self.agents.len() < 2 {
            bail!("至少需要两名选手，当前 {} 名", self.agents.len());
        }
        if self.games_per_match == 0 {
            bail!("games_per_match 必须大于 0");
        }
        for spec in &self.agents {
            if let AgentKind::Minimax { search } | AgentKind::AlphaBeta { search } = &spec.kind {
                search
                    .validate()
                    .with_context(|| format!("选手 {} 的搜索配置无效", spec.name))?;
            }
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        let alpha_beta = |heuristic| AgentKind::AlphaBeta {
            search: SearchConfig::default().with_heuristic(heuristic),
        };
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            time_limit_ms: DEFAULT_TIME_LIMIT_MS,
            games_per_match: DEFAULT_GAMES_PER_MATCH,
            seed: 1,
            record_dir: None,
            agents: vec![
                AgentSpec::new("Random", AgentKind::Random),
                AgentSpec::new(
                    "MM_Lookahead",
                    AgentKind::Minimax {
                        search: SearchConfig::default(),
                    },
                ),
                AgentSpec::new("AB_Lookahead", alpha_beta(Heuristic::Lookahead)),
                AgentSpec::new("AB_Distance", alpha_beta(Heuristic::Distance)),
                AgentSpec::new("AB_CounterCenter", alpha_beta(Heuristic::CounterCenter)),
            ],
        }
    }
}
