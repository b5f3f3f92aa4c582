//! 棋谱存储
//!
//! 每局棋谱保存为目录下的一个 JSON 文件

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use isolation::GameRecord;

/// 棋谱存储目录
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    /// 打开存储目录，不存在则创建
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("无法创建存储目录: {:?}", dir))?;
        }
        Ok(Self { dir })
    }

    /// 保存一局棋谱，返回文件名（不含路径）
    ///
    /// `index` 是对局序号，用来保证同一对选手的多局不会互相覆盖
    pub fn save(&self, index: usize, record: &GameRecord) -> Result<String> {
        let filename = record_filename(index, &record.player_one, &record.player_two);
        let filepath = self.dir.join(&filename);

        let json_content = record.to_json().context("序列化棋谱失败")?;
        fs::write(&filepath, json_content)
            .with_context(|| format!("写入文件失败: {:?}", filepath))?;

        Ok(filename)
    }

    /// 加载棋谱
    pub fn load(&self, game_id: &str) -> Result<GameRecord> {
        let filepath = self.dir.join(game_id);
        if !filepath.exists() {
            anyhow::bail!("棋谱文件不存在: {}", game_id);
        }

        let content = fs::read_to_string(&filepath)
            .with_context(|| format!("读取文件失败: {:?}", filepath))?;
        GameRecord::from_json(&content).context("解析棋谱文件失败")
    }

    /// 列出所有棋谱文件名，按文件名排序
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("读取存储目录失败: {:?}", self.dir))?;

        let mut games = Vec::new();
        for entry in entries {
            let path = entry.context("读取目录项失败")?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            if let Some(filename) = path.file_name().and_then(|s| s.to_str()) {
                games.push(filename.to_string());
            }
        }

        games.sort();
        Ok(games)
    }

    pub fn directory(&self) -> &Path {
        &self.dir
    }
}

/// 生成文件名，例如 `007_AB_Lookahead_vs_Random.json`
fn record_filename(index: usize, player_one: &str, player_two: &str) -> String {
    format!(
        "{:03}_{}_vs_{}.json",
        index,
        sanitize_filename(player_one),
        sanitize_filename(player_two)
    )
}

/// 清理文件名中的特殊字符
fn sanitize_filename(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | ' ' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use isolation::{Board, GameResult, Move, Player, WinReason};
    use tempfile::TempDir;

    fn sample_record() -> GameRecord {
        let board = Board::new(5, 5).unwrap();
        let mut record = GameRecord::new(&board, "AB_Lookahead", "Random");
        record.moves = vec![Move::new(0, 0), Move::new(4, 4), Move::new(2, 1)];
        record.result = Some(GameResult::new(Player::One, WinReason::Timeout));
        record
    }

    #[test]
    fn test_save_and_load_record() {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::open(temp_dir.path().join("records")).unwrap();
        assert!(store.directory().exists());

        let record = sample_record();
        let game_id = store.save(7, &record).unwrap();
        assert_eq!(game_id, "007_AB_Lookahead_vs_Random.json");

        let loaded = store.load(&game_id).unwrap();
        assert_eq!(loaded, record);
        assert_eq!(store.list().unwrap(), vec![game_id]);
    }

    #[test]
    fn test_load_missing_record() {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::open(temp_dir.path()).unwrap();
        assert!(store.load("missing.json").is_err());
    }

    #[test]
    fn test_list_skips_other_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::open(temp_dir.path()).unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "x").unwrap();
        store.save(2, &sample_record()).unwrap();
        store.save(1, &sample_record()).unwrap();

        let games = store.list().unwrap();
        assert_eq!(games.len(), 2);
        assert!(games[0].starts_with("001_"));
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("AB_Lookahead"), "AB_Lookahead");
        assert_eq!(sanitize_filename("a/b\\c"), "a_b_c");
        assert_eq!(sanitize_filename(" MM: depth 3? "), "MM__depth_3_");
    }
}
