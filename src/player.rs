use crate::money::Money;

/// 玩家 ID（会话内唯一且稳定）
pub type PlayerId = u32;

/// 玩家
///
/// 分数只由调用方应用一局结算结果时变动，结算引擎本身从不修改它。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Player {
    /// 玩家 ID
    pub id: PlayerId,
    /// 玩家名称
    pub name: String,
    /// 累计分数（分）
    pub score: Money,
}

impl Player {
    /// 创建新玩家（初始分数为 0）
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
        }
    }

    /// 应用一笔净额变化（正数收入，负数支出）
    pub fn apply_delta(&mut self, delta: Money) {
        self.score += delta;
    }
}
