use crate::money::Money;

/// 三人麻将结算设置
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameSettings {
    /// 每番的底分（分）
    pub base_value: Money,
    /// 爆番（包）阈值：番数达到即牌型价翻倍
    pub burst_fan: u32,
    /// 是否结算飞
    pub enable_fei: bool,
    /// 是否结算杠
    pub enable_kong: bool,
}

impl Default for GameSettings {
    /// 默认设置：1.00/番，10 番起爆，飞/杠均结算
    fn default() -> Self {
        Self {
            base_value: 100,
            burst_fan: 10,
            enable_fei: true,
            enable_kong: true,
        }
    }
}
