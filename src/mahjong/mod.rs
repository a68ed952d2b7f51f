/// 三人麻将结算模块
///
/// 包含结算设置与一局结算逻辑（牌型、飞/杠、输家互结三类账目）

pub mod settings;
pub mod settlement;
