/// Lami 结算模块
///
/// 包含结算设置与一局结算逻辑（排名主账、Joker/Ace 两类配对边账）

pub mod settings;
pub mod settlement;
