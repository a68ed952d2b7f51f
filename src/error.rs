use std::fmt;

/// 结算错误
///
/// 引擎只在输入无法构成一张平衡账目时报错（全有或全无，报错前不会
/// 产生任何部分结算结果）。数值范围类的校验（番数下限、计数上限等）
/// 由调用方在提交前完成，引擎不重复检查。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettleError {
    /// 点炮胡缺少点炮者：不知道谁放的铳就无法结算
    MissingDiscarder,
    /// 玩家名单不合法（人数错误、ID 重复、胜者或点炮者不在名单内）
    InvalidRoster { message: String },
}

impl fmt::Display for SettleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettleError::MissingDiscarder => {
                write!(f, "discard win requires a discarder id")
            }
            SettleError::InvalidRoster { message } => {
                write!(f, "invalid roster: {}", message)
            }
        }
    }
}

impl std::error::Error for SettleError {}

pub type SettleResult<T> = Result<T, SettleError>;
