/// 三人麻将 / Lami 记分结算引擎
///
/// 纯函数结算：输入一局的申报结果与设置，输出零和、可逐项审计的
/// 逐玩家交易账目。分数与历史由调用方持有，引擎本身无状态。

pub mod analysis;
pub mod error;
pub mod history;
pub mod lami;
pub mod ledger;
pub mod mahjong;
pub mod money;
pub mod player;

// 重新导出常用类型
pub use analysis::{analyze_or_default, AnalysisError, FnHandAnalyzer, HandAnalysis, HandAnalyzer};
pub use error::{SettleError, SettleResult};
pub use history::{DealerTracker, HistoryEntry, RoundLedger, Session};
pub use lami::settings::LamiGameSettings;
pub use lami::settlement::{
    LamiPlayerTransaction, LamiRoundInput, LamiRoundResult, LamiSettlement,
};
pub use ledger::{ComponentLedger, Transfer};
pub use mahjong::settings::GameSettings;
pub use mahjong::settlement::{
    BonusStats, Breakdown, LoserSettlementDetail, MahjongSettlement, PlayerTransaction,
    RoundResult, WinType,
};
pub use money::{format_money, Money};
pub use player::{Player, PlayerId};
