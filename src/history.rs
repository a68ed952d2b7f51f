use smallvec::SmallVec;

use crate::lami::settlement::LamiRoundResult;
use crate::mahjong::settlement::RoundResult;
use crate::money::Money;
use crate::player::{Player, PlayerId};

/// 一局结算结果的账目视图
///
/// 两种玩法的结果类型都实现它，会话层据此应用/回退分数。
pub trait RoundLedger {
    /// 每个玩家在该局的净额变化
    fn deltas(&self) -> SmallVec<[(PlayerId, Money); 4]>;
}

impl RoundLedger for RoundResult {
    fn deltas(&self) -> SmallVec<[(PlayerId, Money); 4]> {
        self.transactions
            .iter()
            .map(|t| (t.player_id, t.amount))
            .collect()
    }
}

impl RoundLedger for LamiRoundResult {
    fn deltas(&self) -> SmallVec<[(PlayerId, Money); 4]> {
        self.transactions
            .iter()
            .map(|t| (t.player_id, t.total_amount))
            .collect()
    }
}

/// 历史记录条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry<R> {
    /// 会话内递增的局号
    pub id: u64,
    /// 该局的结算结果
    pub result: R,
}

/// 对局会话：玩家名单 + 只追加的历史
///
/// 引擎产出的结果在这里落账：`record` 应用净额并追加历史，
/// `undo` 精确减掉某局加上的净额（整数分运算，分数逐位还原）。
#[derive(Debug, Clone)]
pub struct Session<R> {
    players: Vec<Player>,
    history: Vec<HistoryEntry<R>>,
    next_round_id: u64,
}

impl<R: RoundLedger> Session<R> {
    /// 创建会话
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players,
            history: Vec::new(),
            next_round_id: 1,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn history(&self) -> &[HistoryEntry<R>] {
        &self.history
    }

    /// 查询玩家当前分数
    pub fn score(&self, player_id: PlayerId) -> Option<Money> {
        self.players
            .iter()
            .find(|p| p.id == player_id)
            .map(|p| p.score)
    }

    /// 落账一局：应用净额变化并追加历史，返回局号
    pub fn record(&mut self, result: R) -> u64 {
        for (player_id, delta) in result.deltas() {
            if let Some(player) = self.players.iter_mut().find(|p| p.id == player_id) {
                player.apply_delta(delta);
            }
        }
        let id = self.next_round_id;
        self.next_round_id += 1;
        self.history.push(HistoryEntry { id, result });
        id
    }

    /// 撤销历史中的某一局：减掉它加上的净额并移除该条目
    ///
    /// 返回是否找到并撤销了该局。
    pub fn undo(&mut self, round_id: u64) -> bool {
        let Some(index) = self.history.iter().position(|e| e.id == round_id) else {
            return false;
        };
        let entry = self.history.remove(index);
        for (player_id, delta) in entry.result.deltas() {
            if let Some(player) = self.players.iter_mut().find(|p| p.id == player_id) {
                player.apply_delta(-delta);
            }
        }
        true
    }

    /// 重置会话：分数归零、清空历史
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.score = 0;
        }
        self.history.clear();
        self.next_round_id = 1;
    }
}

/// 庄家轮转与门风
///
/// 麻将会话专用：胜者坐庄，门风按与庄家的座位差取东/南/西。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerTracker {
    dealer_id: PlayerId,
}

impl DealerTracker {
    pub fn new(dealer_id: PlayerId) -> Self {
        Self { dealer_id }
    }

    pub fn dealer(&self) -> PlayerId {
        self.dealer_id
    }

    /// 胜者接庄
    pub fn rotate_to_winner(&mut self, winner_id: PlayerId) {
        self.dealer_id = winner_id;
    }

    /// 玩家当前的门风（东/南/西）
    ///
    /// 按名单顺序相对庄家的偏移取风；庄家或玩家不在名单内时返回 None。
    pub fn wind(&self, players: &[Player], player_id: PlayerId) -> Option<&'static str> {
        const WINDS: [&str; 3] = ["东", "南", "西"];
        let dealer_index = players.iter().position(|p| p.id == self.dealer_id)?;
        let player_index = players.iter().position(|p| p.id == player_id)?;
        let offset = (player_index + players.len() - dealer_index) % players.len();
        WINDS.get(offset).copied()
    }
}
