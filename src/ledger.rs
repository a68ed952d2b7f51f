use std::collections::BTreeMap;

use crate::money::Money;
use crate::player::PlayerId;

/// 单笔转账
///
/// `from` 支出、`to` 收入同一个正金额。所有结算阶段都只产生这种
/// 对称转账，所以每一类账本天然零和。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    /// 支付者 ID
    pub from: PlayerId,
    /// 接收者 ID
    pub to: PlayerId,
    /// 金额（正数，单位：分）
    pub amount: Money,
}

impl Transfer {
    pub fn new(from: PlayerId, to: PlayerId, amount: Money) -> Self {
        Self { from, to, amount }
    }
}

/// 单一类别的结算账本
///
/// 玩家 ID -> 该类别的净额（正数收入，负数支出）。
/// 由转账列表折叠构建，每个结算阶段（牌型、飞杠、输家互结等）
/// 各自持有一份，零和不变式可以逐阶段独立校验。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComponentLedger {
    amounts: BTreeMap<PlayerId, Money>,
}

impl ComponentLedger {
    /// 创建账本，名单内每个玩家初始净额为 0
    pub fn new(player_ids: &[PlayerId]) -> Self {
        let mut amounts = BTreeMap::new();
        for &id in player_ids {
            amounts.insert(id, 0);
        }
        Self { amounts }
    }

    /// 折叠一组转账构建账本
    pub fn from_transfers(player_ids: &[PlayerId], transfers: &[Transfer]) -> Self {
        let mut ledger = Self::new(player_ids);
        for transfer in transfers {
            ledger.apply(transfer);
        }
        ledger
    }

    /// 记入一笔转账
    pub fn apply(&mut self, transfer: &Transfer) {
        *self.amounts.entry(transfer.from).or_insert(0) -= transfer.amount;
        *self.amounts.entry(transfer.to).or_insert(0) += transfer.amount;
    }

    /// 查询玩家在该类别的净额
    pub fn amount(&self, player_id: PlayerId) -> Money {
        self.amounts.get(&player_id).copied().unwrap_or(0)
    }

    /// 所有玩家净额之和（平衡账本恒为 0）
    pub fn total(&self) -> Money {
        self.amounts.values().sum()
    }

    /// 检查零和
    pub fn is_balanced(&self) -> bool {
        self.total() == 0
    }
}
