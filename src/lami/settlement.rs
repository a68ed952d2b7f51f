use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::error::{SettleError, SettleResult};
use crate::lami::settings::LamiGameSettings;
use crate::ledger::{ComponentLedger, Transfer};
use crate::money::Money;
use crate::player::PlayerId;

/// Lami 的最多人数（赔付表覆盖第 2-4 名）
pub const MAX_PLAYER_COUNT: usize = 4;

/// 单个玩家的一局申报输入
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LamiRoundInput {
    /// 玩家 ID
    pub player_id: PlayerId,
    /// 剩余点数（越低越好）
    pub points: i32,
    /// Joker 张数
    pub joker_count: u32,
    /// Ace 张数
    pub ace_count: u32,
    /// 花色优先级（1 最高），仅用于点数相同时定名次
    pub suit_priority: u8,
}

/// 单个玩家的一局交易
///
/// `total_amount` 恒等于三个分项之和，每个分项在全桌范围内各自零和。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LamiPlayerTransaction {
    /// 玩家 ID
    pub player_id: PlayerId,
    /// 净额
    pub total_amount: Money,
    /// 名次主账分项
    pub main_amount: Money,
    /// Joker 边账分项
    pub joker_amount: Money,
    /// Ace 边账分项
    pub ace_amount: Money,
}

/// 一局结算结果（不可变记录）
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LamiRoundResult {
    /// 胜者（第 1 名）ID
    pub winner_id: PlayerId,
    /// 是否清牌
    pub is_cleared: bool,
    /// 名次序列（第 1 名在前）
    pub ranking: Vec<PlayerId>,
    /// 各玩家申报输入快照
    pub inputs: BTreeMap<PlayerId, LamiRoundInput>,
    /// 逐玩家交易列表
    pub transactions: Vec<LamiPlayerTransaction>,
}

/// Lami 结算器
pub struct LamiSettlement;

impl LamiSettlement {
    /// 结算一局
    ///
    /// # 参数
    ///
    /// - `inputs`: 每个玩家一条申报记录（2-4 条，ID 互不相同）
    /// - `is_cleared`: 胜者是否清牌
    /// - `settings`: 结算设置
    ///
    /// # 返回
    ///
    /// 一局的不可变结算结果；名单不合法时报错。
    ///
    /// # 名次判定
    ///
    /// 按点数升序排名，点数相同按花色优先级升序（1 最高）。
    /// 点数与优先级都相同属于调用方应拦截的输入；此时引擎按稳定排序
    /// 给出确定的名次（保持输入顺序），不报错。
    pub fn settle(
        inputs: &[LamiRoundInput],
        is_cleared: bool,
        settings: &LamiGameSettings,
    ) -> SettleResult<LamiRoundResult> {
        Self::validate_roster(inputs)?;
        let player_ids: SmallVec<[PlayerId; MAX_PLAYER_COUNT]> =
            inputs.iter().map(|i| i.player_id).collect();

        // --- 1. 名次判定 ---
        let mut ranked: SmallVec<[&LamiRoundInput; MAX_PLAYER_COUNT]> = inputs.iter().collect();
        ranked.sort_by(|a, b| {
            a.points
                .cmp(&b.points)
                .then(a.suit_priority.cmp(&b.suit_priority))
        });
        let winner_id = ranked[0].player_id;

        // --- 2. 名次主账 ---
        // 清牌时三家输家统一付固定价，否则按各自名次查赔付表
        let mut main_transfers: SmallVec<[Transfer; 4]> = SmallVec::new();
        for (rank_index, loser) in ranked.iter().enumerate().skip(1) {
            let payment = if is_cleared {
                settings.clear_hand_fixed_price
            } else {
                settings.base_pay_table[rank_index - 1]
            };
            if payment > 0 {
                main_transfers.push(Transfer::new(loser.player_id, winner_id, payment));
            }
        }
        let main_ledger = ComponentLedger::from_transfers(&player_ids, &main_transfers);

        // --- 3. Joker 边账 ---
        let joker_ledger = if settings.enable_joker {
            let transfers = Self::pairwise_transfers(inputs, settings.joker_unit_value, |i| {
                i.joker_count
            });
            ComponentLedger::from_transfers(&player_ids, &transfers)
        } else {
            ComponentLedger::new(&player_ids)
        };

        // --- 4. Ace 边账 ---
        let ace_ledger = if settings.enable_ace {
            let transfers =
                Self::pairwise_transfers(inputs, settings.ace_unit_value, |i| i.ace_count);
            ComponentLedger::from_transfers(&player_ids, &transfers)
        } else {
            ComponentLedger::new(&player_ids)
        };

        // --- 5. 汇总 ---
        let transactions = player_ids
            .iter()
            .map(|&pid| {
                let main_amount = main_ledger.amount(pid);
                let joker_amount = joker_ledger.amount(pid);
                let ace_amount = ace_ledger.amount(pid);
                LamiPlayerTransaction {
                    player_id: pid,
                    total_amount: main_amount + joker_amount + ace_amount,
                    main_amount,
                    joker_amount,
                    ace_amount,
                }
            })
            .collect();

        Ok(LamiRoundResult {
            winner_id,
            is_cleared,
            ranking: ranked.iter().map(|i| i.player_id).collect(),
            inputs: inputs
                .iter()
                .map(|i| (i.player_id, i.clone()))
                .collect(),
            transactions,
        })
    }

    /// 校验名单：2-4 条输入且 ID 互不相同
    fn validate_roster(inputs: &[LamiRoundInput]) -> SettleResult<()> {
        if inputs.len() < 2 || inputs.len() > MAX_PLAYER_COUNT {
            return Err(SettleError::InvalidRoster {
                message: format!("expected 2-{} players, got {}", MAX_PLAYER_COUNT, inputs.len()),
            });
        }
        let mut seen: SmallVec<[PlayerId; MAX_PLAYER_COUNT]> = SmallVec::new();
        for input in inputs {
            if seen.contains(&input.player_id) {
                return Err(SettleError::InvalidRoster {
                    message: format!("duplicate player id {}", input.player_id),
                });
            }
            seen.push(input.player_id);
        }
        Ok(())
    }

    /// 两两配对的计数差额结算
    ///
    /// 对每一对玩家，计数少的一方按差额 × 单价付给计数多的一方。
    /// 每笔配对转账各自零和，全部配对叠加后整体仍零和。
    fn pairwise_transfers(
        inputs: &[LamiRoundInput],
        unit_value: Money,
        count_of: impl Fn(&LamiRoundInput) -> u32,
    ) -> SmallVec<[Transfer; 6]> {
        let mut transfers: SmallVec<[Transfer; 6]> = SmallVec::new();
        for i in 0..inputs.len() {
            for j in (i + 1)..inputs.len() {
                let a = &inputs[i];
                let b = &inputs[j];
                let diff = count_of(a) as i64 - count_of(b) as i64;
                let amount = diff.abs() * unit_value;
                if amount > 0 {
                    if diff > 0 {
                        transfers.push(Transfer::new(b.player_id, a.player_id, amount));
                    } else {
                        transfers.push(Transfer::new(a.player_id, b.player_id, amount));
                    }
                }
            }
        }
        transfers
    }
}
