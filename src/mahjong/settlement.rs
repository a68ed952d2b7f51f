use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::error::{SettleError, SettleResult};
use crate::ledger::{ComponentLedger, Transfer};
use crate::mahjong::settings::GameSettings;
use crate::money::Money;
use crate::player::PlayerId;

/// 三人麻将的固定人数
pub const PLAYER_COUNT: usize = 3;

/// 输家互结的起结番数：双方番数都不足 5 时不互结
pub const MIN_LOSER_FAN: u32 = 5;

/// 胡牌方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WinType {
    /// 自摸：两家输家都付全价
    Zimo,
    /// 点炮（吃铳）：点炮者付全价，第三家付半价
    Chun,
}

/// 玩家的飞/杠统计
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct BonusStats {
    /// 飞的张数
    pub fei: u32,
    /// 自杠（自摸杠）数
    pub self_kongs: u32,
    /// 点杠来源：喂牌者 ID -> 喂出的杠数
    ///
    /// 点杠由喂牌者单独按 4 倍底分赔付，不像飞/自杠那样三家分摊。
    pub discarded_kongs: BTreeMap<PlayerId, u32>,
}

/// 价格分解（审计/展示用）
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Breakdown {
    /// 纯番数牌价：番数 × 底分
    pub raw_hand_money: Money,
    /// 爆番倍率（1 或 2）
    pub burst_multiplier: u32,
    /// 牌型全价
    pub hand_full_price: Money,
    /// 牌型半价（奇数分向零截断）
    pub hand_half_price: Money,
    /// 单个飞/自杠的价值：底分 × 2
    pub unit_bonus_value: Money,
}

/// 输家互结详情
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoserSettlementDetail {
    /// 支付方 ID
    pub from_id: PlayerId,
    /// 收取方 ID
    pub to_id: PlayerId,
    /// 金额
    pub amount: Money,
    /// 支付方申报的番数
    pub from_fan: u32,
    /// 收取方申报的番数
    pub to_fan: u32,
}

/// 单个玩家的一局交易
///
/// `amount` 恒等于三个分项之和，每个分项在全桌范围内各自零和。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerTransaction {
    /// 玩家 ID
    pub player_id: PlayerId,
    /// 净额
    pub amount: Money,
    /// 牌型分项
    pub hand_amount: Money,
    /// 飞/杠分项
    pub bonus_amount: Money,
    /// 输家互结分项
    pub loser_settlement_amount: Money,
}

/// 一局结算结果（不可变记录）
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoundResult {
    /// 胜者 ID
    pub winner_id: PlayerId,
    /// 胡牌方式
    pub win_type: WinType,
    /// 点炮者 ID（仅点炮胡时有）
    pub discarder_id: Option<PlayerId>,
    /// 番数
    pub fan: u32,
    /// 是否爆番
    pub is_burst: bool,
    /// 各玩家飞/杠统计快照
    pub player_stats: BTreeMap<PlayerId, BonusStats>,
    /// 价格分解
    pub breakdown: Breakdown,
    /// 输家互结详情（发生互结时才有）
    pub loser_settlement: Option<LoserSettlementDetail>,
    /// 逐玩家交易列表
    pub transactions: Vec<PlayerTransaction>,
}

/// 三人麻将结算器
pub struct MahjongSettlement;

impl MahjongSettlement {
    /// 结算一局
    ///
    /// # 参数
    ///
    /// - `winner_id`: 胜者 ID
    /// - `fan`: 胜者番数（起胡下限由调用方校验，引擎不强制）
    /// - `player_stats`: 各玩家的飞/杠统计（缺省视为全 0）
    /// - `win_type`: 胡牌方式
    /// - `discarder_id`: 点炮者 ID（点炮胡必填）
    /// - `loser_fans`: 两家输家申报的番数（缺省视为 0），仅用于输家互结
    /// - `settings`: 结算设置
    /// - `player_ids`: 玩家名单（恰好 3 个互不相同的 ID）
    ///
    /// # 返回
    ///
    /// 一局的不可变结算结果；名单不合法或点炮胡缺少点炮者时报错，
    /// 报错前不会产生任何账目。
    #[allow(clippy::too_many_arguments)]
    pub fn settle(
        winner_id: PlayerId,
        fan: u32,
        player_stats: &BTreeMap<PlayerId, BonusStats>,
        win_type: WinType,
        discarder_id: Option<PlayerId>,
        loser_fans: &BTreeMap<PlayerId, u32>,
        settings: &GameSettings,
        player_ids: &[PlayerId],
    ) -> SettleResult<RoundResult> {
        Self::validate_roster(winner_id, player_ids)?;

        // 点炮胡必须知道点炮者，否则全价/半价无从分配
        let discarder_id = match win_type {
            WinType::Zimo => None,
            WinType::Chun => match discarder_id {
                None => return Err(SettleError::MissingDiscarder),
                Some(id) if id == winner_id => {
                    return Err(SettleError::InvalidRoster {
                        message: format!("discarder {} is the winner", id),
                    })
                }
                Some(id) if !player_ids.contains(&id) => {
                    return Err(SettleError::InvalidRoster {
                        message: format!("discarder {} not in roster", id),
                    })
                }
                Some(id) => Some(id),
            },
        };

        // --- 1. 牌型结算 ---
        let raw_hand_money = fan as Money * settings.base_value;
        let is_burst = fan >= settings.burst_fan;
        let burst_multiplier: u32 = if is_burst { 2 } else { 1 };
        let hand_full_price = raw_hand_money * burst_multiplier as Money;
        let hand_half_price = hand_full_price / 2;

        let mut hand_transfers: SmallVec<[Transfer; 4]> = SmallVec::new();
        for &pid in player_ids {
            if pid == winner_id {
                continue;
            }
            let payment = match win_type {
                WinType::Zimo => hand_full_price,
                WinType::Chun => {
                    if Some(pid) == discarder_id {
                        hand_full_price
                    } else {
                        hand_half_price
                    }
                }
            };
            if payment > 0 {
                hand_transfers.push(Transfer::new(pid, winner_id, payment));
            }
        }
        let hand_ledger = ComponentLedger::from_transfers(player_ids, &hand_transfers);

        // --- 2. 飞/杠结算 ---
        // 飞和自杠按"1 番 × 2 倍底分"计，每个其他玩家各付一份（不分摊）；
        // 点杠由喂牌者单独按 4 倍底分赔付
        let unit_bonus_value = settings.base_value * 2;
        let kong_feed_value = settings.base_value * 4;

        let mut bonus_transfers: SmallVec<[Transfer; 8]> = SmallVec::new();
        for &receiver_id in player_ids {
            let stats = player_stats.get(&receiver_id);

            let mut shared_count = 0u32;
            if settings.enable_fei {
                shared_count += stats.map_or(0, |s| s.fei);
            }
            if settings.enable_kong {
                shared_count += stats.map_or(0, |s| s.self_kongs);
            }
            if shared_count > 0 {
                let payout = shared_count as Money * unit_bonus_value;
                for &payer_id in player_ids {
                    if payer_id != receiver_id {
                        bonus_transfers.push(Transfer::new(payer_id, receiver_id, payout));
                    }
                }
            }

            if settings.enable_kong {
                if let Some(stats) = stats {
                    for (&donor_id, &count) in &stats.discarded_kongs {
                        // 喂牌者必须是名单内的其他玩家
                        if donor_id == receiver_id || !player_ids.contains(&donor_id) {
                            continue;
                        }
                        if count > 0 {
                            bonus_transfers.push(Transfer::new(
                                donor_id,
                                receiver_id,
                                count as Money * kong_feed_value,
                            ));
                        }
                    }
                }
            }
        }
        let bonus_ledger = ComponentLedger::from_transfers(player_ids, &bonus_transfers);

        // --- 3. 输家互结 ---
        let losers: SmallVec<[PlayerId; 2]> = player_ids
            .iter()
            .copied()
            .filter(|&id| id != winner_id)
            .collect();
        // 名单校验过后非胜者恰好两人
        let &[loser1, loser2] = losers.as_slice() else {
            return Err(SettleError::InvalidRoster {
                message: format!("expected 2 losers, got {}", losers.len()),
            });
        };
        let (loser_transfer, loser_settlement) = Self::settle_losers(
            loser1,
            loser2,
            loser_fans.get(&loser1).copied().unwrap_or(0),
            loser_fans.get(&loser2).copied().unwrap_or(0),
            settings.base_value,
        );
        let loser_ledger = match loser_transfer {
            Some(transfer) => ComponentLedger::from_transfers(player_ids, &[transfer]),
            None => ComponentLedger::new(player_ids),
        };

        // --- 4. 汇总 ---
        let transactions = player_ids
            .iter()
            .map(|&pid| {
                let hand_amount = hand_ledger.amount(pid);
                let bonus_amount = bonus_ledger.amount(pid);
                let loser_settlement_amount = loser_ledger.amount(pid);
                PlayerTransaction {
                    player_id: pid,
                    amount: hand_amount + bonus_amount + loser_settlement_amount,
                    hand_amount,
                    bonus_amount,
                    loser_settlement_amount,
                }
            })
            .collect();

        Ok(RoundResult {
            winner_id,
            win_type,
            discarder_id,
            fan,
            is_burst,
            player_stats: player_stats.clone(),
            breakdown: Breakdown {
                raw_hand_money,
                burst_multiplier,
                hand_full_price,
                hand_half_price,
                unit_bonus_value,
            },
            loser_settlement,
            transactions,
        })
    }

    /// 校验名单：恰好 3 个互不相同的 ID，且胜者在名单内
    fn validate_roster(winner_id: PlayerId, player_ids: &[PlayerId]) -> SettleResult<()> {
        if player_ids.len() != PLAYER_COUNT {
            return Err(SettleError::InvalidRoster {
                message: format!("expected {} players, got {}", PLAYER_COUNT, player_ids.len()),
            });
        }
        let mut seen: SmallVec<[PlayerId; PLAYER_COUNT]> = SmallVec::new();
        for &id in player_ids {
            if seen.contains(&id) {
                return Err(SettleError::InvalidRoster {
                    message: format!("duplicate player id {}", id),
                });
            }
            seen.push(id);
        }
        if !player_ids.contains(&winner_id) {
            return Err(SettleError::InvalidRoster {
                message: format!("winner {} not in roster", winner_id),
            });
        }
        Ok(())
    }

    /// 两家输家之间的互结
    ///
    /// 规则：双方番数都不足 `MIN_LOSER_FAN` 时不互结；只有一方够番，
    /// 另一方按该番数付钱；双方都够番时番数严格更高者收钱；
    /// 番数相等时不互结（既有规则原样保留）。
    fn settle_losers(
        loser1: PlayerId,
        loser2: PlayerId,
        fan1: u32,
        fan2: u32,
        base_value: Money,
    ) -> (Option<Transfer>, Option<LoserSettlementDetail>) {
        let qualifies1 = fan1 >= MIN_LOSER_FAN;
        let qualifies2 = fan2 >= MIN_LOSER_FAN;

        let (from_id, to_id, from_fan, to_fan) = match (qualifies1, qualifies2) {
            (false, false) => return (None, None),
            (true, false) => (loser2, loser1, fan2, fan1),
            (false, true) => (loser1, loser2, fan1, fan2),
            (true, true) => {
                if fan1 > fan2 {
                    (loser2, loser1, fan2, fan1)
                } else if fan2 > fan1 {
                    (loser1, loser2, fan1, fan2)
                } else {
                    // 番数相等：不互结
                    return (None, None);
                }
            }
        };

        let amount = to_fan as Money * base_value;
        if amount <= 0 {
            return (None, None);
        }

        let transfer = Transfer::new(from_id, to_id, amount);
        let detail = LoserSettlementDetail {
            from_id,
            to_id,
            amount,
            from_fan,
            to_fan,
        };
        (Some(transfer), Some(detail))
    }
}
