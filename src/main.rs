/// 可执行文件入口（用于测试和调试）

use std::collections::BTreeMap;

use mjlami_engine::{
    format_money, GameSettings, LamiGameSettings, LamiRoundInput, LamiSettlement,
    MahjongSettlement, WinType,
};

fn main() {
    println!("三人麻将 / Lami 结算引擎测试");

    // 三人麻将：8 番自摸
    let settings = GameSettings::default();
    let player_ids = [1u32, 2, 3];
    let result = MahjongSettlement::settle(
        1,
        8,
        &BTreeMap::new(),
        WinType::Zimo,
        None,
        &BTreeMap::new(),
        &settings,
        &player_ids,
    )
    .expect("valid round");

    println!("麻将：玩家 1 自摸 8 番");
    for t in &result.transactions {
        println!(
            "  玩家 {}：净额 {}（牌型 {}，飞/杠 {}，互结 {}）",
            t.player_id,
            format_money(t.amount),
            format_money(t.hand_amount),
            format_money(t.bonus_amount),
            format_money(t.loser_settlement_amount),
        );
    }

    // Lami：标准名次结算
    let lami_settings = LamiGameSettings::default();
    let inputs = vec![
        lami_input(1, 0, 1),
        lami_input(2, 10, 2),
        lami_input(3, 20, 3),
        lami_input(4, 30, 4),
    ];
    let lami_result =
        LamiSettlement::settle(&inputs, false, &lami_settings).expect("valid round");

    println!("Lami：名次 {:?}", lami_result.ranking);
    for t in &lami_result.transactions {
        println!(
            "  玩家 {}：净额 {}（主账 {}，Joker {}，Ace {}）",
            t.player_id,
            format_money(t.total_amount),
            format_money(t.main_amount),
            format_money(t.joker_amount),
            format_money(t.ace_amount),
        );
    }
}

fn lami_input(player_id: u32, points: i32, priority: u8) -> LamiRoundInput {
    LamiRoundInput {
        player_id,
        points,
        joker_count: 0,
        ace_count: 0,
        suit_priority: priority,
    }
}
