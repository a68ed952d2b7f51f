use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mjlami_engine::{
    BonusStats, GameSettings, LamiGameSettings, LamiRoundInput, LamiSettlement,
    MahjongSettlement, WinType,
};

fn bench_mahjong_settle(c: &mut Criterion) {
    let settings = GameSettings::default();
    let player_ids = [1u32, 2, 3];

    let mut discarded_kongs = BTreeMap::new();
    discarded_kongs.insert(2u32, 1u32);
    let mut player_stats = BTreeMap::new();
    player_stats.insert(
        1,
        BonusStats {
            fei: 2,
            self_kongs: 1,
            discarded_kongs,
        },
    );

    let mut loser_fans = BTreeMap::new();
    loser_fans.insert(2u32, 6u32);
    loser_fans.insert(3u32, 4u32);

    c.bench_function("mahjong_settle_full_round", |b| {
        b.iter(|| {
            MahjongSettlement::settle(
                black_box(1),
                black_box(12),
                black_box(&player_stats),
                WinType::Chun,
                Some(2),
                black_box(&loser_fans),
                &settings,
                &player_ids,
            )
        })
    });
}

fn bench_lami_settle(c: &mut Criterion) {
    let settings = LamiGameSettings::default();
    let inputs: Vec<LamiRoundInput> = (1..=4u32)
        .map(|id| LamiRoundInput {
            player_id: id,
            points: (id * 10) as i32,
            joker_count: id % 3,
            ace_count: (id + 1) % 3,
            suit_priority: id as u8,
        })
        .collect();

    c.bench_function("lami_settle_full_round", |b| {
        b.iter(|| LamiSettlement::settle(black_box(&inputs), black_box(false), &settings))
    });
}

criterion_group!(benches, bench_mahjong_settle, bench_lami_settle);
criterion_main!(benches);
