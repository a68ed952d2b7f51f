use crate::money::Money;

/// Lami 结算设置
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LamiGameSettings {
    /// 名次赔付表：第 2、3、4 名各付给第 1 名的金额
    pub base_pay_table: [Money; 3],
    /// 清牌（全部铺完）时三家输家统一付的固定价，覆盖名次赔付表
    pub clear_hand_fixed_price: Money,
    /// 每张 Joker 差额的单价
    pub joker_unit_value: Money,
    /// 每张 Ace 差额的单价
    pub ace_unit_value: Money,
    /// 是否结算 Joker 边账
    pub enable_joker: bool,
    /// 是否结算 Ace 边账
    pub enable_ace: bool,
}

impl Default for LamiGameSettings {
    /// 默认设置：名次赔付 1/2/3，清牌固定价 5，Joker/Ace 单价 1 且均结算
    fn default() -> Self {
        Self {
            base_pay_table: [100, 200, 300],
            clear_hand_fixed_price: 500,
            joker_unit_value: 100,
            ace_unit_value: 100,
            enable_joker: true,
            enable_ace: true,
        }
    }
}
