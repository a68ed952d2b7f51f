use std::fmt;

/// 识别失败时的保底番数（常见起胡下限）
pub const FALLBACK_FAN: u32 = 5;

/// 牌面识别结果
///
/// 来自外部图像识别服务的估算值。结算引擎只把其中的番数与
/// 飞/杠张数当作普通数字输入，不校验、不复算识别逻辑。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HandAnalysis {
    /// 估算番数
    pub fan: u32,
    /// 识别到的飞张数
    pub fei_count: u32,
    /// 识别到的杠数
    pub kong_count: u32,
    /// 识别说明（牌型概述或失败原因）
    pub reason: String,
}

impl HandAnalysis {
    /// 识别失败时的保底结果：最低起胡番数，无飞无杠
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            fan: FALLBACK_FAN,
            fei_count: 0,
            kong_count: 0,
            reason: reason.into(),
        }
    }
}

/// 识别失败
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisError {
    /// 失败原因（用于生成用户提示）
    pub message: String,
}

impl AnalysisError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hand analysis failed: {}", self.message)
    }
}

impl std::error::Error for AnalysisError {}

/// 牌面识别能力接口
///
/// 定义外部图像识别服务的标准接口
pub trait HandAnalyzer {
    /// 分析一张手牌照片
    ///
    /// # 参数
    ///
    /// - `image`: 图片字节
    ///
    /// # 返回
    ///
    /// 识别结果，或失败原因
    fn analyze(&mut self, image: &[u8]) -> Result<HandAnalysis, AnalysisError>;
}

/// 函数式识别适配器
///
/// 将函数转换为 HandAnalyzer trait
pub struct FnHandAnalyzer<F> {
    callback: F,
}

impl<F> FnHandAnalyzer<F>
where
    F: FnMut(&[u8]) -> Result<HandAnalysis, AnalysisError>,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> HandAnalyzer for FnHandAnalyzer<F>
where
    F: FnMut(&[u8]) -> Result<HandAnalysis, AnalysisError>,
{
    fn analyze(&mut self, image: &[u8]) -> Result<HandAnalysis, AnalysisError> {
        (self.callback)(image)
    }
}

/// 识别失败时回退到保底值
///
/// 失败被翻译成保底结果加一条用户提示文案，调用方据此提醒用户
/// 手动修正；结算流程不因识别失败而阻塞或改变。
pub fn analyze_or_default<A: HandAnalyzer + ?Sized>(
    analyzer: &mut A,
    image: &[u8],
) -> (HandAnalysis, Option<String>) {
    match analyzer.analyze(image) {
        Ok(analysis) => (analysis, None),
        Err(err) => {
            let warning = format!("识别失败，已回退到保底值：{}", err.message);
            (HandAnalysis::fallback(err.message), Some(warning))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_success_passes_through() {
        let mut analyzer = FnHandAnalyzer::new(|_image: &[u8]| {
            Ok(HandAnalysis {
                fan: 8,
                fei_count: 1,
                kong_count: 0,
                reason: "清一色".to_string(),
            })
        });

        let (analysis, warning) = analyze_or_default(&mut analyzer, b"jpeg");
        assert_eq!(analysis.fan, 8);
        assert_eq!(analysis.fei_count, 1);
        assert!(warning.is_none());
    }

    #[test]
    fn test_analyze_failure_falls_back() {
        let mut analyzer =
            FnHandAnalyzer::new(|_image: &[u8]| Err(AnalysisError::new("API key missing")));

        let (analysis, warning) = analyze_or_default(&mut analyzer, b"jpeg");
        assert_eq!(analysis.fan, FALLBACK_FAN);
        assert_eq!(analysis.fei_count, 0);
        assert_eq!(analysis.kong_count, 0);
        assert!(warning.unwrap().contains("API key missing"));
    }
}
