use thiserror::Error;

/// start 边界上报的错误
///
/// 中断路径（tick）上不产生也不传播任何错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlayError {
    /// 旋律表中没有完整的 (频率, 时长) 对
    #[error("melody table is empty")]
    EmptyMelody,
    /// 旋律表长度为奇数，末尾的对不完整
    #[error("melody table length is odd")]
    OddTableLength,
    /// 当前有 Wait 模式播放正在阻塞其他上下文
    #[error("a wait-mode playback is in progress")]
    WaitInProgress,
}
