//! 音符和旋律定义

/// 音符
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    /// 方波频率，单位Hz，0 表示静音
    pub frequency_hz: u16,
    /// 时长，单位毫秒
    pub duration_ms: u16,
}

/// 旋律表
///
/// 对只读内存中 (频率, 时长) 扁平数组的借用。播放期间播放器只持有引用，
/// 不做任何拷贝，`'static` 生命周期保证表在播放期间一直有效。
///
/// ```
/// use melody_player::{pitch::*, Melody};
///
/// const CHIME: [u16; 6] = [NOTE_C5, 150, SILENCE, 50, NOTE_G5, 300];
/// const MELODY: Melody = Melody::from_table(&CHIME);
/// assert_eq!(MELODY.note_count(), 3);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Melody {
    table: &'static [u16],
}

impl Melody {
    /// 从扁平数组创建旋律，数组长度应为偶数（完整的频率/时长对）
    pub const fn from_table(table: &'static [u16]) -> Self {
        Self { table }
    }

    /// 音符数量
    pub const fn note_count(&self) -> usize {
        self.table.len() / 2
    }

    /// 读取指定位置的音符，index 必须小于 [`note_count`](Melody::note_count)
    pub fn note(&self, index: usize) -> Note {
        Note {
            frequency_hz: self.table[index * 2],
            duration_ms: self.table[index * 2 + 1],
        }
    }

    pub(crate) const fn table_len(&self) -> usize {
        self.table.len()
    }
}

/// 播放模式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlayMode {
    /// 播放一遍后停止
    Normal,
    /// 循环播放，直到显式调用 stop
    Loop,
    /// 播放一遍，start 调用阻塞到播放结束才返回
    Wait,
}
