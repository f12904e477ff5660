//! 中断驱动的旋律播放器
//!
//! 状态机由周期定时器中断推进：每个 tick 检查当前音符是否播完，播完则
//! 切到下一个音符并重新设置音调输出。前台 API（start/stop/is_playing）
//! 和中断路径共享同一份播放状态，全部修改都在临界区内完成。

use core::cell::RefCell;

use critical_section::Mutex;

use crate::traits::{TickTimer, ToneDriver};
use crate::types::{Melody, PlayError, PlayMode};

/// 播放状态
///
/// 不变式：播放中时 `melody` 非空且 `note_index < note_count`；
/// 停止后回到全零状态。
struct PlaybackState {
    melody: Option<Melody>,
    note_index: usize,
    note_count: usize,
    /// 当前音符开始时刻的毫秒计数快照
    note_start: u32,
    mode: PlayMode,
}

impl PlaybackState {
    const fn stopped() -> Self {
        Self {
            melody: None,
            note_index: 0,
            note_count: 0,
            note_start: 0,
            mode: PlayMode::Normal,
        }
    }

    const fn is_active(&self) -> bool {
        self.melody.is_some()
    }
}

struct Inner<T, K> {
    tone: T,
    timer: K,
    playback: PlaybackState,
}

impl<T: ToneDriver, K: TickTimer> Inner<T, K> {
    /// 频率 0 转成显式静音指令，不能把 0 传给音调发生器
    fn apply_note(&mut self, frequency_hz: u16) {
        if frequency_hz == 0 {
            self.tone.set_silence().ok();
        } else {
            self.tone.set_tone(frequency_hz).ok();
        }
    }

    fn begin(&mut self, melody: Melody, mode: PlayMode) {
        let now = self.timer.now_millis();
        self.playback = PlaybackState {
            melody: Some(melody),
            note_index: 0,
            note_count: melody.note_count(),
            note_start: now,
            mode,
        };
        self.apply_note(melody.note(0).frequency_hz);
        self.timer.enable_tick();
        crate::debug!("playback started, {} notes", melody.note_count());
    }

    /// stop 和 tick 路径共用的停止逻辑，已停止时不产生任何输出指令
    fn halt(&mut self) {
        if !self.playback.is_active() {
            return;
        }
        self.tone.set_silence().ok();
        self.timer.disable_tick();
        self.playback = PlaybackState::stopped();
        crate::debug!("playback stopped");
    }

    fn tick(&mut self) {
        let Some(melody) = self.playback.melody else {
            return;
        };

        let now = self.timer.now_millis();
        let duration = u32::from(melody.note(self.playback.note_index).duration_ms);
        // 回绕安全的耗时比较。音符至少响满额定时长，最多多响一个
        // tick 周期，严格大于保证时长下限。
        if now.wrapping_sub(self.playback.note_start) <= duration {
            return;
        }

        self.playback.note_index += 1;
        if self.playback.note_index >= self.playback.note_count {
            match self.playback.mode {
                PlayMode::Normal | PlayMode::Wait => {
                    self.halt();
                    return;
                }
                PlayMode::Loop => self.playback.note_index = 0,
            }
        }

        self.playback.note_start = now;
        let note = melody.note(self.playback.note_index);
        crate::trace!(
            "note {}: {} Hz, {} ms",
            self.playback.note_index,
            note.frequency_hz,
            note.duration_ms
        );
        self.apply_note(note.frequency_hz);
    }
}

/// 旋律播放器
///
/// 每个输出引脚一个实例，音调输出和定时器源在构造时绑定。实例通常放在
/// `static` 中，前台代码和定时器中断共享同一个句柄。
pub struct MelodyPlayer<T, K> {
    inner: Mutex<RefCell<Inner<T, K>>>,
}

impl<T: ToneDriver, K: TickTimer> MelodyPlayer<T, K> {
    /// 绑定音调输出和定时器源，初始为停止状态
    pub const fn new(tone: T, timer: K) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Inner {
                tone,
                timer,
                playback: PlaybackState::stopped(),
            })),
        }
    }

    /// 开始播放
    ///
    /// 替换当前播放状态，设置第一个音符的输出并使能周期中断。
    /// `Wait` 模式下自旋等待到播放结束才返回，因此不能在 tick
    /// 中断上下文中以 `Wait` 模式调用。
    pub fn start(&self, melody: Melody, mode: PlayMode) -> Result<(), PlayError> {
        if melody.table_len() < 2 {
            return Err(PlayError::EmptyMelody);
        }
        if melody.table_len() % 2 != 0 {
            return Err(PlayError::OddTableLength);
        }

        critical_section::with(|cs| {
            let mut inner = self.inner.borrow_ref_mut(cs);
            if inner.playback.is_active() && inner.playback.mode == PlayMode::Wait {
                return Err(PlayError::WaitInProgress);
            }
            inner.begin(melody, mode);
            Ok(())
        })?;

        if mode == PlayMode::Wait {
            // 等待 tick 路径把播放推进到结束，轮询之间不持有临界区
            while self.is_playing() {
                core::hint::spin_loop();
            }
        }
        Ok(())
    }

    /// 停止播放并静音，可重复调用，已停止时无任何副作用
    pub fn stop(&self) {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).halt());
    }

    /// 是否正在播放
    pub fn is_playing(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow_ref(cs).playback.is_active())
    }

    /// 周期中断入口，由平台定时器适配器在每个 tick 调用
    ///
    /// 绝大多数 tick 不跨音符边界，只做一次耗时比较就返回。
    pub fn on_tick(&self) {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).tick());
    }
}
