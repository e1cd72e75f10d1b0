use super::app::AppControl;

/// Frame loop state machine.
///
/// `Running` is initial, `Closing` is terminal: once closing, no request
/// brings the loop back.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LoopState {
    #[default]
    Running,
    Closing,
}

impl LoopState {
    #[inline]
    pub fn is_running(self) -> bool {
        self == LoopState::Running
    }

    #[inline]
    pub fn request_close(&mut self) {
        *self = LoopState::Closing;
    }

    /// Folds a callback's control directive into the state.
    #[inline]
    pub fn apply(&mut self, control: AppControl) {
        if control == AppControl::Exit {
            self.request_close();
        }
    }

    /// Directive to hand back to the runtime.
    #[inline]
    pub fn control(self) -> AppControl {
        match self {
            LoopState::Running => AppControl::Continue,
            LoopState::Closing => AppControl::Exit,
        }
    }
}
