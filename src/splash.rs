pub const SPLASH_DELAY_MS: f64 = 2600.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Splash,
    Main,
}

/// One-way switch from the intro screen to the main page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplashGate {
    phase: Phase,
}

impl SplashGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Main
    }

    /// Called when the splash timer fires. Returns `true` only for the call that
    /// actually opened the gate.
    pub fn open(&mut self) -> bool {
        match self.phase {
            Phase::Splash => {
                self.phase = Phase::Main;
                true
            }
            Phase::Main => false,
        }
    }
}
