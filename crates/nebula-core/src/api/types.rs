/// Unique identifier for a body in the arena.
///
/// Ids are allocated monotonically and never reused, so a stale id held in
/// an orbit back-reference simply resolves to `None` after pruning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// Oscillator shape for a tone event, mirroring the WebAudio oscillator
/// types the host maps these onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

impl Waveform {
    /// Numeric code used when packing tones into the shared float buffer.
    pub fn code(self) -> f32 {
        match self {
            Waveform::Sine => 0.0,
            Waveform::Square => 1.0,
            Waveform::Sawtooth => 2.0,
            Waveform::Triangle => 3.0,
        }
    }
}

/// A tone emitted by the simulation, played best-effort by the host.
/// Synthesis failures on the host side never feed back into the core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneEvent {
    /// Oscillator frequency in Hz.
    pub freq_hz: f32,
    /// Oscillator shape.
    pub waveform: Waveform,
    /// Peak gain, 0.0 to 1.0.
    pub volume: f32,
    /// Exponential decay time in seconds.
    pub decay_secs: f32,
}

impl ToneEvent {
    /// Floats per packed tone: frequency, waveform code, volume, decay.
    pub const FLOATS: usize = 4;

    pub fn new(freq_hz: f32, waveform: Waveform, volume: f32, decay_secs: f32) -> Self {
        Self {
            freq_hz,
            waveform,
            volume,
            decay_secs,
        }
    }

    /// Pack into the flat buffer layout read from WebAssembly memory.
    pub fn to_floats(self) -> [f32; Self::FLOATS] {
        [
            self.freq_hz,
            self.waveform.code(),
            self.volume,
            self.decay_secs,
        ]
    }
}
