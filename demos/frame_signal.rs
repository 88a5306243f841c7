//! Signal Framing Example
//!
//! This example demonstrates framing with sigframe:
//! - Generating a synthetic stereo tone
//! - Framing with and without end padding
//! - Windowed analysis frames ready for an FFT

use log::info;
use ndarray::Array2;
use sigframe::windowing::{AnalysisConfig, analysis_frames};
use sigframe::{frame, shape};

fn main() {
    env_logger::init();
    info!("Signal Framing Example");

    // Two channels of a 440 Hz tone, 1 second at 16 kHz
    let sr = 16000usize;
    let signal = Array2::from_shape_fn((2, sr), |(c, t)| {
        let phase = 2.0 * std::f32::consts::PI * 440.0 * t as f32 / sr as f32;
        (phase + c as f32).sin()
    });
    info!("Signal shape: {:?}", signal.shape());

    let frame_length = 400;
    let hop_length = 160;

    // Only complete frames
    let frames = frame::frame(&signal, frame_length, hop_length, false, 0.0, -1).unwrap();
    info!("Frames without padding: {:?}", frames.shape());

    // Every sample lands in a frame
    let padded = frame::frame(&signal, frame_length, hop_length, true, 0.0, -1).unwrap();
    info!("Frames with padding: {:?}", padded.shape());
    info!(
        "  - Padded length: {}",
        shape::padded_length(sr, frame_length, hop_length)
    );

    // Static shape with an unknown batch size
    let static_shape = [None, Some(sr)];
    let inferred = shape::infer_frame_shape(
        Some(&static_shape[..]),
        Some(frame_length),
        Some(hop_length),
        true,
        Some(-1),
    )
    .unwrap();
    info!("Inferred shape: {:?}", inferred);

    // Hann-windowed frames, 320-sample window centred in 512-sample frames
    let config = AnalysisConfig {
        n_fft: 512,
        hop_length: Some(hop_length),
        win_length: Some(320),
        ..Default::default()
    };
    let windowed = analysis_frames(&signal, &config).unwrap();
    info!("Analysis frames: {:?}", windowed.shape());
    info!("  - Time frames: {}", windowed.shape()[1]);
    info!("  - FFT size: {}", windowed.shape()[2]);
}
