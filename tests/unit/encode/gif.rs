use std::io::Cursor;

use image::AnimationDecoder;
use image::codecs::gif::GifDecoder;

use super::*;

fn cfg(frames: u64) -> SinkConfig {
    SinkConfig {
        size: 8,
        fps: Fps::new(30, 1).unwrap(),
        frames,
    }
}

#[test]
fn centisecond_delays_track_nominal_time() {
    let fps = Fps::new(30, 1).unwrap();
    let total: u32 = (0..60).map(|i| delay_cs(fps, FrameIndex(i))).sum();
    assert_eq!(total, 200);
    for i in 0..60 {
        let d = delay_cs(fps, FrameIndex(i));
        assert!(d == 3 || d == 4, "frame {i}: {d}");
    }
}

#[test]
fn writes_a_decodable_looping_gif() {
    let mut out = Vec::new();
    {
        let mut sink = GifSink::new(&mut out, GifSinkOpts::default());
        sink.begin(cfg(4)).unwrap();
        let surface = Surface::new(8);
        for i in 0..4 {
            sink.push_frame(FrameIndex(i), &surface).unwrap();
        }
        sink.end().unwrap();
    }
    assert_eq!(&out[..6], b"GIF89a");
    let frames = GifDecoder::new(Cursor::new(out))
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap();
    assert_eq!(frames.len(), 4);
}

#[test]
fn out_of_order_frames_are_rejected() {
    let mut out = Vec::new();
    let mut sink = GifSink::new(&mut out, GifSinkOpts::default());
    sink.begin(cfg(2)).unwrap();
    assert!(sink.push_frame(FrameIndex(1), &Surface::new(8)).is_err());
}

#[test]
fn push_before_begin_fails() {
    let mut out = Vec::new();
    let mut sink = GifSink::new(&mut out, GifSinkOpts::default());
    assert!(sink.push_frame(FrameIndex(0), &Surface::new(8)).is_err());
    assert!(sink.end().is_err());
}

#[test]
fn invalid_speed_is_rejected() {
    let mut out = Vec::new();
    let mut sink = GifSink::new(
        &mut out,
        GifSinkOpts {
            speed: 0,
            ..GifSinkOpts::default()
        },
    );
    assert!(sink.begin(cfg(1)).is_err());
}
