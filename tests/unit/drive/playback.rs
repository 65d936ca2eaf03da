use super::*;

#[test]
fn ticks_report_elapsed_and_reschedule() {
    let mut sched = ManualScheduler::new();
    let mut p = Playback::new();
    p.start(1000.0, &mut sched);
    assert_eq!(sched.pending().len(), 1);

    sched.fire();
    assert_eq!(p.tick(1250.0, MotionEffect::Spin, &mut sched), Some(250.0));
    assert_eq!(sched.pending().len(), 1);
}

#[test]
fn stop_cancels_the_pending_callback() {
    let mut sched = ManualScheduler::new();
    let mut p = Playback::new();
    p.start(0.0, &mut sched);
    assert!(p.stop(&mut sched));
    assert!(sched.pending().is_empty());
    assert!(!p.is_playing());
    assert_eq!(p.tick(10.0, MotionEffect::Pulse, &mut sched), None);
}

#[test]
fn static_effect_ends_the_loop() {
    let mut sched = ManualScheduler::new();
    let mut p = Playback::new();
    p.start(0.0, &mut sched);
    sched.fire();
    assert_eq!(p.tick(16.0, MotionEffect::None, &mut sched), None);
    assert!(!p.is_playing());
    assert!(sched.pending().is_empty());
}

#[test]
fn restart_does_not_leak_callbacks() {
    let mut sched = ManualScheduler::new();
    let mut p = Playback::new();
    p.start(0.0, &mut sched);
    p.start(500.0, &mut sched);
    assert_eq!(sched.pending().len(), 1);
    sched.fire();
    assert_eq!(p.tick(600.0, MotionEffect::Rain, &mut sched), Some(100.0));
}
