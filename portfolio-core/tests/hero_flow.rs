use portfolio_core::hero::{HeroEffect, HeroEvent, HeroPhase, HeroSequencer, HeroTimeline};
use portfolio_core::route::Route;
use std::time::Duration;

/// Records the driver-facing side of the choreography: pending timers, fade
/// state, and every navigation the sequencer asked for.
#[derive(Default)]
struct RecordingDriver {
    pending: Vec<(HeroEvent, Duration)>,
    fade_active: bool,
    cancellations: usize,
    navigations: Vec<Route>,
}

impl RecordingDriver {
    fn apply(&mut self, effects: Vec<HeroEffect>) {
        for effect in effects {
            match effect {
                HeroEffect::Schedule { event, delay } => self.pending.push((event, delay)),
                HeroEffect::CancelTimers => {
                    self.cancellations += 1;
                    self.pending.clear();
                }
                HeroEffect::BeginFade => self.fade_active = true,
                HeroEffect::EndFade => self.fade_active = false,
                HeroEffect::Navigate(route) => self.navigations.push(route),
            }
        }
    }

    /// Delivers one pending event back into the sequencer, as a fired timer
    /// would.
    fn fire(&mut self, sequencer: &mut HeroSequencer, event: HeroEvent) {
        let position = self
            .pending
            .iter()
            .position(|(pending, _)| *pending == event)
            .expect("event was scheduled");
        self.pending.remove(position);
        let effects = sequencer.handle(event);
        self.apply(effects);
    }
}

#[test]
fn full_choreography_navigates_to_the_listing_exactly_once() {
    let mut sequencer = HeroSequencer::new(HeroTimeline::default());
    let mut driver = RecordingDriver::default();

    driver.apply(sequencer.mount());
    assert_eq!(
        driver.pending,
        vec![
            (HeroEvent::ParticlesDue, Duration::from_millis(3000)),
            (HeroEvent::ControlDue, Duration::from_millis(3000)),
        ]
    );
    assert!(!sequencer.particles_visible());

    driver.fire(&mut sequencer, HeroEvent::ParticlesDue);
    assert!(sequencer.particles_visible());

    driver.fire(&mut sequencer, HeroEvent::ControlDue);
    assert_eq!(sequencer.phase(), HeroPhase::Armed);

    driver.apply(sequencer.trigger());
    assert!(sequencer.warped());
    assert!(driver.fade_active);
    assert_eq!(
        driver.pending,
        vec![(HeroEvent::NavigateDue, Duration::from_millis(800))]
    );

    // A second activation after the first has no effect.
    driver.apply(sequencer.trigger());
    assert_eq!(driver.pending.len(), 1);

    driver.fire(&mut sequencer, HeroEvent::NavigateDue);
    assert_eq!(driver.navigations, vec![Route::Portfolio]);
    assert!(!driver.fade_active);
    assert!(driver.pending.is_empty());
}

#[test]
fn unmounting_mid_sequence_cancels_the_pending_navigation() {
    let mut sequencer = HeroSequencer::new(HeroTimeline::default());
    let mut driver = RecordingDriver::default();

    driver.apply(sequencer.mount());
    driver.fire(&mut sequencer, HeroEvent::ControlDue);
    driver.apply(sequencer.trigger());
    assert!(driver.fade_active);

    driver.apply(sequencer.unmount());
    assert_eq!(driver.cancellations, 1);
    assert!(driver.pending.is_empty());
    assert!(!driver.fade_active);

    // Even a timer the driver failed to cancel cannot navigate any more.
    driver.apply(sequencer.handle(HeroEvent::NavigateDue));
    assert!(driver.navigations.is_empty());
}

#[test]
fn unmounting_before_the_trigger_leaves_no_residue() {
    let mut sequencer = HeroSequencer::new(HeroTimeline::default());
    let mut driver = RecordingDriver::default();

    driver.apply(sequencer.mount());
    driver.apply(sequencer.unmount());

    assert!(driver.pending.is_empty());
    assert!(!driver.fade_active);
    assert!(driver.navigations.is_empty());

    driver.apply(sequencer.handle(HeroEvent::ParticlesDue));
    assert!(!sequencer.particles_visible());
}
