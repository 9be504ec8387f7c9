use crate::route::Route;
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Landing choreography phases. Strictly monotonic within one view lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroPhase {
    Idle,
    Revealing,
    Armed,
    Warping,
    Navigated,
}

/// Deferred events the sequencer asks the driver to deliver back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroEvent {
    ParticlesDue,
    ControlDue,
    NavigateDue,
}

/// Everything the sequencer wants done to the outside world. The driver
/// interprets these; the sequencer itself never touches a timer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeroEffect {
    Schedule { event: HeroEvent, delay: Duration },
    CancelTimers,
    BeginFade,
    EndFade,
    Navigate(Route),
}

/// Wall-clock schedule for the choreography. Tests construct shorter ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroTimeline {
    pub particle_delay: Duration,
    pub control_delay: Duration,
    pub warp_delay: Duration,
}

impl Default for HeroTimeline {
    fn default() -> Self {
        Self {
            particle_delay: Duration::from_millis(3000),
            control_delay: Duration::from_millis(3000),
            warp_delay: Duration::from_millis(800),
        }
    }
}

/// One owning state machine for the landing view's reveal-then-navigate
/// sequence.
///
/// Invariants:
/// - `warped` flips false -> true at most once; the trigger is a no-op in
///   every phase except `Armed`.
/// - After `unmount` the machine is detached: no event or trigger produces
///   effects, so a stale timer can never navigate a torn-down view.
#[derive(Clone, Debug)]
pub struct HeroSequencer {
    timeline: HeroTimeline,
    phase: HeroPhase,
    particles_visible: bool,
    warped: bool,
    detached: bool,
}

impl HeroSequencer {
    pub fn new(timeline: HeroTimeline) -> Self {
        Self {
            timeline,
            phase: HeroPhase::Idle,
            particles_visible: false,
            warped: false,
            detached: false,
        }
    }

    pub fn phase(&self) -> HeroPhase {
        self.phase
    }

    pub fn particles_visible(&self) -> bool {
        self.particles_visible
    }

    pub fn warped(&self) -> bool {
        self.warped
    }

    /// `Idle -> Revealing`. Schedules the particle reveal and the entry
    /// control's staged arrival. Calling again is a no-op.
    pub fn mount(&mut self) -> Vec<HeroEffect> {
        if self.detached || self.phase != HeroPhase::Idle {
            return Vec::new();
        }
        self.phase = HeroPhase::Revealing;
        debug!("hero: revealing");
        vec![
            HeroEffect::Schedule {
                event: HeroEvent::ParticlesDue,
                delay: self.timeline.particle_delay,
            },
            HeroEffect::Schedule {
                event: HeroEvent::ControlDue,
                delay: self.timeline.control_delay,
            },
        ]
    }

    /// Delivers a previously scheduled event. Events that no longer apply to
    /// the current phase are ignored.
    pub fn handle(&mut self, event: HeroEvent) -> Vec<HeroEffect> {
        if self.detached {
            return Vec::new();
        }
        match (event, self.phase) {
            (
                HeroEvent::ParticlesDue,
                HeroPhase::Revealing | HeroPhase::Armed | HeroPhase::Warping,
            ) => {
                self.particles_visible = true;
                Vec::new()
            }
            (HeroEvent::ControlDue, HeroPhase::Revealing) => {
                self.phase = HeroPhase::Armed;
                debug!("hero: armed");
                Vec::new()
            }
            (HeroEvent::NavigateDue, HeroPhase::Warping) => {
                self.phase = HeroPhase::Navigated;
                debug!("hero: navigated");
                vec![HeroEffect::EndFade, HeroEffect::Navigate(Route::Portfolio)]
            }
            _ => Vec::new(),
        }
    }

    /// The single user activation. `Armed -> Warping`; any other phase is a
    /// no-op, which makes repeated triggers harmless.
    pub fn trigger(&mut self) -> Vec<HeroEffect> {
        if self.detached || self.phase != HeroPhase::Armed {
            return Vec::new();
        }
        self.phase = HeroPhase::Warping;
        self.warped = true;
        debug!("hero: warping");
        vec![
            HeroEffect::BeginFade,
            HeroEffect::Schedule {
                event: HeroEvent::NavigateDue,
                delay: self.timeline.warp_delay,
            },
        ]
    }

    /// Tears the sequence down. Pending timers must be cancelled and the fade
    /// cleared whether the sequence completed or not.
    pub fn unmount(&mut self) -> Vec<HeroEffect> {
        self.detached = true;
        vec![HeroEffect::CancelTimers, HeroEffect::EndFade]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_timeline() -> HeroTimeline {
        HeroTimeline {
            particle_delay: Duration::from_millis(30),
            control_delay: Duration::from_millis(30),
            warp_delay: Duration::from_millis(8),
        }
    }

    #[test]
    fn mount_schedules_both_reveals() {
        let mut seq = HeroSequencer::new(HeroTimeline::default());
        let effects = seq.mount();

        assert_eq!(seq.phase(), HeroPhase::Revealing);
        assert_eq!(
            effects,
            vec![
                HeroEffect::Schedule {
                    event: HeroEvent::ParticlesDue,
                    delay: Duration::from_millis(3000),
                },
                HeroEffect::Schedule {
                    event: HeroEvent::ControlDue,
                    delay: Duration::from_millis(3000),
                },
            ]
        );
    }

    #[test]
    fn mounting_twice_is_a_noop() {
        let mut seq = HeroSequencer::new(HeroTimeline::default());
        seq.mount();
        assert!(seq.mount().is_empty());
        assert_eq!(seq.phase(), HeroPhase::Revealing);
    }

    #[test]
    fn particles_become_visible_only_when_due() {
        let mut seq = HeroSequencer::new(quick_timeline());
        seq.mount();
        assert!(!seq.particles_visible());

        assert!(seq.handle(HeroEvent::ParticlesDue).is_empty());
        assert!(seq.particles_visible());
    }

    #[test]
    fn trigger_before_the_control_arrives_is_ignored() {
        let mut seq = HeroSequencer::new(quick_timeline());
        seq.mount();

        assert!(seq.trigger().is_empty());
        assert!(!seq.warped());
        assert_eq!(seq.phase(), HeroPhase::Revealing);
    }

    #[test]
    fn first_trigger_warps_second_is_a_noop() {
        let mut seq = HeroSequencer::new(quick_timeline());
        seq.mount();
        seq.handle(HeroEvent::ControlDue);

        let effects = seq.trigger();
        assert!(seq.warped());
        assert_eq!(
            effects,
            vec![
                HeroEffect::BeginFade,
                HeroEffect::Schedule {
                    event: HeroEvent::NavigateDue,
                    delay: Duration::from_millis(8),
                },
            ]
        );

        assert!(seq.trigger().is_empty());
        assert_eq!(seq.phase(), HeroPhase::Warping);
    }

    #[test]
    fn navigation_fires_once_with_the_fade_cleared_first() {
        let mut seq = HeroSequencer::new(quick_timeline());
        seq.mount();
        seq.handle(HeroEvent::ControlDue);
        seq.trigger();

        let effects = seq.handle(HeroEvent::NavigateDue);
        assert_eq!(
            effects,
            vec![
                HeroEffect::EndFade,
                HeroEffect::Navigate(Route::Portfolio),
            ]
        );
        assert_eq!(seq.phase(), HeroPhase::Navigated);

        assert!(seq.handle(HeroEvent::NavigateDue).is_empty());
    }

    #[test]
    fn navigate_due_outside_warping_is_ignored() {
        let mut seq = HeroSequencer::new(quick_timeline());
        seq.mount();
        assert!(seq.handle(HeroEvent::NavigateDue).is_empty());
        assert_eq!(seq.phase(), HeroPhase::Revealing);
    }

    #[test]
    fn unmount_cancels_and_detaches() {
        let mut seq = HeroSequencer::new(quick_timeline());
        seq.mount();
        seq.handle(HeroEvent::ControlDue);
        seq.trigger();

        let effects = seq.unmount();
        assert_eq!(effects, vec![HeroEffect::CancelTimers, HeroEffect::EndFade]);

        assert!(seq.handle(HeroEvent::NavigateDue).is_empty());
        assert!(seq.trigger().is_empty());
    }

    #[test]
    fn custom_timeline_delays_are_respected() {
        let mut seq = HeroSequencer::new(quick_timeline());
        let effects = seq.mount();
        let delays: Vec<Duration> = effects
            .iter()
            .map(|effect| match effect {
                HeroEffect::Schedule { delay, .. } => *delay,
                other => panic!("unexpected effect {other:?}"),
            })
            .collect();
        assert_eq!(
            delays,
            vec![Duration::from_millis(30), Duration::from_millis(30)]
        );
    }
}
