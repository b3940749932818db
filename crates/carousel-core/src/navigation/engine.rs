//! Carousel engine implementation
//!
//! Owns the per-widget state machine: position, the single animating
//! flag, the gesture channel, autoplay and peer sync. All work happens
//! in response to discrete calls (commands, pointer samples, `tick`);
//! nothing blocks.

use super::{resolve_target, CarouselContext, CarouselSubscriber, Mode};
use crate::autoplay::Autoplay;
use crate::config::{CarouselConfig, ConfigError, ConfigUpdate};
use crate::controls;
use crate::gesture::{DragUpdate, PointerSample, SwipeOutcome, SwipeRecognizer};
use crate::layout::{max_cross_extent, Measurements, Metrics};
use crate::registry::CarouselId;
use crate::slides::SlideDeck;
use crate::transition::Transition;
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use std::time::Instant;
use tracing::debug;

/// Lifecycle callback, invoked with (validated index, original index)
pub type NavHook = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Optional start/stop lifecycle callbacks
///
/// Kept apart from `CarouselConfig` so the configuration stays a plain
/// serializable value type.
#[derive(Default)]
pub struct Hooks {
    /// Invoked when an animated move begins
    pub on_start: Option<NavHook>,
    /// Invoked when an animated move completes (not when cancelled)
    pub on_stop: Option<NavHook>,
}

/// Where a navigation command came from; governs autoplay disabling,
/// peer broadcast and animation skipping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavOrigin {
    /// Direct command, keyboard, button or handle click
    User,
    /// Recurring autoplay advance
    Autoplay,
    /// Swipe that met the distance/speed thresholds
    SwipeAccepted,
    /// Rejected swipe snapping back to the current slide
    SwipeSnap,
    /// Broadcast from a synced peer
    Synced,
    /// Initial placement and resize snapping
    Layout,
}

impl NavOrigin {
    fn disables_autoplay(self) -> bool {
        matches!(self, Self::User | Self::SwipeAccepted)
    }

    fn broadcasts(self) -> bool {
        matches!(
            self,
            Self::User | Self::Autoplay | Self::SwipeAccepted | Self::SwipeSnap
        )
    }

    fn skips_animation(self) -> bool {
        matches!(self, Self::Layout)
    }

    /// Whether a zero-distance resolution still applies the position
    fn forced(self) -> bool {
        matches!(self, Self::Layout | Self::SwipeSnap)
    }
}

/// Carousel state stored internally
struct EngineState {
    config: CarouselConfig,
    measurements: Measurements,
    metrics: Metrics,
    deck: SlideDeck,
    current_index: usize,
    offset: f32,
    enabled: bool,
    hovered: bool,
    destroyed: bool,
    transition: Transition,
    recognizer: SwipeRecognizer,
    /// Slider offset at drag start; present while an interaction is live
    drag_base: Option<f32>,
    autoplay: Autoplay,
}

impl EngineState {
    fn mode(&self) -> Mode {
        if self.config.circular {
            Mode::Circular
        } else {
            Mode::Bounded
        }
    }

    /// Re-derive the frame cross extent from the visible window when the
    /// height is not fixed to the tallest slide
    fn refresh_cross(&mut self) {
        if !self.metrics.horizontal || self.config.fixed_height {
            return;
        }
        let window = (self.current_index..self.current_index + self.metrics.visible)
            .filter_map(|display| self.deck.original_index_of(display))
            .collect::<Vec<_>>();
        self.metrics.frame_cross = max_cross_extent(&self.measurements, true, window);
    }
}

/// The main carousel engine, one per widget instance
pub struct CarouselEngine {
    id: CarouselId,
    state: Arc<RwLock<EngineState>>,
    subscribers: Arc<RwLock<Vec<Weak<dyn CarouselSubscriber>>>>,
    peers: Arc<RwLock<Vec<Weak<CarouselEngine>>>>,
    hooks: Hooks,
}

impl CarouselEngine {
    /// Create and initialize an engine from validated configuration and
    /// initial measurements
    pub fn new(
        config: CarouselConfig,
        measurements: Measurements,
        hooks: Hooks,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let total = measurements.slide_sizes.len();
        let deck = SlideDeck::new(total);
        let metrics = Metrics::compute(&config, &measurements, total);
        let enabled = total > metrics.visible;
        let current_index = config.initial_slide.min(total.saturating_sub(metrics.visible));
        let offset = metrics.offset_for(current_index);
        let autoplay = if enabled {
            Autoplay::new(config.autoplay_interval)
        } else {
            Autoplay::new(None)
        };
        let recognizer = SwipeRecognizer::new(config.horizontal);

        let mut state = EngineState {
            config,
            measurements,
            metrics,
            deck,
            current_index,
            offset,
            enabled,
            hovered: false,
            destroyed: false,
            transition: Transition::Idle,
            recognizer,
            drag_base: None,
            autoplay,
        };
        state.refresh_cross();

        Ok(Self {
            id: CarouselId::new_v4(),
            state: Arc::new(RwLock::new(state)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
            peers: Arc::new(RwLock::new(Vec::new())),
            hooks,
        })
    }

    pub fn id(&self) -> CarouselId {
        self.id
    }

    /// Current configuration (a copy; the stored value is immutable)
    pub fn config(&self) -> CarouselConfig {
        self.state.read().config.clone()
    }

    /// Last measurements applied
    pub fn measurements(&self) -> Measurements {
        self.state.read().measurements.clone()
    }

    pub fn is_destroyed(&self) -> bool {
        self.state.read().destroyed
    }

    /// Whether the autoplay timer can still fire
    pub fn autoplay_active(&self) -> bool {
        self.state.read().autoplay.is_active()
    }

    /// Merge a partial configuration and relayout
    pub fn update(&self, update: ConfigUpdate) -> Result<(), ConfigError> {
        {
            let mut state = self.state.write();
            if state.destroyed {
                return Ok(());
            }
            let merged = update.merge(&state.config);
            merged.validate()?;
            state.recognizer.set_horizontal(merged.horizontal);
            state.config = merged;
        }
        self.relayout();
        self.disable();
        self.enable();
        Ok(())
    }

    /// Apply fresh measurements (frame resize or slide content change)
    pub fn resize(&self, measurements: Measurements) {
        let total_changed;
        {
            let mut state = self.state.write();
            if state.destroyed {
                return;
            }
            total_changed = measurements.slide_sizes.len() != state.deck.len();
            state.measurements = measurements;
            if total_changed {
                state.deck = SlideDeck::new(state.measurements.slide_sizes.len());
            }
        }
        self.relayout();
        if total_changed {
            // Navigation availability may have flipped
            self.disable();
            self.enable();
        }
    }

    /// Change the slide count, keeping the last measured size for any
    /// appended slides
    pub fn set_slide_count(&self, total: usize) {
        let measurements = {
            let state = self.state.read();
            if state.destroyed {
                return;
            }
            let mut m = state.measurements.clone();
            let template = m.slide_sizes.last().copied().unwrap_or((0.0, 0.0));
            m.slide_sizes.resize(total, template);
            m
        };
        self.resize(measurements);
    }

    /// Enable navigation. A no-op when every slide is already visible.
    pub fn enable(&self) {
        {
            let mut state = self.state.write();
            if state.destroyed || state.enabled {
                return;
            }
            if state.metrics.visible >= state.deck.len() {
                return;
            }
            state.enabled = true;
            state.autoplay = Autoplay::new(state.config.autoplay_interval);
            if state.hovered && state.config.pause_autoplay_on_hover {
                state.autoplay.pause();
            }
        }
        self.notify_subscribers();
    }

    /// Disable navigation; the in-flight transition, if any, still runs
    /// to completion
    pub fn disable(&self) {
        {
            let mut state = self.state.write();
            if state.destroyed || !state.enabled {
                return;
            }
            state.enabled = false;
            state.autoplay.disable();
            let horizontal = state.config.horizontal;
            state.recognizer = SwipeRecognizer::new(horizontal);
            state.drag_base = None;
        }
        self.notify_subscribers();
    }

    /// Navigate to a display index
    pub fn go_to(&self, index: i64) {
        self.navigate(index, NavOrigin::User);
    }

    /// Navigate to the slide with a stable original index (handles and
    /// number keys address slides this way)
    pub fn go_to_original(&self, original: usize) {
        let target = {
            let state = self.state.read();
            state.deck.display_index_of(original)
        };
        if let Some(display) = target {
            self.navigate(display as i64, NavOrigin::User);
        }
    }

    /// Advance by the configured step
    pub fn next(&self) {
        let (current, step) = self.current_and_step();
        self.navigate(current + step, NavOrigin::User);
    }

    /// Go back by the configured step
    pub fn prev(&self) {
        let (current, step) = self.current_and_step();
        self.navigate(current - step, NavOrigin::User);
    }

    /// Hover state, pausing/resuming autoplay when so configured
    pub fn set_hovered(&self, hovered: bool) {
        let mut state = self.state.write();
        if state.destroyed || state.hovered == hovered {
            return;
        }
        state.hovered = hovered;
        if !state.config.pause_autoplay_on_hover {
            return;
        }
        if hovered {
            state.autoplay.pause();
        } else {
            state.autoplay.resume();
        }
    }

    /// Begin a pointer interaction. Ignored while a transition is in
    /// flight: the slider offset has a single writer at a time.
    pub fn pointer_start(&self, sample: PointerSample) {
        let mut state = self.state.write();
        if state.destroyed || !state.enabled || !state.config.touch_enabled {
            return;
        }
        if state.transition.is_animating() {
            return;
        }
        state.recognizer.begin(sample);
        state.drag_base = Some(state.offset);
    }

    /// Feed a live pointer sample; primary-axis drags move the slider
    /// un-eased and mirror the offset to synced peers
    pub fn pointer_move(&self, sample: PointerSample) {
        let mirrored;
        {
            let mut state = self.state.write();
            if state.destroyed || !state.enabled {
                return;
            }
            let Some(base) = state.drag_base else {
                return;
            };
            match state.recognizer.update(sample) {
                DragUpdate::DragBy(delta) => {
                    state.offset = base + delta;
                    mirrored = Some(state.offset);
                }
                DragUpdate::Ignored => mirrored = None,
            }
        }

        if let Some(offset) = mirrored {
            for peer in self.live_peers() {
                peer.apply_mirrored_offset(offset);
            }
        }
    }

    /// End a pointer interaction and resolve it exactly once
    pub fn pointer_end(&self, sample: PointerSample) {
        let outcome;
        let current;
        {
            let mut state = self.state.write();
            if state.drag_base.take().is_none() {
                return;
            }
            if state.destroyed || !state.enabled {
                return;
            }
            let thresholds = state.metrics.thresholds;
            let slide_extent = state.metrics.slide_extent;
            outcome = state.recognizer.finish(sample, thresholds, slide_extent);
            current = state.current_index as i64;
        }

        match outcome {
            SwipeOutcome::Swipe { slides, direction } => {
                self.navigate(current + direction * slides as i64, NavOrigin::SwipeAccepted);
            }
            SwipeOutcome::Snap => {
                self.navigate(current, NavOrigin::SwipeSnap);
            }
            SwipeOutcome::None => {}
        }
    }

    /// Drive time forward: sample the in-flight transition and poll
    /// autoplay. Returns true while the widget needs further ticks.
    pub fn tick(&self, now: Instant) -> bool {
        let mut completed = None;
        let mut autoplay_target = None;
        let active;
        {
            let mut state = self.state.write();
            if state.destroyed {
                return false;
            }

            if state.transition.is_animating() {
                if state.transition.finished(now) {
                    let index = state.transition.target().unwrap_or(state.current_index);
                    if let Some(to) = state.transition.destination() {
                        state.offset = to;
                    }
                    state.transition = Transition::Idle;
                    let original = state.deck.original_index_of(index).unwrap_or(index);
                    completed = Some((index, original));
                } else if let Some(offset) = state.transition.sample(now) {
                    state.offset = offset;
                }
            }

            if state.enabled
                && !state.transition.is_animating()
                && !state.recognizer.is_dragging()
                && state.autoplay.fire(now)
            {
                autoplay_target = Some(state.current_index as i64 + state.config.step as i64);
            }

            active = state.transition.is_animating() || state.autoplay.is_active();
        }

        if let Some((index, original)) = completed {
            if let Some(hook) = &self.hooks.on_stop {
                hook(index, original);
            }
            self.notify_subscribers();
        }
        if let Some(target) = autoplay_target {
            self.navigate(target, NavOrigin::Autoplay);
        }

        active || completed.is_some()
    }

    /// Tear down: cancel the transition and autoplay, drop subscribers
    /// and peers. Every later operation is a no-op.
    pub fn destroy(&self) {
        {
            let mut state = self.state.write();
            if state.destroyed {
                return;
            }
            state.destroyed = true;
            state.enabled = false;
            // Cancelled transitions fire no stop hook
            state.transition.cancel();
            state.autoplay.disable();
            state.drag_base = None;
        }
        self.subscribers.write().clear();
        self.peers.write().clear();
        debug!(id = %self.id, "carousel destroyed");
    }

    /// Get the current carousel context
    pub fn context(&self) -> CarouselContext {
        let state = self.state.read();
        let total = state.deck.len();
        let mode = state.mode();
        let original_index = state
            .deck
            .original_index_of(state.current_index)
            .unwrap_or(state.current_index);

        let nav = controls::nav_buttons(
            state.enabled,
            mode,
            state.current_index,
            total,
            state.metrics.visible,
        );
        let handles = if state.config.show_handles {
            controls::handles(
                state.config.grouped_handles,
                total,
                state.metrics.visible,
                original_index,
            )
        } else {
            Vec::new()
        };
        let counter = state.config.show_counter.then(|| {
            controls::counter_text(
                &state.config.counter_template,
                original_index,
                total,
                state.metrics.visible,
            )
        });

        CarouselContext {
            id: self.id,
            mode,
            current_index: state.current_index,
            original_index,
            total,
            visible: state.metrics.visible,
            offset: state.offset,
            animating: state.transition.is_animating(),
            dragging: state.recognizer.is_dragging(),
            enabled: state.enabled,
            horizontal: state.metrics.horizontal,
            frame_extent: state.metrics.frame_extent,
            frame_cross: state.metrics.frame_cross,
            slide_extent: state.metrics.slide_extent,
            advance: state.metrics.advance,
            gutter: state.metrics.gutter,
            display_order: state.deck.order().iter().map(|id| id.0).collect(),
            nav,
            handles,
            counter,
        }
    }

    /// Add a subscriber
    pub fn add_subscriber(&self, subscriber: Arc<dyn CarouselSubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Register a peer whose position should follow this instance's
    /// resolved navigation
    pub fn sync_with(&self, peer: &Arc<CarouselEngine>) {
        let mut peers = self.peers.write();
        peers.push(Arc::downgrade(peer));
    }

    /// Recompute layout metrics and snap the slider to the (clamped)
    /// current slide without animating
    fn relayout(&self) {
        let target = {
            let mut state = self.state.write();
            if state.destroyed {
                return;
            }
            state.transition.cancel();
            let total = state.deck.len();
            state.metrics = Metrics::compute(&state.config, &state.measurements, total);
            state
                .current_index
                .min(total.saturating_sub(state.metrics.visible)) as i64
        };
        self.navigate(target, NavOrigin::Layout);
    }

    fn current_and_step(&self) -> (i64, i64) {
        let state = self.state.read();
        (state.current_index as i64, state.config.step as i64)
    }

    /// The single navigation pipeline: resolve, then snap or animate
    fn navigate(&self, requested: i64, origin: NavOrigin) {
        let now = Instant::now();
        let resolved;
        let original;
        let started;
        {
            let mut state = self.state.write();
            if state.destroyed {
                return;
            }
            if !state.enabled && origin != NavOrigin::Layout {
                return;
            }
            if state.transition.is_animating() {
                // Dropped, not queued
                debug!(id = %self.id, requested, "navigation dropped while animating");
                return;
            }
            if state.recognizer.is_dragging()
                && !matches!(origin, NavOrigin::SwipeAccepted | NavOrigin::SwipeSnap)
            {
                // A live drag owns the slider offset
                return;
            }

            if origin.disables_autoplay() {
                state.autoplay.disable();
            }

            let mode = state.mode();
            let visible = state.metrics.visible;
            let advance = state.metrics.advance;
            resolved = resolve_target(&mut state.deck, mode, visible, requested, advance);
            state.offset += resolved.offset_delta;

            // A mirrored peer drag can displace the offset without
            // changing the index, so the offset counts as movement too
            let target_offset = state.metrics.offset_for(resolved.index);
            let moved = resolved.index != state.current_index
                || resolved.offset_delta != 0.0
                || state.offset != target_offset;
            if !moved && !origin.forced() {
                return;
            }

            original = state
                .deck
                .original_index_of(resolved.index)
                .unwrap_or(resolved.index);

            if origin.skips_animation() {
                state.offset = target_offset;
                started = false;
            } else {
                state.transition = Transition::start(
                    state.offset,
                    target_offset,
                    resolved.index,
                    now,
                    state.config.duration,
                    state.config.easing,
                );
                started = true;
            }
            state.current_index = resolved.index;
            state.refresh_cross();
        }

        if started {
            if let Some(hook) = &self.hooks.on_start {
                hook(resolved.index, original);
            }
            if origin.broadcasts() {
                self.broadcast(resolved.index);
            }
        }
        self.notify_subscribers();
    }

    /// Hand the resolved target to synced peers. Synced applications
    /// never re-broadcast, which breaks any notification cycle.
    fn broadcast(&self, index: usize) {
        for peer in self.live_peers() {
            peer.navigate(index as i64, NavOrigin::Synced);
        }
    }

    /// Follow a peer's live drag with a direct offset set; inert while
    /// this instance has its own offset writer
    fn apply_mirrored_offset(&self, offset: f32) {
        {
            let mut state = self.state.write();
            if state.destroyed
                || !state.enabled
                || state.transition.is_animating()
                || state.recognizer.is_dragging()
            {
                return;
            }
            state.offset = offset;
        }
        self.notify_subscribers();
    }

    fn live_peers(&self) -> Vec<Arc<CarouselEngine>> {
        let mut peers = self.peers.write();
        peers.retain(|weak| weak.strong_count() > 0);
        peers
            .iter()
            .filter_map(Weak::upgrade)
            .filter(|peer| peer.id != self.id)
            .collect()
    }

    /// Notify all subscribers of a carousel change
    fn notify_subscribers(&self) {
        let context = self.context();
        let mut subscribers = self.subscribers.write();

        // Remove any dead weak references
        subscribers.retain(|weak| weak.strong_count() > 0);

        for weak in subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_carousel_change(&context);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::time::Duration;

    const FRAME: f32 = 500.0;

    fn config(visible: usize) -> CarouselConfig {
        CarouselConfig {
            visible_slides: visible,
            gutter: 0.0,
            ..Default::default()
        }
    }

    fn engine(config: CarouselConfig, total: usize) -> CarouselEngine {
        let slide = (FRAME / config.visible_slides.max(1) as f32, 100.0);
        let measurements = Measurements::uniform(FRAME, 100.0, total, slide);
        CarouselEngine::new(config, measurements, Hooks::default()).expect("valid config")
    }

    fn settle(engine: &CarouselEngine) {
        engine.tick(Instant::now() + Duration::from_secs(5));
    }

    #[test]
    fn initial_placement_uses_the_initial_slide() {
        let eng = engine(
            CarouselConfig {
                initial_slide: 2,
                ..config(1)
            },
            5,
        );
        let ctx = eng.context();
        assert_eq!(ctx.current_index, 2);
        assert_eq!(ctx.offset, -2.0 * FRAME);
        assert!(!ctx.animating);
    }

    #[test]
    fn bounded_requests_are_clamped_not_rejected() {
        let eng = engine(config(2), 5);

        eng.go_to(10);
        settle(&eng);
        assert_eq!(eng.context().current_index, 3);

        eng.go_to(-5);
        settle(&eng);
        assert_eq!(eng.context().current_index, 0);
    }

    #[test]
    fn at_most_one_transition_in_flight() {
        let eng = engine(config(1), 5);

        eng.go_to(2);
        assert!(eng.context().animating);

        // Dropped, not queued
        eng.go_to(4);
        settle(&eng);
        let ctx = eng.context();
        assert!(!ctx.animating);
        assert_eq!(ctx.current_index, 2);

        eng.go_to(4);
        settle(&eng);
        assert_eq!(eng.context().current_index, 4);
    }

    #[test]
    fn same_index_command_does_not_animate() {
        let eng = engine(config(1), 5);
        eng.go_to(0);
        assert!(!eng.context().animating);
    }

    #[test]
    fn circular_prev_then_next_round_trips() {
        let eng = engine(
            CarouselConfig {
                circular: true,
                duration: Duration::ZERO,
                ..config(1)
            },
            5,
        );

        eng.prev();
        settle(&eng);
        let ctx = eng.context();
        assert_eq!(ctx.current_index, 0);
        assert_eq!(ctx.original_index, 4);
        assert_eq!(ctx.display_order, vec![4, 0, 1, 2, 3]);

        for _ in 0..5 {
            eng.next();
            settle(&eng);
        }
        let ctx = eng.context();
        assert_eq!(ctx.display_order, vec![0, 1, 2, 3, 4]);
        assert_eq!(ctx.display_order[0], 0);
        assert_eq!(ctx.original_index, 4);
        assert_eq!(ctx.total, 5);
    }

    #[test]
    fn circular_wrap_keeps_the_counter_stable() {
        let eng = engine(
            CarouselConfig {
                circular: true,
                duration: Duration::ZERO,
                ..config(1)
            },
            5,
        );

        eng.prev();
        settle(&eng);
        // Display index 0, but the user-facing counter reports slide 5
        assert_eq!(eng.context().counter.as_deref(), Some("5 of 5"));
    }

    #[test]
    fn accepted_swipe_moves_one_slide_and_disables_autoplay() {
        let eng = engine(
            CarouselConfig {
                autoplay_interval: Some(Duration::from_secs(2)),
                initial_slide: 2,
                ..config(1)
            },
            5,
        );
        assert!(eng.autoplay_active());

        let t0 = Instant::now();
        // Short fast flick: 50 units in 100ms
        eng.pointer_start(PointerSample::new(100.0, 0.0, t0));
        eng.pointer_move(PointerSample::new(
            50.0,
            2.0,
            t0 + Duration::from_millis(50),
        ));
        eng.pointer_end(PointerSample::new(
            50.0,
            2.0,
            t0 + Duration::from_millis(100),
        ));

        settle(&eng);
        assert_eq!(eng.context().current_index, 3);
        assert!(!eng.autoplay_active());
    }

    #[test]
    fn rejected_swipe_snaps_back() {
        let eng = engine(
            CarouselConfig {
                initial_slide: 1,
                ..config(1)
            },
            5,
        );

        let t0 = Instant::now();
        // 50 units in one second: below both thresholds
        eng.pointer_start(PointerSample::new(100.0, 0.0, t0));
        eng.pointer_move(PointerSample::new(
            150.0,
            2.0,
            t0 + Duration::from_millis(500),
        ));
        let before_end = eng.context().offset;
        assert_ne!(before_end, -FRAME);

        eng.pointer_end(PointerSample::new(150.0, 2.0, t0 + Duration::from_secs(1)));
        assert!(eng.context().animating);
        settle(&eng);

        let ctx = eng.context();
        assert_eq!(ctx.current_index, 1);
        assert_eq!(ctx.offset, -FRAME);
    }

    #[test]
    fn drag_applies_a_live_offset() {
        let eng = engine(config(1), 5);
        let t0 = Instant::now();

        eng.pointer_start(PointerSample::new(100.0, 0.0, t0));
        eng.pointer_move(PointerSample::new(
            60.0,
            0.0,
            t0 + Duration::from_millis(16),
        ));
        assert_eq!(eng.context().offset, -40.0);
        assert!(eng.context().dragging);
    }

    #[test]
    fn gesture_input_is_suspended_during_a_transition() {
        let eng = engine(config(1), 5);
        eng.go_to(1);
        assert!(eng.context().animating);

        let t0 = Instant::now();
        eng.pointer_start(PointerSample::new(100.0, 0.0, t0));
        eng.pointer_move(PointerSample::new(0.0, 0.0, t0 + Duration::from_millis(20)));
        assert!(!eng.context().dragging);
    }

    #[test]
    fn autoplay_advances_and_user_navigation_disables_it() {
        let eng = engine(
            CarouselConfig {
                autoplay_interval: Some(Duration::from_secs(2)),
                duration: Duration::ZERO,
                ..config(1)
            },
            5,
        );

        let t0 = Instant::now();
        eng.tick(t0); // arms the deadline
        eng.tick(t0 + Duration::from_secs(2));
        eng.tick(t0 + Duration::from_secs(2) + Duration::from_millis(1));
        assert_eq!(eng.context().current_index, 1);

        eng.go_to(0);
        settle(&eng);
        assert!(!eng.autoplay_active());
        eng.tick(t0 + Duration::from_secs(60));
        settle(&eng);
        assert_eq!(eng.context().current_index, 0);
    }

    #[test]
    fn hover_pauses_autoplay_without_disabling_it() {
        let eng = engine(
            CarouselConfig {
                autoplay_interval: Some(Duration::from_secs(2)),
                ..config(1)
            },
            5,
        );

        let t0 = Instant::now();
        eng.tick(t0);
        eng.set_hovered(true);
        eng.tick(t0 + Duration::from_secs(10));
        assert_eq!(eng.context().current_index, 0);

        eng.set_hovered(false);
        assert!(eng.autoplay_active());
    }

    #[test]
    fn everything_visible_keeps_the_widget_disabled() {
        let eng = engine(config(3), 2);
        let ctx = eng.context();
        assert!(!ctx.enabled);
        assert!(!ctx.nav.prev_enabled && !ctx.nav.next_enabled);

        // enable() is a no-op, and commands stay inert
        eng.enable();
        eng.go_to(1);
        settle(&eng);
        assert_eq!(eng.context().current_index, 0);
    }

    #[test]
    fn nav_buttons_follow_the_bounds() {
        let eng = engine(config(2), 5);
        let ctx = eng.context();
        assert!(!ctx.nav.prev_enabled);
        assert!(ctx.nav.next_enabled);

        eng.go_to(3);
        settle(&eng);
        let ctx = eng.context();
        assert!(ctx.nav.prev_enabled);
        assert!(!ctx.nav.next_enabled);
    }

    #[test]
    fn counter_reports_the_visible_range() {
        let eng = engine(
            CarouselConfig {
                initial_slide: 3,
                ..config(3)
            },
            10,
        );
        assert_eq!(eng.context().counter.as_deref(), Some("4-6 of 10"));

        let eng = engine(config(1), 10);
        assert_eq!(eng.context().counter.as_deref(), Some("1 of 10"));
    }

    #[test]
    fn synced_peers_follow_without_echoing() {
        let a = Arc::new(engine(
            CarouselConfig {
                duration: Duration::ZERO,
                ..config(1)
            },
            5,
        ));
        let b = Arc::new(engine(
            CarouselConfig {
                duration: Duration::ZERO,
                ..config(1)
            },
            5,
        ));
        a.sync_with(&b);
        b.sync_with(&a);

        a.go_to(2);
        settle(&a);
        settle(&b);

        assert_eq!(a.context().current_index, 2);
        assert_eq!(b.context().current_index, 2);
    }

    #[test]
    fn live_drag_mirrors_to_synced_peers_and_snaps_back_together() {
        let a = Arc::new(engine(config(1), 5));
        let b = Arc::new(engine(config(1), 5));
        a.sync_with(&b);
        b.sync_with(&a);

        let t0 = Instant::now();
        a.pointer_start(PointerSample::new(100.0, 0.0, t0));
        a.pointer_move(PointerSample::new(
            60.0,
            0.0,
            t0 + Duration::from_millis(16),
        ));
        assert_eq!(a.context().offset, -40.0);
        assert_eq!(b.context().offset, -40.0);
        // Only the dragged instance owns a live interaction
        assert!(a.context().dragging);
        assert!(!b.context().dragging);

        // Below both thresholds: the snap-back reaches the peer too
        a.pointer_end(PointerSample::new(60.0, 0.0, t0 + Duration::from_secs(1)));
        settle(&a);
        settle(&b);
        assert_eq!(a.context().offset, 0.0);
        assert_eq!(b.context().offset, 0.0);
        assert_eq!(b.context().current_index, 0);
    }

    #[test]
    fn start_and_stop_hooks_fire_with_both_indices() {
        let calls: Arc<Mutex<Vec<(&'static str, usize, usize)>>> =
            Arc::new(Mutex::new(Vec::new()));
        let start_calls = calls.clone();
        let stop_calls = calls.clone();
        let hooks = Hooks {
            on_start: Some(Box::new(move |index, original| {
                start_calls.lock().push(("start", index, original));
            })),
            on_stop: Some(Box::new(move |index, original| {
                stop_calls.lock().push(("stop", index, original));
            })),
        };

        let measurements = Measurements::uniform(FRAME, 100.0, 5, (FRAME, 100.0));
        let eng = CarouselEngine::new(config(1), measurements, hooks).expect("valid config");

        eng.go_to(2);
        assert_eq!(calls.lock().as_slice(), &[("start", 2, 2)]);
        settle(&eng);
        assert_eq!(
            calls.lock().as_slice(),
            &[("start", 2, 2), ("stop", 2, 2)]
        );
    }

    #[test]
    fn subscribers_are_notified_and_pruned() {
        struct Counter(Mutex<usize>);
        impl CarouselSubscriber for Counter {
            fn on_carousel_change(&self, _context: &CarouselContext) {
                *self.0.lock() += 1;
            }
        }

        let eng = engine(config(1), 5);
        let subscriber = Arc::new(Counter(Mutex::new(0)));
        eng.add_subscriber(subscriber.clone());

        eng.go_to(1);
        assert!(*subscriber.0.lock() > 0);

        let seen = *subscriber.0.lock();
        drop(subscriber);
        settle(&eng);
        eng.go_to(2);
        // No panic, dead weak reference was pruned
        let _ = seen;
    }

    #[test]
    fn update_merges_and_revalidates() {
        let eng = engine(config(1), 5);

        let result = eng.update(ConfigUpdate {
            step: Some(0),
            ..Default::default()
        });
        assert!(result.is_err());
        assert_eq!(eng.config().step, 1);

        eng.update(ConfigUpdate {
            circular: Some(true),
            ..Default::default()
        })
        .expect("valid update");
        assert_eq!(eng.context().mode, Mode::Circular);
        let ctx = eng.context();
        assert!(ctx.nav.prev_enabled && ctx.nav.next_enabled);
    }

    #[test]
    fn resize_snaps_without_animating() {
        let eng = engine(config(1), 5);
        eng.go_to(2);
        settle(&eng);

        let measurements = Measurements::uniform(300.0, 100.0, 5, (300.0, 100.0));
        eng.resize(measurements);

        let ctx = eng.context();
        assert!(!ctx.animating);
        assert_eq!(ctx.current_index, 2);
        assert_eq!(ctx.offset, -600.0);
        assert_eq!(ctx.frame_extent, 300.0);
    }

    #[test]
    fn destroy_tears_everything_down() {
        let eng = engine(
            CarouselConfig {
                autoplay_interval: Some(Duration::from_secs(1)),
                ..config(1)
            },
            5,
        );
        eng.go_to(2);
        eng.destroy();

        assert!(eng.is_destroyed());
        assert!(!eng.tick(Instant::now() + Duration::from_secs(10)));
        eng.go_to(3);
        assert_eq!(eng.context().current_index, 2);
        assert!(!eng.autoplay_active());

        // Idempotent
        eng.destroy();
    }
}
