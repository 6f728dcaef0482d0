use crate::*;

use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start) as u64) as usize
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() >> 33) & 1 == 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Event {
    Geometry(usize),
    Finished(TransitionKind),
    Open(usize),
    Close(usize),
}

#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
}

impl Recorder {
    fn take(&mut self) -> Vec<Event> {
        core::mem::take(&mut self.events)
    }

    fn finished(&self) -> Vec<TransitionKind> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Finished(kind) => Some(*kind),
                _ => None,
            })
            .collect()
    }
}

impl RowHost for Recorder {
    fn geometry_changed(&mut self, index: usize) {
        self.events.push(Event::Geometry(index));
    }

    fn animation_finished(&mut self, kind: TransitionKind) {
        self.events.push(Event::Finished(kind));
    }

    fn open_persistent_editor(&mut self, index: usize) {
        self.events.push(Event::Open(index));
    }

    fn close_persistent_editor(&mut self, index: usize) {
        self.events.push(Event::Close(index));
    }
}

fn unpinned(ids: &[NoteId]) -> Vec<NoteMeta> {
    ids.iter().map(|&id| NoteMeta::new(id)).collect()
}

fn sectioned(pinned: &[NoteId], rest: &[NoteId]) -> Vec<NoteMeta> {
    pinned
        .iter()
        .map(|&id| NoteMeta::new(id).pinned(true))
        .chain(rest.iter().map(|&id| NoteMeta::new(id)))
        .collect()
}

fn random_notes(rng: &mut Lcg) -> Vec<NoteMeta> {
    let n = rng.gen_range_usize(1, 24);
    let pinned = rng.gen_range_usize(0, n + 1);
    (0..n)
        .map(|i| {
            NoteMeta::new(100 + i as NoteId)
                .pinned(i < pinned)
                .with_tags(rng.gen_bool())
        })
        .collect()
}

#[test]
fn section_queries_follow_ordering() {
    let notes = sectioned(&[1, 2], &[3, 4]);
    let s = notes.as_slice();
    assert!(s.has_pinned());
    assert!(s.is_first_pinned(0));
    assert!(!s.is_first_pinned(1));
    assert!(s.is_first_unpinned(2));
    assert!(!s.is_first_unpinned(3));
    assert!(s.is_last(3));
    assert!(!s.is_last(2));
    assert_eq!(s.index_of(4), Some(3));
    assert_eq!(s.index_of(99), None);

    // Out of range positions answer false.
    assert!(!s.is_first_pinned(10));
    assert!(!s.is_first_unpinned(10));
    assert!(SectionFacts::resolve(s, 4, false).is_none());

    let empty: Vec<NoteMeta> = Vec::new();
    assert!(!empty.as_slice().has_pinned());
    assert!(!empty.as_slice().is_last(0));
}

#[test]
fn unpinned_row_without_tags_has_base_height() {
    let notes = unpinned(&[7, 42, 8]);
    let c = RowController::default();
    let o = *c.layout().options();
    let expected = 70 + o.next_note_offset - 10 + o.last_el_sep_space;
    assert_eq!(c.display_size(notes.as_slice(), 1) as i32, expected);
    assert_eq!(c.display_size(notes.as_slice(), 1), 72);
    // No pinned rows: no header is owed for the first unpinned row.
    assert_eq!(c.display_size(notes.as_slice(), 0), 72);
}

#[test]
fn tagged_rows_use_the_taller_base() {
    let notes = alloc::vec![NoteMeta::new(1), NoteMeta::new(2).with_tags(true)];
    let c = RowController::default();
    assert_eq!(c.display_size(notes.as_slice(), 1), 106 - 10 + 12);
}

#[test]
fn expanded_pinned_section_adds_headers_and_gap() {
    let notes = sectioned(&[1, 2], &[3, 4]);
    let s = notes.as_slice();
    let c = RowController::default();
    assert_eq!(c.display_size(s, 0), 70 + 25 + 2);
    assert_eq!(c.display_size(s, 1), 72);
    assert_eq!(c.display_size(s, 2), 70 + 25 + 10 + 2);
    assert_eq!(c.display_size(s, 3), 72);

    assert_eq!(c.header_offset(s, 0), 25);
    assert_eq!(c.header_offset(s, 1), 0);
    assert_eq!(c.header_offset(s, 2), 35);
}

#[test]
fn collapsed_pinned_section_folds_into_its_header() {
    let notes = sectioned(&[1, 2, 3], &[4, 5]);
    let s = notes.as_slice();
    let c = RowController::new(RowOptions::new().with_pinned_collapsed(true));
    assert_eq!(c.display_size(s, 0), 25);
    assert_eq!(c.display_size(s, 1), 0);
    assert_eq!(c.display_size(s, 2), 0);
    // The "Notes" header is still owed, the gap after an expanded pinned block is not.
    assert_eq!(c.display_size(s, 3), 70 + 25 + 2);
    assert_eq!(c.display_size(s, 4), 72);

    assert_eq!(c.buffer_size(s, 0), 25);
    assert_eq!(c.buffer_size(s, 1), 0);
    assert_eq!(c.header_offset(s, 0), 0);
}

#[test]
fn collapsed_first_pinned_ignores_tags_and_measurements() {
    let notes = alloc::vec![
        NoteMeta::new(1).pinned(true).with_tags(true),
        NoteMeta::new(2).pinned(true).with_tags(true),
        NoteMeta::new(3),
    ];
    let s = notes.as_slice();
    let mut c = RowController::new(RowOptions::new().with_pinned_collapsed(true));
    c.update_measured_size(1, 0, 300, &mut ());
    c.update_measured_size(2, 1, 300, &mut ());
    assert_eq!(c.display_size(s, 0), 25);
    assert_eq!(c.display_size(s, 1), 0);
    // The header cell keeps its editor; rows folded behind it get none.
    assert!(c.wants_inline_editor(s, 0));
    assert!(!c.wants_inline_editor(s, 1));

    c.request_transition(TransitionKind::Remove, [1], s, &mut (), 0);
    assert!(!c.wants_inline_editor(s, 0));
}

#[test]
fn all_notes_mode_adds_folder_band_and_smaller_inset() {
    let notes = unpinned(&[1, 2]);
    let c = RowController::new(RowOptions::new().with_all_notes(true));
    assert_eq!(c.display_size(notes.as_slice(), 1), 70 + 20 - 2 + 12);
    assert_eq!(c.buffer_size(notes.as_slice(), 1), 70 + 20 - 2 + 12);
}

#[test]
fn unknown_rows_have_zero_geometry() {
    let notes = unpinned(&[1]);
    let c = RowController::default();
    assert_eq!(c.display_size(notes.as_slice(), 5), 0);
    assert_eq!(c.buffer_size(notes.as_slice(), 5), 0);
    assert_eq!(c.header_offset(notes.as_slice(), 5), 0);
    assert!(c.animation_frame(notes.as_slice(), 5).is_none());
}

#[test]
fn layout_is_pure_and_consistent_outside_sessions() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..200 {
        let notes = random_notes(&mut rng);
        let s = notes.as_slice();
        let collapsed = rng.gen_bool();
        let all_notes = rng.gen_bool();
        let c = RowController::new(
            RowOptions::new()
                .with_pinned_collapsed(collapsed)
                .with_all_notes(all_notes),
        );
        for i in 0..s.row_count() {
            let a = c.display_size(s, i);
            let b = c.display_size(s, i);
            assert_eq!(a, b);

            let facts = c.facts(s, i).unwrap();
            if collapsed && facts.is_pinned && !facts.is_first_pinned {
                assert_eq!(a, 0, "hidden pinned row {i} must have no height");
            }
            if !facts.is_header_only() && !facts.is_hidden() {
                assert_eq!(a, c.buffer_size(s, i) + c.header_offset(s, i));
            }
        }
    }
}

#[test]
fn measured_size_overrides_tagged_rows_at_rest() {
    let notes = alloc::vec![NoteMeta::new(1), NoteMeta::new(2).with_tags(true)];
    let s = notes.as_slice();
    let mut c = RowController::default();
    let mut host = Recorder::default();

    assert!(c.wants_inline_editor(s, 1));
    assert!(!c.wants_inline_editor(s, 0));

    c.update_measured_size(2, 1, 150, &mut host);
    assert_eq!(host.take(), alloc::vec![Event::Geometry(1)]);
    assert_eq!(c.display_size(s, 1), 150);
    assert_eq!(c.buffer_size(s, 1), 150);

    // A row without tags never uses the cache.
    c.update_measured_size(1, 0, 150, &mut host);
    assert_eq!(c.display_size(s, 0), 72);

    c.editor_destroyed(2, 1, &mut host);
    assert_eq!(host.take(), alloc::vec![Event::Geometry(0), Event::Geometry(1)]);
    assert_eq!(c.display_size(s, 1), 108);

    c.update_measured_size(2, 1, 150, &mut host);
    c.clear_measured_sizes();
    assert_eq!(c.layout().measured_len(), 0);
    assert_eq!(c.display_size(s, 1), 108);
}

#[test]
fn measured_size_is_ignored_while_animating() {
    let notes = alloc::vec![NoteMeta::new(1).with_tags(true), NoteMeta::new(2)];
    let s = notes.as_slice();
    let mut c = RowController::default();
    c.update_measured_size(1, 0, 150, &mut ());

    let outcome = c.request_transition(TransitionKind::Remove, [1], s, &mut (), 0);
    assert_eq!(outcome, RequestOutcome::Started);
    assert!(!c.wants_inline_editor(s, 0));
    // Frame starts at max: full base height, not the measured one.
    assert_eq!(c.display_size(s, 0), 106 - 10 + 12);
    assert_eq!(c.buffer_size(s, 0), 106 - 10 + 12);
}

#[test]
fn remove_then_queued_insert_runs_after_completion() {
    let mut notes = unpinned(&[1, 2, 3]);
    let mut c = RowController::default();
    let mut host = Recorder::default();

    let outcome = c.request_transition(TransitionKind::Remove, [1, 2], notes.as_slice(), &mut host, 0);
    assert_eq!(outcome, RequestOutcome::Started);
    assert_eq!(c.state(), ListState::Animating(TransitionKind::Remove));
    assert_eq!(c.transitions().timeline().direction(), PlayDirection::Backward);
    assert_eq!(c.transitions().current_frame(), c.transitions().max_frame());
    assert_eq!(host.take(), alloc::vec![Event::Close(0), Event::Close(1)]);

    let outcome = c.request_transition(TransitionKind::Insert, [3], notes.as_slice(), &mut host, 10);
    assert_eq!(outcome, RequestOutcome::Queued);
    assert_eq!(c.transitions().animating_ids(), &[1, 2]);
    assert_eq!(c.state(), ListState::Animating(TransitionKind::Remove));
    assert_eq!(c.transitions().pending_len(), 1);
    assert!(host.take().is_empty());

    assert!(c.tick(100, notes.as_slice(), &mut host));
    assert_eq!(host.take(), alloc::vec![Event::Geometry(0), Event::Geometry(1)]);

    // The model drops the removed rows before the session ends; 3 moves to the top.
    notes.retain(|n| n.id == 3);
    assert!(c.tick(200, notes.as_slice(), &mut host));
    assert_eq!(
        host.take(),
        alloc::vec![Event::Finished(TransitionKind::Remove), Event::Close(0)]
    );
    assert_eq!(c.state(), ListState::Animating(TransitionKind::Insert));
    assert_eq!(c.transitions().animating_ids(), &[3]);
    assert_eq!(c.transitions().timeline().direction(), PlayDirection::Forward);
    assert_eq!(c.transitions().current_frame(), 0);
    assert_eq!(c.transitions().pending_len(), 0);

    assert!(!c.tick(400, notes.as_slice(), &mut host));
    assert_eq!(
        host.take(),
        alloc::vec![
            Event::Geometry(0),
            Event::Finished(TransitionKind::Insert),
            Event::Open(0)
        ]
    );
    assert_eq!(c.state(), ListState::Normal);
    assert!(c.transitions().animating_ids().is_empty());
}

#[test]
fn queued_requests_run_in_fifo_order() {
    let notes = unpinned(&[1, 2, 3, 4]);
    let s = notes.as_slice();
    let mut c = RowController::default();
    let mut host = Recorder::default();

    c.request_transition(TransitionKind::MoveOut, [1], s, &mut host, 0);
    assert_eq!(c.request_transition(TransitionKind::Insert, [2], s, &mut host, 1), RequestOutcome::Queued);
    assert_eq!(c.request_transition(TransitionKind::MoveIn, [3, 4], s, &mut host, 2), RequestOutcome::Queued);

    let kinds: Vec<_> = c.transitions().pending().map(|p| p.kind).collect();
    assert_eq!(kinds, [TransitionKind::Insert, TransitionKind::MoveIn]);

    let mut started = alloc::vec![c.state()];
    let mut now = 0;
    while c.is_animating() {
        now += 16;
        let before = c.state();
        c.tick(now, s, &mut host);
        if c.state() != before && c.state() != ListState::Normal {
            started.push(c.state());
        }
    }
    assert_eq!(
        started,
        [
            ListState::Animating(TransitionKind::MoveOut),
            ListState::Animating(TransitionKind::Insert),
            ListState::Animating(TransitionKind::MoveIn),
        ]
    );
    assert_eq!(
        host.finished(),
        [TransitionKind::MoveOut, TransitionKind::Insert, TransitionKind::MoveIn]
    );
    assert_eq!(c.state(), ListState::Normal);
    assert_eq!(c.transitions().pending_len(), 0);
}

#[test]
fn unresolvable_requests_are_dropped() {
    let mut notes = unpinned(&[1, 2]);
    let mut c = RowController::default();
    let mut host = Recorder::default();

    assert_eq!(
        c.request_transition(TransitionKind::Insert, [9], notes.as_slice(), &mut host, 0),
        RequestOutcome::Dropped
    );
    assert_eq!(c.state(), ListState::Normal);
    assert!(!c.is_animating());

    c.request_transition(TransitionKind::Remove, [1], notes.as_slice(), &mut host, 0);
    assert_eq!(
        c.request_transition(TransitionKind::Insert, [7, 8], notes.as_slice(), &mut host, 5),
        RequestOutcome::Dropped
    );
    assert_eq!(c.transitions().pending_len(), 0);

    // Queued while it resolves, gone by the time it is dequeued.
    assert_eq!(
        c.request_transition(TransitionKind::MoveIn, [2, 2], notes.as_slice(), &mut host, 5),
        RequestOutcome::Queued
    );
    assert_eq!(c.transitions().pending().next().unwrap().ids, [2]);
    notes.clear();
    assert!(!c.tick(1_000, notes.as_slice(), &mut host));
    assert_eq!(c.state(), ListState::Normal);
    assert_eq!(c.transitions().pending_len(), 0);
    assert!(c.transitions().animating_ids().is_empty());
}

#[test]
fn every_tick_invalidates_each_animating_row() {
    let notes = unpinned(&[1, 2, 3]);
    let s = notes.as_slice();
    let mut c = RowController::default();
    let mut host = Recorder::default();
    c.request_transition(TransitionKind::Insert, [3, 1], s, &mut host, 0);
    host.take();

    for now in [16, 32, 48] {
        assert!(c.tick(now, s, &mut host));
        assert_eq!(host.take(), alloc::vec![Event::Geometry(2), Event::Geometry(0)]);
    }
    // Not running: ticks do nothing.
    let mut idle = RowController::default();
    assert!(!idle.tick(10, s, &mut host));
    assert!(host.take().is_empty());
}

#[test]
fn rows_gone_mid_session_are_skipped_when_invalidating() {
    let mut notes = unpinned(&[1, 2, 3]);
    let mut c = RowController::default();
    let mut host = Recorder::default();
    c.request_transition(TransitionKind::Insert, [2, 3], notes.as_slice(), &mut host, 0);
    host.take();

    notes.remove(1);
    assert!(c.tick(50, notes.as_slice(), &mut host));
    assert_eq!(host.take(), alloc::vec![Event::Geometry(1)]);

    assert!(!c.tick(200, notes.as_slice(), &mut host));
    assert_eq!(
        host.take(),
        alloc::vec![
            Event::Geometry(1),
            Event::Finished(TransitionKind::Insert),
            Event::Open(1),
        ]
    );
}

#[test]
fn set_animation_duration_applies_to_next_session() {
    let notes = unpinned(&[1]);
    let s = notes.as_slice();
    let mut c = RowController::default();
    c.set_animation_duration(500);
    c.request_transition(TransitionKind::Insert, [1], s, &mut (), 0);
    assert!(c.tick(400, s, &mut ()));
    assert!(!c.tick(500, s, &mut ()));
}

#[test]
fn timeline_playback_is_monotonic_and_lands_on_the_end_frame() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
    ] {
        let mut t = Timeline::new(200, 300, easing);
        t.start(1_000, PlayDirection::Forward);
        assert_eq!(t.current_frame(), 0);
        let mut last = 0;
        for now in (1_000..1_300).step_by(7) {
            if let Some(TimelineTick::Frame(f)) = t.tick(now) {
                assert!(f >= last);
                last = f;
            }
        }
        assert_eq!(t.tick(1_300), Some(TimelineTick::Finished));
        assert_eq!(t.current_frame(), 200);
        assert_eq!(t.tick(1_400), None);

        t.start(0, PlayDirection::Backward);
        assert_eq!(t.current_frame(), 200);
        let mut last = 200;
        for now in (0..300).step_by(11) {
            if let Some(TimelineTick::Frame(f)) = t.tick(now) {
                assert!(f <= last);
                last = f;
            }
        }
        assert_eq!(t.tick(300), Some(TimelineTick::Finished));
        assert_eq!(t.current_frame(), 0);
        assert_eq!(t.current_progress(), 0.0);
    }
}

#[test]
fn animated_heights_follow_progress_direction() {
    let mut rng = Lcg::new(42);
    for kind in [
        TransitionKind::Insert,
        TransitionKind::Remove,
        TransitionKind::MoveOut,
        TransitionKind::MoveIn,
    ] {
        let notes = unpinned(&[1, 2]);
        let s = notes.as_slice();
        let mut c = RowController::default();
        c.request_transition(kind, [2], s, &mut (), 0);

        let buffer = c.buffer_size(s, 1);
        let mut sizes = alloc::vec![c.display_size(s, 1)];
        let mut reveals = alloc::vec![c.animation_frame(s, 1).unwrap().scale(buffer)];
        let mut now = 0;
        loop {
            now += rng.gen_range_usize(1, 30) as u64;
            if now >= 200 {
                break;
            }
            c.tick(now, s, &mut ());
            assert_eq!(c.buffer_size(s, 1), buffer, "buffer ignores in-flight scaling");
            sizes.push(c.display_size(s, 1));
            reveals.push(c.animation_frame(s, 1).unwrap().scale(buffer));
        }
        // The reveal window always fits the space the layout reserves for the row.
        for (size, reveal) in sizes.iter().zip(&reveals) {
            assert!(reveal <= size, "{kind:?}: reveal {reveal} exceeds row size {size}");
        }

        let non_decreasing = |v: &[u32]| v.windows(2).all(|w| w[0] <= w[1]);
        let non_increasing = |v: &[u32]| v.windows(2).all(|w| w[0] >= w[1]);
        match kind {
            TransitionKind::Insert | TransitionKind::MoveIn => {
                assert!(non_decreasing(&sizes[..]), "{kind:?}: {sizes:?}");
                assert!(non_decreasing(&reveals[..]), "{kind:?}: {reveals:?}");
            }
            TransitionKind::Remove | TransitionKind::MoveOut => {
                assert!(non_increasing(&sizes[..]), "{kind:?}: {sizes:?}");
                assert!(non_increasing(&reveals[..]), "{kind:?}: {reveals:?}");
            }
        }
    }
}

#[test]
fn animation_frame_scale_rounds_down() {
    let f = AnimationFrame {
        kind: TransitionKind::Insert,
        frame: 1,
        max_frame: 3,
    };
    assert_eq!(f.scale(70), 23);
    let f = AnimationFrame {
        kind: TransitionKind::MoveIn,
        ..f
    };
    assert_eq!(f.scale(70), 46);
    let f = AnimationFrame {
        kind: TransitionKind::Remove,
        frame: 3,
        max_frame: 3,
    };
    assert_eq!(f.scale(70), 70);
    assert_eq!(f.progress(), 1.0);
}

#[test]
fn placement_tracks_display_sizes() {
    let notes = sectioned(&[1, 2, 3], &[4, 5]);
    let s = notes.as_slice();
    let mut c = RowController::new(RowOptions::new().with_pinned_collapsed(true));
    let mut p = RowPlacement::new();
    p.rebuild(&c, s);

    assert_eq!(p.len(), 5);
    assert_eq!(p.row_start(0), Some(0));
    assert_eq!(p.row_start(1), Some(25));
    assert_eq!(p.row_start(3), Some(25));
    assert_eq!(p.row_end(3), Some(25 + 97));
    assert_eq!(p.total_height(), 25 + 97 + 72);
    assert_eq!(p.row_start(5), None);

    // Offsets inside the collapsed header hit row 0; zero-height rows are never hit.
    assert_eq!(p.row_at_offset(10), Some(0));
    assert_eq!(p.row_at_offset(25), Some(3));
    assert_eq!(p.row_at_offset(25 + 97), Some(4));
    assert_eq!(p.row_at_offset(10_000), Some(4));

    c.set_pinned_collapsed(false);
    let delta = p.refresh_row(&c, s, 1);
    assert_eq!(delta, 72);
    assert_eq!(p.row_start(2), Some(25 + 72));

    assert_eq!(p.set_row_size(9, 10), 0);
    assert_eq!(RowPlacement::new().row_at_offset(0), None);
}

#[test]
fn placement_matches_naive_prefix_sums() {
    let mut rng = Lcg::new(7);
    for _ in 0..50 {
        let notes = random_notes(&mut rng);
        let s = notes.as_slice();
        let c = RowController::new(RowOptions::new().with_pinned_collapsed(rng.gen_bool()));
        let mut p = RowPlacement::new();
        p.rebuild(&c, s);

        let mut start = 0u64;
        for i in 0..s.row_count() {
            assert_eq!(p.row_start(i), Some(start));
            let size = u64::from(c.display_size(s, i));
            if size > 0 {
                assert_eq!(p.row_at_offset(start), Some(i));
                assert_eq!(p.row_at_offset(start + size - 1), Some(i));
            }
            start += size;
        }
        assert_eq!(p.total_height(), start);
    }
}

#[test]
fn height_sums_follow_point_updates() {
    use crate::sums::HeightSums;

    let mut rng = Lcg::new(11);
    for _ in 0..40 {
        let n = rng.gen_range_usize(0, 40);
        let mut sizes: Vec<u32> = (0..n)
            .map(|_| {
                if rng.gen_bool() {
                    0
                } else {
                    rng.gen_range_usize(1, 120) as u32
                }
            })
            .collect();
        let mut sums = HeightSums::from_sizes(&sizes);
        for _ in 0..10 {
            if n > 0 {
                let i = rng.gen_range_usize(0, n);
                let size = rng.gen_range_usize(0, 120) as u32;
                sums.add(i, i64::from(size) - i64::from(sizes[i]));
                sizes[i] = size;
            }
            sums.add(n, 5);

            let mut start = 0u64;
            for (i, &size) in sizes.iter().enumerate() {
                assert_eq!(sums.prefix_sum(i), start);
                if size > 0 {
                    assert_eq!(sums.lower_bound(start), i);
                    assert_eq!(sums.lower_bound(start + u64::from(size) - 1), i);
                }
                start += u64::from(size);
            }
            assert_eq!(sums.total(), start);
            assert_eq!(sums.prefix_sum(n + 3), start);
            assert_eq!(sums.lower_bound(start), n);
        }
    }
}
