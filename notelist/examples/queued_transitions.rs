// Example: a Remove session with an Insert queued behind it, driven by a frame loop.
use notelist::{NoteMeta, RowController, RowHost, RowOptions, TransitionKind};

struct PrintHost;

impl RowHost for PrintHost {
    fn animation_finished(&mut self, kind: TransitionKind) {
        println!("finished {kind:?}");
    }

    fn close_persistent_editor(&mut self, index: usize) {
        println!("close editor at row {index}");
    }
}

fn main() {
    let mut notes = vec![
        NoteMeta::new(1).pinned(true),
        NoteMeta::new(2),
        NoteMeta::new(3).with_tags(true),
    ];
    let mut c = RowController::new(RowOptions::new());
    let mut host = PrintHost;

    c.request_transition(TransitionKind::Remove, [2], notes.as_slice(), &mut host, 0);
    // Arrives mid-flight: queued by identity, resolved when the Remove session ends.
    c.request_transition(TransitionKind::Insert, [3], notes.as_slice(), &mut host, 5);

    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        if now_ms == 160 {
            // The model drops row 2 while its removal is still animating.
            notes.retain(|n| n.id != 2);
        }
        c.tick(now_ms, notes.as_slice(), &mut host);
        println!(
            "t={now_ms} state={:?} sizes={:?}",
            c.state(),
            (0..notes.len())
                .map(|i| c.display_size(notes.as_slice(), i))
                .collect::<Vec<_>>()
        );
    }
}
