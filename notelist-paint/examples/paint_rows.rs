use chrono::{Local, NaiveDateTime};
use notelist::{NoteId, NoteSource, RowController, RowOptions, RowPlacement, TransitionKind};
use notelist_paint::{
    Align, Canvas, Color, Font, Image, NoteRow, NoteRows, Rect, RenderHints, RowPainter, Tag,
    TagId, TextMetrics, Theme,
};

// Example: composite a few rows onto a canvas that just prints what it is asked to draw.
//
// A real backend would rasterize into pixmaps; the flow stays the same:
// 1) lay rows out with `RowPlacement`
// 2) call `render_row` with each row's target rect
// 3) while a transition runs, tick the controller and repaint the rows it reports

struct Note {
    id: NoteId,
    pinned: bool,
    title: &'static str,
    content: &'static str,
    tags: Vec<TagId>,
    modified: NaiveDateTime,
}

struct Notes(Vec<Note>);

impl NoteSource for Notes {
    fn row_count(&self) -> usize {
        self.0.len()
    }

    fn note_id(&self, index: usize) -> Option<NoteId> {
        self.0.get(index).map(|n| n.id)
    }

    fn is_pinned(&self, index: usize) -> bool {
        self.0.get(index).is_some_and(|n| n.pinned)
    }

    fn has_tags(&self, index: usize) -> bool {
        self.0.get(index).is_some_and(|n| !n.tags.is_empty())
    }
}

impl NoteRows for Notes {
    fn row(&self, index: usize) -> Option<NoteRow<'_>> {
        let n = self.0.get(index)?;
        Some(NoteRow {
            title: n.title,
            modified: n.modified,
            content: n.content,
            parent_name: "Notes",
            tag_ids: &n.tags,
        })
    }
}

#[derive(Default)]
struct PrintCanvas {
    depth: usize,
    hints: RenderHints,
}

impl PrintCanvas {
    fn log(&self, what: std::fmt::Arguments<'_>) {
        println!("{:indent$}{what}", "", indent = self.depth * 2);
    }
}

impl TextMetrics for PrintCanvas {
    fn text_width(&self, font: &Font, text: &str) -> i32 {
        text.chars().count() as i32 * i32::from(font.point_size) * 6 / 10
    }

    fn line_height(&self, font: &Font) -> i32 {
        i32::from(font.point_size) + 4
    }
}

impl Canvas for PrintCanvas {
    type Layer = PrintCanvas;

    fn set_render_hints(&mut self, hints: RenderHints) {
        self.hints = hints;
    }

    fn render_hints(&self) -> RenderHints {
        self.hints
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.log(format_args!("fill {rect:?} {color:?}"));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: i32, color: Color) {
        self.log(format_args!("chip {rect:?} r={radius} {color:?}"));
    }

    fn draw_text(&mut self, rect: Rect, _align: Align, _font: &Font, _color: Color, text: &str) {
        self.log(format_args!("text {rect:?} {text:?}"));
    }

    fn draw_image(&mut self, rect: Rect, image: Image) {
        self.log(format_args!("image {rect:?} {image:?}"));
    }

    fn new_layer(&self, width: u32, height: u32) -> Self::Layer {
        self.log(format_args!("layer {width}x{height}"));
        PrintCanvas {
            depth: self.depth + 1,
            hints: RenderHints::default(),
        }
    }

    fn blit(&mut self, _layer: &Self::Layer, source: Rect, target: Rect) {
        self.log(format_args!("blit {source:?} -> {target:?}"));
    }
}

fn main() {
    let now = Local::now().naive_local();
    let notes = Notes(vec![
        Note {
            id: 1,
            pinned: true,
            title: "Groceries",
            content: "Groceries\nmilk, eggs, bread",
            tags: Vec::new(),
            modified: now,
        },
        Note {
            id: 2,
            pinned: false,
            title: "Trip plan",
            content: "Trip plan\n\nbook the train",
            tags: vec![1, 2],
            modified: now - chrono::Duration::days(1),
        },
        Note {
            id: 3,
            pinned: false,
            title: "Ideas",
            content: "Ideas",
            tags: Vec::new(),
            modified: now - chrono::Duration::days(30),
        },
    ]);
    let tags = vec![
        Tag::new(1, "travel", Color::rgb(0x44, 0x8a, 0xc9)),
        Tag::new(2, "family", Color::rgb(0xe0, 0x6c, 0x75)),
    ];

    let mut controller = RowController::new(RowOptions::new());
    let painter = RowPainter::new(Theme::Light);
    let mut canvas = PrintCanvas::default();
    let width = 320;

    let paint_all = |controller: &RowController, canvas: &mut PrintCanvas| {
        let mut placement = RowPlacement::new();
        placement.rebuild(controller, &notes);
        for index in 0..notes.row_count() {
            let (Some(y), Some(height)) = (placement.row_start(index), placement.row_size(index))
            else {
                continue;
            };
            let target = Rect::new(0, y as i32, width, height as i32);
            println!("row {index} at {target:?}");
            let drawn =
                painter.render_row(canvas, &notes, tags.as_slice(), controller, index, target);
            if !drawn {
                println!("  (left to the inline editor)");
            }
        }
    };

    paint_all(&controller, &mut canvas);

    // Animate the tagged row out; while it runs the compositor paints it (chips included).
    controller.request_transition(TransitionKind::Remove, [2], &notes, &mut (), 0);
    let mut now_ms = 0;
    while controller.is_animating() {
        now_ms += 100;
        controller.tick(now_ms, &notes, &mut ());
        println!("-- t={now_ms}ms frame={}", controller.transitions().current_frame());
        paint_all(&controller, &mut canvas);
    }
}
