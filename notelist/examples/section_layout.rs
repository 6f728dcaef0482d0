// Example: row geometry for an expanded and a collapsed pinned section.
use notelist::{NoteMeta, RowController, RowOptions, RowPlacement};

fn main() {
    let notes = vec![
        NoteMeta::new(1).pinned(true),
        NoteMeta::new(2).pinned(true).with_tags(true),
        NoteMeta::new(3),
        NoteMeta::new(4),
    ];

    for collapsed in [false, true] {
        let c = RowController::new(RowOptions::new().with_pinned_collapsed(collapsed));
        let mut placement = RowPlacement::new();
        placement.rebuild(&c, notes.as_slice());
        println!("collapsed={collapsed} total={}", placement.total_height());
        for i in 0..notes.len() {
            println!(
                "  row={i} start={:?} display={} buffer={} header_offset={}",
                placement.row_start(i),
                c.display_size(notes.as_slice(), i),
                c.buffer_size(notes.as_slice(), i),
                c.header_offset(notes.as_slice(), i),
            );
        }
    }
}
