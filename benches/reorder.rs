//! Benchmarks for the drag-and-drop hot path
//!
//! Run with: cargo bench reorder

use toolbench::dnd::{compute_insertion_index, compute_shift_offset, ShiftState};
use toolbench::geometry::{Axis, Point, Rect};
use toolbench::layout::{reorder_vec, LayoutState};
use toolbench::tool::{ToolId, ToolLocation};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn row_rects(count: usize) -> Vec<Rect> {
    (0..count)
        .map(|i| Rect::new(i as f32 * 40.0, 0.0, 40.0, 40.0))
        .collect()
}

// ============================================================================
// Pointer move: insertion index and sibling offsets
// ============================================================================

#[divan::bench(args = [5, 50, 500])]
fn insertion_index(bencher: divan::Bencher, count: usize) {
    let rects = row_rects(count);
    let pointer = Point::new(count as f32 * 20.0, 20.0);
    bencher.bench(|| {
        compute_insertion_index(
            divan::black_box(pointer),
            divan::black_box(&rects),
            Axis::Horizontal,
        )
    });
}

#[divan::bench(args = [5, 50, 500])]
fn shift_offsets_for_row(bencher: divan::Bencher, count: usize) {
    let state = ShiftState {
        origin: Some(0),
        insertion: Some(count / 2),
        item_size: 40.0,
    };
    bencher.bench(|| {
        (0..count)
            .map(|i| compute_shift_offset(i, divan::black_box(&state)))
            .sum::<f32>()
    });
}

// ============================================================================
// Drop: store mutations
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn reorder_first_to_last(bencher: divan::Bencher, count: usize) {
    bencher
        .with_inputs(|| (0..count).collect::<Vec<usize>>())
        .bench_local_values(|mut items| {
            reorder_vec(&mut items, 0, count);
            items
        });
}

#[divan::bench]
fn move_tool_round_trip(bencher: divan::Bencher) {
    bencher
        .with_inputs(LayoutState::default)
        .bench_local_values(|mut layout| {
            layout.move_tool_to_location(ToolId::Calculator, ToolLocation::BottomDock, Some(0));
            layout.move_tool_to_location(ToolId::Calculator, ToolLocation::Sidebar, Some(0));
            layout
        });
}
