use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_pong::core::GameState;
use tui_pong::term::{FrameBuffer, GameView};
use tui_pong::types::{GameAction, Playfield};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn tick_and_render_are_allocation_free_after_warmup() {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 25);
    let mut gs = GameState::new(Playfield::default(), 1);

    // Warm-up.
    gs.step();
    view.render_into(&gs.snapshot(), &mut fb);

    let allocs = with_alloc_counting(|| {
        for i in 0..500 {
            if i % 7 == 0 {
                gs.apply_action(GameAction::LeftUp);
                gs.apply_action(GameAction::RightDown);
            }
            let _events = gs.step();
            let snap = gs.snapshot();
            view.render_into(&snap, &mut fb);
        }
    });
    assert_eq!(allocs, 0);
}
