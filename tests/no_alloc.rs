// Test intent: the caller-owned-buffer transforms never touch the heap.

use srfft::{
    cfft_forward, cfft_inverse, populate_complex_twiddles, populate_real_twiddles, rfft_forward,
    rfft_inverse, rfft_inverse_with_input_as_scratch, Complex32, Direction,
};
use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

struct CountingAlloc;

static ALLOC: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            ALLOC.fetch_add(1, Ordering::Relaxed);
        }
        ptr
    }
    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn allocs() -> usize {
    ALLOC.load(Ordering::Relaxed)
}

// A single test function, so no other test thread allocates between the
// two counter reads.
#[test]
fn transforms_do_not_allocate() {
    let n = 1024;
    let bins = n / 2 + 1;
    let mut ctw_f = vec![Complex32::zero(); n];
    let mut ctw_i = vec![Complex32::zero(); n];
    let mut rtw_f = vec![Complex32::zero(); n];
    let mut rtw_i = vec![Complex32::zero(); n];
    let signal: Vec<Complex32> = (0..n).map(|i| Complex32::new(i as f32, 0.5)).collect();
    let real: Vec<f32> = (0..n).map(|i| (i as f32 * 0.1).sin()).collect();
    let mut spectrum = vec![Complex32::zero(); n];
    let mut back = vec![Complex32::zero(); n];
    let mut half = vec![Complex32::zero(); bins];
    let mut scratch0 = vec![Complex32::zero(); bins];
    let mut scratch1 = vec![Complex32::zero(); bins];
    let mut time = vec![0.0f32; n];

    let before = allocs();
    populate_complex_twiddles(n, &mut ctw_f, Direction::Forward).unwrap();
    populate_complex_twiddles(n, &mut ctw_i, Direction::Inverse).unwrap();
    populate_real_twiddles(n, &mut rtw_f, Direction::Forward).unwrap();
    populate_real_twiddles(n, &mut rtw_i, Direction::Inverse).unwrap();
    cfft_forward(n, &ctw_f, &signal, &mut spectrum).unwrap();
    cfft_inverse(n, &ctw_i, &spectrum, &mut back).unwrap();
    rfft_forward(n, &rtw_f, &real, &mut half, &mut scratch0).unwrap();
    rfft_inverse(n, &rtw_i, &half, &mut time, &mut scratch0, &mut scratch1).unwrap();
    rfft_inverse_with_input_as_scratch(n, &rtw_i, &mut half, &mut time, &mut scratch0).unwrap();
    let after = allocs();

    assert_eq!(after, before);
}
