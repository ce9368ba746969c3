use scratch_reveal::{
    Canvas, CompositeMode, Dimensions, Gesture, PaintSurface, Point, PointerMove, Rect,
    ResizeSignal, ScratchConfig, ScratchEngine, ScratchEvent, ScratchScene, TouchPoint,
};

/// Surface double that only records what it was asked to draw.
#[derive(Default)]
struct Recorder {
    mode: CompositeMode,
    resizes: Vec<Dimensions>,
    fills: Vec<(Rect, u32)>,
    circles: Vec<(Point, f32, CompositeMode)>,
}

impl PaintSurface for Recorder {
    fn resize(&mut self, dims: Dimensions) {
        self.resizes.push(dims);
        self.mode = CompositeMode::Draw;
    }

    fn fill_rect(&mut self, rect: Rect, color: u32) {
        self.fills.push((rect, color));
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        self.mode = mode;
    }

    fn fill_circle(&mut self, center: Point, radius: f32) {
        self.circles.push((center, radius, self.mode));
    }
}

fn recorder(w: u32, h: u32) -> ScratchEngine<Recorder> {
    let mut e = ScratchEngine::new(Recorder::default(), ScratchConfig::default());
    e.reinit(Dimensions::new(w, h));
    e
}

fn canvas(w: u32, h: u32) -> ScratchEngine<Canvas> {
    let mut e = ScratchEngine::new(Canvas::new(), ScratchConfig::default());
    e.reinit(Dimensions::new(w, h));
    e
}

fn mv(x: f32, y: f32, dx: f32, dy: f32) -> PointerMove {
    PointerMove { client_x: x, client_y: y, movement_x: dx, movement_y: dy }
}

fn centers(e: &ScratchEngine<Recorder>) -> Vec<Point> {
    e.surface().circles.iter().map(|(p, _, _)| *p).collect()
}

#[test]
fn reinit_clears_state() {
    let sizes = [(120, 90), (60, 200), (60, 201), (300, 40), (120, 90)];
    let mut e = canvas(sizes[0].0, sizes[0].1);
    for &(w, h) in &sizes[1..] {
        e.pointer_move(mv(30.0, 30.0, 0.0, 0.0));
        e.pointer_move(mv(50.0, 35.0, 20.0, 5.0));
        assert!(e.surface().cleared_pixels() > 0);
        assert!(e.anchor().is_some());

        e.reinit(Dimensions::new(w, h));
        let fb = e.surface().frame();
        assert_eq!((fb.width, fb.height), (w as usize, h as usize));
        assert!(fb.pixels.iter().all(|px| *px == 0xFF_05_05_05));
        assert_eq!(e.anchor(), None);
    }
}

#[test]
fn reinit_sequence_is_resize_fill_erase() {
    let e = recorder(64, 48);
    let s = e.surface();
    assert_eq!(s.resizes, vec![Dimensions::new(64, 48)]);
    assert_eq!(s.fills, vec![(Rect::covering(Dimensions::new(64, 48)), 0xFF_05_05_05)]);
    assert_eq!(s.mode, CompositeMode::Erase);
}

#[test]
fn single_stamp_is_idempotent() {
    let mut e = canvas(400, 400);
    let p = (200.0, 180.0);
    e.pointer_move(mv(p.0, p.1, 0.0, 0.0));
    let first = e.surface().cleared_pixels();

    // Pixel centers inside radius 55 of P.
    let expected = (0..400)
        .flat_map(|y| (0..400).map(move |x| (x, y)))
        .filter(|&(x, y)| {
            let dx = x as f32 + 0.5 - p.0;
            let dy = y as f32 + 0.5 - p.1;
            dx * dx + dy * dy <= 55.0 * 55.0
        })
        .count();
    assert_eq!(first, expected);

    e.pointer_move(mv(p.0, p.1, 0.0, 0.0));
    assert_eq!(e.surface().cleared_pixels(), first);
}

#[test]
fn fast_move_interpolates_every_eight_pixels() {
    let mut e = recorder(200, 200);
    e.pointer_move(mv(0.0, 0.0, 0.0, 0.0));
    e.pointer_move(mv(80.0, 0.0, 80.0, 0.0));

    let xs: Vec<f32> = centers(&e)[1..].iter().map(|p| p.x).collect();
    let expected: Vec<f32> = (0..10).map(|i| i as f32 * 8.0).collect();
    assert_eq!(xs.len(), 10);
    for (got, want) in xs.iter().zip(&expected) {
        assert!((got - want).abs() < 1e-3, "stamp at {got}, expected {want}");
    }
    assert!(e.surface().circles.iter().all(|(_, r, m)| *r == 55.0 && *m == CompositeMode::Erase));
    assert_eq!(e.anchor(), Some(Point::new(80.0, 0.0)));
}

#[test]
fn fast_move_leaves_no_gap() {
    let mut e = canvas(200, 200);
    e.pointer_move(mv(0.0, 0.0, 0.0, 0.0));
    e.pointer_move(mv(80.0, 0.0, 80.0, 0.0));
    let fb = e.surface().frame();
    for y in 0..40 {
        for x in 0..=80 {
            assert_eq!(fb.alpha_at(x, y), Some(0), "gap at ({x},{y})");
        }
    }
}

#[test]
fn divisor_below_smallest_radius_keeps_trail_closed() {
    let cfg = ScratchConfig { stroke_radius: 9.0, step_divisor: 8.0, ..ScratchConfig::default() };
    assert!(cfg.validate().is_ok());
    let mut e = ScratchEngine::new(Canvas::new(), cfg);
    e.reinit(Dimensions::new(300, 40));
    e.pointer_move(mv(10.0, 20.0, 0.0, 0.0));
    e.pointer_move(mv(250.0, 20.0, 240.0, 0.0));
    let fb = e.surface().frame();
    for x in 10..=242 {
        assert_eq!(fb.alpha_at(x, 20), Some(0), "gap at x={x}");
    }
}

#[test]
fn out_of_bounds_move_is_clamped() {
    let mut e = recorder(100, 80);
    e.pointer_move(mv(600.0, 580.0, 0.0, 0.0));
    assert_eq!(centers(&e), vec![Point::new(100.0, 80.0)]);

    e.pointer_move(mv(-40.0, -40.0, 640.0, 620.0));
    let in_bounds = |p: &Point| (0.0..=100.0).contains(&p.x) && (0.0..=80.0).contains(&p.y);
    assert!(centers(&e).iter().all(in_bounds));
    assert_eq!(e.anchor(), Some(Point::new(0.0, 0.0)));
}

#[test]
fn first_touch_seeds_without_stamping() {
    let mut e = recorder(100, 100);
    let t = TouchPoint { client_x: 10.0, client_y: 10.0 };
    e.touch_start(&[t]);
    assert!(e.surface().circles.is_empty());
    assert_eq!(e.anchor(), Some(Point::new(10.0, 10.0)));

    assert_eq!(e.touch_move(&[t]), Gesture::Captured);
    assert_eq!(centers(&e), vec![Point::new(10.0, 10.0)]);
}

#[test]
fn touch_stroke_uses_distance_from_anchor() {
    let mut e = recorder(200, 200);
    e.touch_start(&[TouchPoint { client_x: 0.0, client_y: 100.0 }]);
    e.touch_move(&[TouchPoint { client_x: 40.0, client_y: 100.0 }]);
    let xs: Vec<f32> = centers(&e).iter().map(|p| p.x).collect();
    assert_eq!(xs.len(), 5);
    for (got, want) in xs.iter().zip([0.0, 8.0, 16.0, 24.0, 32.0]) {
        assert!((got - want).abs() < 1e-3, "stamp at {got}, expected {want}");
    }
}

#[test]
fn empty_touch_start_is_ignored() {
    let mut e = recorder(100, 100);
    e.touch_start(&[]);
    assert_eq!(e.anchor(), None);
}

#[test]
fn leave_resets_continuity() {
    let mut e = recorder(300, 300);
    e.pointer_move(mv(20.0, 20.0, 0.0, 0.0));
    e.pointer_leave();
    e.pointer_move(mv(150.0, 150.0, 130.0, 130.0));
    assert_eq!(centers(&e), vec![Point::new(20.0, 20.0), Point::new(150.0, 150.0)]);
}

#[test]
fn fractional_steps_are_not_rounded() {
    let mut e = recorder(100, 100);
    e.pointer_move(mv(0.0, 0.0, 0.0, 0.0));
    e.pointer_move(mv(20.0, 0.0, 20.0, 0.0));
    // 20 / 8 = 2.5 steps: t = 0, 0.4, 0.8
    let xs: Vec<f32> = centers(&e)[1..].iter().map(|p| p.x).collect();
    assert_eq!(xs.len(), 3);
    assert!((xs[1] - 8.0).abs() < 1e-3);
    assert!((xs[2] - 16.0).abs() < 1e-3);
}

#[test]
fn events_before_first_measurement_are_dropped() {
    let signal = ResizeSignal::new();
    let config = ScratchConfig::default();
    let mut scene =
        ScratchScene::mount(&signal, Dimensions::UNMEASURED, Recorder::default(), config);
    scene.handle(&ScratchEvent::PointerMove(mv(5.0, 5.0, 1.0, 1.0)));
    scene.handle(&ScratchEvent::TouchMove(vec![TouchPoint { client_x: 1.0, client_y: 1.0 }]));
    assert!(scene.engine().surface().circles.is_empty());
    assert!(scene.engine().surface().resizes.is_empty());

    signal.emit(Dimensions::new(50, 50));
    scene.handle(&ScratchEvent::PointerMove(mv(5.0, 5.0, 0.0, 0.0)));
    assert_eq!(scene.engine().surface().resizes, vec![Dimensions::new(50, 50)]);
    assert_eq!(scene.engine().surface().circles.len(), 1);
}

#[test]
fn collapsed_viewport_reopened_at_same_size_repaints() {
    let size = Dimensions::new(120, 120);
    let mut e = recorder(size.width, size.height);
    e.pointer_move(mv(60.0, 60.0, 0.0, 0.0));

    e.handle(&ScratchEvent::Resize(Dimensions::UNMEASURED));
    e.pointer_move(mv(70.0, 70.0, 10.0, 10.0));
    assert_eq!(e.surface().circles.len(), 1);
    assert_eq!(e.anchor(), None);

    e.handle(&ScratchEvent::Resize(size));
    assert_eq!(e.surface().resizes, vec![size, size]);
    assert_eq!(e.surface().fills.len(), 2);
    assert_eq!(e.anchor(), None);

    // A repeated identical report is still a no-op.
    e.handle(&ScratchEvent::Resize(size));
    assert_eq!(e.surface().resizes.len(), 2);
}
