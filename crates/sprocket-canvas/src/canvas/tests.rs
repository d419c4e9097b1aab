use std::any::Any;
use std::time::Duration;

use sprocket_engine::assets::MemoryAssetLoader;
use sprocket_engine::coords::{Rect, Vec2};
use sprocket_engine::input::MotionEvent;
use sprocket_engine::paint::Color;
use sprocket_engine::scene::shapes::text::TextAlign;
use sprocket_engine::scene::{DrawCmd, DrawList};

use super::*;
use crate::container::ComponentContainer;
use crate::error::SpriteError;
use crate::shape::SpriteShape;
use crate::shapes::Ball;

// ── fixtures ──────────────────────────────────────────────────────────────

#[derive(Debug)]
struct Block {
    w: f64,
    h: f64,
}

impl SpriteShape for Block {
    fn natural_size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    fn paint(&self, list: &mut DrawList, bounds: Rect, _heading: f64) {
        list.push_rect(bounds, Color::BLACK);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn block(x: f64, y: f64) -> SpriteBuilder {
    SpriteBuilder::new(Block { w: 10.0, h: 10.0 }).position(x, y)
}

fn canvas() -> Canvas {
    let mut canvas = Canvas::default();
    canvas.layout(200.0, 200.0);
    canvas
}

#[derive(Default)]
struct Recorder {
    events: Vec<(ComponentId, Event)>,
}

impl Recorder {
    fn take(&mut self) -> Vec<(ComponentId, Event)> {
        std::mem::take(&mut self.events)
    }

    fn named(&self, name: &str) -> usize {
        self.events.iter().filter(|(_, e)| e.name() == name).count()
    }
}

impl EventDispatcher for Recorder {
    fn dispatch(&mut self, _canvas: &mut Canvas, target: ComponentId, event: &Event) -> bool {
        self.events.push((target, event.clone()));
        true
    }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ── collisions ────────────────────────────────────────────────────────────

#[test]
fn distant_squares_do_not_collide_until_moved_close() {
    let mut canvas = canvas();
    let mut rec = Recorder::default();
    let a = canvas.add_sprite(block(0.0, 0.0));
    let b = canvas.add_sprite(block(50.0, 0.0));
    canvas.run_pending(&mut rec);
    assert!(rec.take().is_empty());
    assert!(!canvas.colliding_with(a, b));

    if let Some(mut s) = canvas.sprite_mut(b) {
        s.move_to(9.0, 0.0);
    }
    canvas.run_pending(&mut rec);

    assert_eq!(
        rec.take(),
        vec![
            (ComponentId::Sprite(b), Event::CollidedWith { other: a }),
            (ComponentId::Sprite(a), Event::CollidedWith { other: b }),
        ]
    );
    assert!(canvas.colliding_with(a, b));
    assert!(canvas.colliding_with(b, a));
}

#[test]
fn abutting_squares_do_not_collide() {
    let mut canvas = canvas();
    let a = canvas.add_sprite(block(0.0, 0.0));
    let b = canvas.add_sprite(block(10.0, 0.0));
    assert!(!canvas.colliding_with(a, b));
}

#[test]
fn ball_corner_does_not_touch_block() {
    let mut canvas = canvas();
    let ball = canvas.add_sprite(SpriteBuilder::new(Ball::new(10.0)).position(0.0, 0.0));
    let near_corner = canvas.add_sprite(block(18.0, 18.0));
    assert!(!canvas.colliding_with(ball, near_corner));

    let near_side = canvas.add_sprite(block(19.0, 5.0));
    assert!(canvas.colliding_with(ball, near_side));
}

#[test]
fn steady_states_raise_nothing_and_transitions_alternate() {
    let mut canvas = canvas();
    let mut rec = Recorder::default();
    let a = canvas.add_sprite(block(100.0, 50.0));
    let b = canvas.add_sprite(block(70.0, 50.0).speed(2.0).interval_ms(10));

    // b passes through a, then turns and passes back
    canvas.advance(ms(300), &mut rec);
    if let Some(mut s) = canvas.sprite_mut(b) {
        s.set_heading(180.0);
    }
    canvas.advance(ms(300), &mut rec);

    let transitions: Vec<&str> = rec
        .events
        .iter()
        .filter(|(target, _)| *target == ComponentId::Sprite(a))
        .map(|(_, e)| e.name())
        .collect();
    assert_eq!(
        transitions,
        vec!["CollidedWith", "NoLongerCollidingWith", "CollidedWith", "NoLongerCollidingWith"]
    );
    assert_eq!(rec.named("CollidedWith"), 4);
    assert_eq!(rec.named("NoLongerCollidingWith"), 4);
}

#[test]
fn hiding_a_sprite_ends_its_collisions() {
    let mut canvas = canvas();
    let mut rec = Recorder::default();
    let a = canvas.add_sprite(block(0.0, 0.0));
    let b = canvas.add_sprite(block(5.0, 5.0));
    canvas.run_pending(&mut rec);
    rec.take();

    if let Some(mut s) = canvas.sprite_mut(a) {
        s.set_visible(false);
    }
    canvas.run_pending(&mut rec);
    assert_eq!(
        rec.take(),
        vec![
            (ComponentId::Sprite(a), Event::NoLongerCollidingWith { other: b }),
            (ComponentId::Sprite(b), Event::NoLongerCollidingWith { other: a }),
        ]
    );

    // still overlapping but b is disabled: nothing starts
    if let Some(mut s) = canvas.sprite_mut(b) {
        s.set_enabled(false);
    }
    if let Some(mut s) = canvas.sprite_mut(a) {
        s.set_visible(true);
    }
    canvas.run_pending(&mut rec);
    assert!(rec.take().is_empty());
    assert!(!canvas.colliding_with(a, b));
}

// ── motion and edges ──────────────────────────────────────────────────────

#[test]
fn tick_moves_by_speed_along_heading() {
    let mut canvas = canvas();
    let mut rec = Recorder::default();
    let id = canvas.add_sprite(block(50.0, 50.0).heading(30.0).speed(5.0).interval_ms(100));
    canvas.advance(ms(100), &mut rec);

    let sprite = canvas.sprite(id).map(|s| s.position());
    let r = (-30.0f64).to_radians();
    let expected = Vec2::new(50.0 + 5.0 * r.cos(), 50.0 + 5.0 * r.sin());
    let got = sprite.unwrap_or_default();
    assert!((got.x - expected.x).abs() < 1e-9);
    assert!((got.y - expected.y).abs() < 1e-9);
    assert!(rec.events.is_empty());
}

#[test]
fn crossing_east_edge_snaps_and_reports() {
    let mut canvas = Canvas::default();
    canvas.layout(100.0, 100.0);
    let mut rec = Recorder::default();
    let id = canvas.add_sprite(block(88.0, 40.0).speed(5.0).interval_ms(100));
    canvas.advance(ms(100), &mut rec);

    assert_eq!(canvas.sprite(id).map(|s| s.x()), Some(90.0));
    assert_eq!(
        rec.take(),
        vec![(ComponentId::Sprite(id), Event::EdgeReached { edge: Direction::East })]
    );
}

#[test]
fn handler_bounce_turns_the_sprite_around() {
    let mut canvas = Canvas::default();
    canvas.layout(100.0, 100.0);
    let id = canvas.add_sprite(block(88.0, 40.0).speed(5.0).interval_ms(100));

    let mut bouncer = |canvas: &mut Canvas, target: ComponentId, event: &Event| {
        if let (ComponentId::Sprite(id), Event::EdgeReached { edge }) = (target, event) {
            if let Some(mut sprite) = canvas.sprite_mut(id) {
                sprite.bounce(*edge);
            }
            return true;
        }
        false
    };
    canvas.advance(ms(100), &mut bouncer);
    assert_eq!(canvas.sprite(id).map(|s| s.heading()), Some(180.0));

    canvas.advance(ms(100), &mut bouncer);
    assert_eq!(canvas.sprite(id).map(|s| s.x()), Some(85.0));
}

#[test]
fn bounce_only_reflects_when_heading_toward_edge() {
    let mut canvas = canvas();
    let id = canvas.add_sprite(block(50.0, 50.0).heading(30.0));
    if let Some(mut s) = canvas.sprite_mut(id) {
        s.bounce(Direction::East);
    }
    assert_eq!(canvas.sprite(id).map(|s| s.heading()), Some(150.0));

    if let Some(mut s) = canvas.sprite_mut(id) {
        s.bounce(Direction::East);
    }
    assert_eq!(canvas.sprite(id).map(|s| s.heading()), Some(150.0));
}

#[test]
fn move_into_bounds_is_idempotent() {
    let mut canvas = canvas();
    let mut rec = Recorder::default();
    let id = canvas.add_sprite(block(20.0, 20.0));
    canvas.run_pending(&mut rec);
    canvas.paint(&mut DrawList::new());

    for _ in 0..2 {
        if let Some(mut s) = canvas.sprite_mut(id) {
            s.move_into_bounds();
        }
        canvas.run_pending(&mut rec);
        assert!(rec.events.is_empty());
        assert!(!canvas.needs_redraw());
    }
}

#[test]
fn nothing_is_bounded_before_layout() {
    let mut canvas = Canvas::default();
    let mut rec = Recorder::default();
    let id = canvas.add_sprite(block(-20.0, 500.0));
    if let Some(mut s) = canvas.sprite_mut(id) {
        s.move_into_bounds();
    }
    canvas.run_pending(&mut rec);

    assert!(!canvas.is_ready());
    assert_eq!(canvas.width(), 0.0);
    assert_eq!(canvas.sprite(id).map(|s| s.position()), Some(Vec2::new(-20.0, 500.0)));
    assert!(rec.events.is_empty());
}

#[test]
fn point_towards_aims_at_target_center() {
    let mut canvas = canvas();
    let a = canvas.add_sprite(block(0.0, 0.0));
    let b = canvas.add_sprite(SpriteBuilder::new(Block { w: 20.0, h: 20.0 }).position(95.0, 95.0));
    let pointed = canvas.sprite_mut(a).map(|mut s| s.point_towards(b));
    assert_eq!(pointed, Some(true));

    let heading = canvas.sprite(a).map(|s| s.heading()).unwrap_or_default();
    assert!((heading + 45.0).abs() < 1e-9, "heading was {heading}");
}

// ── timer ─────────────────────────────────────────────────────────────────

#[test]
fn reenabled_timer_resumes_at_same_interval() {
    let mut canvas = canvas();
    let mut rec = Recorder::default();
    let id = canvas.add_sprite(block(0.0, 50.0).speed(1.0).interval_ms(100));
    let x = |canvas: &Canvas| canvas.sprite(id).map(|s| s.x());

    canvas.advance(ms(250), &mut rec);
    assert_eq!(x(&canvas), Some(2.0));

    if let Some(mut s) = canvas.sprite_mut(id) {
        s.set_enabled(false);
    }
    canvas.advance(ms(500), &mut rec);
    assert_eq!(x(&canvas), Some(2.0));

    if let Some(mut s) = canvas.sprite_mut(id) {
        s.set_enabled(true);
    }
    canvas.advance(ms(99), &mut rec);
    assert_eq!(x(&canvas), Some(2.0));
    canvas.advance(ms(1), &mut rec);
    assert_eq!(x(&canvas), Some(3.0));
    canvas.advance(ms(100), &mut rec);
    assert_eq!(x(&canvas), Some(4.0));
}

#[test]
fn interval_change_rearms_from_now() {
    let mut canvas = canvas();
    let mut rec = Recorder::default();
    let id = canvas.add_sprite(block(0.0, 50.0).speed(1.0).interval_ms(100));

    canvas.advance(ms(80), &mut rec);
    if let Some(mut s) = canvas.sprite_mut(id) {
        s.set_interval(50);
    }
    canvas.advance(ms(49), &mut rec);
    assert_eq!(canvas.sprite(id).map(|s| s.x()), Some(0.0));
    canvas.advance(ms(1), &mut rec);
    assert_eq!(canvas.sprite(id).map(|s| s.x()), Some(1.0));
}

#[test]
fn speed_and_interval_do_not_request_redraw() {
    let mut canvas = canvas();
    let id = canvas.add_sprite(block(0.0, 0.0));
    canvas.paint(&mut DrawList::new());

    if let Some(mut s) = canvas.sprite_mut(id) {
        s.set_speed(3.0);
        s.set_interval(20);
    }
    assert!(!canvas.needs_redraw());

    if let Some(mut s) = canvas.sprite_mut(id) {
        s.set_heading(90.0);
    }
    assert!(canvas.needs_redraw());
}

// ── gestures ──────────────────────────────────────────────────────────────

#[test]
fn tap_touches_sprite_then_canvas() {
    let mut canvas = canvas();
    let mut rec = Recorder::default();
    let id = canvas.add_sprite(block(20.0, 20.0));
    let _far = canvas.add_sprite(block(150.0, 150.0));

    canvas.post_motion(MotionEvent::down(25.0, 25.0));
    canvas.post_motion(MotionEvent::moved(30.0, 28.0));
    canvas.post_motion(MotionEvent::up(30.0, 28.0));
    canvas.run_pending(&mut rec);

    assert_eq!(
        rec.take(),
        vec![
            (ComponentId::Sprite(id), Event::Touched { x: 25.0, y: 25.0 }),
            (
                ComponentId::Canvas,
                Event::CanvasTouched { x: 25.0, y: 25.0, touched_sprite: true }
            ),
        ]
    );
}

#[test]
fn tap_on_empty_space_reports_unhandled() {
    let mut canvas = canvas();
    let mut rec = Recorder::default();
    canvas.add_sprite(block(20.0, 20.0));

    canvas.post_motion(MotionEvent::down(120.0, 120.0));
    canvas.post_motion(MotionEvent::up(120.0, 120.0));
    canvas.run_pending(&mut rec);

    assert_eq!(
        rec.take(),
        vec![(
            ComponentId::Canvas,
            Event::CanvasTouched { x: 120.0, y: 120.0, touched_sprite: false }
        )]
    );
}

#[test]
fn drag_never_reverts_to_tap() {
    let mut canvas = canvas();
    let mut rec = Recorder::default();
    let id = canvas.add_sprite(block(20.0, 20.0));

    canvas.post_motion(MotionEvent::down(25.0, 25.0));
    canvas.post_motion(MotionEvent::moved(60.0, 25.0));
    canvas.post_motion(MotionEvent::moved(26.0, 26.0));
    canvas.post_motion(MotionEvent::up(26.0, 26.0));
    canvas.run_pending(&mut rec);

    assert_eq!(rec.named("Touched"), 0);
    let events = rec.take();
    assert_eq!(events.len(), 4);
    assert_eq!(
        events[0],
        (
            ComponentId::Sprite(id),
            Event::Dragged {
                start: Vec2::new(25.0, 25.0),
                prev: Vec2::new(25.0, 25.0),
                current: Vec2::new(60.0, 25.0),
            }
        )
    );
    assert_eq!(
        events[3],
        (
            ComponentId::Canvas,
            Event::CanvasDragged {
                start: Vec2::new(25.0, 25.0),
                prev: Vec2::new(60.0, 25.0),
                current: Vec2::new(26.0, 26.0),
                dragged_sprite: true,
            }
        )
    );
}

#[test]
fn drag_picks_up_sprites_along_the_way() {
    let mut canvas = canvas();
    let mut rec = Recorder::default();
    let first = canvas.add_sprite(block(20.0, 20.0));
    let second = canvas.add_sprite(block(100.0, 20.0));

    canvas.post_motion(MotionEvent::down(25.0, 25.0));
    canvas.post_motion(MotionEvent::moved(105.0, 25.0));
    canvas.run_pending(&mut rec);

    let dragged: Vec<ComponentId> = rec
        .events
        .iter()
        .filter(|(_, e)| matches!(e, Event::Dragged { .. }))
        .map(|(t, _)| *t)
        .collect();
    assert_eq!(dragged, vec![ComponentId::Sprite(first), ComponentId::Sprite(second)]);
}

#[test]
fn disabled_candidate_is_skipped_on_release() {
    let mut canvas = canvas();
    let mut rec = Recorder::default();
    let id = canvas.add_sprite(block(20.0, 20.0));

    canvas.post_motion(MotionEvent::down(25.0, 25.0));
    canvas.run_pending(&mut rec);
    if let Some(mut s) = canvas.sprite_mut(id) {
        s.set_enabled(false);
    }
    canvas.post_motion(MotionEvent::up(25.0, 25.0));
    canvas.run_pending(&mut rec);

    assert_eq!(
        rec.take(),
        vec![(
            ComponentId::Canvas,
            Event::CanvasTouched { x: 25.0, y: 25.0, touched_sprite: false }
        )]
    );
}

#[test]
fn finger_box_reaches_twelve_pixels_past_the_touch() {
    let mut canvas = canvas();
    let mut rec = Recorder::default();
    let id = canvas.add_sprite(block(20.0, 20.0));

    // rightmost column of the block is x = 29; the finger box spans x - 12
    canvas.post_motion(MotionEvent::down(41.0, 25.0));
    canvas.post_motion(MotionEvent::up(41.0, 25.0));
    canvas.run_pending(&mut rec);
    assert_eq!(
        rec.take(),
        vec![
            (ComponentId::Sprite(id), Event::Touched { x: 41.0, y: 25.0 }),
            (
                ComponentId::Canvas,
                Event::CanvasTouched { x: 41.0, y: 25.0, touched_sprite: true }
            ),
        ]
    );

    canvas.post_motion(MotionEvent::down(42.0, 25.0));
    canvas.post_motion(MotionEvent::up(42.0, 25.0));
    canvas.run_pending(&mut rec);
    assert_eq!(
        rec.take(),
        vec![(
            ComponentId::Canvas,
            Event::CanvasTouched { x: 42.0, y: 25.0, touched_sprite: false }
        )]
    );
}

#[test]
fn sprite_revealed_under_a_held_finger_is_not_tapped() {
    let mut canvas = canvas();
    let mut rec = Recorder::default();
    let id = canvas.add_sprite(block(150.0, 150.0).visible(false));

    canvas.post_motion(MotionEvent::down(25.0, 25.0));
    canvas.run_pending(&mut rec);
    if let Some(mut s) = canvas.sprite_mut(id) {
        s.move_to(20.0, 20.0);
        s.set_visible(true);
    }
    canvas.run_pending(&mut rec);
    assert!(rec.take().is_empty());

    canvas.post_motion(MotionEvent::up(25.0, 25.0));
    canvas.run_pending(&mut rec);
    assert_eq!(
        rec.take(),
        vec![(
            ComponentId::Canvas,
            Event::CanvasTouched { x: 25.0, y: 25.0, touched_sprite: false }
        )]
    );
}

// ── deletion ──────────────────────────────────────────────────────────────

#[test]
fn delete_drops_pairs_timer_and_queued_events() {
    let mut canvas = canvas();
    let mut rec = Recorder::default();
    let a = canvas.add_sprite(block(0.0, 0.0));
    let b = canvas.add_sprite(block(5.0, 5.0).speed(1.0).interval_ms(10));
    assert!(canvas.colliding_with(a, b));

    // collision events for b are still queued
    if let Some(s) = canvas.sprite_mut(b) {
        s.delete();
    }
    canvas.advance(ms(100), &mut rec);

    assert_eq!(canvas.len(), 1);
    assert!(canvas.sprite(b).is_none());
    assert!(!canvas.colliding_with(a, b));
    assert!(canvas.collision_partners(a).is_empty());
    assert_eq!(
        rec.take(),
        vec![(ComponentId::Sprite(a), Event::CollidedWith { other: b })]
    );
    assert!(!canvas.delete_sprite(b));
}

// ── construction and painting ─────────────────────────────────────────────

struct Arrangement;

impl ComponentContainer for Arrangement {
    fn describe(&self) -> String {
        "HorizontalArrangement".to_string()
    }
}

#[test]
fn attaching_outside_a_canvas_fails() {
    let err = block(0.0, 0.0).attach(&mut Arrangement);
    assert_eq!(
        err,
        Err(SpriteError::NotACanvas { container: "HorizontalArrangement".to_string() })
    );

    let mut canvas = canvas();
    let attached = block(0.0, 0.0).attach(&mut canvas);
    assert!(attached.is_ok());
    assert_eq!(canvas.len(), 1);
}

#[test]
fn paint_skips_hidden_sprites() {
    let mut canvas = canvas();
    canvas.add_sprite(block(0.0, 0.0));
    canvas.add_sprite(block(50.0, 0.0).visible(false));
    canvas.add_sprite(SpriteBuilder::new(Ball::new(4.0)).position(100.0, 100.0));

    let mut list = DrawList::new();
    canvas.paint(&mut list);

    assert!(!canvas.needs_redraw());
    assert_eq!(list.len(), 3);
    assert!(matches!(&list.items()[0], DrawCmd::Rect(bg) if bg.color == Color::WHITE));
    assert!(matches!(&list.items()[2], DrawCmd::Circle(c) if c.center == Vec2::new(104.0, 104.0)));
}

#[test]
fn update_shape_resizes_and_resweeps() {
    let mut canvas = canvas();
    let ball = canvas.add_sprite(SpriteBuilder::new(Ball::new(5.0)).position(0.0, 0.0));
    let other = canvas.add_sprite(block(30.0, 0.0));
    assert!(!canvas.colliding_with(ball, other));

    let grown = canvas
        .sprite_mut(ball)
        .and_then(|mut s| s.update_shape(|b: &mut Ball| b.set_radius(20.0)));
    assert_eq!(grown, Some(()));
    assert!(canvas.colliding_with(ball, other));

    let wrong = canvas
        .sprite_mut(ball)
        .and_then(|mut s| s.update_shape(|b: &mut Block| b.w));
    assert_eq!(wrong, None);
}

// ── drawing layer ─────────────────────────────────────────────────────────

#[test]
fn drawing_sits_between_background_and_sprites() {
    let mut canvas = canvas();
    canvas.add_sprite(block(0.0, 0.0));
    canvas.set_paint_color(Color::from_argb(0xFFFF0000));
    canvas.set_line_width(3.0);
    canvas.draw_line(0.0, 0.0, 50.0, 50.0);
    assert!(canvas.needs_redraw());

    let mut list = DrawList::new();
    canvas.paint(&mut list);

    assert_eq!(list.len(), 3);
    assert!(matches!(&list.items()[0], DrawCmd::Rect(bg) if bg.color == Color::WHITE));
    assert!(matches!(
        &list.items()[1],
        DrawCmd::Line(l) if l.width == 3.0 && l.to == Vec2::new(50.0, 50.0)
    ));
    assert!(matches!(&list.items()[2], DrawCmd::Rect(r) if r.color == Color::BLACK));
}

#[test]
fn drawing_persists_across_repaints_until_cleared() {
    let mut canvas = canvas();
    canvas.draw_circle(30.0, 30.0, 5.0);
    canvas.draw_point(10.0, 10.0);
    canvas.paint(&mut DrawList::new());

    let mut list = DrawList::new();
    canvas.paint(&mut list);
    assert_eq!(list.len(), 3);
    assert!(matches!(
        &list.items()[2],
        DrawCmd::Rect(dot) if dot.rect == Rect::new(9.0, 9.0, 2.0, 2.0)
    ));

    canvas.clear();
    assert!(canvas.needs_redraw());
    assert!(canvas.drawing().is_empty());
}

#[test]
fn text_uses_pen_size_and_alignment() {
    let mut canvas = canvas();
    canvas.set_font_size(20.0);
    canvas.set_text_alignment(TextAlign::Center);
    canvas.draw_text_at_angle("score", 40.0, 60.0, 90.0);

    match canvas.drawing().items() {
        [DrawCmd::Text(t)] => {
            assert_eq!(t.text, "score");
            assert_eq!(t.size, 20.0);
            assert_eq!(t.align, TextAlign::Center);
            assert_eq!(t.rotation, 90.0);
            assert_eq!(t.color, Color::BLACK);
        }
        other => panic!("unexpected drawing {other:?}"),
    }
}

#[test]
fn background_changes_wipe_the_drawing() {
    let mut canvas = canvas();
    canvas.draw_line(0.0, 0.0, 5.0, 5.0);
    canvas.set_background_color(Color::BLACK);
    assert!(canvas.drawing().is_empty());

    canvas.draw_line(0.0, 0.0, 5.0, 5.0);
    canvas.set_background_image("missing.png", &MemoryAssetLoader::new());
    assert!(canvas.drawing().is_empty());
    assert_eq!(canvas.background_image(), "missing.png");

    // an unloadable picture leaves the color showing
    let mut list = DrawList::new();
    canvas.paint(&mut list);
    assert!(matches!(&list.items()[0], DrawCmd::Rect(bg) if bg.color == Color::BLACK));
}

#[test]
fn negative_line_width_is_treated_as_zero() {
    let mut canvas = canvas();
    canvas.set_line_width(-4.0);
    assert_eq!(canvas.pen().line_width, 0.0);
    assert_eq!(Canvas::default().pen(), &Pen::default());
}
